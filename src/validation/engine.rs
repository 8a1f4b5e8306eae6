//! Validation Engine
//!
//! Pure field validation for the sign-up and sign-in forms. Every rule is
//! evaluated independently so one pass reports every offending field.

use regex::Regex;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::form::{Field, SignInFields, SignUpFields};
use crate::password::{first_violation, PasswordRule};

/// Minimal `local@domain.tld` shape. Intentionally permissive.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Kind of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    Mismatch,
    PasswordRuleViolation(PasswordRule),
}

/// A validation failure attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of validating a form
///
/// Holds at most one error per field. Validity is derived from the error map,
/// so a result is valid exactly when it holds no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first error recorded for a field wins.
    pub fn add_error(&mut self, field: Field, kind: ErrorKind, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| FieldError {
            kind,
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message reported for `field`, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    /// Errors in field order
    pub fn errors(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Keep only the errors whose field satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(Field) -> bool) {
        self.errors.retain(|field, _| keep(*field));
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let messages: BTreeMap<Field, &str> = self
            .errors
            .iter()
            .map(|(field, error)| (*field, error.message.as_str()))
            .collect();

        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &messages)?;
        state.end()
    }
}

/// Whether `email` has the minimal `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_ok_and(|re| re.is_match(email))
}

/// Validate the account-creation form
pub fn validate_sign_up_form(fields: &SignUpFields) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_required_text(&mut result, Field::FirstName, &fields.first_name, FIRST_NAME_REQUIRED);
    check_required_text(&mut result, Field::LastName, &fields.last_name, LAST_NAME_REQUIRED);
    check_email(&mut result, &fields.email);

    if fields.password.is_empty() {
        result.add_error(Field::Password, ErrorKind::Required, PASSWORD_REQUIRED);
    } else if let Some(rule) = first_violation(&fields.password) {
        result.add_error(
            Field::Password,
            ErrorKind::PasswordRuleViolation(rule),
            rule.message(),
        );
    }

    if fields.confirm_password.is_empty() {
        result.add_error(
            Field::ConfirmPassword,
            ErrorKind::Required,
            CONFIRM_PASSWORD_REQUIRED,
        );
    } else if fields.confirm_password != fields.password {
        result.add_error(
            Field::ConfirmPassword,
            ErrorKind::Mismatch,
            PASSWORDS_DO_NOT_MATCH,
        );
    }

    // Company is optional and never validated

    result
}

/// Validate the sign-in form: email shape and a non-empty password only
pub fn validate_sign_in_form(fields: &SignInFields) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_email(&mut result, &fields.email);
    if fields.password.is_empty() {
        result.add_error(Field::Password, ErrorKind::Required, PASSWORD_REQUIRED);
    }

    result
}

fn check_required_text(
    result: &mut ValidationResult,
    field: Field,
    value: &str,
    message: &str,
) {
    if value.trim().is_empty() {
        result.add_error(field, ErrorKind::Required, message);
    }
}

fn check_email(result: &mut ValidationResult, email: &str) {
    if email.trim().is_empty() {
        result.add_error(Field::Email, ErrorKind::Required, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        result.add_error(Field::Email, ErrorKind::InvalidFormat, EMAIL_INVALID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_sign_up() -> SignUpFields {
        SignUpFields {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: None,
            password: "Ab1!2345".to_string(),
            confirm_password: "Ab1!2345".to_string(),
        }
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add_error(Field::Email, ErrorKind::Required, "first");
        result.add_error(Field::Email, ErrorKind::InvalidFormat, "second");
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.message(Field::Email), Some("first"));
    }

    #[test]
    fn test_valid_sign_up() {
        let result = validate_sign_up_form(&valid_sign_up());
        assert!(result.is_valid(), "unexpected errors: {:?}", result);
    }

    #[test]
    fn test_empty_sign_up_reports_every_field() {
        let result = validate_sign_up_form(&SignUpFields::default());
        let fields: Vec<Field> = result.errors().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
            ]
        );
        assert!(result
            .errors()
            .all(|(_, error)| error.kind == ErrorKind::Required));
    }

    #[test]
    fn test_whitespace_names_are_required() {
        let mut fields = valid_sign_up();
        fields.first_name = "  \t".to_string();
        fields.last_name = " ".to_string();
        let result = validate_sign_up_form(&fields);
        assert_eq!(result.message(Field::FirstName), Some(FIRST_NAME_REQUIRED));
        assert_eq!(result.message(Field::LastName), Some(LAST_NAME_REQUIRED));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn test_password_rule_kind() {
        let mut fields = valid_sign_up();
        fields.password = "abcdefgh".to_string();
        fields.confirm_password = "abcdefgh".to_string();
        let result = validate_sign_up_form(&fields);
        let error = result.error(Field::Password).expect("password error");
        assert_eq!(
            error.kind,
            ErrorKind::PasswordRuleViolation(PasswordRule::Uppercase)
        );
    }

    #[test]
    fn test_confirmation_is_case_sensitive() {
        let mut fields = valid_sign_up();
        fields.confirm_password = fields.password.to_lowercase();
        let result = validate_sign_up_form(&fields);
        assert_eq!(
            result.error(Field::ConfirmPassword).map(|e| e.kind),
            Some(ErrorKind::Mismatch)
        );
    }

    #[test]
    fn test_sign_in_skips_complexity() {
        let fields = SignInFields {
            email: "jane@example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(validate_sign_in_form(&fields).is_valid());
    }

    #[test]
    fn test_serialized_shape() {
        let result = validate_sign_in_form(&SignInFields::default());
        let json = serde_json::to_value(&result).expect("serialize result");
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"]["email"], EMAIL_REQUIRED);
        assert_eq!(json["errors"]["password"], PASSWORD_REQUIRED);
    }
}
