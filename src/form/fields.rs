//! Form Field Types
//!
//! Plain data holding what the user typed. Every field is a string so a
//! half-filled form can always be represented and validated.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::validation::{validate_sign_in_form, validate_sign_up_form, ValidationResult};

/// Name of an input field, serialized with its camelCase form name
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Company,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Company => "company",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Field::FirstName),
            "lastName" => Ok(Field::LastName),
            "email" => Ok(Field::Email),
            "company" => Ok(Field::Company),
            "password" => Ok(Field::Password),
            "confirmPassword" => Ok(Field::ConfirmPassword),
            other => Err(format!("Unknown form field '{}'", other)),
        }
    }
}

/// Common interface of the sign-up and sign-in forms
pub trait FormFields {
    /// Fields that belong to this form, in display order
    const FIELDS: &'static [Field];

    /// Run the form's validator
    fn validate(&self) -> ValidationResult;

    /// Current value of a field, `None` if the field is not part of the form
    fn value(&self, field: Field) -> Option<&str>;

    /// Replace a field's value. Returns false if the field is not part of the form.
    fn set_value(&mut self, field: Field, value: String) -> bool;
}

/// Account-creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields for SignUpFields {
    const FIELDS: &'static [Field] = &[
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Company,
        Field::Password,
        Field::ConfirmPassword,
    ];

    fn validate(&self) -> ValidationResult {
        validate_sign_up_form(self)
    }

    fn value(&self, field: Field) -> Option<&str> {
        Some(match field {
            Field::FirstName => self.first_name.as_str(),
            Field::LastName => self.last_name.as_str(),
            Field::Email => self.email.as_str(),
            Field::Company => self.company.as_deref().unwrap_or(""),
            Field::Password => self.password.as_str(),
            Field::ConfirmPassword => self.confirm_password.as_str(),
        })
    }

    fn set_value(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = Some(value),
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
        true
    }
}

/// Sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInFields {
    pub email: String,
    pub password: String,
}

impl FormFields for SignInFields {
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];

    fn validate(&self) -> ValidationResult {
        validate_sign_in_form(self)
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(self.email.as_str()),
            Field::Password => Some(self.password.as_str()),
            _ => None,
        }
    }

    fn set_value(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            _ => return false,
        }
        true
    }
}
