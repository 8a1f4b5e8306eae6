//! Password Complexity Rules
//!
//! Five independent requirements checked in a fixed order. The order matters:
//! form validation surfaces only the first unmet rule.

use serde::Serialize;

use std::fmt;

use super::{char_len, is_special};

/// Minimum password length in characters
pub const MIN_LENGTH: usize = 8;

/// A single complexity requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    /// All rules in reporting order
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    /// Whether `password` satisfies this rule
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength => char_len(password) >= MIN_LENGTH,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Special => password.chars().any(is_special),
        }
    }

    /// User-facing message for a violation of this rule
    pub fn message(self) -> &'static str {
        match self {
            PasswordRule::MinLength => "Password must be at least 8 characters long",
            PasswordRule::Uppercase => "Password must contain at least one uppercase letter",
            PasswordRule::Lowercase => "Password must contain at least one lowercase letter",
            PasswordRule::Digit => "Password must contain at least one number",
            PasswordRule::Special => "Password must contain at least one special character",
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Return every unmet rule, in reporting order.
///
/// An empty vector means the password satisfies all five rules.
pub fn check_password_rules(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect()
}

/// First unmet rule, if any
pub fn first_violation(password: &str) -> Option<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .find(|rule| !rule.is_satisfied_by(password))
}
