//! Password Checks
//!
//! Complexity rules used to gate submission, and the heuristic strength score
//! shown while the user types. Both are pure functions of the password string.

pub mod rules;
pub mod strength;

pub use rules::{check_password_rules, first_violation, PasswordRule, MIN_LENGTH};
pub use strength::{password_strength_score, PasswordStrength, StrengthLabel, MAX_SCORE};

/// Punctuation accepted by the special-character rule
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

/// Whether `c` belongs to [`SPECIAL_CHARACTERS`]
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Length in characters, not bytes
pub(crate) fn char_len(password: &str) -> usize {
    password.chars().count()
}
