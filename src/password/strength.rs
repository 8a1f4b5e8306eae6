//! Password Strength Scoring
//!
//! A coarse 0..=6 heuristic for live feedback. It overlaps with the
//! complexity rules but is computed independently of them.

use serde::Serialize;

use std::fmt;

use super::rules::MIN_LENGTH;
use super::{char_len, is_special};

/// Highest reachable score
pub const MAX_SCORE: u8 = 6;

/// Length that earns the second length point
pub const LONG_LENGTH: usize = 12;

/// Coarse classification of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Classify a raw score: `< 3` weak, `3..5` medium, `>= 5` strong
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Utility class used to tint the strength bar
    pub fn color_hint(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "bg-red-500",
            StrengthLabel::Medium => "bg-yellow-500",
            StrengthLabel::Strong => "bg-green-500",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength assessment of a single password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
    pub color_hint: &'static str,
}

impl PasswordStrength {
    fn from_score(score: u8) -> Self {
        let label = StrengthLabel::from_score(score);
        Self {
            score,
            label,
            color_hint: label.color_hint(),
        }
    }

    /// Score as a percentage of [`MAX_SCORE`], rounded down
    pub fn percent(&self) -> u8 {
        // score <= 6 so the product fits comfortably
        (u16::from(self.score) * 100 / u16::from(MAX_SCORE)) as u8
    }
}

/// Score a password. Never fails; the empty string scores 0.
pub fn password_strength_score(password: &str) -> PasswordStrength {
    let len = char_len(password);
    let checks = [
        len >= MIN_LENGTH,
        len >= LONG_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_special),
    ];

    let score = checks.iter().filter(|&&hit| hit).count() as u8;
    PasswordStrength::from_score(score)
}
