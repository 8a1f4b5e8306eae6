//! signup-check
//!
//! Account-creation input validation and password-strength assessment.
//!
//! This library provides:
//! - Sign-up and sign-in form validation
//! - Password complexity rules and strength scoring
//! - Friendly messages for backend authentication errors
//! - Form files, file watching and configuration for the CLI

pub mod cli;
pub mod config;
pub mod form;
pub mod messages;
pub mod password;
pub mod validation;
pub mod watch;

// Re-exports for clean public API
pub use config::Config;
pub use form::{Field, FormState, SignInFields, SignUpFields};
pub use messages::{friendly_auth_message, MessageCatalog};
pub use password::{check_password_rules, password_strength_score, PasswordRule, PasswordStrength};
pub use validation::{validate_sign_in_form, validate_sign_up_form, ValidationResult};
