//! Validation Engine
//!
//! Form validation separated from form state, file loading and CLI concerns.

pub mod engine;

pub use engine::{
    is_valid_email, validate_sign_in_form, validate_sign_up_form, ErrorKind, FieldError,
};

// Re-export common types
pub use engine::ValidationResult;
