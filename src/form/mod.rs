//! Forms
//!
//! Field types, locally-owned editing state and form file loading.

pub mod fields;
pub mod file;
pub mod state;

pub use fields::{Field, FormFields, SignInFields, SignUpFields};
pub use file::{load_sign_in_fields, load_sign_up_fields, parse_form, FormFormat};
pub use state::FormState;
