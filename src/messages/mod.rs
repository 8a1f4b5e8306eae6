//! Auth Error Messages
//!
//! Maps backend authentication error strings to sentences fit for users.

pub mod registry;
pub mod schema;

use std::sync::LazyLock;

pub use registry::{CatalogEntry, CatalogPriority, MessageCatalog, UNKNOWN_ERROR_MESSAGE};
pub use schema::{CatalogFile, CatalogMeta, MessageDef};

static BUILTIN_CATALOG: LazyLock<MessageCatalog> = LazyLock::new(MessageCatalog::builtin);

/// Friendly sentence for a backend auth error, using the built-in catalog only
pub fn friendly_auth_message(error: &str) -> String {
    BUILTIN_CATALOG.friendly_message(error)
}
