//! Catalog Schema Types
//!
//! TOML layout of an auth-error message catalog.

use serde::Deserialize;

/// Root catalog file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogFile {
    pub catalog: CatalogMeta,
    #[serde(default)]
    pub messages: Vec<MessageDef>,
}

/// Catalog metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// One backend error identifier and the sentence shown in its place
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageDef {
    pub error: String,
    pub display: String,
}
