//! Form Files
//!
//! Load form values from disk. `.json` files are read with serde_json,
//! everything else is treated as TOML. Missing keys default to empty values.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use std::path::Path;

use super::fields::{SignInFields, SignUpFields};

/// On-disk encoding of a form file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Toml,
    Json,
}

impl FormFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FormFormat::Json,
            _ => FormFormat::Toml,
        }
    }
}

/// Parse form content in the given format
pub fn parse_form<T: DeserializeOwned>(content: &str, format: FormFormat) -> Result<T> {
    match format {
        FormFormat::Json => serde_json::from_str(content).context("Failed to parse form JSON"),
        FormFormat::Toml => toml::from_str(content).context("Failed to parse form TOML"),
    }
}

fn load_form<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;
    log::debug!("Loaded form file {}", path.display());
    parse_form(&content, FormFormat::from_path(path))
        .with_context(|| format!("Invalid form file: {}", path.display()))
}

/// Read a sign-up form from disk
pub fn load_sign_up_fields(path: &Path) -> Result<SignUpFields> {
    load_form(path)
}

/// Read a sign-in form from disk
pub fn load_sign_in_fields(path: &Path) -> Result<SignInFields> {
    load_form(path)
}
