//! Report rendering for the command line.

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::password::{PasswordStrength, MAX_SCORE};
use crate::validation::ValidationResult;
use crate::watch::FormKind;

/// Render a form validation result
pub fn render_validation(
    kind: FormKind,
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize validation result")
        }
        OutputFormat::Text => {
            let status = if result.is_valid() { "valid" } else { "invalid" };
            let mut out = format!("{} form: {}", kind.as_str(), status);
            for (field, error) in result.errors() {
                out.push_str(&format!("\n  {}: {}", field, error));
            }
            Ok(out)
        }
    }
}

/// Render a form file that could not be read or parsed
pub fn render_unreadable(
    kind: FormKind,
    error: &anyhow::Error,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "isValid": false,
            "error": format!("{:#}", error),
        }))
        .context("Failed to serialize read error"),
        OutputFormat::Text => Ok(format!("{} form: unreadable", kind.as_str())),
    }
}

/// Render a strength assessment
pub fn render_strength(strength: &PasswordStrength, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(strength).context("Failed to serialize strength")
        }
        OutputFormat::Text => Ok(format!(
            "strength: {} ({}/{}, {}%)",
            strength.label,
            strength.score,
            MAX_SCORE,
            strength.percent()
        )),
    }
}

/// Render a friendly auth error sentence
pub fn render_auth_message(message: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "message": message
        }))
        .context("Failed to serialize message"),
        OutputFormat::Text => Ok(message.to_string()),
    }
}
