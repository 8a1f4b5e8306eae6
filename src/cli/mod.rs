//! Command-line front end.
//!
//! Wires configuration, logging, the message catalog and the validators
//! together. Reports go to stdout, logs to stderr.

pub mod report;

use anyhow::{Context, Result};

use std::io::Write;
use std::process::ExitCode;

use crate::config::{Command, Config};
use crate::messages::MessageCatalog;
use crate::password::password_strength_score;
use crate::watch::{validate_form_file, FormKind, FormWatcher};

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The validated form has errors
    Invalid,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(1),
        }
    }
}

/// Parse arguments, set up logging and run the requested command
pub async fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    if let Some(path) = &config.project_config_path {
        log::debug!("Using project config {}", path.display());
    }

    let mut stdout = std::io::stdout();
    let outcome = execute(&config, &mut stdout).await?;
    Ok(outcome.into())
}

fn init_logging(level: &str) {
    // RUST_LOG still takes precedence over the configured level
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Run the configured command, writing reports to `out`
pub async fn execute(config: &Config, out: &mut dyn Write) -> Result<Outcome> {
    match &config.command {
        Command::SignUp { file, watch } => {
            check_form(config, FormKind::SignUp, file, *watch, out).await
        }
        Command::SignIn { file, watch } => {
            check_form(config, FormKind::SignIn, file, *watch, out).await
        }
        Command::Strength { password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => read_password_from_stdin()?,
            };
            let strength = password_strength_score(&password);
            write_line(out, &report::render_strength(&strength, config.format)?)?;
            Ok(Outcome::Success)
        }
        Command::AuthError { message } => {
            let catalog = MessageCatalog::with_directories(&config.messages_dirs);
            log::debug!("Message catalog holds {} entries", catalog.len());
            let friendly = catalog.friendly_message(message);
            write_line(out, &report::render_auth_message(&friendly, config.format)?)?;
            Ok(Outcome::Success)
        }
    }
}

async fn check_form(
    config: &Config,
    kind: FormKind,
    file: &std::path::Path,
    watch: bool,
    out: &mut dyn Write,
) -> Result<Outcome> {
    if !watch {
        let result = validate_form_file(file, kind)?;
        write_line(out, &report::render_validation(kind, &result, config.format)?)?;
        return Ok(if result.is_valid() {
            Outcome::Success
        } else {
            Outcome::Invalid
        });
    }

    let (_watcher, mut updates) = FormWatcher::start(file, kind)?;
    let mut outcome = Outcome::Success;

    while let Some(update) = updates.recv().await {
        match update.outcome {
            Ok(result) => {
                outcome = if result.is_valid() {
                    Outcome::Success
                } else {
                    Outcome::Invalid
                };
                write_line(out, &report::render_validation(kind, &result, config.format)?)?;
            }
            Err(e) => {
                // Keep watching; the file may be mid-save
                log::warn!("{:#}", e);
                write_line(out, &report::render_unreadable(kind, &e, config.format)?)?;
            }
        }
    }

    Ok(outcome)
}

fn read_password_from_stdin() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn write_line(out: &mut dyn Write, text: &str) -> Result<()> {
    writeln!(out, "{}", text).context("Failed to write report")?;
    out.flush().context("Failed to flush report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;

    fn config(command: Command) -> Config {
        Config {
            command,
            format: OutputFormat::Text,
            messages_dirs: Vec::new(),
            log_level: "info".to_string(),
            project_config_path: None,
        }
    }

    #[tokio::test]
    async fn test_strength_command() {
        let mut out = Vec::new();
        let outcome = execute(
            &config(Command::Strength {
                password: Some("password1".to_string()),
            }),
            &mut out,
        )
        .await
        .expect("execute");
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "strength: Medium (3/6, 50%)\n"
        );
    }

    #[tokio::test]
    async fn test_auth_error_command() {
        let mut out = Vec::new();
        execute(
            &config(Command::AuthError {
                message: "Email not confirmed".to_string(),
            }),
            &mut out,
        )
        .await
        .expect("execute");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Please confirm your email address"));
    }

    #[tokio::test]
    async fn test_missing_form_file_is_an_error() {
        let mut out = Vec::new();
        let result = execute(
            &config(Command::SignIn {
                file: PathBuf::from("/definitely/not/here.toml"),
                watch: false,
            }),
            &mut out,
        )
        .await;
        assert!(result.is_err());
    }
}
