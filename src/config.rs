//! Configuration management for signup-check.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project configuration (`.signup-check.toml`)
//! - Message catalog directory resolution

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use std::path::{Path, PathBuf};

use crate::messages::CatalogPriority;

/// Project configuration file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".signup-check.toml";

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "signup-check")]
#[command(about = "Validate sign-up and sign-in forms and score passwords")]
#[command(version)]
pub struct Args {
    /// Output format for reports
    #[arg(long, value_enum, global = true, help = "Report format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Extra directory of auth-error message catalogs
    #[arg(long, global = true, help = "Directory containing message catalog TOML files")]
    pub messages_dir: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        global = true,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Validate a sign-up form file
    SignUp {
        /// Form file (.toml or .json)
        file: PathBuf,
        /// Re-validate whenever the file changes
        #[arg(long)]
        watch: bool,
    },
    /// Validate a sign-in form file
    SignIn {
        /// Form file (.toml or .json)
        file: PathBuf,
        /// Re-validate whenever the file changes
        #[arg(long)]
        watch: bool,
    },
    /// Score a password's strength (reads stdin when omitted)
    Strength { password: Option<String> },
    /// Print the user-facing sentence for a backend auth error
    AuthError { message: String },
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of `.signup-check.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub format: Option<OutputFormat>,
    pub messages_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub format: OutputFormat,
    /// Catalog directories in load order
    pub messages_dirs: Vec<(PathBuf, CatalogPriority)>,
    pub log_level: String,
    /// Path of the project config, if one was found
    pub project_config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments and the working directory
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Self::from_args_in(args, &cwd)
    }

    /// Create configuration with `workspace` as the project root
    pub fn from_args_in(args: Args, workspace: &Path) -> Result<Self> {
        let project = load_project_config(workspace)?;
        let (project_config_path, project_config) = match project {
            Some((path, config)) => (Some(path), config),
            None => (None, ProjectConfig::default()),
        };

        // CLI > project file > defaults
        let format = args
            .format
            .or(project_config.format)
            .unwrap_or_default();
        let log_level = args
            .log_level
            .or(project_config.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let explicit_dir = args
            .messages_dir
            .or_else(|| project_config.messages_dir.map(|dir| workspace.join(dir)));

        Ok(Config {
            command: args.command,
            format,
            messages_dirs: message_directories(workspace, explicit_dir),
            log_level,
            project_config_path,
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }
}

/// Read `.signup-check.toml` from `dir`, if present
pub fn load_project_config(dir: &Path) -> Result<Option<(PathBuf, ProjectConfig)>> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read project config: {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse project config: {}", path.display()))?;

    Ok(Some((path, config)))
}

/// Catalog directories in load order: user-global, workspace, explicit
pub fn message_directories(
    workspace: &Path,
    explicit: Option<PathBuf>,
) -> Vec<(PathBuf, CatalogPriority)> {
    let mut dirs = Vec::new();

    // User global directory: ~/.config/signup-check/messages/
    if let Some(config_dir) = dirs::config_dir() {
        dirs.push((
            config_dir.join("signup-check").join("messages"),
            CatalogPriority::UserGlobal,
        ));
    }

    // Workspace directory: ./.signup-check/messages/
    dirs.push((
        workspace.join(".signup-check").join("messages"),
        CatalogPriority::Workspace,
    ));

    if let Some(dir) = explicit {
        dirs.push((dir, CatalogPriority::Workspace));
    }

    dirs
}
