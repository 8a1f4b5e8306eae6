//! Form file watching.
//!
//! Validates a form file once, then again every time it is created or
//! modified on disk. Every validation pass, including repeats of the same
//! outcome, is delivered over an unbounded channel.

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::form::{parse_form, FormFields, FormFormat, SignInFields, SignUpFields};
use crate::validation::ValidationResult;

/// Which validator a watched file is checked with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    SignUp,
    SignIn,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::SignUp => "sign-up",
            FormKind::SignIn => "sign-in",
        }
    }

    /// Parse `content` as this kind of form and validate it
    pub fn validate_content(self, content: &str, format: FormFormat) -> Result<ValidationResult> {
        Ok(match self {
            FormKind::SignUp => parse_form::<SignUpFields>(content, format)?.validate(),
            FormKind::SignIn => parse_form::<SignInFields>(content, format)?.validate(),
        })
    }
}

/// Read and validate a form file
pub fn validate_form_file(path: &Path, kind: FormKind) -> Result<ValidationResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;
    kind.validate_content(&content, FormFormat::from_path(path))
        .with_context(|| format!("Invalid form file: {}", path.display()))
}

async fn validate_form_file_async(path: &Path, kind: FormKind) -> Result<ValidationResult> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;
    kind.validate_content(&content, FormFormat::from_path(path))
        .with_context(|| format!("Invalid form file: {}", path.display()))
}

/// Outcome of one validation pass over the watched file
#[derive(Debug)]
pub struct WatchUpdate {
    pub path: PathBuf,
    pub outcome: Result<ValidationResult>,
}

/// Events from the file watcher
#[derive(Debug)]
enum WatcherEvent {
    FormFileChanged,
    WatcherError(notify::Error),
}

/// Watches one form file. Dropping it stops the watch and closes the channel.
pub struct FormWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
}

impl FormWatcher {
    /// Start watching `path`. Must be called from within a tokio runtime.
    ///
    /// The first update carries the initial validation of the file.
    pub fn start(path: &Path, kind: FormKind) -> Result<(Self, mpsc::UnboundedReceiver<WatchUpdate>)> {
        let file_name = path
            .file_name()
            .with_context(|| format!("Not a file path: {}", path.display()))?
            .to_os_string();

        // Watch the parent directory so editors that replace the file are seen
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if let EventKind::Create(_) | EventKind::Modify(_) = event.kind {
                        if event
                            .paths
                            .iter()
                            .any(|p| p.file_name() == Some(file_name.as_os_str()))
                        {
                            let _ = event_tx.send(WatcherEvent::FormFileChanged);
                        }
                    }
                }
                Err(e) => {
                    let _ = event_tx.send(WatcherEvent::WatcherError(e));
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(1)),
        )?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch directory: {}", dir.display()))?;
        log::info!("Watching {} form {}", kind.as_str(), path.display());

        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watched = path.to_path_buf();

        tokio::spawn(async move {
            let initial = validate_form_file_async(&watched, kind).await;
            if !Self::publish(&update_tx, &watched, initial) {
                return;
            }

            while let Some(event) = event_rx.recv().await {
                match event {
                    WatcherEvent::FormFileChanged => {
                        log::debug!("Form file changed: {}", watched.display());
                        let outcome = validate_form_file_async(&watched, kind).await;
                        if !Self::publish(&update_tx, &watched, outcome) {
                            break;
                        }
                    }
                    WatcherEvent::WatcherError(e) => {
                        log::error!("Form file watcher error: {}", e);
                    }
                }
            }
        });

        Ok((
            Self {
                path: path.to_path_buf(),
                _watcher: watcher,
            },
            update_rx,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Send an update. Returns false once the receiver is gone.
    fn publish(
        tx: &mpsc::UnboundedSender<WatchUpdate>,
        path: &Path,
        outcome: Result<ValidationResult>,
    ) -> bool {
        tx.send(WatchUpdate {
            path: path.to_path_buf(),
            outcome,
        })
        .is_ok()
    }
}
