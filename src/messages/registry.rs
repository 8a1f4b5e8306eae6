//! Message Catalog
//!
//! Identifier to display-sentence lookup with layered overrides:
//! built-in < user-global < workspace.

use anyhow::{Context, Result};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::schema::CatalogFile;

/// Shown when the backend gave us nothing to work with
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Loading priority of a catalog source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CatalogPriority {
    BuiltIn = 0,
    UserGlobal = 1,
    Workspace = 2,
}

/// A display sentence with the source it was loaded from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub display: String,
    pub priority: CatalogPriority,
    pub source_path: Option<PathBuf>,
}

/// In-memory message catalog
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl MessageCatalog {
    /// An empty catalog. Every lookup falls back to the raw message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding only the embedded default messages
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add_embedded_catalog();
        catalog
    }

    /// Built-in messages overlaid with every catalog found in `dirs`, in order
    pub fn with_directories(dirs: &[(PathBuf, CatalogPriority)]) -> Self {
        let mut catalog = Self::builtin();
        for (dir, priority) in dirs {
            if let Err(e) = catalog.load_directory(dir, *priority) {
                log::warn!("Skipping message directory {}: {:#}", dir.display(), e);
            }
        }
        catalog
    }

    /// Add the embedded default catalog
    pub fn add_embedded_catalog(&mut self) {
        let embedded_toml = include_str!("../../resources/messages/auth-errors.toml");

        match toml::from_str::<CatalogFile>(embedded_toml) {
            Ok(file) => self.add_catalog(file, CatalogPriority::BuiltIn, None),
            Err(e) => {
                log::warn!("Failed to parse embedded message catalog: {}", e);
            }
        }
    }

    /// Merge a parsed catalog. Entries replace existing ones of lower or equal priority.
    pub fn add_catalog(
        &mut self,
        file: CatalogFile,
        priority: CatalogPriority,
        source_path: Option<&Path>,
    ) {
        log::debug!(
            "Adding message catalog '{}' ({} entries, {:?})",
            file.catalog.name,
            file.messages.len(),
            priority
        );

        for def in file.messages {
            let key = def.error.trim().to_string();
            let should_load = match self.entries.get(&key) {
                Some(existing) => priority >= existing.priority,
                None => true,
            };

            if should_load {
                self.entries.insert(
                    key,
                    CatalogEntry {
                        display: def.display,
                        priority,
                        source_path: source_path.map(Path::to_path_buf),
                    },
                );
            }
        }
    }

    /// Load a single catalog file
    pub fn load_file(&mut self, path: &Path, priority: CatalogPriority) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog: {}", path.display()))?;
        let file: CatalogFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse message catalog: {}", path.display()))?;
        self.add_catalog(file, priority, Some(path));
        Ok(())
    }

    /// Load every `.toml` catalog in `dir`, in file-name order.
    ///
    /// A missing directory is not an error. Broken files are logged and
    /// skipped. Returns the number of files loaded.
    pub fn load_directory(&mut self, dir: &Path, priority: CatalogPriority) -> Result<usize> {
        if !dir.exists() {
            return Ok(0);
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read message directory: {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("toml"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_file(&path, priority) {
                Ok(()) => loaded += 1,
                Err(e) => log::warn!("{:#}", e),
            }
        }

        log::info!(
            "Loaded {} message catalog(s) from {}",
            loaded,
            dir.display()
        );
        Ok(loaded)
    }

    /// Display sentence for a known identifier
    pub fn lookup(&self, error: &str) -> Option<&str> {
        self.entries
            .get(error.trim())
            .map(|entry| entry.display.as_str())
    }

    /// Full entry for a known identifier
    pub fn entry(&self, error: &str) -> Option<&CatalogEntry> {
        self.entries.get(error.trim())
    }

    /// Map a backend error to the sentence shown to the user.
    ///
    /// Known identifiers map to their catalog sentence, unknown ones are
    /// passed through unchanged, and blank input gets a generic sentence.
    pub fn friendly_message(&self, error: &str) -> String {
        if error.trim().is_empty() {
            return UNKNOWN_ERROR_MESSAGE.to_string();
        }

        match self.lookup(error) {
            Some(display) => display.to_string(),
            None => error.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
