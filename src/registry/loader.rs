//! Theme discovery with I/O abstraction.
//!
//! This module provides the `ThemeSource` trait for listing and reading theme
//! directories, `LocalThemeSource` as the default filesystem implementation,
//! and `RegistryLoader`, which turns a themes root into a `Registry`.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::types::{Registry, RegistryEntry};
use crate::error::RegistryError;

/// Directory names that are never treated as themes.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// A directory entry as reported by a listing, with file-type information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub is_dir: bool,
}

impl SourceEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    fn is_json(&self) -> bool {
        self.name.to_lowercase().ends_with(".json")
    }
}

/// Trait for listing and reading theme sources.
///
/// This abstraction allows testing with in-memory implementations.
pub trait ThemeSource {
    /// List the immediate entries of a directory, in listing order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<SourceEntry>>;

    /// Read file contents as string.
    fn read_file(&self, path: &Path) -> io::Result<String>;
}

/// Default implementation using the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalThemeSource;

impl ThemeSource for LocalThemeSource {
    /// Entries that vanish mid-listing or whose names are not UTF-8 are
    /// skipped; only failing to open `path` is an error.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            // file_type() does not follow symlinks
            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::debug!("Skipping non-UTF-8 name {:?} in {}", raw, path.display());
                    continue;
                }
            };
            entries.push(SourceEntry { name, is_dir });
        }
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Scans a themes root and builds a `Registry`.
pub struct RegistryLoader<'a> {
    source: &'a dyn ThemeSource,
    root: PathBuf,
    excluded: Vec<String>,
}

impl<'a> RegistryLoader<'a> {
    /// Create a loader for `root` that skips `DEFAULT_EXCLUDED_DIRS`.
    pub fn new(source: &'a dyn ThemeSource, root: impl Into<PathBuf>) -> Self {
        Self {
            source,
            root: root.into(),
            excluded: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Skip additional top-level directory names.
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.excluded.contains(&name) {
                self.excluded.push(name);
            }
        }
        self
    }

    /// Run the scan, read and extract stages and assemble the registry.
    ///
    /// Only a failure to list the root is returned as an error. Directories
    /// whose theme file cannot be read or parsed are logged and skipped.
    pub fn load(&self) -> Result<Registry, RegistryError> {
        tracing::info!("Scanning for themes in {}", self.root.display());

        let mut entries = Vec::new();
        for dir_name in self.candidates()? {
            if !self.is_theme_dir(&dir_name) {
                tracing::debug!("Skipping {}: no .json file", dir_name);
                continue;
            }

            let document = match self.read_theme(&dir_name) {
                Ok(Some(doc)) => doc,
                Ok(None) => {
                    tracing::debug!("Skipping {}: theme file is null", dir_name);
                    continue;
                }
                Err(e) => {
                    tracing::error!("Error reading theme {}: {}", dir_name, e.full_message());
                    continue;
                }
            };

            let entry = RegistryEntry::from_document(&dir_name, &document);
            tracing::info!(
                "Found theme: {} ({} dark, {} light colors)",
                entry.name,
                entry.dark.len(),
                entry.light.len()
            );
            entries.push(entry);
        }

        if entries.is_empty() {
            tracing::warn!("No themes found in {}", self.root.display());
        }

        Ok(Registry::assemble(entries))
    }

    /// List candidate theme directories under the root, in listing order.
    ///
    /// Non-directories, hidden entries and excluded names are dropped.
    pub fn candidates(&self) -> Result<Vec<String>, RegistryError> {
        let entries = self
            .source
            .read_dir(&self.root)
            .map_err(|source| RegistryError::Scan {
                path: self.root.clone(),
                source,
            })?;

        Ok(entries
            .into_iter()
            .filter(|e| e.is_dir)
            .filter(|e| !e.name.starts_with('.'))
            .filter(|e| !self.excluded.iter().any(|x| *x == e.name))
            .map(|e| e.name)
            .collect())
    }

    /// Whether a candidate directory holds at least one `.json` file.
    ///
    /// A directory that cannot be listed is not a theme.
    pub fn is_theme_dir(&self, dir_name: &str) -> bool {
        match self.source.read_dir(&self.root.join(dir_name)) {
            Ok(entries) => entries.iter().any(SourceEntry::is_json),
            Err(e) => {
                tracing::debug!("Cannot list {}: {}", dir_name, e);
                false
            }
        }
    }

    /// Read and parse the first `.json` file of a theme directory.
    ///
    /// Returns `Ok(None)` when the file holds JSON `null`.
    pub fn read_theme(&self, dir_name: &str) -> Result<Option<Value>, RegistryError> {
        let dir = self.root.join(dir_name);
        let entries = self
            .source
            .read_dir(&dir)
            .map_err(|source| RegistryError::ReadTheme {
                path: dir.clone(),
                source,
            })?;

        let json_files: Vec<&SourceEntry> = entries.iter().filter(|e| e.is_json()).collect();
        let Some(first) = json_files.first() else {
            return Err(RegistryError::MissingThemeFile { dir });
        };
        if json_files.len() > 1 {
            tracing::debug!(
                "{} has {} .json files, using {}",
                dir_name,
                json_files.len(),
                first.name
            );
        }

        let path = dir.join(&first.name);
        let content = self
            .source
            .read_file(&path)
            .map_err(|source| RegistryError::ReadTheme {
                path: path.clone(),
                source,
            })?;

        let document: Value = serde_json::from_str(&content)
            .map_err(|source| RegistryError::ParseTheme { path, source })?;

        Ok((!document.is_null()).then_some(document))
    }
}
