use std::io;
use std::path::PathBuf;

/// Errors produced while building or writing the registry.
///
/// `Scan`, `Write` and `ReadExisting` abort the run. The per-theme variants
/// (`MissingThemeFile`, `ReadTheme`, `ParseTheme`) are logged by the loader
/// and the offending directory is skipped.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read themes directory {}", path.display())]
    Scan { path: PathBuf, source: io::Error },

    #[error("no .json file found in {}", dir.display())]
    MissingThemeFile { dir: PathBuf },

    #[error("failed to read {}", path.display())]
    ReadTheme { path: PathBuf, source: io::Error },

    #[error("failed to parse {}", path.display())]
    ParseTheme {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize registry")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read existing registry {}", path.display())]
    ReadExisting { path: PathBuf, source: io::Error },
}

impl RegistryError {
    /// The error message followed by its underlying cause, if any.
    pub fn full_message(&self) -> String {
        match std::error::Error::source(self) {
            Some(cause) => format!("{self}: {cause}"),
            None => self.to_string(),
        }
    }
}
