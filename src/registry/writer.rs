//! Writing `registry.json`.

use std::io;
use std::path::Path;

use super::types::Registry;
use crate::error::RegistryError;

/// Render the exact bytes written to `registry.json`.
pub fn render_registry(registry: &Registry) -> Result<String, RegistryError> {
    registry.to_json_string()
}

/// Overwrite `path` with the rendered registry.
pub fn write_registry(path: &Path, registry: &Registry) -> Result<(), RegistryError> {
    let content = render_registry(registry)?;
    std::fs::write(path, content).map_err(|source| RegistryError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} themes to {}", registry.len(), path.display());
    Ok(())
}

/// Check whether `path` already holds exactly the rendered registry.
///
/// A missing file is reported as stale rather than as an error.
pub fn check_registry(path: &Path, registry: &Registry) -> Result<bool, RegistryError> {
    let expected = render_registry(registry)?;
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(existing == expected),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(RegistryError::ReadExisting {
            path: path.to_path_buf(),
            source,
        }),
    }
}
