//! Run configuration.
//!
//! Paths default to locations relative to the executable, not the working
//! directory. A binary built at `<repo>/target/<profile>/theme-registry`
//! resolves its themes root to `<repo>`.

use std::io;
use std::path::{Path, PathBuf};

use crate::registry::{DEFAULT_EXCLUDED_DIRS, REGISTRY_FILE_NAME};

/// Resolved settings for one registry build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Directory whose immediate subdirectories are theme candidates
    pub root: PathBuf,
    /// Destination of the registry file
    pub output: PathBuf,
    /// Top-level directory names that are never scanned
    pub excluded_dirs: Vec<String>,
}

impl RegistryConfig {
    /// Configuration for a themes root with the default output and exclusions.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output: root.join(REGISTRY_FILE_NAME),
            root,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Resolve the configuration from the running executable and optional overrides.
    ///
    /// Relative overrides are made absolute against the working directory.
    pub fn resolve(
        root: Option<&Path>,
        output: Option<&Path>,
        extra_excluded: &[String],
    ) -> io::Result<Self> {
        let root = match root {
            Some(root) => std::path::absolute(root)?,
            None => {
                let exe = std::env::current_exe()?;
                root_from_executable(&exe).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!(
                            "cannot derive themes root from executable {}",
                            exe.display()
                        ),
                    )
                })?
            }
        };

        let mut config = Self::for_root(root);
        if let Some(output) = output {
            config.output = std::path::absolute(output)?;
        }
        for name in extra_excluded {
            if !config.excluded_dirs.contains(name) {
                config.excluded_dirs.push(name.clone());
            }
        }
        Ok(config)
    }
}

/// The directory two levels above the one containing `exe`.
pub fn root_from_executable(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent()?.parent().map(Path::to_path_buf)
}
