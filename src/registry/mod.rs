//! Theme registry module with separated pure types and I/O operations.
//!
//! This module is split into:
//! - `types`: Pure data types and extraction (no filesystem access)
//! - `loader`: `ThemeSource` trait and `RegistryLoader` that scans a themes root (runtime only)
//! - `writer`: Rendering and writing `registry.json` (runtime only)
//!
//! # Example
//!
//! ```ignore
//! use theme_registry::registry::{LocalThemeSource, RegistryLoader, write_registry};
//! use std::path::Path;
//!
//! let source = LocalThemeSource;
//! let loader = RegistryLoader::new(&source, "/path/to/themes");
//! let registry = loader.load()?;
//! write_registry(Path::new("/path/to/themes/registry.json"), &registry)?;
//! ```

// Loader and writer require filesystem access - runtime only
#[cfg(feature = "runtime")]
mod loader;
mod types;
#[cfg(feature = "runtime")]
mod writer;

#[cfg(feature = "runtime")]
pub use loader::*;
pub use types::*;
#[cfg(feature = "runtime")]
pub use writer::*;
