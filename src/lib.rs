//! Theme registry builder.
//!
//! Scans a themes collection for per-theme directories, extracts the
//! recognized color roles from each theme's JSON file and writes a single
//! `registry.json` index sorted by theme name.

pub mod collation;
pub mod error;
pub mod registry;

#[cfg(feature = "runtime")]
pub mod config;
#[cfg(feature = "runtime")]
pub mod tracing_setup;

pub use error::RegistryError;
