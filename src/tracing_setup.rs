//! Console logging setup.
//!
//! Warnings and errors go to stderr, everything else to stdout. `RUST_LOG`
//! overrides the default level.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(use_ansi(
            std::io::stdout().is_terminal(),
            std::io::stderr().is_terminal(),
        ))
        .with_target(false)
        .without_time()
        .try_init();
}

/// One formatter serves both streams, so colors need both to be terminals.
fn use_ansi(stdout_is_terminal: bool, stderr_is_terminal: bool) -> bool {
    stdout_is_terminal && stderr_is_terminal
}
