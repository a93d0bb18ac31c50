use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use theme_registry::config::RegistryConfig;
use theme_registry::registry::{check_registry, write_registry, LocalThemeSource, RegistryLoader};
use theme_registry::tracing_setup;

/// Build registry.json for a themes collection
#[derive(Parser, Debug)]
#[command(name = "theme-registry", version, about)]
struct Args {
    /// Themes root (defaults to two directories above the executable's directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Registry file to write (defaults to <root>/registry.json)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Additional top-level directory names to skip (node_modules is always skipped)
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Only verify that the registry file is up to date; never write
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_setup::init(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Error building theme registry: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when `--check` finds a stale registry.
fn run(args: &Args) -> Result<bool> {
    let config =
        RegistryConfig::resolve(args.root.as_deref(), args.output.as_deref(), &args.exclude)
            .context("Failed to resolve themes root")?;
    tracing::debug!("Using {:?}", config);

    let source = LocalThemeSource;
    let loader = RegistryLoader::new(&source, config.root.clone())
        .with_excluded(config.excluded_dirs.iter().cloned());
    let registry = loader.load().context("Failed to scan themes")?;

    if args.check {
        let fresh = check_registry(&config.output, &registry)?;
        if fresh {
            tracing::info!(
                "{} is up to date ({} themes)",
                config.output.display(),
                registry.len()
            );
        } else {
            tracing::warn!(
                "{} is out of date ({} themes found); run without --check to update it",
                config.output.display(),
                registry.len()
            );
        }
        return Ok(fresh);
    }

    write_registry(&config.output, &registry)?;
    tracing::info!(
        "Registry written to {} with {} themes",
        config.output.display(),
        registry.len()
    );
    Ok(true)
}
