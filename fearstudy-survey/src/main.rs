//! fearstudy - interactive fear survey analysis
//!
//! Loads the survey CSV, asks which fears to keep, and prints the
//! percentage of subjects who overcame each retained fear.

use anyhow::{Context, Result};
use clap::Parser;
use fearstudy_common::config::{DatasetPathResolver, TomlConfig};
use fearstudy_survey::{run, TerminalInteraction};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for fearstudy
#[derive(Parser, Debug)]
#[command(name = "fearstudy")]
#[command(about = "Overcome-success rates per fear from a survey CSV")]
#[command(version)]
struct Args {
    /// Dataset CSV file (relative paths resolve against the base directory)
    #[arg(value_name = "DATASET")]
    dataset: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base directory for a relative dataset path
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Also write the results to a JSON file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Do not clear the screen between prompts
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = TomlConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    // Logs go to stderr so they never mix with the prompts on stdout
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting fearstudy v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let dataset = DatasetPathResolver::new(args.dataset.clone(), args.base_dir.clone())
        .resolve(&config)
        .context("Failed to resolve dataset path")?;
    info!("Dataset path: {}", dataset.display());

    let mut interaction = TerminalInteraction::new(io::stdin().lock(), io::stdout())
        .with_clear_screen(config.clear_screen && !args.no_clear);

    let report = run(&dataset, &mut interaction).context("Survey run failed")?;

    if let Some(path) = args.export {
        report
            .export_json(&path)
            .with_context(|| format!("Failed to export results to {}", path.display()))?;
        info!("Results exported to {}", path.display());
    }

    Ok(())
}
