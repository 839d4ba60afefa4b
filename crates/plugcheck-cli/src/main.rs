mod config;
mod report;

use anyhow::{Context, Result};
use crate::config::{Config, OutputFormat};
use plugcheck_bundle::validate_bundle;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Validation aborted: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validate the bundle in the working directory, returning whether it passed
async fn run() -> Result<bool> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;
    plugcheck_logging::init_logging(&config.logging.level, config.logging.format)?;

    let root = std::env::current_dir().context("Failed to resolve working directory")?;
    info!("Starting plugcheck in {}", root.display());

    let report = validate_bundle(&root)
        .await
        .with_context(|| format!("Failed to validate {}", root.display()))?;

    let rendered = match config.output.format {
        OutputFormat::Human => report::render_human(&report),
        OutputFormat::Json => report::render_json(&report)?,
    };
    print!("{rendered}");

    Ok(report.is_success())
}
