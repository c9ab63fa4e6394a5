use super::commands::Cli;
use crate::config::{ConfigLoader, ConfigOverrides};
use crate::http_client::HttpJsonSource;
use crate::logging::setup_logging;
use crate::pipeline::run;
use crate::{info_message, success_message};
use crate::targets::{ensure_output_dir, WriteMode};
use anyhow::{Context, Result};
use clap::Parser;

/// Parses the command line and runs one full generation.
pub async fn process_command() -> Result<()> {
    // NOTE: this exits the process if there is a parsing error
    let cli = Cli::parse();
    process_cli(cli).await
}

pub async fn process_cli(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load(ConfigOverrides {
        url_base: cli.url_base,
        target_path: cli.target_path,
        log_level: cli.log_level,
        write_mode: cli.atomic.then_some(WriteMode::Staged),
    })?;

    setup_logging(&config.log_level)?;

    // checked up front so a bad path doesn't cost a round of fetches
    ensure_output_dir(&config.target_path)?;

    info_message!("Fetching known servers from {}", config.url_base);
    let source = HttpJsonSource::new();
    let summary = run(&config, &source)
        .await
        .context("failed to generate target files")?;

    success_message!(
        "Wrote {} target files for {} servers to {}",
        summary.written.len(),
        summary.records,
        config.target_path.display()
    );
    Ok(())
}
