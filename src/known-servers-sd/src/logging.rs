use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    prelude::*,
    EnvFilter,
};

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// the final status line.
pub fn setup_logging(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(SystemTime)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(())
}
