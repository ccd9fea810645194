//! pomotui - a terminal Pomodoro countdown timer
//!
//! Three fixed presets (25m focus, 5m short break, 15m long break),
//! start/pause/reset controls, a progress bar, and a completion chime.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use pomotui::app;
use pomotui::cli::Cli;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log_file.as_deref()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = app::run(&cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber.
///
/// Logs go to `log_file` when given; without one no output is installed,
/// since stdout belongs to the full-screen UI.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
