//! finedout - track shared fines owed by a small group
//!
//! Reads one command, applies it to the stored ledger and prints the
//! resulting list. Logs go to stderr; stdout carries only the view.

use anyhow::{Context, Result};
use clap::Parser;
use finedout::Cli;
use finedout_common::config::TomlConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TomlConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Starting finedout v{} (command: {:?})",
        env!("CARGO_PKG_VERSION"),
        cli.command
    );

    let view = finedout::run(&cli, &config).await?;

    if let Some(warning) = &view.warning {
        eprintln!("warning: {}", warning);
    }
    if cli.json {
        println!("{}", view.render_json()?);
    } else {
        print!("{}", view);
    }

    Ok(())
}
