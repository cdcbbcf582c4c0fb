//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use weather_core::Config;

mod cli;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Config errors surface later from the command itself; logging just falls back.
    let level = Config::load()
        .map(|cfg| cfg.logging.level_or("warn").to_string())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
