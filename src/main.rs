//! Indicator engine and alert relay CLI.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{commands, Cli, Commands};
use indicsig_config::load_config;
use indicsig_monitor::setup_logging;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // Setup logging
    let level = cli
        .log_level
        .map_or(config.logging.level.as_str(), |level| level.as_str());
    let _guard = setup_logging(
        level,
        cli.json_logs || config.logging.is_json(),
        config.logging.file.as_deref().map(Path::new),
    );

    // Execute command
    match cli.command {
        Commands::Indicators(args) => commands::indicators::run(args, &config).await,
        Commands::Parse(args) => commands::parse::run(args, &config).await,
        Commands::Dispatch(args) => commands::dispatch::run(args, &config).await,
        Commands::ValidateConfig => commands::config::validate(cli.config.as_deref(), &config).await,
        Commands::ShowConfig => commands::config::show(&config).await,
    }
}
