//! Configuration commands.

use anyhow::{Context, Result};
use indicsig_config::AppConfig;
use std::path::Path;

pub async fn validate(config_path: Option<&Path>, config: &AppConfig) -> Result<()> {
    match config_path {
        Some(path) => println!("Validating configuration: {}", path.display()),
        None => println!("Validating built-in defaults and environment"),
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Endpoint: {}", config.dispatch.endpoint_url);
    println!("Timeout: {}s", config.dispatch.timeout_secs);
    println!("Source tag: {}", config.dispatch.source_tag);

    Ok(())
}

pub async fn show(config: &AppConfig) -> Result<()> {
    let rendered = config.to_toml().context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}
