//! Dispatch command implementation.

use anyhow::{bail, Context, Result};
use indicsig_config::AppConfig;
use indicsig_dispatch::EventDispatcher;
use tracing::info;

use super::read_message;
use crate::cli::DispatchArgs;

pub async fn run(args: DispatchArgs, config: &AppConfig) -> Result<()> {
    let message = read_message(args.message_file.as_deref())?;

    let settings = &config.dispatch;
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| settings.endpoint_url.clone());
    info!(%endpoint, timeout_secs = settings.timeout_secs, "Relaying alert message");

    let dispatcher = EventDispatcher::http(endpoint, settings.timeout(), &settings.source_tag)
        .context("Failed to create dispatcher")?;
    let outcome = dispatcher.relay(&message).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    if !outcome.success {
        bail!(
            "Dispatch failed: {}",
            outcome.error_detail.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}
