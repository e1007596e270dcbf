//! CLI command implementations.

pub mod config;
pub mod dispatch;
pub mod indicators;
pub mod parse;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read an alert message from `path`, or stdin when absent.
pub(crate) fn read_message(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message file {}", path.display())),
        None => {
            let mut message = String::new();
            std::io::stdin()
                .read_to_string(&mut message)
                .context("Failed to read message from stdin")?;
            Ok(message)
        }
    }
}
