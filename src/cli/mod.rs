//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indicsig")]
#[command(author, version, about = "Indicator engine and alert relay for crypto signals")]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "INDICSIG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level, overrides `logging.level`
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators over a CSV candle file
    Indicators(IndicatorsArgs),
    /// Parse an alert message into a signal
    Parse(ParseArgs),
    /// Parse an alert message and send it to the ingestion endpoint
    Dispatch(DispatchArgs),
    /// Validate configuration
    ValidateConfig,
    /// Print the effective configuration
    ShowConfig,
}

#[derive(clap::Args)]
pub struct IndicatorsArgs {
    /// Data file (CSV with date/open/high/low/close/volume columns)
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbol label for the series
    #[arg(short, long, default_value = "DATA")]
    pub symbol: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ParseArgs {
    /// Read the message from a file instead of stdin
    #[arg(short, long)]
    pub message_file: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct DispatchArgs {
    /// Read the message from a file instead of stdin
    #[arg(short, long)]
    pub message_file: Option<PathBuf>,

    /// Endpoint URL, overrides `dispatch.endpoint_url`
    #[arg(short, long)]
    pub endpoint: Option<String>,
}
