//! Error types for the alert pipeline.

use std::time::Duration;
use thiserror::Error;

/// Numeric formatting errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// NaN or infinity cannot be rendered as a fixed-point number.
    #[error("Invalid input: {0} is not a finite number")]
    InvalidInput(f64),
}

/// Indicator construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Reasons a formatted alert message could not be turned into a signal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseFailure {
    #[error("Missing mandatory field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} holds a malformed number: {raw:?}")]
    InvalidNumber { field: &'static str, raw: String },
}

/// Event transport errors.
///
/// These never escape the dispatcher; they are folded into a failed
/// `DispatchOutcome`.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Could not build HTTP client: {0}")]
    Client(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Market data loading errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available at {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
