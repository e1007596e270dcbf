//! Core types and traits for the indicator alert pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, PriceSeries)
//! - Parsed alert events and dispatch outcomes
//! - Fixed-point formatting for very small magnitudes
//! - Core traits for indicators and event transports

pub mod error;
pub mod format;
pub mod traits;
pub mod types;

pub use error::{DataError, DispatchError, FormatError, IndicatorError, ParseFailure};
pub use format::{format_small_number, NumericFormatter};
pub use traits::*;
pub use types::*;
