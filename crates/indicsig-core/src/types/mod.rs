//! Core data types for the alert pipeline.

mod histogram;
mod ohlcv;
mod outcome;
mod signal;

pub use histogram::HistogramColor;
pub use ohlcv::{Bar, PriceSeries};
pub use outcome::DispatchOutcome;
pub use signal::{ParsedSignal, SignalMetadata, SignalType, TimeframeScores};
