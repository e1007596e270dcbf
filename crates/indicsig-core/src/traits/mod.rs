//! Core traits for the alert pipeline.

mod indicator;
mod transport;

pub use indicator::SeriesIndicator;
pub use transport::{SignalTransport, TransportResponse};
