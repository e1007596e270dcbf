//! Indicator trait definitions.

use crate::types::PriceSeries;

/// Trait for technical indicators computed over a full price series.
///
/// Every output column is aligned index-for-index with the input bars.
/// Positions before enough history has accumulated hold `NaN`.
pub trait SeriesIndicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Compute indicator values for the given series.
    ///
    /// The series is only read; any derived columns live in a private
    /// working buffer.
    fn compute(&self, series: &PriceSeries) -> Self::Output;

    /// Number of bars needed before every output column is defined.
    fn warmup(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Check whether the series is long enough for fully defined output.
    fn is_warmed_up(&self, series: &PriceSeries) -> bool {
        series.len() >= self.warmup()
    }
}
