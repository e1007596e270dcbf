//! Candle input for the indicator engine.

mod csv_source;

pub use csv_source::CsvSeriesLoader;

use indicsig_core::{DataError, PriceSeries};
use std::path::Path;

/// Load every candle in a CSV file into a series.
pub fn load_csv(path: impl AsRef<Path>, symbol: &str) -> Result<PriceSeries, DataError> {
    CsvSeriesLoader::new(path)?.load(symbol)
}
