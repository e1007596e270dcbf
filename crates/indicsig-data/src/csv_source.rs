//! CSV candle loader.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use indicsig_core::{Bar, DataError, PriceSeries};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One candle row. Accepts spreadsheet-style and exchange kline headers.
#[derive(Debug, Deserialize)]
struct CandleRecord {
    #[serde(
        alias = "Date",
        alias = "date",
        alias = "timestamp",
        alias = "Timestamp",
        alias = "open_time"
    )]
    time: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", default)]
    volume: f64,
}

/// Reads historical candles from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvSeriesLoader {
    path: PathBuf,
    capacity: Option<usize>,
}

impl CsvSeriesLoader {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NotFound(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            capacity: None,
        })
    }

    /// Keep only the most recent `capacity` candles.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Load the file, oldest candle first.
    pub fn load(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();
        for (row, result) in reader.deserialize().enumerate() {
            let record: CandleRecord =
                result.map_err(|e| DataError::ParseError(format!("row {}: {}", row + 1, e)))?;
            bars.push(Bar::new(
                parse_timestamp(&record.time)?,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        bars.sort_by_key(|b| b.timestamp);
        debug!(path = %self.path.display(), symbol, bars = bars.len(), "loaded candles");

        let series = match self.capacity {
            Some(capacity) => {
                let mut series = PriceSeries::with_capacity(symbol, capacity);
                series.extend(bars);
                series
            }
            None => PriceSeries::from_bars(symbol, bars),
        };
        Ok(series)
    }
}

/// Date strings or Unix epochs in seconds or milliseconds.
fn parse_timestamp(raw: &str) -> Result<i64, DataError> {
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M"];
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

    if let Ok(epoch) = raw.parse::<i64>() {
        return Ok(if epoch > 10_000_000_000 { epoch } else { epoch * 1000 });
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, format) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc().timestamp_millis());
            }
        }
    }

    Err(DataError::ParseError(format!("Could not parse date: {}", raw)))
}
