//! Momentum indicators.

use crate::config::{MacdDemaConfig, WaveTrendConfig, ZeroDivisionPolicy};
use crate::moving_average::{ema, sma};
use indicsig_core::{IndicatorError, PriceSeries, SeriesIndicator};
use serde::Serialize;
use tracing::debug;

/// Scale factor of the WaveTrend channel index.
const CHANNEL_INDEX_SCALE: f64 = 0.015;

/// WaveTrend output columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveTrendOutput {
    /// EMA of the channel index
    pub wt1: Vec<f64>,
    /// SMA of `wt1`
    pub wt2: Vec<f64>,
}

/// WaveTrend oscillator.
///
/// Channel index of the typical price against its own EMA, smoothed
/// twice. Reads high, low and close.
#[derive(Debug, Clone)]
pub struct WaveTrend {
    config: WaveTrendConfig,
}

impl WaveTrend {
    pub fn new(config: WaveTrendConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WaveTrendConfig {
        &self.config
    }

    /// Compute from a typical-price column (`(high + low + close) / 3`).
    pub fn compute_typical(&self, hlc3: &[f64]) -> WaveTrendOutput {
        let channel = self.config.channel_length;

        let esa = ema(hlc3, channel);
        let spread: Vec<f64> = hlc3.iter().zip(&esa).map(|(p, e)| (p - e).abs()).collect();
        let d = ema(&spread, channel);

        let ci: Vec<f64> = hlc3
            .iter()
            .zip(&esa)
            .zip(&d)
            .map(|((p, e), d)| self.channel_index(p - e, *d))
            .collect();

        let wt1 = ema(&ci, self.config.average_length);
        let wt2 = sma(&wt1, self.config.signal_length);

        WaveTrendOutput { wt1, wt2 }
    }

    fn channel_index(&self, deviation: f64, d: f64) -> f64 {
        if d == 0.0 {
            return match self.config.zero_division {
                ZeroDivisionPolicy::Zero => 0.0,
                ZeroDivisionPolicy::Nan => f64::NAN,
            };
        }
        deviation / (CHANNEL_INDEX_SCALE * d)
    }
}

impl Default for WaveTrend {
    fn default() -> Self {
        Self {
            config: WaveTrendConfig::default(),
        }
    }
}

impl SeriesIndicator for WaveTrend {
    type Output = WaveTrendOutput;

    fn compute(&self, series: &PriceSeries) -> WaveTrendOutput {
        debug!(symbol = %series.symbol, bars = series.len(), "computing WaveTrend");
        self.compute_typical(&series.typical_prices())
    }

    fn warmup(&self) -> usize {
        self.config.signal_length
    }

    fn name(&self) -> &str {
        "WaveTrend"
    }
}

/// MACD output columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdOutput {
    /// MACD line
    pub macd: Vec<f64>,
    /// Signal line (EMA of MACD)
    pub signal: Vec<f64>,
    /// Histogram (MACD - Signal)
    pub histogram: Vec<f64>,
}

impl MacdOutput {
    /// Latest `(macd, signal, histogram)`, if the series is not empty.
    pub fn latest(&self) -> Option<(f64, f64, f64)> {
        Some((
            *self.macd.last()?,
            *self.signal.last()?,
            *self.histogram.last()?,
        ))
    }
}

/// MACD on double-EMA (DEMA) lines.
///
/// Each side is `2 * EMA(close) - EMA(EMA(close))` with its own period,
/// which cuts the lag of the plain EMA crossover.
#[derive(Debug, Clone)]
pub struct MacdDema {
    config: MacdDemaConfig,
}

impl MacdDema {
    pub fn new(config: MacdDemaConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MacdDemaConfig {
        &self.config
    }

    /// Compute from a close-price column.
    pub fn compute_closes(&self, closes: &[f64]) -> MacdOutput {
        let dema_fast = dema(closes, self.config.fast_period);
        let dema_slow = dema(closes, self.config.slow_period);

        let macd: Vec<f64> = dema_fast.iter().zip(&dema_slow).map(|(f, s)| f - s).collect();
        let signal = ema(&macd, self.config.signal_period);
        let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

        MacdOutput {
            macd,
            signal,
            histogram,
        }
    }
}

impl Default for MacdDema {
    fn default() -> Self {
        Self {
            config: MacdDemaConfig::default(),
        }
    }
}

impl SeriesIndicator for MacdDema {
    type Output = MacdOutput;

    fn compute(&self, series: &PriceSeries) -> MacdOutput {
        debug!(symbol = %series.symbol, bars = series.len(), "computing MACD (DEMA)");
        self.compute_closes(&series.closes())
    }

    fn warmup(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "MACD DEMA"
    }
}

fn dema(data: &[f64], period: usize) -> Vec<f64> {
    let first = ema(data, period);
    let second = ema(&first, period);
    first.iter().zip(&second).map(|(a, b)| 2.0 * a - b).collect()
}
