//! Volume-weighted MACD.

use crate::config::VwMacdConfig;
use crate::histogram::classify;
use crate::moving_average::ema;
use indicsig_core::{
    HistogramColor, IndicatorError, NumericFormatter, PriceSeries, SeriesIndicator,
};
use serde::Serialize;
use tracing::debug;

/// Full VW-MACD columns plus histogram tags, for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VwMacdOutput {
    /// MACD line, `maSlow - maFast`
    pub macd: Vec<f64>,
    /// Signal line (EMA of MACD)
    pub signal: Vec<f64>,
    /// Histogram (MACD - Signal)
    pub histogram: Vec<f64>,
    /// Trend tag per histogram bar
    pub colors: Vec<HistogramColor>,
}

/// Latest VW-MACD reading rendered for alert text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VwMacdSummary {
    pub macd: String,
    pub signal: String,
    pub histogram: String,
    pub histogram_color: HistogramColor,
}

impl VwMacdOutput {
    /// Render the last bar in fixed-point notation.
    ///
    /// `None` when the series is empty or the last bar is undefined
    /// (e.g. no volume traded yet).
    pub fn summary(&self, formatter: &NumericFormatter) -> Option<VwMacdSummary> {
        Some(VwMacdSummary {
            macd: formatter.format(*self.macd.last()?).ok()?,
            signal: formatter.format(*self.signal.last()?).ok()?,
            histogram: formatter.format(*self.histogram.last()?).ok()?,
            histogram_color: *self.colors.last()?,
        })
    }
}

/// MACD over volume-weighted moving averages.
///
/// Each average is `EMA(volume * close) / EMA(volume)`. The line is
/// `maSlow - maFast` where `fast_period` is the longer window, so an
/// uptrend reads positive with the default (26, 12, 9) parameters.
#[derive(Debug, Clone)]
pub struct VolumeWeightedMacd {
    config: VwMacdConfig,
}

impl VolumeWeightedMacd {
    pub fn new(config: VwMacdConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VwMacdConfig {
        &self.config
    }

    /// Compute from close and volume columns of equal length.
    pub fn compute_columns(&self, closes: &[f64], volumes: &[f64]) -> VwMacdOutput {
        let volume_close: Vec<f64> = closes.iter().zip(volumes).map(|(c, v)| c * v).collect();
        self.compute_weighted(&volume_close, volumes)
    }

    fn compute_weighted(&self, volume_close: &[f64], volumes: &[f64]) -> VwMacdOutput {
        let ma_fast = vwma(volume_close, volumes, self.config.fast_period);
        let ma_slow = vwma(volume_close, volumes, self.config.slow_period);

        let macd: Vec<f64> = ma_slow.iter().zip(&ma_fast).map(|(s, f)| s - f).collect();
        let signal = ema(&macd, self.config.signal_period);
        let histogram: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();
        let colors = classify(&histogram);

        VwMacdOutput {
            macd,
            signal,
            histogram,
            colors,
        }
    }
}

impl Default for VolumeWeightedMacd {
    fn default() -> Self {
        Self {
            config: VwMacdConfig::default(),
        }
    }
}

impl SeriesIndicator for VolumeWeightedMacd {
    type Output = VwMacdOutput;

    fn compute(&self, series: &PriceSeries) -> VwMacdOutput {
        debug!(symbol = %series.symbol, bars = series.len(), "computing VW-MACD");
        self.compute_weighted(&series.volume_closes(), &series.volumes())
    }

    fn warmup(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "Volume Weighted MACD"
    }
}

/// Volume-weighted moving average; NaN while the volume EMA is zero.
fn vwma(volume_close: &[f64], volumes: &[f64], period: usize) -> Vec<f64> {
    let numerator = ema(volume_close, period);
    let denominator = ema(volumes, period);

    numerator
        .iter()
        .zip(&denominator)
        .map(|(n, d)| if *d == 0.0 { f64::NAN } else { n / d })
        .collect()
}
