//! Indicator parameters.
//!
//! Every default period used anywhere in the workspace is defined here
//! once. Callers pass a config struct per indicator instead of repeating
//! literals.
//!
//! | Indicator | Parameter | Default |
//! |-----------|-----------|---------|
//! | WaveTrend | channel length | 10 |
//! | WaveTrend | average length | 21 |
//! | WaveTrend | signal length (SMA of wt1) | 4 |
//! | MACD (DEMA) | fast / slow / signal | 12 / 26 / 9 |
//! | VW-MACD | fast / slow / signal | 26 / 12 / 9 |
//! | Bollinger | period / multiplier | 20 / 2.0 |
//!
//! VW-MACD's `fast_period` is the *longer* window and `slow_period` the
//! shorter one. Downstream alert thresholds were tuned against that
//! labelling, so it is kept as is.

use indicsig_core::IndicatorError;
use serde::{Deserialize, Serialize};

pub const WAVETREND_CHANNEL_LENGTH: usize = 10;
pub const WAVETREND_AVERAGE_LENGTH: usize = 21;
pub const WAVETREND_SIGNAL_LENGTH: usize = 4;

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;

pub const VW_MACD_FAST_PERIOD: usize = 26;
pub const VW_MACD_SLOW_PERIOD: usize = 12;
pub const VW_MACD_SIGNAL_PERIOD: usize = 9;

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV_MULTIPLIER: f64 = 2.0;

fn require_positive(name: &str, value: usize) -> Result<(), IndicatorError> {
    if value == 0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "{} must be greater than 0",
            name
        )));
    }
    Ok(())
}

/// What WaveTrend emits when its deviation term is exactly zero.
///
/// A constant-price run makes `d` zero, so the channel index would be
/// `0 / 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivisionPolicy {
    /// Channel index is 0.0 for that bar.
    #[default]
    Zero,
    /// Channel index is NaN; the following EMA skips it.
    Nan,
}

/// WaveTrend parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTrendConfig {
    pub channel_length: usize,
    pub average_length: usize,
    pub signal_length: usize,
    pub zero_division: ZeroDivisionPolicy,
}

impl Default for WaveTrendConfig {
    fn default() -> Self {
        Self {
            channel_length: WAVETREND_CHANNEL_LENGTH,
            average_length: WAVETREND_AVERAGE_LENGTH,
            signal_length: WAVETREND_SIGNAL_LENGTH,
            zero_division: ZeroDivisionPolicy::Zero,
        }
    }
}

impl WaveTrendConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        require_positive("channel_length", self.channel_length)?;
        require_positive("average_length", self.average_length)?;
        require_positive("signal_length", self.signal_length)
    }
}

/// DEMA-based MACD parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdDemaConfig {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdDemaConfig {
    fn default() -> Self {
        Self {
            fast_period: MACD_FAST_PERIOD,
            slow_period: MACD_SLOW_PERIOD,
            signal_period: MACD_SIGNAL_PERIOD,
        }
    }
}

impl MacdDemaConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        require_positive("fast_period", self.fast_period)?;
        require_positive("slow_period", self.slow_period)?;
        require_positive("signal_period", self.signal_period)
    }
}

/// Volume-weighted MACD parameters.
///
/// `fast_period` is the long window, `slow_period` the short one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VwMacdConfig {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for VwMacdConfig {
    fn default() -> Self {
        Self {
            fast_period: VW_MACD_FAST_PERIOD,
            slow_period: VW_MACD_SLOW_PERIOD,
            signal_period: VW_MACD_SIGNAL_PERIOD,
        }
    }
}

impl VwMacdConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        require_positive("fast_period", self.fast_period)?;
        require_positive("slow_period", self.slow_period)?;
        require_positive("signal_period", self.signal_period)
    }
}

/// Bollinger Bands parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerConfig {
    pub period: usize,
    pub std_dev_multiplier: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: BOLLINGER_PERIOD,
            std_dev_multiplier: BOLLINGER_STD_DEV_MULTIPLIER,
        }
    }
}

impl BollingerConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        // sample deviation needs at least two points
        if self.period < 2 {
            return Err(IndicatorError::InvalidParameter(
                "period must be at least 2".to_string(),
            ));
        }
        if !(self.std_dev_multiplier.is_finite() && self.std_dev_multiplier > 0.0) {
            return Err(IndicatorError::InvalidParameter(
                "std_dev_multiplier must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
