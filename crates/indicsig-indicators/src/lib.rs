//! Technical indicators over OHLCV price series.
//!
//! This crate provides full-recompute implementations of:
//! - Smoothing primitives (seeded recursive EMA, SMA, rolling standard deviation)
//! - Momentum indicators (WaveTrend, DEMA-based MACD)
//! - Volume-weighted MACD with histogram trend tags
//! - Volatility bands (Bollinger Bands)
//!
//! Every output column is aligned index-for-index with the input series.
//! Default parameters live in [`config`].

pub mod config;
pub mod histogram;
pub mod momentum;
pub mod moving_average;
pub mod volatility;
pub mod volume;

pub use config::{
    BollingerConfig, MacdDemaConfig, VwMacdConfig, WaveTrendConfig, ZeroDivisionPolicy,
};
pub use histogram::classify;
pub use momentum::{MacdDema, MacdOutput, WaveTrend, WaveTrendOutput};
pub use moving_average::{ema, rolling_std, sma, StreamingEma};
pub use volatility::{BollingerBands, BollingerOutput};
pub use volume::{VolumeWeightedMacd, VwMacdOutput, VwMacdSummary};
