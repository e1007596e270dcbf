//! Volatility indicators.

use crate::config::BollingerConfig;
use crate::moving_average::{rolling_std, sma};
use indicsig_core::{IndicatorError, PriceSeries, SeriesIndicator};
use serde::Serialize;
use tracing::debug;

/// Bollinger Bands output columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerOutput {
    /// Upper band
    pub upper: Vec<f64>,
    /// Middle band (SMA)
    pub middle: Vec<f64>,
    /// Lower band
    pub lower: Vec<f64>,
}

impl BollingerOutput {
    /// Latest `(upper, middle, lower)`, if the series is not empty.
    pub fn latest(&self) -> Option<(f64, f64, f64)> {
        Some((
            *self.upper.last()?,
            *self.middle.last()?,
            *self.lower.last()?,
        ))
    }

    /// Check if price is above the upper band at `index`.
    pub fn is_overbought(&self, index: usize, price: f64) -> bool {
        self.upper.get(index).is_some_and(|&upper| price > upper)
    }

    /// Check if price is below the lower band at `index`.
    pub fn is_oversold(&self, index: usize, price: f64) -> bool {
        self.lower.get(index).is_some_and(|&lower| price < lower)
    }
}

/// Bollinger Bands.
///
/// Middle band is the SMA of close; upper and lower sit a multiple of the
/// rolling sample standard deviation away. The first `period - 1` bars
/// are NaN.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    config: BollingerConfig,
}

impl BollingerBands {
    pub fn new(config: BollingerConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BollingerConfig {
        &self.config
    }

    /// Compute from a close-price column.
    pub fn compute_closes(&self, closes: &[f64]) -> BollingerOutput {
        let middle = sma(closes, self.config.period);
        let std_dev = rolling_std(closes, self.config.period);
        let k = self.config.std_dev_multiplier;

        let upper = middle.iter().zip(&std_dev).map(|(m, s)| m + s * k).collect();
        let lower = middle.iter().zip(&std_dev).map(|(m, s)| m - s * k).collect();

        BollingerOutput {
            upper,
            middle,
            lower,
        }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            config: BollingerConfig::default(),
        }
    }
}

impl SeriesIndicator for BollingerBands {
    type Output = BollingerOutput;

    fn compute(&self, series: &PriceSeries) -> BollingerOutput {
        debug!(symbol = %series.symbol, bars = series.len(), "computing Bollinger Bands");
        self.compute_closes(&series.closes())
    }

    fn warmup(&self) -> usize {
        self.config.period
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicsig_core::Bar;

    #[test]
    fn test_bands_order() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.1).sin() * 5.0)
            .collect();
        let output = BollingerBands::default().compute_closes(&closes);

        assert_eq!(output.upper.len(), 30);
        assert!(output.middle[..19].iter().all(|v| v.is_nan()));
        for i in 19..30 {
            assert!(output.upper[i] > output.middle[i]);
            assert!(output.middle[i] > output.lower[i]);
        }
    }

    #[test]
    fn test_constant_price_collapses_bands() {
        let series: PriceSeries = (0..25)
            .map(|i| Bar::new(i, 100.0, 100.0, 100.0, 100.0, 1.0))
            .collect();
        let bb = BollingerBands::new(BollingerConfig {
            period: 5,
            std_dev_multiplier: 2.0,
        })
        .unwrap();
        let output = bb.compute(&series);

        assert!(bb.is_warmed_up(&series));
        for i in 4..25 {
            assert_eq!(output.upper[i], output.middle[i]);
            assert_eq!(output.middle[i], output.lower[i]);
        }
    }

    #[test]
    fn test_constant_fractional_price_collapses_bands() {
        for price in [0.1, 0.7, 1.1, 2.3, 0.000123, 3961.638, 64250.75] {
            let output = BollingerBands::default().compute_closes(&vec![price; 25]);

            for i in 19..25 {
                assert_eq!(output.middle[i], price, "price {price} bar {i}");
                assert_eq!(output.upper[i], price, "price {price} bar {i}");
                assert_eq!(output.lower[i], price, "price {price} bar {i}");
            }
        }
    }

    #[test]
    fn test_reference_values() {
        let bb = BollingerBands::new(BollingerConfig {
            period: 5,
            std_dev_multiplier: 2.0,
        })
        .unwrap();
        let output = bb.compute_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        let (upper, middle, lower) = output.latest().unwrap();
        let sd = 2.5_f64.sqrt();
        assert!((middle - 3.0).abs() < 1e-10);
        assert!((upper - (3.0 + 2.0 * sd)).abs() < 1e-10);
        assert!((lower - (3.0 - 2.0 * sd)).abs() < 1e-10);
    }

    #[test]
    fn test_overbought_oversold() {
        let output = BollingerOutput {
            upper: vec![110.0],
            middle: vec![100.0],
            lower: vec![90.0],
        };

        assert!(output.is_overbought(0, 115.0));
        assert!(!output.is_overbought(0, 105.0));
        assert!(output.is_oversold(0, 85.0));
        assert!(!output.is_oversold(0, 95.0));
        assert!(!output.is_oversold(3, 0.0));
    }

    #[test]
    fn test_rejects_degenerate_period() {
        assert!(BollingerBands::new(BollingerConfig {
            period: 1,
            std_dev_multiplier: 2.0,
        })
        .is_err());
    }
}
