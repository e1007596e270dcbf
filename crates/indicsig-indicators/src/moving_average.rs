//! Smoothing primitives.
//!
//! All functions return a column the same length as their input, with
//! `NaN` wherever the value is not yet defined.

/// Streaming EMA with recursive seeded smoothing.
///
/// `alpha = 2 / (span + 1)`; the first observation seeds the average, so
/// output is defined from the first non-NaN input onward. A NaN input
/// leaves the average unchanged but still decays the weight of history
/// for the next observation.
///
/// [`ema`] is this type folded over a slice, so incremental and batch
/// results are bit-identical.
#[derive(Debug, Clone)]
pub struct StreamingEma {
    span: usize,
    alpha: f64,
    current: Option<f64>,
    old_weight: f64,
}

impl StreamingEma {
    /// Create a new streaming EMA.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        Self {
            span,
            alpha: 2.0 / (span as f64 + 1.0),
            current: None,
            old_weight: 1.0,
        }
    }

    /// Update with a new value and return the current EMA (NaN until seeded).
    pub fn update(&mut self, value: f64) -> f64 {
        let Some(prev) = self.current else {
            if !value.is_nan() {
                self.current = Some(value);
            }
            return value;
        };

        self.old_weight *= 1.0 - self.alpha;
        if value.is_nan() {
            return prev;
        }

        let next = if prev != value {
            (self.old_weight * prev + self.alpha * value) / (self.old_weight + self.alpha)
        } else {
            prev
        };
        self.old_weight = 1.0;
        self.current = Some(next);
        next
    }

    /// Get the current EMA value.
    pub fn current(&self) -> Option<f64> {
        self.current
    }

    /// Reset the indicator.
    pub fn reset(&mut self) {
        self.current = None;
        self.old_weight = 1.0;
    }

    /// Check if the average has been seeded.
    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    pub fn span(&self) -> usize {
        self.span
    }
}

/// Exponential moving average of `data` with the given span.
pub fn ema(data: &[f64], span: usize) -> Vec<f64> {
    let mut state = StreamingEma::new(span);
    data.iter().map(|&value| state.update(value)).collect()
}

/// Simple moving average over a full window.
///
/// A window containing NaN yields NaN. A window of identical values
/// yields that value exactly.
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    assert!(period > 0, "Period must be greater than 0");
    let period_f64 = period as f64;

    rolling(data, period, |window| {
        if is_flat(window) {
            window[0]
        } else {
            window.iter().sum::<f64>() / period_f64
        }
    })
}

/// Rolling sample standard deviation (`N - 1` denominator).
///
/// Exactly 0.0 for a window of identical values.
pub fn rolling_std(data: &[f64], period: usize) -> Vec<f64> {
    assert!(period > 1, "Period must be greater than 1");
    let period_f64 = period as f64;

    rolling(data, period, |window| {
        if is_flat(window) {
            return 0.0;
        }
        let mean = window.iter().sum::<f64>() / period_f64;
        let variance =
            window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (period_f64 - 1.0);
        variance.sqrt()
    })
}

// Summing equal values drifts by a few ULPs
fn is_flat(window: &[f64]) -> bool {
    window.iter().all(|&x| x == window[0])
}

fn rolling(data: &[f64], period: usize, f: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    let mut result = vec![f64::NAN; data.len().min(period - 1)];
    result.reserve(data.len().saturating_sub(period - 1));

    for window in data.windows(period) {
        if window.iter().any(|x| x.is_nan()) {
            result.push(f64::NAN);
        } else {
            result.push(f(window));
        }
    }

    result
}
