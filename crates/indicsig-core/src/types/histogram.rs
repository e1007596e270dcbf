//! Momentum histogram trend tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction tag for one histogram bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistogramColor {
    /// Non-negative and growing
    Rising,
    /// Negative and shrinking further
    Falling,
    /// Anything else, including the first bar
    Neutral,
}

impl HistogramColor {
    /// Tag `curr` given the bar before it.
    ///
    /// A NaN on either side compares false everywhere and lands on `Neutral`.
    pub fn from_step(prev: f64, curr: f64) -> Self {
        if curr >= 0.0 {
            if curr > prev {
                HistogramColor::Rising
            } else {
                HistogramColor::Neutral
            }
        } else if curr < prev {
            HistogramColor::Falling
        } else {
            HistogramColor::Neutral
        }
    }

    /// Chart color used by the alert front end.
    pub fn chart_color(&self) -> &'static str {
        match self {
            HistogramColor::Rising => "green",
            HistogramColor::Falling => "red",
            HistogramColor::Neutral => "orange",
        }
    }
}

impl fmt::Display for HistogramColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HistogramColor::Rising => "rising",
            HistogramColor::Falling => "falling",
            HistogramColor::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}
