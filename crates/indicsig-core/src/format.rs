//! Fixed-point rendering of indicator values.
//!
//! Crypto prices and oscillator readings can be tiny (1e-9 and below).
//! Default float formatting would switch to exponent notation for those,
//! which downstream text consumers cannot parse.

use crate::error::FormatError;

/// Digits after the decimal point when no precision is given.
pub const DEFAULT_PRECISION: usize = 9;

/// Render `value` with exactly `precision` fractional digits, never in
/// exponent notation. Exact zero renders as `"0.0"`.
pub fn format_small_number(value: f64, precision: usize) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::InvalidInput(value));
    }
    if value == 0.0 {
        return Ok("0.0".to_string());
    }
    Ok(format!("{:.*}", precision, value))
}

/// Formatter bound to a fixed precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericFormatter {
    precision: usize,
}

impl NumericFormatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn format(&self, value: f64) -> Result<String, FormatError> {
        format_small_number(value, self.precision)
    }
}

impl Default for NumericFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_short_form() {
        assert_eq!(format_small_number(0.0, 9).unwrap(), "0.0");
        assert_eq!(format_small_number(-0.0, 4).unwrap(), "0.0");
    }

    #[test]
    fn test_tiny_value_has_no_exponent() {
        let s = NumericFormatter::default().format(1e-9).unwrap();
        assert_eq!(s, "0.000000001");
        assert!(!s.contains('e') && !s.contains('E'));
        let fraction = s.split('.').nth(1).unwrap();
        assert_eq!(fraction.len(), 9);
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(format_small_number(3961.638, 2).unwrap(), "3961.64");
        assert_eq!(format_small_number(-0.5, 3).unwrap(), "-0.500");
        assert_eq!(NumericFormatter::new(4).precision(), 4);
    }

    #[test]
    fn test_large_value_stays_fixed_point() {
        let s = format_small_number(1e21, 1).unwrap();
        assert_eq!(s, "1000000000000000000000.0");
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(
            format_small_number(f64::NAN, 9),
            Err(FormatError::InvalidInput(_))
        ));
        assert!(format_small_number(f64::INFINITY, 9).is_err());
    }
}
