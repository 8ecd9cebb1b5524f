//! Price
//!
//! Whole-number prices in the local currency unit, and the lenient text
//! parser used by the add-dish form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

/// Whole-number price, displayed without decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Price(u64);

/// Raised when a stored price string is not a whole non-negative number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a whole-number price: {0:?}")]
pub struct PriceFormatError(pub String);

impl Price {
    /// Exclusive upper bound for amounts accepted by [`Price::from_amount`]: 2^64
    pub const AMOUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Convert a parsed amount into a stored price.
    ///
    /// The amount must be finite and strictly positive. It is rounded half
    /// away from zero, so `120.5` becomes `121` and `120.4` becomes `120`.
    /// The rounded amount must also be below [`Price::AMOUNT_LIMIT`] (2^64);
    /// anything at or above it is `InvalidPrice`.
    pub fn from_amount(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        let rounded = amount.round();
        if rounded >= Self::AMOUNT_LIMIT {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self(rounded as u64))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceFormatError(s.to_string()));
        }
        digits.parse::<u64>().map(Price).map_err(|_| PriceFormatError(s.to_string()))
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl TryFrom<String> for Price {
    type Error = PriceFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse the longest numeric prefix of `text`, `parseFloat`-style.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"12.5 rand"` reads as `12.5`. Returns `None` when the text does not
/// start with a number.
pub fn parse_price_text(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        // A lone "." only counts when digits sit on at least one side of it
        if mantissa_digits + frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_price_text("120"), Some(120.0));
        assert_eq!(parse_price_text("120.7"), Some(120.7));
        assert_eq!(parse_price_text("  -5"), Some(-5.0));
        assert_eq!(parse_price_text(".5"), Some(0.5));
        assert_eq!(parse_price_text("5."), Some(5.0));
        assert_eq!(parse_price_text("+8"), Some(8.0));
    }

    #[test]
    fn test_parse_numeric_prefix_only() {
        assert_eq!(parse_price_text("12abc"), Some(12.0));
        assert_eq!(parse_price_text("99.5 R"), Some(99.5));
        assert_eq!(parse_price_text("1.2.3"), Some(1.2));
        assert_eq!(parse_price_text("2e"), Some(2.0));
        assert_eq!(parse_price_text("2e+"), Some(2.0));
        assert_eq!(parse_price_text("1e3x"), Some(1000.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_price_text(""), None);
        assert_eq!(parse_price_text("abc"), None);
        assert_eq!(parse_price_text("."), None);
        assert_eq!(parse_price_text("-"), None);
        assert_eq!(parse_price_text("R50"), None);
        assert_eq!(parse_price_text("Infinity"), None);
        assert_eq!(parse_price_text("NaN"), None);
    }

    #[test]
    fn test_from_amount_rounds_half_away_from_zero() {
        assert_eq!(Price::from_amount(120.7).unwrap().to_string(), "121");
        assert_eq!(Price::from_amount(120.5).unwrap().to_string(), "121");
        assert_eq!(Price::from_amount(120.4).unwrap().to_string(), "120");
        assert_eq!(Price::from_amount(0.4).unwrap(), Price::new(0));
    }

    #[test]
    fn test_from_amount_rejects_non_positive_and_non_finite() {
        assert_eq!(Price::from_amount(0.0), Err(ValidationError::InvalidPrice));
        assert_eq!(Price::from_amount(-5.0), Err(ValidationError::InvalidPrice));
        assert_eq!(Price::from_amount(f64::NAN), Err(ValidationError::InvalidPrice));
        assert_eq!(Price::from_amount(f64::INFINITY), Err(ValidationError::InvalidPrice));
        assert_eq!(Price::from_amount(1e30), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_from_amount_upper_bound() {
        assert_eq!(Price::from_amount(1.8e19), Ok(Price::new(18_000_000_000_000_000_000)));
        assert_eq!(Price::from_amount(Price::AMOUNT_LIMIT), Err(ValidationError::InvalidPrice));
        assert_eq!(Price::from_amount(1.85e19), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_price_serde_as_string() {
        assert_eq!(serde_json::to_string(&Price::new(95)).unwrap(), "\"95\"");
        let parsed: Price = serde_json::from_str("\"160\"").unwrap();
        assert_eq!(parsed, Price::new(160));
        assert!(serde_json::from_str::<Price>("\"12.5\"").is_err());
        assert!(serde_json::from_str::<Price>("\"-3\"").is_err());
    }
}
