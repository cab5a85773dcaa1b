//! Amount parsing and rendering
//!
//! Amounts are plain `f64`. Rendered amounts always carry a fractional part
//! ("1.0", "1000.0") and switch to computerized scientific notation ("1.0E7")
//! outside the plain range.

use std::fmt;
use thiserror::Error;

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Overflow: {0} is out of range")]
    Overflow(String),
}

/// Smallest magnitude rendered without an exponent
const PLAIN_MIN: f64 = 1e-3;

/// Magnitudes from here on are rendered with an exponent
const PLAIN_MAX: f64 = 1e7;

/// Parse a decimal literal like "10", "-3.5", ".5" or "1e3"
///
/// Textual specials ("nan", "inf", "infinity") are rejected, as are literals
/// whose magnitude does not fit in an `f64`.
pub fn parse_amount(s: &str) -> Result<f64, NumberError> {
    let is_literal = !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && s.chars().any(|c| c.is_ascii_digit());
    if !is_literal {
        return Err(NumberError::ParseError(s.to_string()));
    }

    let value: f64 = s.parse()
        .map_err(|_| NumberError::ParseError(s.to_string()))?;

    // Rejected rather than carried through as an Infinity amount
    if value.is_infinite() {
        return Err(NumberError::Overflow(s.to_string()));
    }
    Ok(value)
}

/// Render a value with the shortest round-trip digits and a mandatory fraction
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // Display never uses an exponent and prints the shortest round-trip digits
        let text = value.to_string();
        return if text.contains('.') { text } else { format!("{}.0", text) };
    }

    let text = format!("{:e}", value);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}

/// Display adapter for [`format_amount`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(pub f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_amount(self.0))
    }
}
