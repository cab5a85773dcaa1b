//! Structured errors for conversion turns
//!
//! Errors never end the session. Every stage of a turn returns one of these
//! as a value, and the first one encountered becomes the turn's message.

use thiserror::Error;
use crate::{Amount, Measure, NumberError};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_A_NUMBER: &str = "NOT_A_NUMBER";
    pub const MALFORMED_EXPRESSION: &str = "MALFORMED_EXPRESSION";
    pub const UNRESOLVED_UNIT: &str = "UNRESOLVED_UNIT";
    pub const INCOMPATIBLE_MEASURES: &str = "INCOMPATIBLE_MEASURES";
    pub const OUT_OF_DOMAIN: &str = "OUT_OF_DOMAIN";
}

/// Printed in place of a unit name that could not be resolved
pub const UNKNOWN_UNIT: &str = "???";

/// Message for any input that does not parse
pub const PARSE_FAILURE: &str = "Parse error";

/// Failure to turn an input line into a conversion request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("leading token is not a number: {0}")]
    NotANumber(#[from] NumberError),

    #[error("malformed expression {line:?}: expected 4 to 6 words, got {words}")]
    MalformedExpression { line: String, words: usize },
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::NotANumber(_) => codes::NOT_A_NUMBER,
            ParseError::MalformedExpression { .. } => codes::MALFORMED_EXPRESSION,
        }
    }
}

/// Failure to map a unit phrase onto a known unit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// A single phrase matched no unit
    #[error("unknown unit: {0:?}")]
    UnresolvedUnit(String),

    /// At least one side of a request failed; resolved sides keep their
    /// plural display name so the message can still show them
    #[error("cannot resolve conversion from {} to {}",
        .from.as_deref().unwrap_or(UNKNOWN_UNIT),
        .to.as_deref().unwrap_or(UNKNOWN_UNIT))]
    Unresolved { from: Option<String>, to: Option<String> },
}

/// A resolved conversion that cannot be carried out
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("cannot convert {from} ({from_measure}) to {to} ({to_measure}): incompatible measures")]
    IncompatibleMeasures {
        from: String,
        to: String,
        from_measure: Measure,
        to_measure: Measure,
    },

    #[error("{} {measure} is below the minimum of {}", amount_text(.amount), amount_text(.minimum))]
    OutOfDomain { measure: Measure, amount: f64, minimum: f64 },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::IncompatibleMeasures { .. } => codes::INCOMPATIBLE_MEASURES,
            ValidationError::OutOfDomain { .. } => codes::OUT_OF_DOMAIN,
        }
    }
}

/// Any failure of a conversion turn
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConverterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConverterError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConverterError::Parse(e) => e.code(),
            ConverterError::Resolution(_) => codes::UNRESOLVED_UNIT,
            ConverterError::Validation(e) => e.code(),
        }
    }

    /// The sentence shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ConverterError::Parse(_) => PARSE_FAILURE.to_string(),
            ConverterError::Resolution(ResolutionError::Unresolved { from, to }) => {
                impossible(
                    from.as_deref().unwrap_or(UNKNOWN_UNIT),
                    to.as_deref().unwrap_or(UNKNOWN_UNIT),
                )
            }
            // A single phrase is always folded into `Unresolved` before a turn
            // reports it, so it only has its diagnostic form.
            ConverterError::Resolution(err) => err.to_string(),
            ConverterError::Validation(ValidationError::IncompatibleMeasures { from, to, .. }) => {
                impossible(from, to)
            }
            ConverterError::Validation(ValidationError::OutOfDomain { measure, .. }) => {
                format!("{} shouldn't be negative", measure)
            }
        }
    }
}

fn amount_text(value: &f64) -> Amount {
    Amount(*value)
}

fn impossible(from: &str, to: &str) -> String {
    format!("Conversion from {} to {} is impossible", from, to)
}
