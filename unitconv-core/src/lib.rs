//! Unitconv Core - Shared Types
//!
//! Types used by every stage of a conversion turn:
//! - [`Measure`]: the closed set of quantity categories
//! - [`ConverterError`] and its per-stage variants, with user-facing messages
//! - [`format_amount`] / [`Amount`]: rendering of `f64` values in messages

mod error;
mod measure;
mod number;

pub use error::{
    codes, ConverterError, ParseError, ResolutionError, ValidationError,
    PARSE_FAILURE, UNKNOWN_UNIT,
};
pub use measure::Measure;
pub use number::{format_amount, parse_amount, Amount, NumberError};

