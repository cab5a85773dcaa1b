//! Unitconv Units - Free-Text Unit Conversion
//!
//! Turns lines like "10 km to m" or "5 degrees Celsius in kelvins" into a
//! natural-language answer.
//!
//! Pipeline:
//! - [`parse`]: split the line into an amount and two unit phrases
//! - [`resolve_request`]: map both phrases onto registered units
//! - [`validate`]: same measure, amount not below the source unit's floor
//! - [`convert`]: go through the measure's base unit
//!
//! Measures:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Weight (g, kg, mg, lb, oz)
//! - Temperature (K, degree Celsius, degree Fahrenheit)

mod unit;
mod units;
mod parse;
mod resolve;
mod validate;
mod convert;
mod turn;

pub use unit::{Rate, Scale, UnitDefinition};
pub use units::{all_units, lookup, UnitRegistry, UNITS};
pub use parse::{parse, ConversionRequest};
pub use resolve::{resolve, resolve_request, ResolvedConversion};
pub use validate::validate;
pub use convert::{convert, Conversion};
pub use turn::{evaluate, handle_turn, TurnOutcome};
