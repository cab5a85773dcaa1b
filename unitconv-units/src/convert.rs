//! Numeric conversion through the measure's base unit

use std::fmt;
use unitconv_core::Amount;
use crate::resolve::ResolvedConversion;
use crate::unit::UnitDefinition;

/// Convert `amount` of `source` into `target`
///
/// Pure; callers validate first.
pub fn convert(amount: f64, source: &UnitDefinition, target: &UnitDefinition) -> f64 {
    target.from_base(source.to_base(amount))
}

/// A completed conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion<'a> {
    pub amount: f64,
    pub result: f64,
    pub source: &'a UnitDefinition,
    pub target: &'a UnitDefinition,
}

impl Conversion<'_> {
    /// Display name of the source for the input amount
    pub fn source_name(&self) -> &'static str {
        self.source.display_name(self.amount)
    }

    /// Display name of the target for the converted amount
    pub fn target_name(&self) -> &'static str {
        self.target.display_name(self.result)
    }
}

impl<'a> ResolvedConversion<'a> {
    /// Run the conversion
    pub fn convert(&self) -> Conversion<'a> {
        Conversion {
            amount: self.amount,
            result: convert(self.amount, self.source, self.target),
            source: self.source,
            target: self.target,
        }
    }
}

impl fmt::Display for Conversion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            Amount(self.amount),
            self.source_name(),
            Amount(self.result),
            self.target_name()
        )
    }
}
