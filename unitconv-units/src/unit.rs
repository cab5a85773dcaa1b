//! Unit definitions with their conversion model

use std::fmt;
use serde::Serialize;
use unitconv_core::Measure;

/// A scale factor kept as a ratio, applied as `x * numerator / denominator`
///
/// Keeping the two parts apart (instead of a pre-divided `5.0 / 9.0`) makes
/// 0 °C ↔ 32 °F and 100 °C → 212 °F exact. Other temperatures may still carry
/// rounding noise in the last digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    pub numerator: f64,
    pub denominator: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale::new(1.0, 1.0);

    pub const fn new(numerator: f64, denominator: f64) -> Self {
        Scale { numerator, denominator }
    }

    pub fn apply(&self, value: f64) -> f64 {
        value * self.numerator / self.denominator
    }
}

/// How a unit converts to and from its measure's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum Rate {
    /// base = value * factor
    Linear { factor: f64 },
    /// base = (value + offset) * to_base, value = base * from_base - offset
    Affine { offset: f64, to_base: Scale, from_base: Scale },
}

/// An entry of the unit registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Singular, plural, then abbreviations and alternate forms
    pub names: &'static [&'static str],
    /// The measure this unit belongs to
    pub measure: Measure,
    /// Conversion model relative to the measure's base unit
    pub rate: Rate,
}

impl UnitDefinition {
    /// Create a unit with proportional conversion
    pub const fn linear(measure: Measure, names: &'static [&'static str], factor: f64) -> Self {
        UnitDefinition { names, measure, rate: Rate::Linear { factor } }
    }

    /// Create a unit with an offset (temperature scales)
    pub const fn affine(
        measure: Measure,
        names: &'static [&'static str],
        offset: f64,
        to_base: Scale,
        from_base: Scale,
    ) -> Self {
        UnitDefinition { names, measure, rate: Rate::Affine { offset, to_base, from_base } }
    }

    /// Canonical singular name
    pub fn singular(&self) -> &'static str {
        self.names[0]
    }

    /// Canonical plural name
    pub fn plural(&self) -> &'static str {
        self.names[1]
    }

    /// Singular name for exactly 1.0, plural otherwise
    pub fn display_name(&self, amount: f64) -> &'static str {
        if amount == 1.0 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Check if this is its measure's base unit
    pub fn is_base(&self) -> bool {
        match self.rate {
            Rate::Linear { factor } => factor == 1.0,
            Rate::Affine { offset, to_base, .. } => offset == 0.0 && to_base == Scale::IDENTITY,
        }
    }

    /// Check if two units belong to the same measure
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.measure == other.measure
    }

    /// Lowest amount this unit can express
    pub fn minimum_amount(&self) -> f64 {
        match self.rate {
            Rate::Linear { .. } => 0.0,
            Rate::Affine { offset, .. } => 0.0 - offset,
        }
    }

    /// Check that `amount` is not below the unit's floor
    pub fn is_acceptable_amount(&self, amount: f64) -> bool {
        amount >= self.minimum_amount()
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self.rate {
            Rate::Linear { factor } => value * factor,
            Rate::Affine { offset, to_base, .. } => to_base.apply(value + offset),
        }
    }

    /// Convert a value in the base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self.rate {
            Rate::Linear { factor } => value / factor,
            // offset folded over the common denominator
            Rate::Affine { offset, from_base, .. } => {
                (value * from_base.numerator - offset * from_base.denominator) / from_base.denominator
            }
        }
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural())
    }
}
