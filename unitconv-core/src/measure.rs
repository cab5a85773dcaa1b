//! Measure categories
//!
//! Every unit belongs to exactly one measure, and only units of the same
//! measure can be converted into each other.

use std::fmt;
use serde::Serialize;

/// Category of physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Measure {
    Length,
    Weight,
    Temperature,
}

impl Measure {
    /// All measures, in declaration order
    pub const ALL: [Measure; 3] = [Measure::Length, Measure::Weight, Measure::Temperature];

    /// Capitalized name, as used in user-facing messages
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Length => "Length",
            Measure::Weight => "Weight",
            Measure::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Measure::Length), "Length");
        assert_eq!(format!("{}", Measure::Weight), "Weight");
        assert_eq!(format!("{}", Measure::Temperature), "Temperature");
    }

    #[test]
    fn test_serialize_as_variant_name() {
        let json = serde_json::to_string(&Measure::Temperature).unwrap();
        assert_eq!(json, "\"Temperature\"");
    }
}
