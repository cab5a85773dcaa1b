//! Conversion validation - measure compatibility and amount floors

use unitconv_core::ValidationError;
use crate::resolve::ResolvedConversion;
use crate::unit::UnitDefinition;

/// Check that `amount` of `source` can be converted to `target`
///
/// Only the source unit's floor is consulted; the target's floor is never
/// applied to the pre-conversion amount.
pub fn validate(
    amount: f64,
    source: &UnitDefinition,
    target: &UnitDefinition,
) -> Result<(), ValidationError> {
    if !source.is_compatible(target) {
        return Err(ValidationError::IncompatibleMeasures {
            from: source.plural().to_string(),
            to: target.plural().to_string(),
            from_measure: source.measure,
            to_measure: target.measure,
        });
    }

    if !source.is_acceptable_amount(amount) {
        return Err(ValidationError::OutOfDomain {
            measure: source.measure,
            amount,
            minimum: source.minimum_amount(),
        });
    }

    Ok(())
}

impl ResolvedConversion<'_> {
    /// Validate this conversion, see [`validate`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.amount, self.source, self.target)
    }
}
