//! Unit phrase resolution against the global registry

use unitconv_core::ResolutionError;
use crate::parse::ConversionRequest;
use crate::unit::UnitDefinition;
use crate::units::lookup;

/// A request whose phrases both matched a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConversion<'a> {
    pub amount: f64,
    pub source: &'a UnitDefinition,
    pub target: &'a UnitDefinition,
}

/// Map a unit phrase onto a registered unit
pub fn resolve(phrase: &str) -> Result<&'static UnitDefinition, ResolutionError> {
    lookup(phrase).ok_or_else(|| ResolutionError::UnresolvedUnit(phrase.to_string()))
}

/// Resolve both sides of a request
///
/// Both phrases are always looked up, so a failure still reports the side
/// that did resolve.
pub fn resolve_request(
    request: &ConversionRequest,
) -> Result<ResolvedConversion<'static>, ResolutionError> {
    let source = resolve(&request.source);
    let target = resolve(&request.target);

    match (source, target) {
        (Ok(source), Ok(target)) => Ok(ResolvedConversion {
            amount: request.amount,
            source,
            target,
        }),
        (source, target) => Err(ResolutionError::Unresolved {
            from: source.ok().map(|u| u.plural().to_string()),
            to: target.ok().map(|u| u.plural().to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("mi").unwrap().singular(), "mile");
        assert_eq!(
            resolve("parsec"),
            Err(ResolutionError::UnresolvedUnit("parsec".to_string()))
        );
    }

    #[test]
    fn test_resolve_request() {
        let request = ConversionRequest::new(2.0, "lb", "ounces");
        let resolved = resolve_request(&request).unwrap();
        assert_eq!(resolved.amount, 2.0);
        assert_eq!(resolved.source.singular(), "pound");
        assert_eq!(resolved.target.singular(), "ounce");
    }

    #[test]
    fn test_unresolved_target_keeps_source() {
        let request = ConversionRequest::new(1.0, "m", "parsecs");
        assert_eq!(
            resolve_request(&request),
            Err(ResolutionError::Unresolved {
                from: Some("meters".to_string()),
                to: None,
            })
        );
    }

    #[test]
    fn test_unresolved_source_keeps_target() {
        let request = ConversionRequest::new(1.0, "degree rankine", "c");
        assert_eq!(
            resolve_request(&request),
            Err(ResolutionError::Unresolved {
                from: None,
                to: Some("degrees Celsius".to_string()),
            })
        );
    }

    #[test]
    fn test_both_unresolved() {
        let request = ConversionRequest::new(1.0, "x", "y");
        assert_eq!(
            resolve_request(&request),
            Err(ResolutionError::Unresolved { from: None, to: None })
        );
    }
}
