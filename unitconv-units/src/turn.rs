//! One conversion turn: parse, resolve, validate, convert, render

use std::fmt;
use serde::{Serialize, Serializer};
use unitconv_core::ConverterError;
use crate::convert::Conversion;
use crate::parse::parse;
use crate::resolve::resolve_request;

/// Result of evaluating one input line
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Converted(Conversion<'static>),
    Rejected(ConverterError),
}

impl TurnOutcome {
    /// The sentence shown to the user
    pub fn message(&self) -> String {
        match self {
            TurnOutcome::Converted(conversion) => conversion.to_string(),
            TurnOutcome::Rejected(err) => err.user_message(),
        }
    }
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Wire shape of a turn outcome
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Report<'a> {
    Converted {
        amount: f64,
        source: &'a str,
        result: f64,
        target: &'a str,
        message: String,
    },
    Rejected {
        code: &'static str,
        message: String,
    },
}

impl Serialize for TurnOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let report = match self {
            TurnOutcome::Converted(conversion) => Report::Converted {
                amount: conversion.amount,
                source: conversion.source_name(),
                result: conversion.result,
                target: conversion.target_name(),
                message: self.message(),
            },
            TurnOutcome::Rejected(err) => Report::Rejected {
                code: err.code(),
                message: self.message(),
            },
        };
        report.serialize(serializer)
    }
}

fn run_pipeline(line: &str) -> Result<Conversion<'static>, ConverterError> {
    let request = parse(line)?;
    tracing::debug!(amount = request.amount, source = %request.source, target = %request.target, "parsed");

    let resolved = resolve_request(&request)?;
    resolved.validate()?;

    let conversion = resolved.convert();
    tracing::debug!(result = conversion.result, "converted");
    Ok(conversion)
}

/// Evaluate one input line into a structured outcome
pub fn evaluate(line: &str) -> TurnOutcome {
    match run_pipeline(line) {
        Ok(conversion) => TurnOutcome::Converted(conversion),
        Err(err) => {
            tracing::debug!(code = err.code(), error = %err, "turn rejected");
            TurnOutcome::Rejected(err)
        }
    }
}

/// Evaluate one input line into the message shown to the user
///
/// Never fails: every error becomes its diagnostic sentence.
pub fn handle_turn(line: &str) -> String {
    evaluate(line).message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_core::{codes, ParseError, ValidationError};

    #[test]
    fn test_success_message() {
        assert_eq!(handle_turn("1 km to m"), "1.0 kilometer is 1000.0 meters");
        assert_eq!(
            handle_turn("0 celsius to fahrenheit"),
            "0.0 degrees Celsius is 32.0 degrees Fahrenheit"
        );
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(handle_turn("5 km to kg"), "Conversion from kilometers to kilograms is impossible");
        assert_eq!(handle_turn("-5 m to km"), "Length shouldn't be negative");
        assert_eq!(handle_turn("abc m to km"), "Parse error");
        assert_eq!(handle_turn("1e400 m to km"), "Parse error");
        assert_eq!(handle_turn("1d m to km"), "Parse error");
    }

    #[test]
    fn test_evaluate_outcome() {
        let outcome = evaluate("2 kg to g");
        assert!(matches!(outcome, TurnOutcome::Converted(ref c) if c.result == 2000.0));

        let outcome = evaluate("1 m");
        assert!(matches!(
            outcome,
            TurnOutcome::Rejected(ConverterError::Parse(ParseError::MalformedExpression { .. }))
        ));

        let outcome = evaluate("-1 lb to g");
        assert!(matches!(
            outcome,
            TurnOutcome::Rejected(ConverterError::Validation(ValidationError::OutOfDomain { .. }))
        ));
    }

    #[test]
    fn test_serialize_converted() {
        let json = serde_json::to_value(evaluate("1 km to m")).unwrap();
        assert_eq!(json["status"], "converted");
        assert_eq!(json["amount"], 1.0);
        assert_eq!(json["source"], "kilometer");
        assert_eq!(json["result"], 1000.0);
        assert_eq!(json["target"], "meters");
        assert_eq!(json["message"], "1.0 kilometer is 1000.0 meters");
    }

    #[test]
    fn test_serialize_rejected() {
        let json = serde_json::to_value(evaluate("5 km to kg")).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["code"], codes::INCOMPATIBLE_MEASURES);
        assert_eq!(json["message"], "Conversion from kilometers to kilograms is impossible");
    }
}
