//! Input line parsing - turn "10 km to m" into a conversion request

use serde::Serialize;
use unitconv_core::{parse_amount, ParseError};

/// Marker for the source half of a two-word temperature name
const TWO_WORD_MARKER: &str = "degree";

/// A parsed input line: amount plus the raw source and target phrases
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source: String,
    pub target: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, source: impl Into<String>, target: impl Into<String>) -> Self {
        ConversionRequest {
            amount,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Parse an input line into a conversion request
///
/// Supported shapes (the connector word is skipped by position):
/// - `<num> <unit> <to> <unit>`
/// - `<num> <unit> <unit> <to> <unit> <unit>`
/// - `<num> degree <unit> <to> <unit>` or `<num> <unit> <to> <unit> <unit>`
pub fn parse(line: &str) -> Result<ConversionRequest, ParseError> {
    let line = line.to_lowercase();
    let words: Vec<&str> = line.split(' ').collect();

    let amount = parse_amount(words[0])?;

    if !(4..=6).contains(&words.len()) {
        return Err(ParseError::MalformedExpression {
            line: line.clone(),
            words: words.len(),
        });
    }

    let request = match words.len() {
        4 => ConversionRequest::new(amount, words[1], words[3]),
        6 => ConversionRequest::new(amount, words[1..=2].join(" "), words[4..=5].join(" ")),
        _ if words[1].contains(TWO_WORD_MARKER) => {
            ConversionRequest::new(amount, words[1..=2].join(" "), words[4])
        }
        _ => ConversionRequest::new(amount, words[1], words[3..=4].join(" ")),
    };
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse("10 km to m").unwrap(), ConversionRequest::new(10.0, "km", "m"));
        assert_eq!(parse("3 miles to yards").unwrap(), ConversionRequest::new(3.0, "miles", "yards"));
    }

    #[test]
    fn test_parse_lowercases() {
        assert_eq!(parse("1 KM In M").unwrap(), ConversionRequest::new(1.0, "km", "m"));
    }

    #[test]
    fn test_parse_two_word_source() {
        let request = parse("5 degree celsius to fahrenheit").unwrap();
        assert_eq!(request, ConversionRequest::new(5.0, "degree celsius", "fahrenheit"));

        let request = parse("5 degrees Celsius to k").unwrap();
        assert_eq!(request, ConversionRequest::new(5.0, "degrees celsius", "k"));
    }

    #[test]
    fn test_parse_two_word_target() {
        let request = parse("5 kelvins to degrees fahrenheit").unwrap();
        assert_eq!(request, ConversionRequest::new(5.0, "kelvins", "degrees fahrenheit"));
    }

    #[test]
    fn test_parse_two_word_both() {
        let request = parse("-40 degrees fahrenheit in degrees celsius").unwrap();
        assert_eq!(request, ConversionRequest::new(-40.0, "degrees fahrenheit", "degrees celsius"));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(matches!(parse("abc m to km"), Err(ParseError::NotANumber(_))));
        assert!(matches!(parse(""), Err(ParseError::NotANumber(_))));
        assert!(matches!(parse("nan m to km"), Err(ParseError::NotANumber(_))));
    }

    #[test]
    fn test_number_checked_before_word_count() {
        assert!(matches!(parse("abc"), Err(ParseError::NotANumber(_))));
    }

    #[test]
    fn test_parse_word_count() {
        assert!(matches!(
            parse("10 km m"),
            Err(ParseError::MalformedExpression { words: 3, .. })
        ));
        assert_eq!(
            parse("10 km to m and more").unwrap(),
            ConversionRequest::new(10.0, "km to", "and more")
        );
        assert!(matches!(
            parse("1 a b c d e f"),
            Err(ParseError::MalformedExpression { words: 7, .. })
        ));
    }

    #[test]
    fn test_double_space_yields_empty_word() {
        let request = parse("10  km to").unwrap();
        assert_eq!(request, ConversionRequest::new(10.0, "", "to"));
    }
}
