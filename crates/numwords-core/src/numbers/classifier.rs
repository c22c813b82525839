//! Token classification
//!
//! A token is a number word, a digit literal, or plain text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dictionary;
use super::scale::scale_factor_for;
use super::Token;

/// Whole-token numeric literal: optional sign, optional grouping commas,
/// optional decimal point. Every part is optional, so a match alone does not
/// guarantee there is a digit to parse.
static DIGIT_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]*?(?:,?[0-9]+)*\.?[0-9]*$").expect("digit literal pattern is valid")
});

/// Parse a digit-like token to its integer value.
///
/// Grouping commas are dropped and any fractional part is truncated.
/// Negative literals, literals with no integral digits ("." or "+" or ".5"),
/// and values past `u64` yield `None`.
fn parse_digit_literal(word: &str) -> Option<u64> {
    if !DIGIT_LITERAL.is_match(word) || word.starts_with('-') {
        return None;
    }

    let integral = word.split('.').next().unwrap_or_default();
    let digits: String = integral.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Classify a single whitespace-delimited token. Never fails: anything
/// unrecognized is `Token::NonNumeric`.
pub fn classify(word: &str) -> Token {
    if let Some(token) = dictionary::lookup(word) {
        return token;
    }

    match parse_digit_literal(word) {
        Some(value) if scale_factor_for(value) == Some(1) => Token::Unit(value),
        Some(value) => Token::Scale(value),
        None => Token::NonNumeric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_words() {
        assert_eq!(classify("nineteen"), Token::Unit(19));
        assert_eq!(classify("Twenty"), Token::Ten(20));
        assert_eq!(classify("hundred"), Token::Scale(100));
        assert_eq!(classify("trillion"), Token::Scale(1_000_000_000_000));
    }

    #[test]
    fn test_plain_words_are_non_numeric() {
        assert_eq!(classify("census"), Token::NonNumeric);
        assert_eq!(classify("Board,"), Token::NonNumeric);
        assert_eq!(classify("India."), Token::NonNumeric);
        assert_eq!(classify("twenty-two"), Token::NonNumeric);
    }

    #[test]
    fn test_small_digit_literal_is_unit() {
        assert_eq!(classify("5"), Token::Unit(5));
        assert_eq!(classify("999"), Token::Unit(999));
        assert_eq!(classify("+42"), Token::Unit(42));
    }

    #[test]
    fn test_large_digit_literal_is_scale() {
        assert_eq!(classify("2017"), Token::Scale(2017));
        assert_eq!(classify("512100000"), Token::Scale(512_100_000));
        assert_eq!(
            classify("1000000000000000"),
            Token::Scale(1_000_000_000_000_000)
        );
    }

    #[test]
    fn test_grouped_and_decimal_literals() {
        assert_eq!(classify("1,000"), Token::Scale(1_000));
        assert_eq!(classify("12,345,678"), Token::Scale(12_345_678));
        assert_eq!(classify("3.14"), Token::Unit(3));
        assert_eq!(classify("2017."), Token::Scale(2017));
    }

    #[test]
    fn test_degenerate_literals_are_non_numeric() {
        assert_eq!(classify("."), Token::NonNumeric);
        assert_eq!(classify(","), Token::NonNumeric);
        assert_eq!(classify("+"), Token::NonNumeric);
        assert_eq!(classify(".5"), Token::NonNumeric);
        assert_eq!(classify("-7"), Token::NonNumeric);
        assert_eq!(classify("1.2.3"), Token::NonNumeric);
        assert_eq!(classify("12abc"), Token::NonNumeric);
    }

    #[test]
    fn test_literal_past_u64_is_non_numeric() {
        assert_eq!(classify("99999999999999999999999"), Token::NonNumeric);
    }

    #[test]
    fn test_non_ascii_digits_are_non_numeric() {
        assert_eq!(classify("٣"), Token::NonNumeric);
    }
}
