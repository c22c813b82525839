//! Static numeral tables
//!
//! Three disjoint tables: units (0-19), tens (20-90) and scale words.
//! Matching is exact-word and ASCII case-insensitive.

use super::scale::{BILLION, HUNDRED, MILLION, THOUSAND, TRILLION};
use super::Token;

const UNITS: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, u64)] = &[
    ("hundred", HUNDRED),
    ("thousand", THOUSAND),
    ("million", MILLION),
    ("billion", BILLION),
    ("trillion", TRILLION),
];

fn find(table: &[(&str, u64)], word: &str) -> Option<u64> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|(_, v)| *v)
}

fn parse_unit(word: &str) -> Option<u64> {
    find(UNITS, word)
}

fn parse_ten(word: &str) -> Option<u64> {
    find(TENS, word)
}

fn parse_scale(word: &str) -> Option<u64> {
    find(SCALES, word)
}

/// Look a word up in the numeral tables: units first, then tens, then scales.
///
/// Returns `None` for anything that is not a whole dictionary word, so
/// "census," or "fifties" never match.
pub fn lookup(word: &str) -> Option<Token> {
    parse_unit(word)
        .map(Token::Unit)
        .or_else(|| parse_ten(word).map(Token::Ten))
        .or_else(|| parse_scale(word).map(Token::Scale))
}
