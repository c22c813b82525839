//! numwords core - English number names to decimal numerals
//!
//! This library provides:
//! - A static numeral dictionary (units, tens, scale words up to trillion)
//! - Token classification for number words and digit literals
//! - Queue-then-stack evaluation of numeric runs
//! - Fail-soft text conversion with optional digit grouping

pub mod config;
pub mod numbers;

mod converter;
mod error;

pub use config::{Config, NumberFormat};
pub use converter::{Conversion, ConversionReport, NumberConverter};
pub use error::ConversionError;

/// Census sentence used by the CLI self-check and benchmark
pub const SAMPLE_TEXT: &str = "As per a June two thousand seventeen census by the National Dairy Development Board, there are approximately five hundred twelve million one hundred thousand bovines in India.";

/// Expected conversion of [`SAMPLE_TEXT`]
pub const SAMPLE_EXPECTED: &str = "As per a June 2017 census by the National Dairy Development Board, there are approximately 512100000 bovines in India.";

/// Replace number names in text using default settings
///
/// This is the main entry point for the library.
pub fn convert_number_names(text: &str) -> String {
    NumberConverter::default().convert(text)
}
