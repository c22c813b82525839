//! Text conversion: number names → decimal numerals
//!
//! Splits text on whitespace, classifies every token, and replaces each
//! maximal run of numeric tokens with its evaluated value. Everything else is
//! passed through untouched.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use crate::config::{Config, NumberFormat};
use crate::error::ConversionError;
use crate::numbers::{classify, evaluate, Token};

/// Successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted text
    pub text: String,
    /// Number of numeric runs that were replaced
    pub runs_replaced: usize,
}

/// Result of a fail-soft conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Converted text, or the untouched input if conversion failed
    pub text: String,
    /// Number of numeric runs that were replaced
    pub runs_replaced: usize,
    /// Set when a run failed to evaluate and the input was returned as-is
    pub fell_back: Option<ConversionError>,
    /// Processing time
    pub elapsed: Duration,
}

/// Converts English number names in free text to numerals
#[derive(Debug, Clone)]
pub struct NumberConverter {
    number_format: NumberFormat,
    split_hyphens: bool,
}

impl Default for NumberConverter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl NumberConverter {
    pub fn new(config: &Config) -> Self {
        Self {
            number_format: config.number_format,
            split_hyphens: config.split_hyphens,
        }
    }

    /// Override the configured output format
    pub fn with_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Convert `text`, returning it unchanged if any numeric run fails to
    /// evaluate.
    pub fn convert(&self, text: &str) -> String {
        self.convert_with_report(text).text
    }

    /// Fail-soft conversion with run count, fallback reason and timing
    pub fn convert_with_report(&self, text: &str) -> ConversionReport {
        let start = Instant::now();

        let (converted, runs_replaced, fell_back) = match self.try_convert(text) {
            Ok(conversion) => (conversion.text, conversion.runs_replaced, None),
            Err(e) => {
                tracing::warn!("Number conversion failed, keeping original text: {}", e);
                (text.to_string(), 0, Some(e))
            }
        };

        let elapsed = start.elapsed();
        tracing::debug!(
            "Number conversion: {} run(s) in {}µs",
            runs_replaced,
            elapsed.as_micros()
        );

        ConversionReport {
            text: converted,
            runs_replaced,
            fell_back,
            elapsed,
        }
    }

    /// Strict conversion: the first run that fails to evaluate is an error.
    pub fn try_convert(&self, text: &str) -> Result<Conversion, ConversionError> {
        if text.trim().is_empty() {
            return Ok(Conversion {
                text: text.to_string(),
                runs_replaced: 0,
            });
        }

        let prepared = self.preprocess(text);
        let mut output: Vec<Cow<'_, str>> = Vec::new();
        let mut run: Vec<Token> = Vec::new();
        let mut runs_replaced = 0;

        for word in prepared.split_whitespace() {
            let token = classify(word);
            if token.is_numeric() {
                run.push(token);
                continue;
            }
            if !run.is_empty() {
                output.push(Cow::Owned(self.flush(&mut run)?));
                runs_replaced += 1;
            }
            output.push(Cow::Borrowed(word));
        }

        // Text ending on a number leaves a run with no boundary after it
        if !run.is_empty() {
            output.push(Cow::Owned(self.flush(&mut run)?));
            runs_replaced += 1;
        }

        let converted = output.join(" ").trim().to_string();
        tracing::debug!("BEFORE: {}", text);
        tracing::debug!("AFTER:  {}", converted);

        Ok(Conversion {
            text: converted,
            runs_replaced,
        })
    }

    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.split_hyphens && text.contains('-') {
            Cow::Owned(text.replace('-', " "))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn flush(&self, run: &mut Vec<Token>) -> Result<String, ConversionError> {
        let value = evaluate(run)?;
        run.clear();
        Ok(self.number_format.render(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> String {
        NumberConverter::default().convert(text)
    }

    #[test]
    fn test_census_sentence() {
        assert_eq!(
            convert("As per a June two thousand seventeen census by the National Dairy Development Board, there are approximately five hundred twelve million one hundred thousand bovines in India."),
            "As per a June 2017 census by the National Dairy Development Board, there are approximately 512100000 bovines in India."
        );
    }

    #[test]
    fn test_phrase_only() {
        assert_eq!(convert("forty two"), "42");
        assert_eq!(convert("nineteen"), "19");
        assert_eq!(convert("one hundred"), "100");
    }

    #[test]
    fn test_hyphenated_matches_spaced() {
        assert_eq!(convert("twenty-two"), "22");
        assert_eq!(convert("twenty two"), "22");
    }

    #[test]
    fn test_hyphen_splitting_disabled() {
        let config = Config {
            split_hyphens: false,
            ..Config::default()
        };
        let converter = NumberConverter::new(&config);
        assert_eq!(converter.convert("twenty-two cats"), "twenty-two cats");
    }

    #[test]
    fn test_number_at_start_and_end() {
        assert_eq!(convert("three cats and four"), "3 cats and 4");
    }

    #[test]
    fn test_separate_runs() {
        let result = NumberConverter::default()
            .try_convert("one apple two pears")
            .unwrap();
        assert_eq!(result.text, "1 apple 2 pears");
        assert_eq!(result.runs_replaced, 2);
    }

    #[test]
    fn test_blank_input_unchanged() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("   "), "   ");
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(convert("  the   cat\tsat  "), "the cat sat");
    }

    #[test]
    fn test_punctuated_number_word_is_text() {
        assert_eq!(convert("we counted twelve, then stopped"), "we counted twelve, then stopped");
    }

    #[test]
    fn test_case_insensitive_words() {
        assert_eq!(convert("Two Thousand Seventeen was good"), "2017 was good");
    }

    #[test]
    fn test_grouped_format() {
        let converter = NumberConverter::default().with_format(NumberFormat::Grouped);
        assert_eq!(
            converter.convert("about five hundred twelve million one hundred thousand bovines"),
            "about 512,100,000 bovines"
        );
    }

    #[test]
    fn test_failure_returns_original_text() {
        let text = "they owed two trillion five trillion dollars, said twenty-two people";
        let report = NumberConverter::default().convert_with_report(text);
        assert_eq!(report.text, text);
        assert_eq!(report.runs_replaced, 0);
        assert_eq!(
            report.fell_back,
            Some(ConversionError::UnsupportedMagnitude {
                value: 5_000_000_000_000
            })
        );
    }

    #[test]
    fn test_strict_surfaces_error() {
        let err = NumberConverter::default()
            .try_convert("trillion trillion")
            .unwrap_err();
        assert_eq!(err, ConversionError::Overflow);
    }

    #[test]
    fn test_report_on_success() {
        let report = NumberConverter::default().convert_with_report("ten green bottles");
        assert_eq!(report.text, "10 green bottles");
        assert_eq!(report.runs_replaced, 1);
        assert!(report.fell_back.is_none());
    }
}
