//! Number-name recognition and evaluation
//!
//! Words are classified one at a time against the numeral tables, then each
//! contiguous run of numeric tokens is folded into a single integer.

mod classifier;
mod dictionary;
mod evaluator;
mod scale;

pub use classifier::classify;
pub use dictionary::lookup;
pub use evaluator::evaluate;
pub use scale::{digit_count, scale_factor_for, BILLION, HUNDRED, MILLION, THOUSAND, TRILLION};

/// A classified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// zero through nineteen, or a digit literal below 1000
    Unit(u64),
    /// twenty, thirty, ... ninety
    Ten(u64),
    /// hundred, thousand, million, billion, trillion, or a digit literal of 1000 and up
    Scale(u64),
    /// Anything else
    NonNumeric,
}

impl Token {
    /// Numeric value, if any
    pub fn value(&self) -> Option<u64> {
        match *self {
            Self::Unit(v) | Self::Ten(v) | Self::Scale(v) => Some(v),
            Self::NonNumeric => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::NonNumeric)
    }
}
