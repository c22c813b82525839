//! Conversion errors

/// Failure to evaluate a numeric run
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Unsupported magnitude: {value} is past trillion-scale composition")]
    UnsupportedMagnitude { value: u64 },

    #[error("Numeric phrase does not fit in a 64-bit integer")]
    Overflow,

    #[error("Cannot evaluate an empty numeric run")]
    EmptyRun,

    #[error("Numeric run contains a non-numeric token")]
    NonNumericToken,
}
