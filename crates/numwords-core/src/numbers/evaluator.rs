//! Numeric run evaluation
//!
//! Two passes over a run of numeric tokens:
//!
//! 1. Grouping: scale words multiply into the partial value accumulated since
//!    the last scale boundary. The first unit or ten after a scale word closes
//!    that group and pushes it onto a stack.
//! 2. Reduction: pop pairs off the stack. A larger earlier group simply adds
//!    the later one ("two thousand" + "seventeen"). Otherwise the earlier group
//!    is scaled up to sit above the later one's magnitude before adding
//!    ("five hundred" above "twelve million one hundred thousand").

use super::scale::scale_factor_for;
use super::Token;
use crate::error::ConversionError;

/// Fold a run of numeric tokens, in input order, into one integer.
pub fn evaluate(tokens: &[Token]) -> Result<u64, ConversionError> {
    if tokens.is_empty() {
        return Err(ConversionError::EmptyRun);
    }

    let groups = group(tokens)?;
    let value = reduce(groups)?;
    tracing::debug!("Evaluated {:?} → {}", tokens, value);
    Ok(value)
}

/// Grouping pass: returns the completed groups, leftmost first.
fn group(tokens: &[Token]) -> Result<Vec<u64>, ConversionError> {
    let mut stack = Vec::with_capacity(tokens.len());
    let mut part: u64 = 0;
    let mut last_was_scale = false;

    for token in tokens {
        match *token {
            Token::Scale(scale) => {
                part = if part == 0 {
                    scale
                } else {
                    part.checked_mul(scale).ok_or(ConversionError::Overflow)?
                };
                last_was_scale = true;
            }
            Token::Unit(value) | Token::Ten(value) => {
                if last_was_scale {
                    stack.push(part);
                    part = 0;
                    last_was_scale = false;
                }
                part = part.checked_add(value).ok_or(ConversionError::Overflow)?;
            }
            Token::NonNumeric => return Err(ConversionError::NonNumericToken),
        }
    }

    if part != 0 {
        stack.push(part);
    }
    Ok(stack)
}

/// Reduction pass. An empty stack means every group was zero.
fn reduce(mut stack: Vec<u64>) -> Result<u64, ConversionError> {
    loop {
        let Some(top) = stack.pop() else {
            return Ok(0);
        };
        let Some(next) = stack.pop() else {
            return Ok(top);
        };

        let combined = if next > top {
            next.checked_add(top)
        } else {
            let factor =
                scale_factor_for(top).ok_or(ConversionError::UnsupportedMagnitude { value: top })?;
            next.checked_mul(factor).and_then(|v| v.checked_add(top))
        };
        stack.push(combined.ok_or(ConversionError::Overflow)?);
    }
}
