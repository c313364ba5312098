//! Assorted utilities and helpers.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Digits kept by the demonstration output.
pub const DEFAULT_DIGITS: usize = 8;

/// Keep the last `digits` characters of `value`'s decimal form and parse them
/// back.
///
/// Sequence terms grow quickly; this keeps printed output short. For a
/// negative `value` the result is whatever the truncated text parses to.
#[inline]
pub fn last_digits<T>(value: &T, digits: usize) -> Result<T>
where
    T: Display + FromStr,
{
    if digits == 0 {
        return Err(Error::ZeroDigits);
    }
    let text = value.to_string();
    let tail = &text[text.len().saturating_sub(digits)..];
    tail.parse().map_err(|_| Error::TruncatedParse {
        digits: tail.to_owned(),
    })
}
