//! Text pyramids.
//!
//! A pyramid of height 3:
//! ```text
//! --=--
//! -===-
//! =====
//! ```
//! Every line has the width of the base; the unused space is filled with `-`.

use std::io::Write;

use crate::error::{Error, Result};

/// Number of `=` on the 1-based `line_number`.
///
/// `None` for line 0 or when the count does not fit a `usize`.
#[inline]
pub fn calculate_line(line_number: usize) -> Option<usize> {
    line_number.checked_sub(1)?.checked_mul(2)?.checked_add(1)
}

/// Render a pyramid of `rows` lines, each terminated by `\n`.
///
/// # Errors
/// [`Error::PyramidTooLarge`] when the rendering would not fit in memory
/// addressable by a `String`.
pub fn render_pyramid(rows: usize) -> Result<String> {
    if rows == 0 {
        return Ok(String::new());
    }
    let too_large = || Error::PyramidTooLarge { rows };
    let width = calculate_line(rows).ok_or_else(too_large)?;
    let size = width
        .checked_add(1)
        .and_then(|line| line.checked_mul(rows))
        .filter(|&size| size <= isize::MAX as usize)
        .ok_or_else(too_large)?;

    let mut out = String::with_capacity(size);
    for line in 1..=rows {
        // line <= rows, so this cannot exceed `width`
        let fill = 2 * line - 1;
        let pad = (width - fill) / 2;
        out.extend(std::iter::repeat('-').take(pad));
        out.extend(std::iter::repeat('=').take(fill));
        out.extend(std::iter::repeat('-').take(pad));
        out.push('\n');
    }
    Ok(out)
}

pub fn write_pyramid<W: Write>(rows: usize, out: &mut W) -> Result<()> {
    out.write_all(render_pyramid(rows)?.as_bytes())?;
    Ok(())
}

/// Parse a pyramid height as typed by a user.
///
/// Negative integers are accepted and give an empty pyramid. Integers past
/// `usize::MAX` are [`Error::PyramidTooLarge`]; anything that is not an integer
/// is [`Error::InvalidRows`].
pub fn parse_rows(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if let Ok(rows) = trimmed.parse::<usize>() {
        return Ok(rows);
    }
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match trimmed.strip_prefix('-') {
        Some(digits) if all_digits(digits) => Ok(0),
        None if all_digits(trimmed.strip_prefix('+').unwrap_or(trimmed)) => {
            Err(Error::PyramidTooLarge { rows: usize::MAX })
        }
        _ => Err(Error::InvalidRows {
            input: input.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate_line, parse_rows, render_pyramid};
    use crate::error::Error;

    #[test]
    fn line_widths_are_odd() {
        assert_eq!(calculate_line(1), Some(1));
        assert_eq!(calculate_line(2), Some(3));
        assert_eq!(calculate_line(10), Some(19));
    }

    #[test]
    fn line_widths_do_not_overflow() {
        assert_eq!(calculate_line(0), None);
        assert_eq!(calculate_line(usize::MAX), None);
        assert_eq!(calculate_line(usize::MAX / 2 + 1), Some(usize::MAX));
    }

    #[test]
    fn small_pyramids() {
        assert_eq!(render_pyramid(0).unwrap(), "");
        assert_eq!(render_pyramid(1).unwrap(), "=\n");
        assert_eq!(render_pyramid(2).unwrap(), "-=-\n===\n");
        assert_eq!(render_pyramid(3).unwrap(), "--=--\n-===-\n=====\n");
    }

    #[test]
    fn huge_pyramids_are_rejected() {
        for rows in [usize::MAX, usize::MAX / 2 + 1, 1usize << (usize::BITS / 2)] {
            assert!(matches!(
                render_pyramid(rows),
                Err(Error::PyramidTooLarge { rows: r }) if r == rows
            ));
        }
    }

    #[test]
    fn rows_must_be_integers() {
        assert_eq!(parse_rows(" 5 ").unwrap(), 5);
        assert!(parse_rows("test").is_err());
        assert!(parse_rows("-").is_err());
        assert!(parse_rows("-3x").is_err());
        assert!(parse_rows("2.5").is_err());
    }

    #[test]
    fn integers_past_usize_are_too_large() {
        assert!(matches!(
            parse_rows("99999999999999999999999999"),
            Err(Error::PyramidTooLarge { .. })
        ));
        assert!(matches!(parse_rows("+5"), Ok(5)));
    }

    #[test]
    fn negative_rows_render_nothing() {
        assert_eq!(parse_rows("-3").unwrap(), 0);
        assert_eq!(parse_rows("-99999999999999999999999").unwrap(), 0);
        assert_eq!(render_pyramid(parse_rows("-3").unwrap()).unwrap(), "");
    }
}
