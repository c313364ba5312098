//! Sliding-window evaluation of linear recurrences.
//!
//! A recurrence is fully described by its initial terms and a window size
//! `n`: indices below the prefix length return the prefix verbatim, every
//! later term is the sum of the `n` terms before it.
//!
//! Evaluation walks forward from the end of the prefix, keeping only the most
//! recent `len(initial)` terms in a [`WorkingBuffer`]. There is no recursion,
//! no term is computed twice within a call, and nothing survives the call:
//! - time: O((index - len(initial)) * window)
//! - space: O(len(initial))

use crate::error::{Error, Result};
use crate::traits::Term;
use crate::window::WorkingBuffer;

/// Evaluate term `index` of the recurrence seeded by `initial`.
///
/// `window` defaults to `initial.len()` when `None` or `Some(0)`.
///
/// ```
/// use summable_seq::compute;
///
/// // 1, 2, 4, 7, 13, 24, ...
/// assert_eq!(compute(3, None, &[1u64, 2, 4]).unwrap(), 7);
/// // window 2 over the same prefix: 1, 2, 4, 6, 10, 16, 26
/// assert_eq!(compute(6, Some(2), &[1u64, 2, 4]).unwrap(), 26);
/// assert!(compute(-1, None, &[1u64, 2, 4]).is_err());
/// ```
///
/// # Errors
/// - [`Error::NegativeIndex`] / [`Error::IndexOutOfRange`] for an unusable index,
/// - [`Error::NegativeWindow`] / [`Error::WindowTooLarge`] for an unusable window,
/// - [`Error::EmptyInitial`] when there is no prefix to start from,
/// - [`Error::Overflow`] when a fixed-width `T` cannot hold an intermediate term.
pub fn compute<T: Term>(index: i64, window: Option<i64>, initial: &[T]) -> Result<T> {
    let index = resolve_index(index)?;
    let window = match window {
        None | Some(0) => initial.len(),
        Some(w) if w < 0 => return Err(Error::NegativeWindow { window: w }),
        Some(w) => usize::try_from(w).map_err(|_| Error::WindowTooLarge {
            window: w.unsigned_abs(),
            len: initial.len(),
        })?,
    };
    evaluate(index, window, initial)
}

/// Validate a caller-supplied index.
pub(crate) fn resolve_index(index: i64) -> Result<usize> {
    if index < 0 {
        return Err(Error::NegativeIndex { index });
    }
    usize::try_from(index).map_err(|_| Error::IndexOutOfRange { index })
}

/// Core loop over an already non-negative index and window.
pub(crate) fn evaluate<T: Term>(index: usize, window: usize, initial: &[T]) -> Result<T> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("evaluate", index, window, prefix_len = initial.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if window > initial.len() {
        return Err(Error::WindowTooLarge {
            window: window as u64,
            len: initial.len(),
        });
    }
    if let Some(term) = initial.get(index) {
        return Ok(term.clone());
    }
    if initial.is_empty() {
        return Err(Error::EmptyInitial);
    }

    let mut buffer = WorkingBuffer::from_prefix(initial);
    for position in initial.len()..=index {
        if buffer.advance(window).is_none() {
            return Err(Error::Overflow { index: position });
        }
    }
    buffer.into_latest().ok_or(Error::EmptyInitial)
}
