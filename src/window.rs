//! Sliding-window primitives used by the engine.
//!
//! A [`WorkingBuffer`] always holds exactly as many terms as the initial
//! sequence it was seeded from. Each [`advance`](WorkingBuffer::advance)
//! appends the sum of the newest `window` terms and drops the oldest one, so
//! the memory held during an evaluation never grows with the target index.

use std::collections::VecDeque;

use crate::traits::Term;

/// Sum of the last `window` elements of `buffer`.
///
/// Returns `None` only when a fixed-width term type overflows. If `buffer`
/// holds fewer than `window` elements the whole buffer is summed; the engine
/// never calls it that way.
pub fn window_sum<'a, T, I>(window: usize, buffer: I) -> Option<T>
where
    T: Term + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: DoubleEndedIterator,
{
    buffer
        .into_iter()
        .rev()
        .take(window)
        .try_fold(T::zero(), |acc, term| acc.checked_add(term))
}

/// Bounded FIFO of the most recent terms.
#[derive(Debug, Clone)]
pub struct WorkingBuffer<T> {
    terms: VecDeque<T>,
}

impl<T: Term> WorkingBuffer<T> {
    /// Seed the buffer with a copy of the initial sequence.
    pub fn from_prefix(initial: &[T]) -> Self {
        let mut terms = VecDeque::with_capacity(initial.len());
        terms.extend(initial.iter().cloned());
        Self { terms }
    }

    /// Number of terms held; constant for the buffer's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute the next term from the newest `window` terms, push it and drop
    /// the oldest. Returns a reference to the new term, or `None` if the sum
    /// overflows (the buffer is then left untouched) or the buffer is empty.
    pub fn advance(&mut self, window: usize) -> Option<&T> {
        let next = window_sum(window, &self.terms)?;
        self.terms.push_back(next);
        self.terms.pop_front();
        self.terms.back()
    }

    /// Most recently computed (or, before any advance, last initial) term.
    #[inline]
    pub fn latest(&self) -> Option<&T> {
        self.terms.back()
    }

    pub fn into_latest(mut self) -> Option<T> {
        self.terms.pop_back()
    }
}
