//! Reusable sequence objects.
//!
//! [`SummableSequence`] captures an initial sequence once and answers
//! point queries ([`at`](SummableSequence::at)) or streams the sequence
//! ([`terms`](SummableSequence::terms)). It owns a private copy of its
//! prefix and exposes no mutators, so a single instance can be shared freely
//! between threads.

use std::iter::FusedIterator;

use crate::engine::{evaluate, resolve_index};
use crate::error::Result;
use crate::traits::Term;
use crate::window::WorkingBuffer;

/// A sequence where every term past the prefix is the sum of the `window`
/// terms before it.
///
/// ```
/// use summable_seq::summable;
///
/// let seq = summable![5u64, 7, 11];
/// assert_eq!(seq.window(), 3);
/// assert_eq!(seq.at(10).unwrap(), 1587);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummableSequence<T> {
    initial: Box<[T]>,
    window: usize,
}

impl<T: Term> SummableSequence<T> {
    /// Copy `initial` and use its full length as the window.
    pub fn new(initial: impl Into<Vec<T>>) -> Self {
        let initial = initial.into().into_boxed_slice();
        let window = initial.len();
        Self { initial, window }
    }

    /// Caller must have checked `window <= initial.len()`.
    pub(crate) fn with_window_unchecked(initial: Vec<T>, window: usize) -> Self {
        debug_assert!(window <= initial.len());
        Self {
            initial: initial.into_boxed_slice(),
            window,
        }
    }

    /// Term at `index`.
    ///
    /// # Errors
    /// Same as [`compute`](crate::compute): a negative index, an empty prefix,
    /// or an overflowing fixed-width term type.
    pub fn at(&self, index: i64) -> Result<T> {
        evaluate(resolve_index(index)?, self.window, &self.initial)
    }

    /// Stream the sequence from index 0.
    ///
    /// Uses a single working buffer for the whole iteration. The iterator ends
    /// early only if a fixed-width term overflows or the prefix is empty.
    pub fn terms(&self) -> Terms<'_, T> {
        Terms {
            initial: &self.initial,
            window: self.window,
            position: 0,
            buffer: None,
            exhausted: false,
        }
    }

    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len_initial(&self) -> usize {
        self.initial.len()
    }
}

impl<T: Term> From<Vec<T>> for SummableSequence<T> {
    fn from(initial: Vec<T>) -> Self {
        Self::new(initial)
    }
}

impl<T: Term> From<&[T]> for SummableSequence<T> {
    fn from(initial: &[T]) -> Self {
        Self::new(initial.to_vec())
    }
}

impl<T: Term> FromIterator<T> for SummableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Build a [`SummableSequence`] from its initial terms.
///
/// ```
/// use summable_seq::summable;
///
/// let fib = summable![0u32, 1];
/// assert_eq!(fib.at(10).unwrap(), 55);
/// ```
#[macro_export]
macro_rules! summable {
    ($($term:expr),* $(,)?) => {
        $crate::SummableSequence::new(::std::vec![$($term),*])
    };
}

/// Iterator returned by [`SummableSequence::terms`].
#[derive(Debug, Clone)]
pub struct Terms<'a, T> {
    initial: &'a [T],
    window: usize,
    position: usize,
    // seeded lazily once the prefix has been yielded
    buffer: Option<WorkingBuffer<T>>,
    exhausted: bool,
}

impl<T: Term> Iterator for Terms<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        if let Some(term) = self.initial.get(self.position) {
            self.position += 1;
            return Some(term.clone());
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("terms", position = self.position, window = self.window);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let initial = self.initial;
        let buffer = self
            .buffer
            .get_or_insert_with(|| WorkingBuffer::from_prefix(initial));
        match buffer.advance(self.window) {
            Some(term) => {
                self.position += 1;
                Some(term.clone())
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl<T: Term> FusedIterator for Terms<'_, T> {}
