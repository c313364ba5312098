use crate::error::{Error, Result};
use crate::traits::Term;
use crate::SummableSequence;

/// Builds a [`SummableSequence`] whose window differs from its prefix length.
///
/// ```
/// use summable_seq::SummableSequenceBuilder;
///
/// let seq = SummableSequenceBuilder::new(vec![1u64, 2, 4])
///     .with_window(2)
///     .build()
///     .unwrap();
/// assert_eq!(seq.at(6).unwrap(), 26);
/// ```
pub struct SummableSequenceBuilder<T> {
    initial: Vec<T>,
    window: Option<usize>,
}

impl<T: Term> SummableSequenceBuilder<T> {
    pub fn new(initial: impl Into<Vec<T>>) -> Self {
        Self {
            initial: initial.into(),
            window: None,
        }
    }
    /// `0` keeps the default window, the prefix length.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }
    pub fn build(self) -> Result<SummableSequence<T>> {
        match self.window {
            Some(w) if w > self.initial.len() => Err(Error::WindowTooLarge {
                window: w as u64,
                len: self.initial.len(),
            }),
            Some(0) | None => Ok(SummableSequence::new(self.initial)),
            Some(w) => Ok(SummableSequence::with_window_unchecked(self.initial, w)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SummableSequenceBuilder;
    use crate::error::Error;

    #[test]
    fn default_window_is_prefix_length() {
        let seq = SummableSequenceBuilder::new(vec![5u32, 7, 11]).build().unwrap();
        assert_eq!(seq.window(), 3);
        assert_eq!(seq, crate::summable![5u32, 7, 11]);
    }

    #[test]
    fn zero_window_falls_back_to_prefix_length() {
        let seq = SummableSequenceBuilder::new(vec![1u32, 2, 4])
            .with_window(0)
            .build()
            .unwrap();
        assert_eq!(seq.window(), 3);
        assert_eq!(seq.at(3).unwrap(), 7);
    }

    #[test]
    fn oversized_window_is_rejected() {
        let err = SummableSequenceBuilder::new(vec![1u32, 1])
            .with_window(3)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::WindowTooLarge { window: 3, len: 2 }));
    }

    #[test]
    fn explicit_window_drives_evaluation() {
        let seq = SummableSequenceBuilder::new(vec![3u8, 1, 4, 1])
            .with_window(1)
            .build()
            .unwrap();
        assert_eq!(seq.window(), 1);
        assert_eq!(seq.at(5).unwrap(), 1);
    }
}
