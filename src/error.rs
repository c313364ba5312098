//! Error type shared by the engine, the helpers and the binaries.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while evaluating a sequence or rendering output.
///
/// Apart from [`Error::Overflow`] and [`Error::Io`], every variant describes an
/// argument the caller should not have passed; see [`Error::is_invalid_argument`].
#[derive(Debug, Error)]
pub enum Error {
    /// Target index below zero.
    #[error("invalid argument: index must be 0 or more, got {index}")]
    NegativeIndex { index: i64 },

    /// Target index does not fit the platform's `usize`.
    #[error("invalid argument: index {index} is out of range for this platform")]
    IndexOutOfRange { index: i64 },

    /// Window size below zero.
    #[error("invalid argument: window must be 0 or more, got {window}")]
    NegativeWindow { window: i64 },

    /// Window size larger than the initial sequence.
    #[error("invalid argument: window {window} exceeds initial sequence length {len}")]
    WindowTooLarge { window: u64, len: usize },

    /// No initial terms to start the recurrence from.
    #[error("invalid argument: initial sequence is empty")]
    EmptyInitial,

    /// `last_digits` asked to keep nothing.
    #[error("invalid argument: number of digits to keep must be positive")]
    ZeroDigits,

    /// A truncated decimal string did not parse back into the value type.
    #[error("invalid argument: truncated value `{digits}` is not a number")]
    TruncatedParse { digits: String },

    /// Pyramid height that is not a non-negative integer.
    #[error("invalid argument: --rows must be an integer, got `{input}`")]
    InvalidRows { input: String },

    /// Pyramid whose rendering does not fit in memory.
    #[error("invalid argument: a pyramid of {rows} rows is too large to render")]
    PyramidTooLarge { rows: usize },

    /// A fixed-width term type cannot hold the term at `index`.
    #[error("term at index {index} overflows the term type")]
    Overflow { index: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by the caller's arguments rather than by
    /// arithmetic limits or I/O.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Error::Overflow { .. } | Error::Io(_))
    }
}
