//! Sliding-window linear recurrences.
//!
//! This crate evaluates sequences where every term past a caller-supplied
//! prefix is the sum of the `n` terms immediately before it. Fibonacci is the
//! `n = 2`, prefix `[0, 1]` special case.
//!
//! ## Core idea
//! 1. Terms below the prefix length are returned verbatim.
//! 2. Later terms are produced by walking forward with a bounded working
//!    buffer that holds only the most recent `len(prefix)` terms.
//! 3. Nothing is cached between calls and nothing recurses, so evaluating a
//!    term at index 100 000 costs O(index * n) time and O(len(prefix)) space.
//!
//! ## Quick start
//! ```
//! use summable_seq::{compute, summable};
//!
//! // function form: window 2 over [0, 1] is Fibonacci
//! assert_eq!(compute(30, Some(2), &[0u64, 1]).unwrap(), 832_040);
//!
//! // object form: window defaults to the prefix length
//! let seq = summable![5u64, 7, 11];
//! assert_eq!(seq.at(20).unwrap(), 703_209);
//! assert_eq!(seq.terms().take(5).collect::<Vec<_>>(), vec![5, 7, 11, 23, 41]);
//! ```
//!
//! Terms can be any primitive integer (overflow is reported as
//! [`Error::Overflow`]) or a `num_bigint` integer. [`fibonacci`] uses
//! `BigUint` so arbitrarily large indices work.
//!
//! ## Also included
//! - [`pyramid`]: text pyramid rendering, used by the `pyramid` binary.
//! - [`demo`]: timed runs used by the `summable` binary.

pub mod builder;
pub mod demo;
pub mod engine;
pub mod error;
pub mod presets;
pub mod pyramid;
pub mod sequence;
pub mod traits;
pub mod utils;
pub mod window;

pub use crate::builder::SummableSequenceBuilder;
pub use crate::engine::compute;
pub use crate::error::{Error, Result};
pub use crate::presets::{fibonacci, fibonacci_sequence};
pub use crate::sequence::{SummableSequence, Terms};
pub use crate::traits::Term;
pub use crate::utils::last_digits;
pub use crate::window::window_sum;
