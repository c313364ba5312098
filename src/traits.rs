//! Numeric bound for sequence terms.
//!
//! The engine only ever needs three things from a term: a way to copy it out
//! of the working buffer, an additive identity to start a window sum from, and
//! an addition that reports overflow instead of wrapping. [`Term`] bundles
//! exactly those and is implemented for every type that provides them:
//! - all primitive integers (`u8` .. `u128`, `i8` .. `i128`, `usize`, `isize`),
//! - `num_bigint::BigUint` and `num_bigint::BigInt`, which never overflow.
//!
//! Fixed-width terms are useful when the caller knows the indices stay small;
//! big integers are what the Fibonacci helpers use.

use num_traits::{CheckedAdd, Zero};

/// A value that can appear in a summable sequence.
pub trait Term: Clone + Zero + CheckedAdd {}

impl<T> Term for T where T: Clone + Zero + CheckedAdd {}
