//! Ready-made sequences.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::engine::compute;
use crate::error::Result;
use crate::SummableSequence;

/// The `n`-th Fibonacci number: window 2 over the prefix `[0, 1]`.
///
/// ```
/// use num_bigint::BigUint;
/// use summable_seq::fibonacci;
///
/// assert_eq!(fibonacci(10).unwrap(), BigUint::from(55u32));
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(index: i64) -> Result<BigUint> {
    compute(index, Some(2), &[BigUint::zero(), BigUint::one()])
}

/// `SummableSequence(0, 1)` over big integers.
pub fn fibonacci_sequence() -> SummableSequence<BigUint> {
    SummableSequence::new(vec![BigUint::zero(), BigUint::one()])
}
