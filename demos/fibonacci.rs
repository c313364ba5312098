//! Example: Fibonacci numbers through the sliding-window engine.
//!
//! Run with:
//! `cargo run --example fibonacci`

use summable_seq::{fibonacci, fibonacci_sequence, last_digits, utils::DEFAULT_DIGITS};

fn main() -> Result<(), summable_seq::Error> {
    for index in [0, 1, 10, 40, 100] {
        println!("F({index}) = {}", fibonacci(index)?);
    }

    let big = fibonacci(100_000)?;
    println!(
        "F(100000) has {} digits, last {DEFAULT_DIGITS}: {}",
        big.to_string().len(),
        last_digits(&big, DEFAULT_DIGITS)?
    );

    // The object form streams the same values with one working buffer.
    let first: Vec<String> = fibonacci_sequence()
        .terms()
        .take(15)
        .map(|t| t.to_string())
        .collect();
    println!("first 15: {}", first.join(", "));
    Ok(())
}
