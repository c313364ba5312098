//! Example: custom prefixes and windows.
//!
//! Run with:
//! `cargo run --example custom_window`

use summable_seq::{compute, summable, SummableSequenceBuilder};

fn main() -> Result<(), summable_seq::Error> {
    // Each term is the sum of the three before it.
    let seq = summable![5u64, 7, 11];
    for index in [0, 2, 10, 16, 20, 30] {
        println!("seq(5, 7, 11)[{index}] = {}", seq.at(index)?);
    }

    // A prefix longer than the window: only the newest two terms are summed.
    let narrow = SummableSequenceBuilder::new(vec![1u64, 2, 4])
        .with_window(2)
        .build()?;
    let streamed: Vec<u64> = narrow.terms().take(8).collect();
    println!("window 2 over [1, 2, 4]: {streamed:?}");

    // Fixed-width terms report overflow instead of wrapping.
    match compute(94, Some(2), &[0u64, 1]) {
        Ok(value) => println!("F(94) = {value}"),
        Err(err) => println!("F(94) as u64: {err}"),
    }

    if let Err(err) = compute(3, Some(5), &[1u64, 2, 4]) {
        println!("window 5 over three terms: {err}");
    }
    Ok(())
}
