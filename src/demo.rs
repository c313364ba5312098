//! Timed demonstration runs behind the `summable` binary.
//!
//! Each run evaluates one term, truncates it with
//! [`last_digits`](crate::utils::last_digits) and records how long the
//! evaluation took. [`write_report`] prints two lines per run.

use std::io::Write;
use std::time::{Duration, Instant};

use num_bigint::BigUint;

use crate::builder::SummableSequenceBuilder;
use crate::error::Result;
use crate::presets::fibonacci;
use crate::utils::{last_digits, DEFAULT_DIGITS};
use crate::SummableSequence;

/// What to demonstrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Index evaluated by every run.
    pub index: i64,
    /// Trailing digits kept in the report.
    pub digits: usize,
    /// Custom prefix; `None` runs the built-in Fibonacci and `(5, 7, 11)` demos.
    pub initial: Option<Vec<BigUint>>,
    /// Window for the custom prefix; defaults to its length.
    pub window: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            index: 100_000,
            digits: DEFAULT_DIGITS,
            initial: None,
            window: None,
        }
    }
}

/// Outcome of one timed evaluation.
#[derive(Debug, Clone)]
pub struct Demonstration {
    pub label: String,
    /// Truncated to the configured number of trailing digits.
    pub value: BigUint,
    pub elapsed: Duration,
}

/// Execute the runs described by `config`.
pub fn run(config: &DemoConfig) -> Result<Vec<Demonstration>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("demo_run", index = config.index, digits = config.digits);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let index = config.index;
    let digits = config.digits;
    match &config.initial {
        None => {
            let fib = timed(|| fibonacci(index))?;
            let seq = SummableSequence::new(vec![
                BigUint::from(5u32),
                BigUint::from(7u32),
                BigUint::from(11u32),
            ]);
            let custom = timed(|| seq.at(index))?;
            Ok(vec![
                finish(format!("f({index})[-{digits}:]"), fib, digits)?,
                finish(format!("new_seq({index})[-{digits}:]"), custom, digits)?,
            ])
        }
        Some(initial) => {
            let mut builder = SummableSequenceBuilder::new(initial.clone());
            if let Some(window) = config.window {
                builder = builder.with_window(window);
            }
            let seq = builder.build()?;
            let result = timed(|| seq.at(index))?;
            let label = format!("{}({index})[-{digits}:]", describe(&seq));
            Ok(vec![finish(label, result, digits)?])
        }
    }
}

/// Two lines per run: the labelled value, then the elapsed seconds.
pub fn write_report<W: Write>(out: &mut W, runs: &[Demonstration]) -> Result<()> {
    for run in runs {
        writeln!(out, "{} {}", run.label, run.value)?;
        writeln!(out, "Time elapsed (s) {:.6}", run.elapsed.as_secs_f64())?;
    }
    Ok(())
}

fn timed<F>(f: F) -> Result<(BigUint, Duration)>
where
    F: FnOnce() -> Result<BigUint>,
{
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}

fn finish(
    label: String,
    (value, elapsed): (BigUint, Duration),
    digits: usize,
) -> Result<Demonstration> {
    Ok(Demonstration {
        label,
        value: last_digits(&value, digits)?,
        elapsed,
    })
}

fn describe(seq: &SummableSequence<BigUint>) -> String {
    let terms: Vec<String> = seq.initial().iter().map(ToString::to_string).collect();
    if seq.window() == seq.len_initial() {
        format!("seq[{}]", terms.join(","))
    } else {
        format!("seq[{}; window={}]", terms.join(","), seq.window())
    }
}
