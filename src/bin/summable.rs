use std::io::{self, Write};

use clap::Parser;
use num_bigint::BigUint;
use summable_seq::demo::{self, DemoConfig};
use summable_seq::utils::DEFAULT_DIGITS;

/// Evaluate large terms of summable sequences and report how long it took.
///
/// Without `--initial`, runs the Fibonacci sequence and the (5, 7, 11)
/// sequence at `--index`.
#[derive(Parser)]
#[command(name = "summable", version)]
struct Cli {
    /// Index of the term to evaluate.
    #[arg(short, long, default_value_t = 100_000, allow_negative_numbers = true)]
    index: i64,

    /// Trailing decimal digits to print.
    #[arg(short, long, default_value_t = DEFAULT_DIGITS)]
    digits: usize,

    /// Comma-separated initial terms, e.g. `5,7,11`.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    initial: Option<Vec<BigUint>>,

    /// Number of preceding terms summed; defaults to the prefix length.
    #[arg(short, long, requires = "initial")]
    window: Option<usize>,
}

fn main() {
    let cli = Cli::parse();
    let config = DemoConfig {
        index: cli.index,
        digits: cli.digits,
        initial: cli.initial,
        window: cli.window,
    };

    let runs = match demo::run(&config) {
        Ok(runs) => runs,
        Err(err) => {
            eprintln!("summable: {err}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = demo::write_report(&mut out, &runs).and_then(|()| Ok(out.flush()?)) {
        eprintln!("summable: {err}");
        std::process::exit(1);
    }
}
