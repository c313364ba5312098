use std::io::{self, Write};

use clap::Parser;
use summable_seq::pyramid::{parse_rows, write_pyramid};

/// Print a pyramid to the terminal.
///
/// A pyramid of height 3 looks like:
///
/// --=--
/// -===-
/// =====
#[derive(Parser)]
#[command(name = "pyramid", version, verbatim_doc_comment)]
struct Cli {
    /// Number of rows.
    #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
    rows: String,
}

fn main() {
    let cli = Cli::parse();
    let result = parse_rows(&cli.rows).and_then(|rows| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_pyramid(rows, &mut out)?;
        Ok(out.flush()?)
    });
    if let Err(err) = result {
        eprintln!("pyramid: {err}");
        std::process::exit(1);
    }
}
