//! Converts a Hebrew date string to Gregorian and back.
//!
//! ```text
//! cargo run --example convert -- [-v...] ["ה באייר תשח"]
//! ```

use hebrew_date::{ConverterConfig, FormatFlags, HebrewDateConverter};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "ה באייר תשח";

/// Maps `-v` count to a level for this crate; `RUST_LOG` wins if set.
fn init_logging(verbosity: usize) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hebrew_date={level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (flags, inputs): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg.starts_with('-'));
    let verbosity = flags
        .iter()
        .map(|flag| flag.chars().filter(|c| *c == 'v').count())
        .sum();
    init_logging(verbosity);

    let converter = HebrewDateConverter::new(
        ConverterConfig::new().with_format_flags(FormatFlags::ADD_GERESHAYIM),
    )?;
    let input = inputs.join(" ");
    let input = if input.is_empty() { DEFAULT_INPUT } else { input.as_str() };

    let gregorian = converter.to_gregorian(input)?;
    println!("input: {input}");
    println!("output: {gregorian}");
    println!("back to hebrew: {}", converter.to_hebrew(gregorian)?);
    Ok(())
}
