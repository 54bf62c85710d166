//! visage - descriptive statistics and Chernoff faces for CSV files
//!
//! Reads a CSV file with exactly five numeric columns and offers three
//! views of it: the raw data, the per-column statistics table, and the
//! face glyphs (whole face plus the shape-by-feature comparison grid).

mod cli;
mod commands;
mod error;
mod tables;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging (stderr, so stdout stays pipeable)
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = commands::run(&cli.command)?;
    print!("{}", output);
    Ok(())
}
