//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "visage", version, about = "Statistics and Chernoff faces for five-column CSV files")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the parsed table
    Data {
        /// CSV file with five numeric columns
        file: PathBuf,
    },

    /// Print per-column descriptive statistics
    Stats {
        /// CSV file with five numeric columns
        file: PathBuf,

        /// Show the detail view for a single column
        #[arg(short, long)]
        column: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write face glyphs as SVG files
    Faces {
        /// CSV file with five numeric columns
        file: PathBuf,

        /// Output directory for the SVG files
        #[arg(short, long, default_value = "faces")]
        out: PathBuf,

        /// Style table (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Rendered SVG size in pixels
        #[arg(long, default_value_t = 200)]
        size: u32,

        /// Print descriptors as JSON instead of the shape table
        #[arg(long)]
        json: bool,
    },

    /// Print the default style table
    Style {
        /// Emit JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}
