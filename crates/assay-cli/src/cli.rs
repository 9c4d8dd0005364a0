//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Assay: statistical data-quality profiling for CSV/TSV files
#[derive(Parser)]
#[command(name = "assay")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and print its quality report
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (default: auto-detect). Accepts "tab" or "\t".
        #[arg(short, long, value_parser = parse_delimiter)]
        delimiter: Option<char>,

        /// JSON file overriding profiler thresholds and weights
        #[arg(long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target column to leave out of preprocessing advice
        #[arg(long, value_name = "COLUMN")]
        target: Option<String>,
    },

    /// Export a one-row-per-column quality summary
    Columns {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (default: auto-detect)
        #[arg(short, long, value_parser = parse_delimiter)]
        delimiter: Option<char>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the detected delimiter and format of a file
    Detect {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Tsv => write!(f, "tsv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Parse a delimiter argument into a single character.
pub fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "tab" | "\\t" => return Ok('\t'),
        "comma" => return Ok(','),
        "semicolon" => return Ok(';'),
        "pipe" => return Ok('|'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '"' && c != '\n' && c != '\r' => Ok(c),
        _ => Err(format!(
            "Invalid delimiter: {:?}. Use a single character, or tab, comma, semicolon, pipe.",
            s
        )),
    }
}
