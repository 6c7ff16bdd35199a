//! Command line argument parsing for the Syllabize CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Syllabize - rule-based syllable segmentation for name corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "syllabize")]
#[command(about = "Splits human and place names into syllables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SyllabizeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "sql")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SyllabizeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Segment a batch of names, one per line
    Segment(SegmentArgs),

    /// Segment a single name given on the command line
    Name(NameArgs),

    /// Show statistics about a word list
    Stats(StatsArgs),
}

/// Arguments for batch segmentation
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Path to the newline-delimited word list
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub dictionary: PathBuf,

    /// Input file with one name per line (stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Table name used in generated UPDATE statements
    #[arg(long, default_value = "names")]
    pub table: String,
}

/// Arguments for single-name segmentation
#[derive(Parser, Debug, Clone)]
pub struct NameArgs {
    /// Path to the newline-delimited word list
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub dictionary: PathBuf,

    /// The name to segment
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Table name used in generated UPDATE statements
    #[arg(long, default_value = "names")]
    pub table: String,
}

/// Arguments for word list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the newline-delimited word list
    #[arg(value_name = "WORDS_FILE")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SQL UPDATE statements
    Sql,
    /// The segmented text alone
    Plain,
    /// JSON records, one per line
    Json,
}
