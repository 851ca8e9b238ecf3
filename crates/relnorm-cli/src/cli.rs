//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use relnorm::Stage;

/// relnorm: FD-driven schema normalization for tabular datasets
#[derive(Parser)]
#[command(name = "relnorm")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a data file: mine dependencies, find keys, normalize
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit the full report as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Largest candidate key size tried before giving up
        #[arg(long, default_value = "3")]
        max_key_size: usize,

        /// Maximum number of column pairs tested during FD mining
        #[arg(long, default_value = "50")]
        limit_pairs: usize,

        /// Disable pair-attribute FD mining entirely
        #[arg(long)]
        no_pairs: bool,

        /// Maximum rows to read from the file
        #[arg(long)]
        max_rows: Option<usize>,
    },

    /// Export a normalization stage as SQL statements
    Sql {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Stage to export
        #[arg(short, long, default_value = "3nf", value_parser = parse_stage)]
        stage: Stage,

        /// Write SQL to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rows rendered per table as INSERT statements
        #[arg(long, default_value = "5")]
        insert_rows: usize,
    },
}

fn parse_stage(s: &str) -> Result<Stage, String> {
    s.parse().map_err(|e| format!("{e}"))
}
