//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "retail-dq",
    version,
    about = "Retail data-quality pipeline - validate and clean raw order data",
    long_about = "Clean raw retail CSV data (customers, products, orders, order items).\n\n\
                  Applies per-entity validation rules in dependency order, enforces\n\
                  referential integrity against the cleaned parent tables, and writes\n\
                  a full audit trail of every removed or repaired row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the raw CSV files, clean all four datasets and write outputs.
    Clean(CleanArgs),

    /// List the datasets, their raw file names and required columns.
    Datasets,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Directory containing raw_customers.csv, raw_products.csv,
    /// raw_orders.csv and raw_order_items.csv.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for cleaned files (default: <DATA_DIR>/cleaned).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Reference time for the future-date check (e.g. "2024-06-15 12:00:00").
    /// Defaults to the current local time.
    #[arg(long = "as-of", value_name = "DATETIME")]
    pub as_of: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
