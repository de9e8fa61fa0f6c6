//! CLI argument definitions for the vidclean pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vidclean",
    version,
    about = "Clean scraped video-metadata datasets",
    long_about = "Batch-clean a scraped video-metadata CSV.\n\n\
                  Coerces metric columns, resolves missing markers, splits the\n\
                  publish timestamp, clips out-of-range values to the column\n\
                  median, flags duplicate records, and strips scrape artifacts\n\
                  from text fields."
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
    /// Clean a dataset file and write the cleaned copy.
    Clean(CleanArgs),

    /// List the declared dataset columns, their roles, and valid ranges.
    Schema,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the scraped dataset CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: `<input stem>_cleaned.csv` next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the diagnostics report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Run every stage and print the summary without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
