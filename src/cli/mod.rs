//! Command-line parsing for the SGS series fetcher.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the retrieval and formatting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sgs", version, about = "Fetch time series from the Banco Central do Brasil SGS service")]
pub struct Cli {
    /// Log request details to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one series over a date range and print it.
    Fetch(FetchArgs),
    /// Plot a previously exported series JSON.
    Plot(PlotArgs),
}

/// Options for fetching a series.
#[derive(Debug, Args, Clone)]
pub struct FetchArgs {
    /// SGS series code (e.g. 12 for CDI, 433 for IPCA).
    pub code: u32,

    /// Start date, DD/MM/YYYY.
    #[arg(short, long)]
    pub start: String,

    /// End date, DD/MM/YYYY.
    #[arg(short, long)]
    pub end: String,

    /// Drop any point the service returns outside [start, end].
    #[arg(long)]
    pub strict: bool,

    /// How to print the series.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also write the series to a file (`.csv` or `.json`).
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Render an ASCII plot after the output.
    #[arg(long)]
    pub plot: bool,

    /// Override the service root (default from SGS_BASE_URL).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default from SGS_TIMEOUT_SECS).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Options for plotting a saved series.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Series JSON file produced by `sgs fetch --export FILE.json`.
    #[arg(long, value_name = "JSON")]
    pub series: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
