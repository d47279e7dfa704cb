//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs logging
//! - fetches the requested series
//! - prints it (table/CSV/JSON) and an optional plot
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, FetchArgs, PlotArgs};
use crate::domain::{OutputFormat, TimeSeries};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `sgs` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Fetch(args) => handle_fetch(args),
        Command::Plot(args) => handle_plot(args),
    }
}

/// Log to stderr so stdout stays clean for CSV/JSON output.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_fetch(args: FetchArgs) -> Result<(), AppError> {
    let series = pipeline::run_fetch(&args)?;

    print!("{}", render(&series, args.format)?);

    if args.plot {
        println!();
        print!("{}", crate::plot::render_series_plot(&series, args.width, args.height));
    }
    if args.format == OutputFormat::Table {
        println!();
        print!("{}", crate::report::format_summary(&series));
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_series_json(&args.series)?;
    let series = file.into_series();
    print!("{}", crate::plot::render_series_plot(&series, args.width, args.height));
    Ok(())
}

fn render(series: &TimeSeries, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(crate::report::format_series_table(series)),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            crate::io::write_csv(&mut buf, series).map_err(|e| AppError::io(format!("Failed to render CSV: {e}")))?;
            String::from_utf8(buf).map_err(|e| AppError::io(format!("Failed to render CSV: {e}")))
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(series.observations())
                .map_err(|e| AppError::io(format!("Failed to render JSON: {e}")))?;
            out.push('\n');
            Ok(out)
        }
    }
}
