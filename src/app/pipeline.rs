//! Shared "fetch pipeline" logic used by the CLI front-end.
//!
//! config -> client -> time_serie -> (optional) export
//!
//! The CLI can then focus on presentation.

use std::path::Path;

use crate::cli::FetchArgs;
use crate::config::SgsConfig;
use crate::data::{SeriesSource, SgsClient, time_serie};
use crate::domain::TimeSeries;
use crate::error::AppError;
use crate::io::{series_file, write_series_csv, write_series_json};

/// Resolve the client configuration: environment first, then CLI overrides.
pub fn config_from_args(base: SgsConfig, args: &FetchArgs) -> Result<SgsConfig, AppError> {
    let mut config = base;
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url.clone())?;
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs)?;
    }
    Ok(config)
}

/// Fetch the series described by `args` over HTTP.
pub fn run_fetch(args: &FetchArgs) -> Result<TimeSeries, AppError> {
    let config = config_from_args(SgsConfig::from_env()?, args)?;
    let client = SgsClient::new(config)?;
    run_fetch_with_source(&client, args)
}

/// Fetch with an already-built source.
pub fn run_fetch_with_source<S>(source: &S, args: &FetchArgs) -> Result<TimeSeries, AppError>
where
    S: SeriesSource + ?Sized,
{
    let series = time_serie(source, args.code, &args.start, &args.end, args.strict)?;
    if let Some(path) = &args.export {
        export_series(path, &series, args)?;
    }
    Ok(series)
}

/// Write the series to `path`, picking the format from the extension.
pub fn export_series(path: &Path, series: &TimeSeries, args: &FetchArgs) -> Result<(), AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => write_series_csv(path, series),
        Some("json") => write_series_json(path, &series_file(series, &args.start, &args.end, args.strict)),
        _ => Err(AppError::invalid_arg(format!(
            "Unsupported export extension for '{}': use .csv or .json",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::domain::{OutputFormat, RawRecord};
    use crate::io::read_series_json;

    fn args(export: Option<PathBuf>) -> FetchArgs {
        FetchArgs {
            code: 12,
            start: "02/01/2018".to_string(),
            end: "03/01/2018".to_string(),
            strict: true,
            format: OutputFormat::Table,
            export,
            plot: false,
            base_url: None,
            timeout: None,
            width: 100,
            height: 20,
        }
    }

    fn source(_: u32, _: &str, _: &str) -> Result<Vec<RawRecord>, AppError> {
        Ok(vec![
            RawRecord::new("02/01/2018", "0.026444"),
            RawRecord::new("03/01/2018", ""),
            RawRecord::new("04/01/2018", "0.026444"),
        ])
    }

    #[test]
    fn cli_overrides_environment_config() {
        let mut a = args(None);
        a.base_url = Some("http://localhost:1234".to_string());
        a.timeout = Some(3);
        let config = config_from_args(SgsConfig::default(), &a).unwrap();
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.timeout, Duration::from_secs(3));

        a.timeout = Some(0);
        assert!(config_from_args(SgsConfig::default(), &a).is_err());
    }

    #[test]
    fn fetch_with_json_export_writes_request_metadata() {
        let path = std::env::temp_dir().join(format!("sgs-pipeline-{}.json", std::process::id()));
        let series = run_fetch_with_source(&source, &args(Some(path.clone()))).unwrap();
        let file = read_series_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(series.len(), 2);
        assert_eq!(file.code, 12);
        assert!(file.strict);
        assert_eq!(file.observations.len(), 2);
        assert_eq!(file.observations[1].value, None);
    }

    #[test]
    fn unknown_export_extension_is_rejected() {
        let err = run_fetch_with_source(&source, &args(Some(PathBuf::from("out.xlsx")))).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
