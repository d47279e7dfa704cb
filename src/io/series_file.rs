//! Read/write series JSON files.
//!
//! A series file is the portable representation of one fetch: the request
//! (code, range, strict flag) plus the observations it produced. The schema is
//! defined by `domain::SeriesFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{SeriesFile, TimeSeries};
use crate::error::AppError;

pub fn series_file(series: &TimeSeries, start: &str, end: &str, strict: bool) -> SeriesFile {
    SeriesFile {
        tool: "sgs".to_string(),
        code: series.name(),
        start: start.to_string(),
        end: end.to_string(),
        strict,
        observations: series.observations().to_vec(),
    }
}

/// Write a series JSON file.
pub fn write_series_json(path: &Path, file: &SeriesFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create series JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::io(format!("Failed to write series JSON: {e}")))?;
    Ok(())
}

/// Read a series JSON file.
pub fn read_series_json(path: &Path) -> Result<SeriesFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open series JSON '{}': {e}", path.display())))?;
    let series: SeriesFile =
        serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid series JSON: {e}")))?;
    Ok(series)
}
