//! Export a fetched series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::TimeSeries;
use crate::error::AppError;

/// Write the series to a CSV file.
pub fn write_series_csv(path: &Path, series: &TimeSeries) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_csv(&mut file, series)
        .map_err(|e| AppError::io(format!("Failed to write export CSV '{}': {e}", path.display())))
}

/// Write `date,value` rows; ISO dates, empty cell for a missing value.
pub fn write_csv<W: Write>(out: &mut W, series: &TimeSeries) -> std::io::Result<()> {
    writeln!(out, "date,value")?;
    for obs in series.iter() {
        match obs.value {
            Some(v) => writeln!(out, "{},{v}", obs.date)?,
            None => writeln!(out, "{},", obs.date)?,
        }
    }
    Ok(())
}
