//! Build a `TimeSeries` from raw SGS records.
//!
//! Flow: source records -> parse dates/values -> series -> optional strict clip.

use tracing::{debug, warn};

use crate::data::dates::to_datetime;
use crate::data::sgs::SeriesSource;
use crate::domain::{Locale, RawRecord, TimeSeries};
use crate::error::AppError;

/// Fetch series `code` between `start` and `end` (`DD/MM/YYYY`).
///
/// Empty values become `None`. Any other value that is not a number is an
/// error, as is any date the service sends in an unexpected format.
///
/// The service may return points just outside the requested window (for
/// instance the last available value when the window itself is empty). With
/// `strict` set, those are dropped.
pub fn time_serie<S>(source: &S, code: u32, start: &str, end: &str, strict: bool) -> Result<TimeSeries, AppError>
where
    S: SeriesSource + ?Sized,
{
    let records = source.get_data(code, start, end)?;
    let series = from_records(code, &records)?;

    if !series.is_monotonic() {
        warn!(code, "series dates are not in ascending order");
    }

    if strict {
        let clipped = apply_strict_range(&series, start, end)?;
        debug!(code, before = series.len(), after = clipped.len(), "applied strict range");
        return Ok(clipped);
    }
    Ok(series)
}

/// Convert raw records into a series named `code`, keeping their order.
pub fn from_records(code: u32, records: &[RawRecord]) -> Result<TimeSeries, AppError> {
    let mut series = TimeSeries::with_capacity(code, records.len());
    for record in records {
        let date = to_datetime(&record.data, Locale::Pt)?;
        let value = parse_value(&record.valor, &record.data)?;
        series.push(date, value);
    }
    Ok(series)
}

/// Parse the SGS value string recorded on `date`.
///
/// An empty string is a missing observation (`None`). Anything else must be a
/// finite number; `NaN`/`inf` would be indistinguishable from missing once
/// exported to JSON, so they are rejected like any other non-number.
pub fn parse_value(raw: &str, date: &str) -> Result<Option<f64>, AppError> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(AppError::InvalidValue {
            input: raw.to_string(),
            date: date.to_string(),
        }),
    }
}

/// Restrict `series` to `start..=end` (`DD/MM/YYYY`), preserving order and name.
pub fn apply_strict_range(series: &TimeSeries, start: &str, end: &str) -> Result<TimeSeries, AppError> {
    let start = to_datetime(start, Locale::Pt)?;
    let end = to_datetime(end, Locale::Pt)?;
    Ok(series.filter_dates(|date| start <= date && date <= end))
}
