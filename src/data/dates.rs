//! Localized date parsing for SGS date strings.

use chrono::NaiveDate;

use crate::domain::Locale;
use crate::error::AppError;

const DD_MM_YYYY: &str = "%d/%m/%Y";

/// Parse an SGS date string.
///
/// Accepted forms, tried in order:
/// - `DD/MM/YYYY` (same in every locale)
/// - `MMM/YYYY` with a locale month abbreviation, case-insensitive; maps to the
///   first day of that month
pub fn to_datetime(input: &str, locale: Locale) -> Result<NaiveDate, AppError> {
    let trimmed = input.trim();
    parse_day_month_year(trimmed)
        .or_else(|| parse_month_year(trimmed, locale))
        .ok_or_else(|| AppError::invalid_date(input))
}

/// Render a date the way the service expects it in queries.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DD_MM_YYYY).to_string()
}

/// Exactly `dd/dd/dddd`; chrono's `%d/%m/%Y` alone also takes `2/1/18` or `+2018`.
fn parse_day_month_year(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('/');
    let day = digits(parts.next()?, 2)?;
    let month = digits(parts.next()?, 2)?;
    let year = digits(parts.next()?, 4)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn parse_month_year(input: &str, locale: Locale) -> Option<NaiveDate> {
    let (month, year) = input.split_once('/')?;
    let month = month.to_lowercase();
    let month = locale
        .month_abbreviations()
        .iter()
        .position(|abbr| *abbr == month)?;
    let year = digits(year, 4)?;
    NaiveDate::from_ymd_opt(year as i32, month as u32 + 1, 1)
}

fn digits(part: &str, len: usize) -> Option<u32> {
    if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
