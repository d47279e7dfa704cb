//! Terminal formatting for fetched series.

use crate::domain::{Observation, TimeSeries};

/// Format the series as a two-column table, missing values shown as `NaN`.
pub fn format_series_table(series: &TimeSeries) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10}  {}\n", "date", series.name()));
    for obs in series.iter() {
        out.push_str(&format!("{}  {}\n", obs.date, fmt_value(obs.value)));
    }
    out
}

/// One-paragraph summary: size, missing count, date span, value range.
pub fn format_summary(series: &TimeSeries) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== SGS series {} ===\n", series.name()));
    out.push_str(&format!(
        "Points: n={} | missing={}\n",
        series.len(),
        series.missing_count()
    ));

    match (series.first(), series.last()) {
        (Some(first), Some(last)) => {
            out.push_str(&format!("Dates: [{}, {}]\n", first.date, last.date));
        }
        _ => out.push_str("Dates: -\n"),
    }

    match value_range(series.observations()) {
        Some((min, max)) => out.push_str(&format!("Values: [{min}, {max}]\n")),
        None => out.push_str("Values: -\n"),
    }
    out
}

pub(crate) fn value_range(observations: &[Observation]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in observations.iter().filter_map(|o| o.value) {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NaN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> TimeSeries {
        let mut ts = TimeSeries::new(12);
        ts.push(NaiveDate::from_ymd_opt(2018, 1, 2).unwrap(), Some(0.026444));
        ts.push(NaiveDate::from_ymd_opt(2018, 1, 3).unwrap(), None);
        ts.push(NaiveDate::from_ymd_opt(2018, 1, 4).unwrap(), Some(0.03));
        ts
    }

    #[test]
    fn table_prints_missing_as_nan() {
        let expected = concat!(
            "date        12\n",
            "2018-01-02  0.026444\n",
            "2018-01-03  NaN\n",
            "2018-01-04  0.03\n",
        );
        assert_eq!(format_series_table(&sample()), expected);
    }

    #[test]
    fn summary_reports_span_and_range() {
        let txt = format_summary(&sample());
        assert!(txt.contains("Points: n=3 | missing=1"));
        assert!(txt.contains("Dates: [2018-01-02, 2018-01-04]"));
        assert!(txt.contains("Values: [0.026444, 0.03]"));
    }

    #[test]
    fn summary_of_empty_series() {
        let txt = format_summary(&TimeSeries::new(433));
        assert!(txt.starts_with("=== SGS series 433 ===\n"));
        assert!(txt.contains("Dates: -"));
        assert!(txt.contains("Values: -"));
    }
}
