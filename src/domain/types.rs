//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built in-memory from a service response
//! - exported to JSON/CSV
//! - reloaded later for plotting

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language used to interpret month abbreviations in date strings.
///
/// Numeric `DD/MM/YYYY` dates read the same in every locale; the locale only
/// matters for the `MMM/YYYY` form (e.g. `fev/2018` vs `feb/2018`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Pt,
    En,
}

impl Locale {
    pub fn month_abbreviations(self) -> [&'static str; 12] {
        match self {
            Locale::Pt => [
                "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
            ],
            Locale::En => [
                "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
            ],
        }
    }
}

/// One record as returned by the SGS service.
///
/// The service encodes "no observation" as an empty `valor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Observation date, `DD/MM/YYYY`.
    pub data: String,
    /// Observation value as text; empty when missing.
    pub valor: String,
}

impl RawRecord {
    pub fn new(data: impl Into<String>, valor: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            valor: valor.into(),
        }
    }
}

/// A single dated value; `None` marks a missing observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// A date-indexed series labelled with its SGS code.
///
/// Observations keep the order they were pushed in; nothing here sorts or
/// deduplicates dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    name: u32,
    observations: Vec<Observation>,
}

impl TimeSeries {
    pub fn new(name: u32) -> Self {
        Self {
            name,
            observations: Vec::new(),
        }
    }

    pub fn with_capacity(name: u32, capacity: usize) -> Self {
        Self {
            name,
            observations: Vec::with_capacity(capacity),
        }
    }

    pub fn from_observations(name: u32, observations: Vec<Observation>) -> Self {
        Self { name, observations }
    }

    pub fn push(&mut self, date: NaiveDate, value: Option<f64>) {
        self.observations.push(Observation { date, value });
    }

    pub fn name(&self) -> u32 {
        self.name
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    pub fn index(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Value at `date`. The outer `Option` is "date present", the inner one
    /// is "value present".
    pub fn get(&self, date: NaiveDate) -> Option<Option<f64>> {
        self.observations
            .iter()
            .find(|o| o.date == date)
            .map(|o| o.value)
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    pub fn missing_count(&self) -> usize {
        self.observations.iter().filter(|o| o.value.is_none()).count()
    }

    /// True when dates never decrease from one observation to the next.
    pub fn is_monotonic(&self) -> bool {
        self.observations.windows(2).all(|w| w[0].date <= w[1].date)
    }

    /// Keep only observations whose date satisfies `keep`, in order.
    pub fn filter_dates(&self, mut keep: impl FnMut(NaiveDate) -> bool) -> TimeSeries {
        TimeSeries {
            name: self.name,
            observations: self
                .observations
                .iter()
                .filter(|o| keep(o.date))
                .copied()
                .collect(),
        }
    }
}

/// How a fetched series is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Portable on-disk representation of a fetched series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFile {
    pub tool: String,
    pub code: u32,
    pub start: String,
    pub end: String,
    pub strict: bool,
    pub observations: Vec<Observation>,
}

impl SeriesFile {
    pub fn into_series(self) -> TimeSeries {
        TimeSeries::from_observations(self.code, self.observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn index_and_values_stay_aligned() {
        let mut ts = TimeSeries::new(12);
        ts.push(d(2018, 1, 2), Some(0.026444));
        ts.push(d(2018, 1, 3), None);

        assert_eq!(ts.name(), 12);
        assert_eq!(ts.index(), vec![d(2018, 1, 2), d(2018, 1, 3)]);
        assert_eq!(ts.values(), vec![Some(0.026444), None]);
        assert_eq!(ts.index().len(), ts.values().len());
        assert_eq!(ts.missing_count(), 1);
    }

    #[test]
    fn get_distinguishes_absent_date_from_missing_value() {
        let mut ts = TimeSeries::new(1);
        ts.push(d(2020, 5, 4), None);

        assert_eq!(ts.get(d(2020, 5, 4)), Some(None));
        assert_eq!(ts.get(d(2020, 5, 5)), None);
    }

    #[test]
    fn monotonic_check_flags_out_of_order_dates() {
        let mut ts = TimeSeries::new(1);
        ts.push(d(2020, 1, 2), Some(1.0));
        ts.push(d(2020, 1, 2), Some(1.0));
        assert!(ts.is_monotonic());

        ts.push(d(2020, 1, 1), Some(1.0));
        assert!(!ts.is_monotonic());
    }

    #[test]
    fn observation_serializes_missing_value_as_null() {
        let obs = Observation { date: d(2018, 1, 3), value: None };
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"date":"2018-01-03","value":null}"#);
    }
}
