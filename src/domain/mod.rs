//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw service record (`RawRecord`)
//! - dated observations and the series built from them (`Observation`, `TimeSeries`)
//! - locale and output enums (`Locale`, `OutputFormat`)
//! - the on-disk series file (`SeriesFile`)

pub mod types;

pub use types::*;
