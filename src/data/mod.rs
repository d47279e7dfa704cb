//! Data acquisition from the SGS service.
//!
//! - HTTP retrieval of raw records (`sgs`)
//! - localized date parsing (`dates`)
//! - record -> series conversion and strict clipping (`series`)

pub mod dates;
pub mod series;
pub mod sgs;

pub use dates::{format_date, to_datetime};
pub use series::{apply_strict_range, time_serie};
pub use sgs::{SeriesSource, SgsClient};
