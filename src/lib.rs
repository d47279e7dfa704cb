//! `sgs-series` library crate.
//!
//! Fetches a single time series from the Banco Central do Brasil SGS service
//! and returns it as a date-indexed sequence of `f64` values (`None` where the
//! service has no observation).
//!
//! ```no_run
//! use sgs_series::data::{SgsClient, time_serie};
//!
//! # fn main() -> Result<(), sgs_series::error::AppError> {
//! const CDI: u32 = 12;
//! let client = SgsClient::from_env()?;
//! let ts = time_serie(&client, CDI, "02/01/2018", "31/12/2018", false)?;
//! for obs in ts.iter().take(5) {
//!     println!("{} {:?}", obs.date, obs.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The binary (`sgs`) is a thin wrapper around this library.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
