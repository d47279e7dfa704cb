//! Input/output helpers.
//!
//! - CSV export (`export`)
//! - series JSON read/write (`series_file`)

pub mod export;
pub mod series_file;

pub use export::*;
pub use series_file::*;
