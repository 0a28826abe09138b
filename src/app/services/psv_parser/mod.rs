//! PSV parser for patient demographic and event files
//!
//! This module turns pipe-delimited text files into rows of fields and
//! separates complete rows from incomplete ones. Incomplete rows are not
//! errors: they are dropped and counted.
//!
//! ## Architecture
//!
//! - [`reader`] - Line splitting and file reading
//! - [`filters`] - Completeness predicates and typed row extraction
//! - [`stats`] - Filtering statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use patient_processor::app::services::psv_parser::{filter_demographics, read_psv};
//!
//! # fn example() -> patient_processor::Result<()> {
//! let rows = read_psv(std::path::Path::new("demo.psv"))?;
//! let result = filter_demographics(&rows);
//!
//! println!("Kept {} of {} demographic rows",
//!          result.stats.rows_kept,
//!          result.stats.rows_read);
//! # Ok(())
//! # }
//! ```

pub mod filters;
pub mod reader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use filters::{
    demographic_filter, event_filter, filter_demographics, filter_events, to_demographic,
    to_event,
};
pub use reader::{parse_lines, read_psv, split_line};
pub use stats::{FilterResult, FilterStats};
