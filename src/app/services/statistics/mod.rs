//! Population statistics for merged patients
//!
//! Computes timeline length, age and gender aggregates over a merged
//! population and renders them as a report.
//!
//! - [`metrics`] - Per-patient metrics and the median helper
//! - [`engine`] - Population aggregation
//! - [`report`] - Text and JSON rendering, report file writing
//!
//! Ages are calendar-year differences between the birth date and the latest
//! event; month and day are ignored.

pub mod engine;
pub mod metrics;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::compute_statistics;
pub use metrics::{GenderBucket, PatientMetrics, age_years, median, parse_date, timeline_days};
pub use report::{render_json, render_text, write_report};
