//! Record processing module for validated patient rows
//!
//! This module takes the complete demographic and event rows produced by the
//! PSV parser and turns them into per-patient records.
//!
//! # Architecture
//!
//! - [`normalizer`] - ICD version code to coding system resolution
//! - [`merger`] - Per-file indexing and the complete-case join
//! - [`builder`] - Per-patient output record assembly
//! - [`stats`] - Merge statistics and result structures
//!
//! # Processing Pipeline
//!
//! 1. **Indexing**: group each file's rows by patient id, preserving event order
//! 2. **Merging**: keep only patients present in both indexes
//! 3. **Building**: normalize each patient's events and package them with
//!    the demographics
//!
//! Every stage takes its input by value or reference and returns a new value;
//! nothing is shared or mutated between stages.
//!
//! # Example Usage
//!
//! ```rust
//! use patient_processor::app::models::{DemographicRow, EventRow};
//! use patient_processor::app::services::record_processor::{
//!     build_records, index_demographics, index_events, merge,
//! };
//!
//! let demographics = index_demographics(vec![DemographicRow {
//!     patient_id: "id-771".to_string(),
//!     birth_date: "1981-12-20".to_string(),
//!     gender: "M".to_string(),
//! }]);
//! let events = index_events(vec![EventRow {
//!     patient_id: "id-771".to_string(),
//!     date: "2014-03-11".to_string(),
//!     coding_version: "10".to_string(),
//!     code: "E43".to_string(),
//! }]);
//!
//! let result = merge(demographics, events);
//! assert_eq!(result.stats.merged, 1);
//!
//! for (patient_id, record) in build_records(&result.population) {
//!     println!("{}: {} events", patient_id, record.events.len());
//! }
//! ```

pub mod builder;
pub mod merger;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{build_record, build_records};
pub use merger::{index_demographics, index_events, merge};
pub use normalizer::{normalize_event, normalize_events};
pub use stats::{MergeResult, MergeStats};
