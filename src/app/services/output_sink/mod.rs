//! Destinations for per-patient records
//!
//! The pipeline hands each finished [`PatientRecord`] to a [`RecordSink`],
//! one call per patient. Swapping the sink changes where records go without
//! touching merging or statistics.
//!
//! - [`json_file`] - One pretty-printed JSON file per patient
//! - [`memory`] - In-memory collection, for dry runs and tests

pub mod json_file;
pub mod memory;

#[cfg(test)]
mod tests;

pub use json_file::{JsonFileSink, record_file_name};
pub use memory::MemorySink;

use crate::Result;
use crate::app::models::PatientRecord;

/// Destination for per-patient records
pub trait RecordSink {
    /// Write one patient's record
    fn write_record(&mut self, patient_id: &str, record: &PatientRecord) -> Result<()>;

    /// Flush anything buffered once every record has been written
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
