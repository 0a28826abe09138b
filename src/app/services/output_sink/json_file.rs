//! One JSON file per patient, named by patient id

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::RecordSink;
use crate::app::models::PatientRecord;
use crate::constants::{JSON_INDENT, RECORD_FILE_EXTENSION};
use crate::{Error, Result};

/// File name for a patient's record, rejecting ids that would escape the
/// output directory
pub fn record_file_name(patient_id: &str) -> Result<String> {
    let unusable = patient_id.is_empty()
        || patient_id == "."
        || patient_id == ".."
        || patient_id.contains(['/', '\\', '\0']);

    if unusable {
        return Err(Error::invalid_patient_id(patient_id));
    }

    Ok(format!("{}.{}", patient_id, RECORD_FILE_EXTENSION))
}

/// Writes `<output_dir>/<patient_id>.json` for every record
#[derive(Debug)]
pub struct JsonFileSink {
    output_dir: PathBuf,
    written: usize,
}

impl JsonFileSink {
    /// Create the sink, creating the output directory if needed
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;

        Ok(Self {
            output_dir,
            written: 0,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Path a patient's record is written to
    pub fn record_path(&self, patient_id: &str) -> Result<PathBuf> {
        Ok(self.output_dir.join(record_file_name(patient_id)?))
    }
}

impl RecordSink for JsonFileSink {
    fn write_record(&mut self, patient_id: &str, record: &PatientRecord) -> Result<()> {
        let path = self.record_path(patient_id)?;
        let file = File::create(&path)
            .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

        let mut writer = BufWriter::new(file);
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut writer,
            PrettyFormatter::with_indent(JSON_INDENT),
        );
        record.serialize(&mut serializer).map_err(|e| {
            Error::serialization(format!("Failed to serialize record for {}", patient_id), e)
        })?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        self.written += 1;
        debug!("Wrote record for patient {} to {}", patient_id, path.display());
        Ok(())
    }
}
