//! In-memory record collection

use super::RecordSink;
use crate::Result;
use crate::app::models::PatientRecord;

/// Keeps every written record, in write order
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<(String, PatientRecord)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[(String, PatientRecord)] {
        &self.records
    }

    pub fn get(&self, patient_id: &str) -> Option<&PatientRecord> {
        self.records
            .iter()
            .find(|(id, _)| id == patient_id)
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<(String, PatientRecord)> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn write_record(&mut self, patient_id: &str, record: &PatientRecord) -> Result<()> {
        self.records.push((patient_id.to_string(), record.clone()));
        Ok(())
    }
}
