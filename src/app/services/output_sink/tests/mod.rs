//! Tests for record sinks

mod json_file_tests;
mod memory_tests;

use crate::app::models::{CodingSystem, NormalizedEvent, PatientRecord};

/// Record with one ICD-10 event and one event of unknown version
pub fn create_test_record() -> PatientRecord {
    PatientRecord {
        birth_date: "1981-12-20".to_string(),
        gender: "M".to_string(),
        events: vec![
            NormalizedEvent {
                date: "2014-03-11".to_string(),
                system: CodingSystem::Icd10,
                code: "E43".to_string(),
            },
            NormalizedEvent {
                date: "2015-09-15".to_string(),
                system: CodingSystem::Unknown("8".to_string()),
                code: "367.4".to_string(),
            },
        ],
    }
}
