//! Tests for the record processor module
//!
//! This module provides unit tests for normalization, merging and record
//! building, plus fixtures shared between them.

pub mod normalizer_tests;

// Test helper functions and fixtures
use crate::app::models::{DemographicRow, EventRow, MergedPatient};

/// Create a demographic row for testing purposes
pub fn create_test_demographic(patient_id: &str, birth_date: &str, gender: &str) -> DemographicRow {
    DemographicRow {
        patient_id: patient_id.to_string(),
        birth_date: birth_date.to_string(),
        gender: gender.to_string(),
    }
}

/// Create an event row for testing purposes
pub fn create_test_event(patient_id: &str, date: &str, version: &str, code: &str) -> EventRow {
    EventRow {
        patient_id: patient_id.to_string(),
        date: date.to_string(),
        coding_version: version.to_string(),
        code: code.to_string(),
    }
}

/// Create a merged patient with the given event dates, all ICD-9
pub fn create_test_patient(
    patient_id: &str,
    birth_date: &str,
    gender: &str,
    event_dates: &[&str],
) -> MergedPatient {
    MergedPatient {
        demographics: create_test_demographic(patient_id, birth_date, gender),
        events: event_dates
            .iter()
            .map(|date| create_test_event(patient_id, date, "9", "V72.0"))
            .collect(),
    }
}
