//! Tests for the statistics module


use chrono::NaiveDate;

use crate::app::models::{DemographicRow, EventRow, MergedPatient, MergedPopulation};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Create a merged patient with one ICD-9 event per date
pub fn create_test_patient(
    patient_id: &str,
    birth_date: &str,
    gender: &str,
    event_dates: &[&str],
) -> MergedPatient {
    MergedPatient {
        demographics: DemographicRow {
            patient_id: patient_id.to_string(),
            birth_date: birth_date.to_string(),
            gender: gender.to_string(),
        },
        events: event_dates
            .iter()
            .map(|d| EventRow {
                patient_id: patient_id.to_string(),
                date: d.to_string(),
                coding_version: "9".to_string(),
                code: "367.4".to_string(),
            })
            .collect(),
    }
}

/// Build a population from patients
pub fn create_test_population(patients: Vec<MergedPatient>) -> MergedPopulation {
    patients
        .into_iter()
        .map(|p| (p.patient_id().to_string(), p))
        .collect()
}
