//! Per-patient record assembly

use super::normalizer::normalize_events;
use crate::app::models::{MergedPatient, MergedPopulation, PatientRecord};

/// Build the output record for one merged patient
///
/// Events keep their source order; no sorting is applied.
pub fn build_record(patient: &MergedPatient) -> PatientRecord {
    PatientRecord {
        birth_date: patient.demographics.birth_date.clone(),
        gender: patient.demographics.gender.clone(),
        events: normalize_events(&patient.events),
    }
}

/// Build records for the whole population, in patient id order
pub fn build_records(
    population: &MergedPopulation,
) -> impl Iterator<Item = (&str, PatientRecord)> + '_ {
    population
        .iter()
        .map(|(patient_id, patient)| (patient_id.as_str(), build_record(patient)))
}
