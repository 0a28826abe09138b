//! Per-file indexing and complete-case merging
//!
//! Both sources are indexed by patient id, then joined on the intersection of
//! their keys. A patient missing from either side is dropped; this is a
//! complete-case join, not an error.

use std::collections::BTreeMap;
use tracing::{debug, info};

use super::stats::{MergeResult, MergeStats};
use crate::app::models::{DemographicRow, EventRow, MergedPatient, MergedPopulation};

/// Index demographic rows by patient id
///
/// A later row for the same patient replaces an earlier one.
pub fn index_demographics(rows: Vec<DemographicRow>) -> BTreeMap<String, DemographicRow> {
    let mut index = BTreeMap::new();

    for row in rows {
        if let Some(previous) = index.insert(row.patient_id.clone(), row) {
            debug!(
                "Duplicate demographics for patient {}, keeping the later row",
                previous.patient_id
            );
        }
    }

    index
}

/// Index event rows by patient id, preserving encounter order per patient
pub fn index_events(rows: Vec<EventRow>) -> BTreeMap<String, Vec<EventRow>> {
    let mut index: BTreeMap<String, Vec<EventRow>> = BTreeMap::new();

    for row in rows {
        index.entry(row.patient_id.clone()).or_default().push(row);
    }

    index
}

/// Join both indexes, keeping only patients present in each
pub fn merge(
    mut demographics: BTreeMap<String, DemographicRow>,
    events: BTreeMap<String, Vec<EventRow>>,
) -> MergeResult {
    let mut stats = MergeStats {
        demographic_patients: demographics.len(),
        event_patients: events.len(),
        ..Default::default()
    };
    let mut population = MergedPopulation::new();

    for (patient_id, patient_events) in events {
        match demographics.remove(&patient_id) {
            Some(patient_demographics) => {
                population.insert(
                    patient_id,
                    MergedPatient {
                        demographics: patient_demographics,
                        events: patient_events,
                    },
                );
            }
            None => {
                stats.events_only += 1;
                debug!("Patient {} has events but no demographics, dropped", patient_id);
            }
        }
    }

    for patient_id in demographics.keys() {
        debug!("Patient {} has demographics but no events, dropped", patient_id);
    }
    stats.demographics_only = demographics.len();
    stats.merged = population.len();

    info!("{}", stats.summary());

    MergeResult { population, stats }
}
