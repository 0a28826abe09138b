//! Event normalization
//!
//! Resolves an event's ICD version code to its coding system. Versions outside
//! the known table become [`CodingSystem::Unknown`] rather than an error.

use tracing::debug;

use crate::app::models::{CodingSystem, EventRow, NormalizedEvent};

/// Normalize one raw event
pub fn normalize_event(event: &EventRow) -> NormalizedEvent {
    let system = CodingSystem::from_version(&event.coding_version);

    if system.is_unknown() {
        debug!(
            "Event {} for patient {} has {}, system omitted",
            event.code, event.patient_id, system
        );
    }

    NormalizedEvent {
        date: event.date.clone(),
        system,
        code: event.code.clone(),
    }
}

/// Normalize a patient's events, keeping their order
pub fn normalize_events(events: &[EventRow]) -> Vec<NormalizedEvent> {
    events.iter().map(normalize_event).collect()
}
