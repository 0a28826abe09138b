//! Tests for event normalization

use super::*;
use crate::app::models::{CodingSystem, NormalizedEvent};
use crate::app::services::record_processor::normalizer::{normalize_event, normalize_events};

#[test]
fn test_normalize_icd10_event() {
    let event = create_test_event("id-1", "2014-03-11", "10", "E43");

    assert_eq!(
        normalize_event(&event),
        NormalizedEvent {
            date: "2014-03-11".to_string(),
            system: CodingSystem::Icd10,
            code: "E43".to_string(),
        }
    );
}

#[test]
fn test_normalize_icd9_event() {
    let normalized = normalize_event(&create_test_event("id-1", "1997-12-11", "9", "3"));

    assert_eq!(normalized.date, "1997-12-11");
    assert_eq!(normalized.code, "3");
    assert_eq!(
        normalized.system.uri(),
        Some("http://hl7.org/fhir/sid/icd-9-cm")
    );
}

#[test]
fn test_normalize_unknown_version() {
    let normalized = normalize_event(&create_test_event("id-1", "1997-12-11", "09", "3"));

    assert_eq!(normalized.system, CodingSystem::Unknown("09".to_string()));
    assert_eq!(normalized.system.uri(), None);
}

#[test]
fn test_normalize_events_preserves_order() {
    let events = vec![
        create_test_event("id-1", "2015-09-15", "9", "367.4"),
        create_test_event("id-1", "2015-04-17", "10", "V72.0"),
    ];

    let normalized = normalize_events(&events);
    let dates: Vec<&str> = normalized.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2015-09-15", "2015-04-17"]);
    assert_eq!(normalized[0].system, CodingSystem::Icd9);
    assert_eq!(normalized[1].system, CodingSystem::Icd10);
}
