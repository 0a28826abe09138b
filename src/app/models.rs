//! Data models for patient processing
//!
//! This module contains the core data structures for representing parsed PSV
//! rows, validated demographic and event rows, normalized diagnosis events,
//! merged patients and the population statistics report.

use crate::constants::coding_systems::{ICD9_URI, ICD9_VERSION, ICD10_URI, ICD10_VERSION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Raw Rows
// =============================================================================

/// One parsed line of a PSV file
///
/// The first field is always present and holds the patient identifier.
/// Everything after it is exposed through [`PsvRow::values`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsvRow {
    fields: Vec<String>,
}

impl PsvRow {
    /// Build a row from its fields, failing on an empty field list
    pub fn from_fields(fields: Vec<String>) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::EmptyRow);
        }
        Ok(Self { fields })
    }

    /// Patient identifier (first field)
    pub fn patient_id(&self) -> &str {
        &self.fields[0]
    }

    /// Fields following the patient identifier
    pub fn values(&self) -> &[String] {
        &self.fields[1..]
    }

    /// All fields, identifier included
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Demographics for one patient, as read from a valid demographics row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicRow {
    pub patient_id: String,
    /// Birth date as written in the source (`YYYY-MM-DD`)
    pub birth_date: String,
    /// Single-character gender code as written in the source
    pub gender: String,
}

/// One diagnosis event, as read from a valid events row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    pub patient_id: String,
    /// Event date as written in the source (`YYYY-MM-DD`)
    pub date: String,
    /// ICD version code (`9` or `10` in well-formed input)
    pub coding_version: String,
    pub code: String,
}

// =============================================================================
// Normalized Events
// =============================================================================

/// Diagnosis coding system identified by an event's ICD version code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodingSystem {
    Icd9,
    Icd10,
    /// Version code outside the known table, kept verbatim
    Unknown(String),
}

impl CodingSystem {
    /// Map an ICD version code to its coding system
    pub fn from_version(version: &str) -> Self {
        match version {
            ICD9_VERSION => CodingSystem::Icd9,
            ICD10_VERSION => CodingSystem::Icd10,
            other => CodingSystem::Unknown(other.to_string()),
        }
    }

    /// System URI, absent for unknown versions
    pub fn uri(&self) -> Option<&'static str> {
        match self {
            CodingSystem::Icd9 => Some(ICD9_URI),
            CodingSystem::Icd10 => Some(ICD10_URI),
            CodingSystem::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CodingSystem::Unknown(_))
    }
}

impl fmt::Display for CodingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodingSystem::Icd9 => write!(f, "ICD-9"),
            CodingSystem::Icd10 => write!(f, "ICD-10"),
            CodingSystem::Unknown(version) => write!(f, "unknown ICD version '{}'", version),
        }
    }
}

impl Serialize for CodingSystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.uri() {
            Some(uri) => serializer.serialize_str(uri),
            None => serializer.serialize_none(),
        }
    }
}

/// Diagnosis event with its coding system resolved
///
/// Serializes as `{"date", "system", "code"}`; the `system` key is left out
/// when the coding system is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    pub date: String,
    #[serde(skip_serializing_if = "CodingSystem::is_unknown")]
    pub system: CodingSystem,
    pub code: String,
}

// =============================================================================
// Patients
// =============================================================================

/// Structured per-patient output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientRecord {
    pub birth_date: String,
    pub gender: String,
    /// Events in source file order
    pub events: Vec<NormalizedEvent>,
}

/// A patient present in both validated sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPatient {
    pub demographics: DemographicRow,
    /// Raw events in source file order, never empty after a merge
    pub events: Vec<EventRow>,
}

impl MergedPatient {
    pub fn patient_id(&self) -> &str {
        &self.demographics.patient_id
    }
}

/// Patients present in both sources, keyed and ordered by patient id
pub type MergedPopulation = BTreeMap<String, MergedPatient>;

// =============================================================================
// Statistics
// =============================================================================

/// Population-level aggregates over a merged population
///
/// Max/min/median values are `None` when the population is empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub patient_count: usize,
    pub max_timeline_days: Option<i64>,
    pub min_timeline_days: Option<i64>,
    pub median_timeline_days: Option<f64>,
    pub male_count: usize,
    pub female_count: usize,
    pub max_age: Option<i64>,
    pub min_age: Option<i64>,
    pub median_age: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_psv_row_requires_identifier() {
        assert!(matches!(PsvRow::from_fields(vec![]), Err(Error::EmptyRow)));

        let row = PsvRow::from_fields(fields(&["id-1"])).unwrap();
        assert_eq!(row.patient_id(), "id-1");
        assert!(row.values().is_empty());
    }

    #[test]
    fn test_psv_row_values_skip_identifier() {
        let row = PsvRow::from_fields(fields(&["id-1", "1981-12-20", "M"])).unwrap();
        assert_eq!(row.values(), &["1981-12-20".to_string(), "M".to_string()]);
        assert_eq!(row.fields().len(), 3);
    }

    #[test]
    fn test_coding_system_from_version() {
        assert_eq!(CodingSystem::from_version("9"), CodingSystem::Icd9);
        assert_eq!(CodingSystem::from_version("10"), CodingSystem::Icd10);
        assert_eq!(
            CodingSystem::from_version("11"),
            CodingSystem::Unknown("11".to_string())
        );
        assert_eq!(
            CodingSystem::Icd9.uri(),
            Some("http://hl7.org/fhir/sid/icd-9-cm")
        );
        assert_eq!(CodingSystem::Icd10.uri(), Some("http://hl7.org/fhir/sid/icd-10"));
        assert_eq!(CodingSystem::Unknown("x".to_string()).uri(), None);
    }

    #[test]
    fn test_normalized_event_serialization() {
        let event = NormalizedEvent {
            date: "2014-03-11".to_string(),
            system: CodingSystem::Icd10,
            code: "E43".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"date":"2014-03-11","system":"http://hl7.org/fhir/sid/icd-10","code":"E43"}"#
        );

        let unknown = NormalizedEvent {
            date: "2014-03-11".to_string(),
            system: CodingSystem::Unknown("8".to_string()),
            code: "E43".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&unknown).unwrap(),
            r#"{"date":"2014-03-11","code":"E43"}"#
        );
    }
}
