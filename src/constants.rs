//! Application constants for the patient processor
//!
//! This module contains the input format definition, coding system URIs
//! and default file locations used throughout the application.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter for PSV input files
pub const FIELD_DELIMITER: char = '|';

/// Number of header rows skipped at the top of every input file
pub const HEADER_ROWS: usize = 1;

/// Fields expected after the patient identifier in a demographics row
/// (birth_date, gender)
pub const DEMOGRAPHIC_VALUE_FIELDS: usize = 2;

/// Fields expected after the patient identifier in an events row
/// (date, icd_version, code)
pub const EVENT_VALUE_FIELDS: usize = 3;

/// Date format used by birth dates and event dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Coding Systems
// =============================================================================

/// ICD version codes and the URIs that identify them
pub mod coding_systems {
    /// Version code for ICD-9 in the events file
    pub const ICD9_VERSION: &str = "9";

    /// Version code for ICD-10 in the events file
    pub const ICD10_VERSION: &str = "10";

    /// ICD-9-CM system URI
    pub const ICD9_URI: &str = "http://hl7.org/fhir/sid/icd-9-cm";

    /// ICD-10 system URI
    pub const ICD10_URI: &str = "http://hl7.org/fhir/sid/icd-10";
}

// =============================================================================
// Gender Codes
// =============================================================================

/// Lower-case gender code counted as male
pub const MALE_CODE: &str = "m";

/// Lower-case gender code counted as female
pub const FEMALE_CODE: &str = "f";

// =============================================================================
// Default Paths
// =============================================================================

/// Default demographics input file
pub const DEFAULT_DEMOGRAPHICS_FILE: &str = "demo.psv";

/// Default events input file
pub const DEFAULT_EVENTS_FILE: &str = "events.psv";

/// Default directory receiving one JSON file per patient
pub const DEFAULT_OUTPUT_DIR: &str = "patient";

/// Default statistics report file
pub const DEFAULT_REPORT_FILE: &str = "statistics.txt";

/// Extension of per-patient record files
pub const RECORD_FILE_EXTENSION: &str = "json";

/// Indentation used for per-patient JSON documents
pub const JSON_INDENT: &[u8] = b"    ";

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "patient-processor";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.json";
