//! Test utilities for PSV parser testing
//!
//! This module provides sample file content and helper functions used
//! across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::PsvRow;

// Test modules
mod filter_tests;

/// Build a row from string slices
pub fn row(fields: &[&str]) -> PsvRow {
    PsvRow::from_fields(fields.iter().map(|s| s.to_string()).collect()).unwrap()
}

/// Demographics file with a header, two valid rows and two incomplete ones
pub fn create_test_demographics() -> String {
    "patient_id|birth_date|gender\n\
     id-771|1981-12-20|M\n\
     id-2477|1948-06-21|F\n\
     id-3000||M\n\
     id-3001|1950-01-01\n"
        .to_string()
}

/// Events file with a header, three valid rows and one incomplete one
pub fn create_test_events() -> String {
    "patient_id|date|icd_version|code\n\
     id-771|2014-03-11|10|E43\n\
     id-771|2015-09-15|9|367.4\n\
     id-2477|1997-12-11|9|3\n\
     id-2477|2016-01-27||V45.2\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
