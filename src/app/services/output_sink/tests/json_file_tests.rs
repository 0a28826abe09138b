//! Tests for the JSON file sink

use super::*;
use crate::Error;
use crate::app::services::output_sink::{JsonFileSink, RecordSink, record_file_name};
use tempfile::TempDir;

#[test]
fn test_record_file_name() {
    assert_eq!(record_file_name("id-771").unwrap(), "id-771.json");
    assert_eq!(record_file_name("patient 5").unwrap(), "patient 5.json");
}

#[test]
fn test_record_file_name_rejects_path_escapes() {
    for bad in ["", ".", "..", "../etc", "a/b", "a\\b"] {
        assert!(
            matches!(record_file_name(bad), Err(Error::InvalidPatientId { .. })),
            "expected rejection for {:?}",
            bad
        );
    }
}

#[test]
fn test_new_creates_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("nested").join("patient");

    let sink = JsonFileSink::new(&output_dir).unwrap();

    assert!(output_dir.is_dir());
    assert_eq!(sink.output_dir(), output_dir.as_path());
    assert_eq!(sink.written(), 0);
}

#[test]
fn test_write_record_contents() {
    let temp_dir = TempDir::new().unwrap();
    let mut sink = JsonFileSink::new(temp_dir.path()).unwrap();

    sink.write_record("id-771", &create_test_record()).unwrap();
    sink.finish().unwrap();

    let contents = std::fs::read_to_string(temp_dir.path().join("id-771.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "birth_date": "1981-12-20",
            "gender": "M",
            "events": [
                {"date": "2014-03-11", "system": "http://hl7.org/fhir/sid/icd-10", "code": "E43"},
                {"date": "2015-09-15", "code": "367.4"}
            ]
        })
    );
    assert_eq!(sink.written(), 1);
}

#[test]
fn test_write_record_uses_four_space_indent() {
    let temp_dir = TempDir::new().unwrap();
    let mut sink = JsonFileSink::new(temp_dir.path()).unwrap();

    sink.write_record("id-1", &create_test_record()).unwrap();

    let contents = std::fs::read_to_string(temp_dir.path().join("id-1.json")).unwrap();
    assert!(contents.starts_with("{\n    \"birth_date\": \"1981-12-20\",\n"));
}

#[test]
fn test_write_record_overwrites_previous_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("id-1.json");
    std::fs::write(&path, "x".repeat(4096)).unwrap();

    let mut sink = JsonFileSink::new(temp_dir.path()).unwrap();
    sink.write_record("id-1", &create_test_record()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&contents).is_ok());
}

#[test]
fn test_write_record_invalid_id_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut sink = JsonFileSink::new(temp_dir.path()).unwrap();

    let result = sink.write_record("../escape", &create_test_record());

    assert!(matches!(result, Err(Error::InvalidPatientId { .. })));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    assert_eq!(sink.written(), 0);
}
