//! Tests for completeness filters

use super::*;
use crate::app::models::{DemographicRow, EventRow};
use crate::app::services::psv_parser::filters::{
    demographic_filter, event_filter, filter_demographics, filter_events, to_demographic,
    to_event,
};
use crate::app::services::psv_parser::reader::read_psv;

#[test]
fn test_demographic_filter() {
    assert!(demographic_filter(&row(&["id-1234", "2015-07-01", "F"])));
    assert!(!demographic_filter(&row(&["id_2345", "", "M"])));
    assert!(!demographic_filter(&row(&["id_2345", "2015-07-01", ""])));
    assert!(!demographic_filter(&row(&["id_435"])));
    assert!(!demographic_filter(&row(&["id_435", "2015-07-01"])));
    assert!(!demographic_filter(&row(&["id_435", "2015-07-01", "F", "extra"])));
}

#[test]
fn test_demographic_filter_ignores_identifier_content() {
    // The identifier is not one of the checked fields
    assert!(demographic_filter(&row(&["", "2015-07-01", "F"])));
}

#[test]
fn test_event_filter() {
    assert!(event_filter(&row(&["id-2398", "2016-01-27", "10", "V45.2"])));
    assert!(!event_filter(&row(&["id-28", "10", "V45.2"])));
    assert!(!event_filter(&row(&["id-2398", "2016-01-27", "", "V45.2"])));
    assert!(!event_filter(&row(&["id-2398", "", "10", "V45.2"])));
    assert!(!event_filter(&row(&["id-2398", "2016-01-27", "10", ""])));
    assert!(!event_filter(&row(&[
        "id-2398",
        "2016-01-27",
        "10",
        "V45.2",
        "extra"
    ])));
}

#[test]
fn test_filter_accepts_whitespace_values() {
    // Only emptiness is checked, not content
    assert!(demographic_filter(&row(&["id-1", " ", "M"])));
}

#[test]
fn test_to_demographic() {
    assert_eq!(
        to_demographic(&row(&["id-771", "1981-12-20", "M"])),
        Some(DemographicRow {
            patient_id: "id-771".to_string(),
            birth_date: "1981-12-20".to_string(),
            gender: "M".to_string(),
        })
    );
    assert_eq!(to_demographic(&row(&["id-771", "", "M"])), None);
}

#[test]
fn test_to_event() {
    assert_eq!(
        to_event(&row(&["id-771", "2014-03-11", "10", "E43"])),
        Some(EventRow {
            patient_id: "id-771".to_string(),
            date: "2014-03-11".to_string(),
            coding_version: "10".to_string(),
            code: "E43".to_string(),
        })
    );
    assert_eq!(to_event(&row(&["id-771", "2014-03-11", "10"])), None);
}

#[test]
fn test_filter_demographics_skips_header() {
    let temp_file = create_temp_file(&create_test_demographics());
    let rows = read_psv(temp_file.path()).unwrap();
    let result = filter_demographics(&rows);

    assert_eq!(result.stats.rows_read, 4);
    assert_eq!(result.stats.rows_kept, 2);
    assert_eq!(result.stats.rows_rejected, 2);
    assert_eq!(result.stats.keep_rate(), 50.0);

    let ids: Vec<&str> = result.rows.iter().map(|r| r.patient_id.as_str()).collect();
    assert_eq!(ids, vec!["id-771", "id-2477"]);
}

#[test]
fn test_filter_events_keeps_file_order() {
    let temp_file = create_temp_file(&create_test_events());
    let rows = read_psv(temp_file.path()).unwrap();
    let result = filter_events(&rows);

    assert_eq!(result.stats.rows_read, 4);
    assert_eq!(result.stats.rows_kept, 3);
    assert_eq!(result.stats.rows_rejected, 1);

    let dates: Vec<&str> = result.rows.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2014-03-11", "2015-09-15", "1997-12-11"]);
}

#[test]
fn test_filter_header_only_and_empty() {
    let header_only = vec![row(&["patient_id", "birth_date", "gender"])];
    let result = filter_demographics(&header_only);
    assert!(result.rows.is_empty());
    assert_eq!(result.stats.rows_read, 0);
    assert_eq!(result.stats.keep_rate(), 0.0);

    let result = filter_events(&[]);
    assert!(result.rows.is_empty());
}

#[test]
fn test_filter_header_is_never_a_record() {
    // A header that happens to look complete is still skipped
    let rows = vec![row(&["id-0", "1900-01-01", "M"]), row(&["id-1", "1990-01-01", "F"])];
    let result = filter_demographics(&rows);

    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].patient_id, "id-1");
}
