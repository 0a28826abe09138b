//! Completeness filters for demographic and event rows
//!
//! A row is complete when exactly the expected number of fields follows the
//! patient identifier and none of them is empty. Nothing else about the
//! values is checked here.

use tracing::{debug, info};

use super::stats::{FilterResult, FilterStats};
use crate::app::models::{DemographicRow, EventRow, PsvRow};
use crate::constants::{DEMOGRAPHIC_VALUE_FIELDS, EVENT_VALUE_FIELDS, HEADER_ROWS};

fn has_complete_values(row: &PsvRow, expected: usize) -> bool {
    let values = row.values();
    values.len() == expected && values.iter().all(|value| !value.is_empty())
}

/// Check a demographics row: `birth_date` and `gender`, both non-empty
pub fn demographic_filter(row: &PsvRow) -> bool {
    has_complete_values(row, DEMOGRAPHIC_VALUE_FIELDS)
}

/// Check an events row: `date`, `icd_version` and `code`, all non-empty
pub fn event_filter(row: &PsvRow) -> bool {
    has_complete_values(row, EVENT_VALUE_FIELDS)
}

/// Extract a demographic row if it passes [`demographic_filter`]
pub fn to_demographic(row: &PsvRow) -> Option<DemographicRow> {
    if !demographic_filter(row) {
        return None;
    }

    let values = row.values();
    Some(DemographicRow {
        patient_id: row.patient_id().to_string(),
        birth_date: values[0].clone(),
        gender: values[1].clone(),
    })
}

/// Extract an event row if it passes [`event_filter`]
pub fn to_event(row: &PsvRow) -> Option<EventRow> {
    if !event_filter(row) {
        return None;
    }

    let values = row.values();
    Some(EventRow {
        patient_id: row.patient_id().to_string(),
        date: values[0].clone(),
        coding_version: values[1].clone(),
        code: values[2].clone(),
    })
}

/// Apply an extractor to every data row, skipping the header
fn filter_rows<T>(
    rows: &[PsvRow],
    kind: &str,
    extract: impl Fn(&PsvRow) -> Option<T>,
) -> FilterResult<T> {
    let mut stats = FilterStats::new();
    let mut kept = Vec::new();

    for (line_index, row) in rows.iter().enumerate().skip(HEADER_ROWS) {
        stats.rows_read += 1;
        match extract(row) {
            Some(value) => {
                kept.push(value);
                stats.rows_kept += 1;
            }
            None => {
                stats.rows_rejected += 1;
                debug!(
                    "Rejected incomplete {} row at line {}: {:?}",
                    kind,
                    line_index + 1,
                    row.fields()
                );
            }
        }
    }

    info!(
        "{} filtering complete: {} -> {} rows ({} rejected)",
        kind, stats.rows_read, stats.rows_kept, stats.rows_rejected
    );

    FilterResult { rows: kept, stats }
}

/// Keep the complete demographic rows of a parsed file
pub fn filter_demographics(rows: &[PsvRow]) -> FilterResult<DemographicRow> {
    filter_rows(rows, "Demographics", to_demographic)
}

/// Keep the complete event rows of a parsed file
pub fn filter_events(rows: &[PsvRow]) -> FilterResult<EventRow> {
    filter_rows(rows, "Events", to_event)
}
