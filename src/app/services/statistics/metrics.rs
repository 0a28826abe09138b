//! Per-patient metrics and the median helper

use chrono::{Datelike, NaiveDate};

use crate::app::models::MergedPatient;
use crate::constants::{DATE_FORMAT, FEMALE_CODE, MALE_CODE};
use crate::{Error, Result};

/// Parse a `YYYY-MM-DD` date, naming the patient on failure
pub fn parse_date(value: &str, patient_id: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        Error::date_parsing(
            format!("Invalid date '{}' for patient {}", value, patient_id),
            e,
        )
    })
}

/// Days between the earliest and latest date, `None` without dates
pub fn timeline_days(event_dates: &[NaiveDate]) -> Option<i64> {
    let first = event_dates.iter().min()?;
    let last = event_dates.iter().max()?;
    Some((*last - *first).num_days())
}

/// Latest event year minus birth year, `None` without dates
pub fn age_years(birth_date: NaiveDate, event_dates: &[NaiveDate]) -> Option<i64> {
    let last_year = event_dates.iter().map(|date| date.year()).max()?;
    Some(i64::from(last_year) - i64::from(birth_date.year()))
}

/// Median of a list of values, `None` when the list is empty
///
/// Even-length lists average the two centre elements.
pub fn median(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid] as f64 + sorted[mid - 1] as f64) / 2.0)
    } else {
        Some(sorted[mid] as f64)
    }
}

/// Gender buckets counted in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderBucket {
    Male,
    Female,
}

impl GenderBucket {
    /// Case-insensitive match against `m` and `f`; anything else is unbucketed
    pub fn classify(gender: &str) -> Option<Self> {
        let lower = gender.to_lowercase();
        if lower == MALE_CODE {
            Some(GenderBucket::Male)
        } else if lower == FEMALE_CODE {
            Some(GenderBucket::Female)
        } else {
            None
        }
    }
}

/// Metrics derived from one merged patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientMetrics {
    pub timeline_days: i64,
    pub age_years: i64,
    pub gender: Option<GenderBucket>,
}

impl PatientMetrics {
    /// Compute metrics for a patient
    ///
    /// Fails with [`Error::NoEvents`] for a patient without events and with
    /// [`Error::DateParsing`] when any date cannot be parsed.
    pub fn from_patient(patient: &MergedPatient) -> Result<Self> {
        let patient_id = patient.patient_id();
        if patient.events.is_empty() {
            return Err(Error::no_events(patient_id));
        }

        let event_dates = patient
            .events
            .iter()
            .map(|event| parse_date(&event.date, patient_id))
            .collect::<Result<Vec<_>>>()?;
        let birth_date = parse_date(&patient.demographics.birth_date, patient_id)?;

        let timeline_days =
            timeline_days(&event_dates).ok_or_else(|| Error::no_events(patient_id))?;
        let age_years =
            age_years(birth_date, &event_dates).ok_or_else(|| Error::no_events(patient_id))?;

        Ok(Self {
            timeline_days,
            age_years,
            gender: GenderBucket::classify(&patient.demographics.gender),
        })
    }
}
