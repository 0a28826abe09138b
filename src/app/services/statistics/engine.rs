//! Population aggregation

use tracing::{debug, info};

use super::metrics::{GenderBucket, PatientMetrics, median};
use crate::Result;
use crate::app::models::{MergedPopulation, StatisticsReport};

/// Compute the statistics report for a merged population
///
/// An empty population yields zero counts and absent max/min/median values.
/// Any patient whose dates cannot be parsed aborts the computation.
pub fn compute_statistics(population: &MergedPopulation) -> Result<StatisticsReport> {
    let mut timelines = Vec::with_capacity(population.len());
    let mut ages = Vec::with_capacity(population.len());
    let mut male_count = 0;
    let mut female_count = 0;

    for patient in population.values() {
        let metrics = PatientMetrics::from_patient(patient)?;
        debug!(
            "Patient {}: timeline {} days, age {}",
            patient.patient_id(),
            metrics.timeline_days,
            metrics.age_years
        );

        timelines.push(metrics.timeline_days);
        ages.push(metrics.age_years);
        match metrics.gender {
            Some(GenderBucket::Male) => male_count += 1,
            Some(GenderBucket::Female) => female_count += 1,
            None => {}
        }
    }

    let report = StatisticsReport {
        patient_count: population.len(),
        max_timeline_days: timelines.iter().copied().max(),
        min_timeline_days: timelines.iter().copied().min(),
        median_timeline_days: median(&timelines),
        male_count,
        female_count,
        max_age: ages.iter().copied().max(),
        min_age: ages.iter().copied().min(),
        median_age: median(&ages),
    };

    info!(
        "Statistics computed for {} patients ({} male, {} female)",
        report.patient_count, report.male_count, report.female_count
    );

    Ok(report)
}
