//! Merge statistics and result structures for the record processing pipeline

use serde::{Deserialize, Serialize};

use crate::app::models::MergedPopulation;

/// Statistics for the complete-case merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Distinct patients with valid demographics
    pub demographic_patients: usize,
    /// Distinct patients with at least one valid event
    pub event_patients: usize,
    /// Patients dropped for having demographics only
    pub demographics_only: usize,
    /// Patients dropped for having events only
    pub events_only: usize,
    /// Patients present in both sources
    pub merged: usize,
}

impl MergeStats {
    /// Get summary of merge statistics
    pub fn summary(&self) -> String {
        format!(
            "Merge Summary: {} patients with demographics, {} with events -> {} merged | \
             Dropped: {} demographics only, {} events only",
            self.demographic_patients,
            self.event_patients,
            self.merged,
            self.demographics_only,
            self.events_only
        )
    }
}

/// Result of the merge stage
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// Patients present in both sources
    pub population: MergedPopulation,
    /// Merge statistics
    pub stats: MergeStats,
}
