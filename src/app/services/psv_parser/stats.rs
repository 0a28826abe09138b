//! Filtering statistics and result structures for PSV processing
//!
//! This module provides types for tracking how many data rows survived the
//! completeness filters.

use serde::{Deserialize, Serialize};

/// Rows kept after filtering, with counts
#[derive(Debug, Clone)]
pub struct FilterResult<T> {
    /// Complete rows, in file order
    pub rows: Vec<T>,

    /// Filtering statistics
    pub stats: FilterStats,
}

/// Simple filtering statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Data rows seen (header excluded)
    pub rows_read: usize,

    /// Rows that passed the completeness filter
    pub rows_kept: usize,

    /// Rows dropped as incomplete
    pub rows_rejected: usize,
}

impl FilterStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of data rows that were kept, as a percentage
    pub fn keep_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_kept as f64 / self.rows_read as f64) * 100.0
        }
    }
}
