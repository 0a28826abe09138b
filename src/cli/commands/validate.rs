//! Validate command implementation
//!
//! Runs the read, filter and merge stages plus the statistics engine without
//! writing any file, then reports what a `process` run would produce.

use super::shared::{load_configuration, setup_logging};
use crate::app::services::output_sink::record_file_name;
use crate::app::services::pipeline::{Analysis, Pipeline};
use crate::app::services::statistics::{compute_statistics, render_text};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::models::StatisticsReport;
use crate::app::services::psv_parser::FilterStats;
use crate::app::services::record_processor::MergeStats;

/// Outcome of a validation run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub demographics: FilterStats,
    pub events: FilterStats,
    pub merge: MergeStats,
    pub statistics: StatisticsReport,
    /// Merged patient ids that cannot be used as record file names
    pub invalid_patient_ids: Vec<String>,
}

impl ValidationSummary {
    fn from_analysis(analysis: Analysis, statistics: StatisticsReport) -> Self {
        let invalid_patient_ids = analysis
            .population
            .keys()
            .filter(|patient_id| record_file_name(patient_id).is_err())
            .cloned()
            .collect();

        Self {
            demographics: analysis.demographics,
            events: analysis.events,
            merge: analysis.merge,
            statistics,
            invalid_patient_ids,
        }
    }

    /// Whether a process run over the same inputs would write every record
    pub fn is_valid(&self) -> bool {
        self.invalid_patient_ids.is_empty()
    }

    /// Fail when any merged patient id cannot name a record file
    pub fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::invalid_patient_id(self.invalid_patient_ids.join(", ")))
        }
    }
}

/// Validate command runner
///
/// The summary is printed in full before an unusable patient id turns into
/// an error.
pub fn run_validate(args: ValidateArgs) -> Result<ValidationSummary> {
    setup_logging(args.get_log_level(), false)?;

    info!("Starting input validation");
    debug!("Validation arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.input)?;
    config.validate()?;

    let analysis = Pipeline::new(config).analyze()?;
    let statistics = compute_statistics(&analysis.population)?;
    let summary = ValidationSummary::from_analysis(analysis, statistics);

    for patient_id in &summary.invalid_patient_ids {
        warn!("Patient id '{}' cannot be used as a record file name", patient_id);
    }

    match args.output_format {
        OutputFormat::Human => print_human_report(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    summary.ensure_valid()?;
    Ok(summary)
}

fn print_human_report(summary: &ValidationSummary) {
    let status = if summary.is_valid() {
        "Validation Passed".green().bold()
    } else {
        "Validation Found Problems".red().bold()
    };

    println!("\n{}", status);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "   • Demographics: {} rows, {} complete ({:.1}%)",
        summary.demographics.rows_read,
        summary.demographics.rows_kept,
        summary.demographics.keep_rate()
    );
    println!(
        "   • Events: {} rows, {} complete ({:.1}%)",
        summary.events.rows_read,
        summary.events.rows_kept,
        summary.events.keep_rate()
    );
    println!("   • {}", summary.merge.summary());

    if !summary.is_valid() {
        println!(
            "   • Unusable patient ids: {}",
            summary.invalid_patient_ids.join(", ")
        );
    }

    println!("\nStatistics:");
    for line in render_text(&summary.statistics).lines() {
        println!("   {}", line);
    }
    println!();
}
