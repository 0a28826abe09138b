//! End-to-end processing pipeline
//!
//! Runs the stages in order, each one a function from the previous stage's
//! output to a new value:
//!
//! 1. Read both PSV files
//! 2. Filter incomplete rows
//! 3. Index by patient id and merge (complete-case)
//! 4. Build and write one record per patient through a [`RecordSink`]
//! 5. Compute population statistics and write the report
//!
//! Any I/O or date error aborts the run. Records already written stay on
//! disk.

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::Result;
use crate::app::models::{MergedPopulation, StatisticsReport};
use crate::app::services::output_sink::RecordSink;
use crate::app::services::psv_parser::{FilterStats, filter_demographics, filter_events, read_psv};
use crate::app::services::record_processor::{
    MergeResult, MergeStats, build_records, index_demographics, index_events, merge,
};
use crate::app::services::statistics::{compute_statistics, write_report};
use crate::config::PipelineConfig;

/// Everything known about a run before any output is produced
#[derive(Debug, Clone)]
pub struct Analysis {
    pub demographics: FilterStats,
    pub events: FilterStats,
    pub merge: MergeStats,
    pub population: MergedPopulation,
}

/// Outcome of a full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub demographics: FilterStats,
    pub events: FilterStats,
    pub merge: MergeStats,
    pub records_written: usize,
    pub statistics: StatisticsReport,
    /// Report file, `None` when report writing is disabled
    pub report_path: Option<PathBuf>,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Pipeline over one pair of input files
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Read, filter and merge both inputs without writing anything
    pub fn analyze(&self) -> Result<Analysis> {
        info!(
            "Reading demographics from {}",
            self.config.demographics_path.display()
        );
        let demographic_rows = read_psv(&self.config.demographics_path)?;
        info!("Reading events from {}", self.config.events_path.display());
        let event_rows = read_psv(&self.config.events_path)?;

        let demographics = filter_demographics(&demographic_rows);
        let events = filter_events(&event_rows);

        let MergeResult { population, stats } = merge(
            index_demographics(demographics.rows),
            index_events(events.rows),
        );

        Ok(Analysis {
            demographics: demographics.stats,
            events: events.stats,
            merge: stats,
            population,
        })
    }

    /// Run every stage, sending records to `sink`
    pub fn run(&self, sink: &mut dyn RecordSink) -> Result<PipelineSummary> {
        let start_time = Instant::now();

        let analysis = self.analyze()?;
        let records_written =
            write_records(&analysis.population, sink, self.config.show_progress)?;

        let statistics = compute_statistics(&analysis.population)?;

        let report_path = if self.config.write_report {
            write_report(
                &self.config.report_path,
                &statistics,
                self.config.report_format,
            )?;
            Some(self.config.report_path.clone())
        } else {
            debug!("Report writing disabled");
            None
        };

        let elapsed = start_time.elapsed();
        info!(
            "Pipeline complete: {} records written in {:.2}s",
            records_written,
            elapsed.as_secs_f64()
        );

        Ok(PipelineSummary {
            demographics: analysis.demographics,
            events: analysis.events,
            merge: analysis.merge,
            records_written,
            statistics,
            report_path,
            elapsed,
        })
    }
}

/// Build and write one record per merged patient, in patient id order
pub fn write_records(
    population: &MergedPopulation,
    sink: &mut dyn RecordSink,
    show_progress: bool,
) -> Result<usize> {
    let progress = if show_progress {
        create_progress_bar(population.len() as u64, "Writing patient records")
    } else {
        ProgressBar::hidden()
    };

    let mut written = 0;
    for (patient_id, record) in build_records(population) {
        sink.write_record(patient_id, &record)?;
        written += 1;
        progress.inc(1);
    }
    sink.finish()?;

    progress.finish_and_clear();
    info!("Wrote {} patient records", written);
    Ok(written)
}

fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
