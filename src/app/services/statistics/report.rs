//! Statistics report rendering and writing
//!
//! The text rendering is one sentence per statistic in a fixed order. Absent
//! values (empty population) render as `n/a`.

use std::fmt::Display;
use std::path::Path;
use tracing::info;

use crate::app::models::StatisticsReport;
use crate::config::ReportFormat;
use crate::{Error, Result};

const NOT_AVAILABLE: &str = "n/a";

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn days<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{} days", v))
}

/// Render the report as text, one line per statistic
pub fn render_text(report: &StatisticsReport) -> String {
    let lines = [
        format!(
            "The total number of valid patients is {}.",
            report.patient_count
        ),
        format!(
            "The maximum length of patient timelines is {}.",
            days(report.max_timeline_days)
        ),
        format!(
            "The minimum length of patient timelines is {}.",
            days(report.min_timeline_days)
        ),
        format!(
            "The median length of patient timelines is {}.",
            days(report.median_timeline_days)
        ),
        format!("The number of males is {}.", report.male_count),
        format!("The number of females is {}.", report.female_count),
        format!("The maximum age of patient is {}.", or_na(report.max_age)),
        format!("The minimum age of patient is {}.", or_na(report.min_age)),
        format!("The median age of patient is {}.", or_na(report.median_age)),
    ];

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Render the report as pretty JSON
pub fn render_json(report: &StatisticsReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization("Failed to serialize statistics report", e))?;
    json.push('\n');
    Ok(json)
}

/// Write the report, replacing any previous file at `path`
pub fn write_report(path: &Path, report: &StatisticsReport, format: ReportFormat) -> Result<()> {
    let contents = match format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => render_json(report)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create report directory {}", parent.display()),
                e,
            )
        })?;
    }

    std::fs::write(path, contents).map_err(|e| {
        Error::io(format!("Failed to write report {}", path.display()), e)
    })?;

    info!("Statistics report written to {}", path.display());
    Ok(())
}
