//! Configuration management and validation.
//!
//! Provides the pipeline configuration structure, its defaults, builder
//! helpers and the layered loading used by the CLI (config file, then
//! command-line overrides).

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DEMOGRAPHICS_FILE, DEFAULT_EVENTS_FILE,
    DEFAULT_OUTPUT_DIR, DEFAULT_REPORT_FILE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported renderings of the statistics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One sentence per statistic
    Text,
    /// Serialized statistics report
    Json,
}

/// Global configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Demographics PSV file (`patient_id|birth_date|gender`)
    pub demographics_path: PathBuf,

    /// Events PSV file (`patient_id|date|icd_version|code`)
    pub events_path: PathBuf,

    /// Directory receiving one JSON record per patient
    pub output_dir: PathBuf,

    /// Statistics report file, overwritten on every run
    pub report_path: PathBuf,

    /// Report rendering
    pub report_format: ReportFormat,

    /// Write the statistics report file at all
    pub write_report: bool,

    /// Show a progress bar while writing patient records
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            demographics_path: PathBuf::from(DEFAULT_DEMOGRAPHICS_FILE),
            events_path: PathBuf::from(DEFAULT_EVENTS_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            report_format: ReportFormat::Text,
            write_report: true,
            show_progress: false,
        }
    }
}

impl PipelineConfig {
    /// Create configuration with custom input files
    pub fn with_inputs(
        mut self,
        demographics_path: impl Into<PathBuf>,
        events_path: impl Into<PathBuf>,
    ) -> Self {
        self.demographics_path = demographics_path.into();
        self.events_path = events_path.into();
        self
    }

    /// Create configuration with custom record output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Create configuration with custom report file
    pub fn with_report_path(mut self, report_path: impl Into<PathBuf>) -> Self {
        self.report_path = report_path.into();
        self
    }

    /// Set the report rendering
    pub fn with_report_format(mut self, report_format: ReportFormat) -> Self {
        self.report_format = report_format;
        self
    }

    /// Skip writing the report file
    pub fn without_report(mut self) -> Self {
        self.write_report = false;
        self
    }

    /// Enable the record-writing progress bar
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Default config file location (`<config_dir>/patient-processor/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })
    }

    /// Load configuration from an optional file, falling back to defaults
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration before a run
    pub fn validate(&self) -> Result<()> {
        for input in [&self.demographics_path, &self.events_path] {
            if !input.exists() {
                return Err(Error::file_not_found(input.display().to_string()));
            }
            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }
        }

        if self.demographics_path == self.events_path {
            return Err(Error::configuration(
                "Demographics and events inputs must be different files",
            ));
        }

        if self.output_dir.is_file() {
            return Err(Error::configuration(format!(
                "Output path is a file, expected a directory: {}",
                self.output_dir.display()
            )));
        }

        if self.write_report && self.report_path.is_dir() {
            return Err(Error::configuration(format!(
                "Report path is a directory: {}",
                self.report_path.display()
            )));
        }

        Ok(())
    }
}
