//! Command-line argument definitions for the patient processor
//!
//! This module defines the CLI interface using the clap derive API. Every
//! path flag is optional: unset flags fall back to the config file, then to
//! the built-in defaults.

use crate::config::ReportFormat;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the patient processor
///
/// Merges pipe-delimited patient demographics and diagnosis events into one
/// JSON record per patient and a population statistics report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "patient-processor",
    version,
    about = "Merge patient demographics and diagnosis events into per-patient JSON records",
    long_about = "Reads a demographics file (patient_id|birth_date|gender) and an events file \
                  (patient_id|date|icd_version|code), drops incomplete rows, keeps patients present \
                  in both files, writes one JSON record per patient with ICD-9/ICD-10 system URIs, \
                  and writes a statistics report covering timelines, ages and gender counts."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Write per-patient records and the statistics report
    Process(ProcessArgs),
    /// Check the inputs and print statistics without writing any files
    Validate(ValidateArgs),
}

/// Input file selection shared by every command
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Demographics file (patient_id|birth_date|gender)
    #[arg(
        short = 'd',
        long = "demographics",
        value_name = "FILE",
        help = "Demographics PSV file [default: demo.psv]"
    )]
    pub demographics: Option<PathBuf>,

    /// Events file (patient_id|date|icd_version|code)
    #[arg(
        short = 'e',
        long = "events",
        value_name = "FILE",
        help = "Events PSV file [default: events.psv]"
    )]
    pub events: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// <config dir>/patient-processor/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory receiving one JSON file per patient
    ///
    /// Will be created if it doesn't exist. Existing records with the same
    /// patient id are overwritten.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory for per-patient JSON records [default: patient]"
    )]
    pub output_dir: Option<PathBuf>,

    /// Statistics report file, overwritten on every run
    #[arg(
        short = 'r',
        long = "report",
        value_name = "FILE",
        help = "Statistics report file [default: statistics.txt]"
    )]
    pub report: Option<PathBuf>,

    /// Statistics report rendering
    #[arg(
        long = "report-format",
        value_enum,
        help = "Statistics report format [default: text]"
    )]
    pub report_format: Option<ReportFormat>,

    /// Skip writing the statistics report file
    #[arg(long = "no-report", help = "Do not write the statistics report file")]
    pub no_report: bool,

    /// Show the progress bar while writing records
    #[arg(
        long = "progress",
        help = "Show a progress bar while writing records",
        conflicts_with = "no_progress"
    )]
    pub progress: bool,

    /// Disable the progress bar
    #[arg(long = "no-progress", help = "Disable the progress bar")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Output format for validation results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for validation results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for results printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Map a verbosity count to a tracing level name
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl InputArgs {
    /// Check that explicitly provided paths exist
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        for path in [&self.demographics, &self.events].into_iter().flatten() {
            if !path.exists() {
                return Err(Error::file_not_found(path.display().to_string()));
            }
        }

        Ok(())
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.input.validate()?;

        if self.no_report && self.requests_report() {
            return Err(Error::configuration(
                "--no-report cannot be combined with --report or --report-format",
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level(self.verbose)
        }
    }

    /// Progress bar setting requested on the command line, `None` when no
    /// flag was given
    pub fn progress_override(&self) -> Option<bool> {
        if self.quiet || self.no_progress {
            Some(false)
        } else if self.progress {
            Some(true)
        } else {
            None
        }
    }

    /// Whether any report flag was passed explicitly
    pub fn requests_report(&self) -> bool {
        self.report.is_some() || self.report_format.is_some()
    }
}

impl ValidateArgs {
    pub fn validate(&self) -> Result<()> {
        self.input.validate()
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}
