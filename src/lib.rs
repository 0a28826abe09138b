//! Patient Processor Library
//!
//! A Rust library for turning pipe-delimited patient demographic and
//! diagnosis event extracts into one structured JSON record per patient,
//! plus a population statistics report.
//!
//! This library provides tools for:
//! - Parsing PSV files into rows of fields
//! - Filtering out incomplete demographic and event rows
//! - Normalizing ICD-9/ICD-10 diagnosis events to coding system URIs
//! - Merging both sources per patient (complete-case join)
//! - Writing per-patient records through a pluggable sink
//! - Computing timeline, age and gender statistics across the population

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod output_sink;
        pub mod pipeline;
        pub mod psv_parser;
        pub mod record_processor;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    CodingSystem, DemographicRow, EventRow, MergedPatient, MergedPopulation, NormalizedEvent,
    PatientRecord, PsvRow, StatisticsReport,
};
pub use config::PipelineConfig;

/// Result type alias for the patient processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for patient processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// A row with no fields at all reached the row model
    #[error("Row has no fields (patient identifier missing)")]
    EmptyRow,

    /// Patient identifier cannot be used to name an output record
    #[error("Invalid patient identifier for output: '{patient_id}'")]
    InvalidPatientId { patient_id: String },

    /// Statistics requested for a patient without events
    #[error("Patient {patient_id} has no events")]
    NoEvents { patient_id: String },

    /// Date parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an invalid patient identifier error
    pub fn invalid_patient_id(patient_id: impl Into<String>) -> Self {
        Self::InvalidPatientId {
            patient_id: patient_id.into(),
        }
    }

    /// Create a no-events error
    pub fn no_events(patient_id: impl Into<String>) -> Self {
        Self::NoEvents {
            patient_id: patient_id.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
