//! CSV Phone Cleaner Library
//!
//! A Rust library for cleaning tabular datasets that carry Kenyan mobile
//! numbers in free-text form.
//!
//! This library provides tools for:
//! - Normalizing raw phone cells (local format, missing country code,
//!   spreadsheet scientific notation, stray punctuation) into `+254XXXXXXXXX`
//! - Accumulating actionable validation diagnostics per record
//! - Classifying canonical numbers by carrier from static prefix tables
//! - Keeping dataset statistics consistent across edits, deletions,
//!   deduplication and bundle sorting
//! - Projecting annotated records back into plain CSV for export

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_loader;
        pub mod exporter;
        pub mod phone_validator;
        pub mod record_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnnotatedRecord, Carrier, PhoneIssue, RawRecord, ValidationResult};
pub use app::services::record_processor::{DatasetPipeline, DatasetStats};
pub use config::CleanerConfig;

/// Result type alias for the phone cleaner
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading, processing and export
///
/// Per-record phone problems are not errors; they are carried as
/// [`PhoneIssue`] values on each record.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// CSV encoding error while building an export
    #[error("CSV encoding error: {message}")]
    CsvEncoding {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Operation invoked in the wrong state or without a required selection
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Row position no longer exists in the current collection
    #[error("Row position {position} is out of range (dataset has {len} rows)")]
    RowOutOfRange { position: usize, len: usize },

    /// Input produced zero records
    #[error("No records found in '{source_name}'")]
    EmptyDataset { source_name: String },

    /// Export produced zero rows
    #[error("Nothing to export: {message}")]
    EmptyExport { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a CSV encoding error with context
    pub fn csv_encoding(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvEncoding {
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

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a row out of range error
    pub fn row_out_of_range(position: usize, len: usize) -> Self {
        Self::RowOutOfRange { position, len }
    }

    /// Create an empty dataset error
    pub fn empty_dataset(source_name: impl Into<String>) -> Self {
        Self::EmptyDataset {
            source_name: source_name.into(),
        }
    }

    /// Create an empty export error
    pub fn empty_export(message: impl Into<String>) -> Self {
        Self::EmptyExport {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error is a caller mistake rather than a data or I/O failure
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. } | Self::RowOutOfRange { .. })
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

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
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
