//! Configuration management and validation.
//!
//! Provides the column selection, export options and pipeline switches for a
//! cleaning run, plus validation against the header list of the loaded file.

use crate::app::models::SortDirection;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which columns carry the phone number and the optional bundle size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    /// Column holding raw phone values (required)
    pub phone_column: String,

    /// Numeric column used only for sorting (optional)
    pub bundle_column: Option<String>,
}

impl ColumnSelection {
    pub fn new(phone_column: impl Into<String>, bundle_column: Option<String>) -> Self {
        Self {
            phone_column: phone_column.into(),
            bundle_column: bundle_column.filter(|column| !column.is_empty()),
        }
    }

    /// Validate the selection against the available headers
    pub fn validate(&self, headers: &[String]) -> Result<()> {
        if self.phone_column.is_empty() {
            return Err(Error::usage("Please select a phone number column"));
        }

        check_known_column("phone", &self.phone_column, headers)?;
        if let Some(bundle_column) = &self.bundle_column {
            check_known_column("bundle", bundle_column, headers)?;
        }

        Ok(())
    }
}

fn check_known_column(role: &str, column: &str, headers: &[String]) -> Result<()> {
    if headers.iter().any(|header| header == column) {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Unknown {} column '{}'. Available columns: {}",
            role,
            column,
            headers.join(", ")
        )))
    }
}

/// Export projection switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Keep only valid records
    pub valid_only: bool,

    /// Add a `Telco` column for records with a detected carrier
    pub include_carrier: bool,
}

/// Configuration for one cleaning run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Column selection
    pub columns: ColumnSelection,

    /// Export options
    pub export: ExportOptions,

    /// Remove later rows that repeat a valid canonical number
    pub deduplicate: bool,

    /// Sort by bundle column in this direction
    pub sort: Option<SortDirection>,

    /// Show progress bars for large datasets
    pub show_progress: bool,
}

impl CleanerConfig {
    /// Validate the configuration against the loaded headers
    pub fn validate(&self, headers: &[String]) -> Result<()> {
        self.columns.validate(headers)?;

        if self.sort.is_some() && self.columns.bundle_column.is_none() {
            return Err(Error::usage("Please select a bundle column to sort"));
        }

        debug!(
            "Configuration validated: phone='{}', bundle={:?}, dedupe={}, sort={:?}",
            self.columns.phone_column, self.columns.bundle_column, self.deduplicate, self.sort
        );
        Ok(())
    }
}
