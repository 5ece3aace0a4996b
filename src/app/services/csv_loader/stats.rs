//! Load statistics and result structures for CSV input
//!
//! This module provides types describing what the loader read and how much
//! reshaping ragged rows needed before they reached the pipeline.

use crate::app::models::RawRecord;
use serde::{Deserialize, Serialize};

/// Loading result with header list, records and statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Trimmed header names in file order
    pub columns: Vec<String>,

    /// One record per data row, one value per header
    pub records: Vec<RawRecord>,

    /// Basic load statistics
    pub stats: LoadStats,
}

/// Simple load statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Number of data rows read (blank lines excluded)
    pub total_rows: usize,

    /// Rows with fewer cells than headers, padded with empty values
    pub padded_rows: usize,

    /// Rows with more cells than headers, surplus cells dropped
    pub truncated_rows: usize,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows that did not match the header width
    pub fn ragged_rows(&self) -> usize {
        self.padded_rows + self.truncated_rows
    }

    /// Whether every row matched the header width
    pub fn is_rectangular(&self) -> bool {
        self.ragged_rows() == 0
    }
}
