//! Dataset statistics for the record pipeline
//!
//! Statistics are always derived from the whole collection. Nothing here is
//! ever patched incrementally.

use crate::app::models::{AnnotatedRecord, Carrier};
use serde::Serialize;
use std::collections::BTreeMap;

use super::deduplication::phone_occurrences;

/// Statistics over the current annotated collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Number of records in the collection
    pub total_records: usize,
    /// Records with a valid phone number
    pub valid_records: usize,
    /// Records with at least one phone issue
    pub invalid_records: usize,
    /// Distinct valid numbers that occur on two or more records
    pub duplicate_count: usize,
    /// Valid records per detected carrier
    pub carrier_counts: BTreeMap<Carrier, usize>,
}

impl DatasetStats {
    /// Derive statistics from scratch
    ///
    /// # Arguments
    ///
    /// * `records` - The complete current collection
    pub fn compute(records: &[AnnotatedRecord]) -> Self {
        let valid_records = records.iter().filter(|record| record.is_valid).count();

        let duplicate_count = phone_occurrences(records)
            .values()
            .filter(|&&count| count > 1)
            .count();

        let mut carrier_counts = BTreeMap::new();
        for carrier in records
            .iter()
            .filter(|record| record.is_valid)
            .filter_map(|record| record.carrier)
        {
            *carrier_counts.entry(carrier).or_insert(0) += 1;
        }

        Self {
            total_records: records.len(),
            valid_records,
            invalid_records: records.len() - valid_records,
            duplicate_count,
            carrier_counts,
        }
    }

    /// Valid records as a rounded whole percentage, 0 for an empty collection
    pub fn valid_percentage(&self) -> u32 {
        if self.total_records == 0 {
            0
        } else {
            (self.valid_records as f64 / self.total_records as f64 * 100.0).round() as u32
        }
    }

    /// Count for one carrier
    pub fn carrier_count(&self, carrier: Carrier) -> usize {
        self.carrier_counts.get(&carrier).copied().unwrap_or(0)
    }

    /// Valid records without a detected carrier
    pub fn unclassified_records(&self) -> usize {
        self.valid_records - self.carrier_counts.values().sum::<usize>()
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} records: {} valid ({}%), {} invalid, {} duplicated numbers",
            self.total_records,
            self.valid_records,
            self.valid_percentage(),
            self.invalid_records,
            self.duplicate_count
        )
    }
}
