//! Record deduplication on canonical phone numbers
//!
//! Only valid records take part: the first row holding a canonical number is
//! kept and every later row with the same number is dropped. Invalid records
//! have no canonical value and are always kept.

use crate::app::models::AnnotatedRecord;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Remove later rows that repeat a valid canonical number
///
/// Relative order of the surviving rows is unchanged, so running this twice
/// gives the same result as running it once.
///
/// # Arguments
///
/// * `records` - Current record collection, in display order
///
/// # Returns
///
/// The surviving records and the number of rows removed
pub fn deduplicate_records(records: Vec<AnnotatedRecord>) -> (Vec<AnnotatedRecord>, usize) {
    let input_count = records.len();
    let mut seen: HashSet<String> = HashSet::new();

    let deduplicated: Vec<AnnotatedRecord> = records
        .into_iter()
        .filter(|record| {
            if !record.is_valid {
                return true;
            }
            let first = seen.insert(record.formatted_phone.clone());
            if !first {
                debug!(
                    "Dropping duplicate of {} (record {})",
                    record.formatted_phone, record.index
                );
            }
            first
        })
        .collect();

    let removed = input_count - deduplicated.len();
    info!(
        "Deduplication complete: removed {} duplicate rows, {} records remaining",
        removed,
        deduplicated.len()
    );

    (deduplicated, removed)
}

/// Count how often each valid canonical number occurs
pub fn phone_occurrences(records: &[AnnotatedRecord]) -> HashMap<&str, usize> {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for record in records.iter().filter(|record| record.is_valid) {
        *occurrences
            .entry(record.formatted_phone.as_str())
            .or_default() += 1;
    }
    occurrences
}

/// Analyze duplicate patterns without removing anything
///
/// # Returns
///
/// Tuple of (distinct valid numbers, numbers occurring more than once, rows
/// a deduplication pass would remove)
pub fn analyze_duplicate_patterns(records: &[AnnotatedRecord]) -> (usize, usize, usize) {
    let occurrences = phone_occurrences(records);
    let duplicated_numbers = occurrences.values().filter(|&&count| count > 1).count();
    let excess_rows = occurrences
        .values()
        .map(|&count| count.saturating_sub(1))
        .sum();

    (occurrences.len(), duplicated_numbers, excess_rows)
}
