//! Bundle column sorting
//!
//! Bundle cells are free text. They are read the way a spreadsheet user
//! expects: the leading numeric part counts, and anything unreadable sorts
//! as zero.

use crate::app::models::{AnnotatedRecord, SortDirection};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("leading number pattern is valid")
});

/// Read a bundle cell as a number
///
/// Parses the longest numeric prefix, so `"20 MB"` is `20` and `"1.5GB"` is
/// `1.5`. Empty, non-numeric and non-finite values are `0`, and so is `-0`.
pub fn coerce_bundle(value: &str) -> f64 {
    LEADING_NUMBER
        .find(value)
        .and_then(|found| found.as_str().trim_start().parse::<f64>().ok())
        .filter(|number| number.is_finite() && *number != 0.0)
        .unwrap_or(0.0)
}

/// Stable sort of records by their bundle cell
///
/// Records with equal bundle values keep their relative order.
pub fn sort_records_by_bundle(
    records: &mut [AnnotatedRecord],
    bundle_column: &str,
    direction: SortDirection,
) {
    records.sort_by(|a, b| {
        let ordering = compare_bundles(
            a.fields.value_or_empty(bundle_column),
            b.fields.value_or_empty(bundle_column),
        );
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_bundles(a: &str, b: &str) -> Ordering {
    coerce_bundle(a).total_cmp(&coerce_bundle(b))
}
