//! Tests for bundle coercion and sorting

use super::*;
use crate::app::models::{AnnotatedRecord, SortDirection};
use crate::app::services::record_processor::sorting::{coerce_bundle, sort_records_by_bundle};

fn with_bundles(bundles: &[&str]) -> Vec<AnnotatedRecord> {
    bundles
        .iter()
        .enumerate()
        .map(|(index, bundle)| {
            let mut record = create_annotated(index, "0712345678");
            record.fields.set("bundle", *bundle);
            record
        })
        .collect()
}

fn bundle_order(records: &[AnnotatedRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|record| record.fields.value_or_empty("bundle"))
        .collect()
}

#[test]
fn test_coerce_bundle_numbers() {
    assert_eq!(coerce_bundle("20"), 20.0);
    assert_eq!(coerce_bundle("-3"), -3.0);
    assert_eq!(coerce_bundle("1.5"), 1.5);
    assert_eq!(coerce_bundle(".5"), 0.5);
    assert_eq!(coerce_bundle("1e3"), 1000.0);
    assert_eq!(coerce_bundle("  7"), 7.0);
}

#[test]
fn test_coerce_bundle_leading_prefix() {
    assert_eq!(coerce_bundle("20 MB"), 20.0);
    assert_eq!(coerce_bundle("1.5GB"), 1.5);
    assert_eq!(coerce_bundle("3e"), 3.0);
}

#[test]
fn test_coerce_bundle_non_numeric_is_zero() {
    assert_eq!(coerce_bundle(""), 0.0);
    assert_eq!(coerce_bundle("bad"), 0.0);
    assert_eq!(coerce_bundle("MB 20"), 0.0);
    assert_eq!(coerce_bundle("1e999"), 0.0);
}

#[test]
fn test_sort_descending() {
    let mut records = with_bundles(&["10", "bad", "5", "20"]);
    sort_records_by_bundle(&mut records, "bundle", SortDirection::Descending);
    assert_eq!(bundle_order(&records), vec!["20", "10", "5", "bad"]);
}

#[test]
fn test_sort_ascending() {
    let mut records = with_bundles(&["10", "bad", "5", "20"]);
    sort_records_by_bundle(&mut records, "bundle", SortDirection::Ascending);
    assert_eq!(bundle_order(&records), vec!["bad", "5", "10", "20"]);
}

#[test]
fn test_sort_is_stable() {
    let mut records = with_bundles(&["5", "x", "5", "", "5"]);
    sort_records_by_bundle(&mut records, "bundle", SortDirection::Descending);

    let indices: Vec<usize> = records.iter().map(|record| record.index).collect();
    assert_eq!(indices, vec![0, 2, 4, 1, 3]);
}

#[test]
fn test_negative_zero_ties_with_non_numeric() {
    assert!(coerce_bundle("-0").is_sign_positive());
    assert!(coerce_bundle("-0.0 MB").is_sign_positive());

    let mut records = with_bundles(&["x", "-0", "0", "abc"]);
    sort_records_by_bundle(&mut records, "bundle", SortDirection::Ascending);
    assert_eq!(bundle_order(&records), vec!["x", "-0", "0", "abc"]);

    sort_records_by_bundle(&mut records, "bundle", SortDirection::Descending);
    assert_eq!(bundle_order(&records), vec!["x", "-0", "0", "abc"]);
}

#[test]
fn test_sort_missing_column_keeps_order() {
    let mut records = with_bundles(&["10", "5", "20"]);
    sort_records_by_bundle(&mut records, "airtime", SortDirection::Descending);

    let indices: Vec<usize> = records.iter().map(|record| record.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}
