//! Tests for the dataset pipeline state machine

use super::*;
use crate::Error;
use crate::app::models::{Carrier, EditTarget, PhoneIssue, SortDirection};
use crate::config::ExportOptions;

#[test]
fn test_new_rejects_empty_dataset() {
    let result = DatasetPipeline::new(vec!["phone".to_string()], Vec::new());
    assert!(matches!(result, Err(Error::EmptyDataset { .. })));
}

#[test]
fn test_process_scenario() {
    let mut pipeline = create_scenario_pipeline();
    assert!(!pipeline.is_processed());

    let stats = pipeline.process("phone", Some("bundle")).unwrap().clone();
    assert!(pipeline.is_processed());

    let validity: Vec<bool> = pipeline.records().iter().map(|r| r.is_valid).collect();
    assert_eq!(validity, vec![true, true, false, true]);

    let carriers: Vec<Option<Carrier>> = pipeline.records().iter().map(|r| r.carrier).collect();
    assert_eq!(carriers, vec![None, Some(Carrier::Safaricom), None, None]);

    let formatted: Vec<&str> = pipeline
        .records()
        .iter()
        .map(|r| r.formatted_phone.as_str())
        .collect();
    assert_eq!(
        formatted,
        vec!["+254797693561", "+254712345678", "", "+254797693561"]
    );

    // Rows 0 and 3 share a canonical number
    assert_eq!(stats.total_records, 4);
    assert_eq!(stats.valid_records, 3);
    assert_eq!(stats.invalid_records, 1);
    assert_eq!(stats.duplicate_count, 1);
    assert!(pipeline.records().iter().all(|r| r.invariants_hold()));
}

#[test]
fn test_process_distinct_numbers_have_no_duplicates() {
    let (columns, records) = create_raw_records(&[
        ("Amina", "0797693561", "10"),
        ("Brian", "+254712345678", "bad"),
        ("Chebet", "12345", "5"),
        ("Dennis", "733123456", "20"),
    ]);
    let mut pipeline = DatasetPipeline::new(columns, records).unwrap();

    let stats = pipeline.process("phone", None).unwrap();
    assert_eq!(stats.valid_records, 3);
    assert_eq!(stats.duplicate_count, 0);
}

#[test]
fn test_process_requires_phone_column() {
    let mut pipeline = create_scenario_pipeline();

    let err = pipeline.process("", None).unwrap_err();
    assert!(err.is_usage());
    assert!(!pipeline.is_processed());
}

#[test]
fn test_process_rejects_unknown_columns() {
    let mut pipeline = create_scenario_pipeline();

    assert!(matches!(
        pipeline.process("mobile", None),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        pipeline.process("phone", Some("airtime")),
        Err(Error::Configuration { .. })
    ));
    assert!(!pipeline.is_processed());
}

#[test]
fn test_process_replaces_collection() {
    let mut pipeline = create_duplicate_pipeline();
    pipeline.delete_row(0).unwrap();
    assert_eq!(pipeline.records().len(), 4);

    pipeline.process("phone", None).unwrap();
    assert_eq!(pipeline.records().len(), 5);
    assert_eq!(pipeline.records()[0].index, 0);
    assert_eq!(pipeline.selection().unwrap().bundle_column, None);
}

#[test]
fn test_operations_before_processing_are_usage_errors() {
    let mut pipeline = create_scenario_pipeline();

    assert!(pipeline.edit_field(0, EditTarget::Phone, "0712345678").unwrap_err().is_usage());
    assert!(pipeline.delete_row(0).unwrap_err().is_usage());
    assert!(pipeline.deduplicate().unwrap_err().is_usage());
    assert!(pipeline.sort_by_bundle(SortDirection::Descending).unwrap_err().is_usage());
    assert!(pipeline.export(&ExportOptions::default()).unwrap_err().is_usage());
    assert!(pipeline.stats().is_none());
    assert!(pipeline.records().is_empty());
}

#[test]
fn test_edit_phone_revalidates_and_mirrors() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", Some("bundle")).unwrap();

    let stats = pipeline
        .edit_field(2, EditTarget::Phone, "0722000111")
        .unwrap()
        .clone();

    let record = &pipeline.records()[2];
    assert!(record.is_valid);
    assert!(record.edited);
    assert_eq!(record.original_phone, "0722000111");
    assert_eq!(record.fields.get("phone"), Some("0722000111"));
    assert_eq!(record.formatted_phone, "+254722000111");
    assert_eq!(record.carrier, Some(Carrier::Safaricom));

    assert_eq!(stats.valid_records, 4);
    assert_eq!(stats.invalid_records, 0);
    assert_eq!(stats.carrier_count(Carrier::Safaricom), 2);
}

#[test]
fn test_edit_phone_column_by_name_is_phone_edit() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", None).unwrap();

    pipeline
        .edit_field(1, EditTarget::Column("phone".to_string()), "")
        .unwrap();

    let record = &pipeline.records()[1];
    assert!(!record.is_valid);
    assert_eq!(record.errors, vec![PhoneIssue::Empty]);
    assert_eq!(record.original_phone, "");
    assert_eq!(pipeline.stats().unwrap().valid_records, 2);
}

#[test]
fn test_edit_other_column_is_direct_overwrite() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", Some("bundle")).unwrap();
    let before = pipeline.records()[2].clone();

    pipeline
        .edit_field(2, EditTarget::Column("name".to_string()), "Chebet K.")
        .unwrap();

    let record = &pipeline.records()[2];
    assert!(record.edited);
    assert_eq!(record.fields.get("name"), Some("Chebet K."));
    assert_eq!(record.is_valid, before.is_valid);
    assert_eq!(record.errors, before.errors);
    assert_eq!(record.original_phone, before.original_phone);
}

#[test]
fn test_edit_rejects_stale_position_without_mutation() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", None).unwrap();
    let before = pipeline.records().to_vec();

    let err = pipeline
        .edit_field(4, EditTarget::Phone, "0712345678")
        .unwrap_err();
    assert!(matches!(err, Error::RowOutOfRange { position: 4, len: 4 }));
    assert_eq!(pipeline.records(), before.as_slice());
}

#[test]
fn test_edit_rejects_unknown_column() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", None).unwrap();

    let result = pipeline.edit_field(0, EditTarget::Column("email".to_string()), "a@b.c");
    assert!(matches!(result, Err(Error::Configuration { .. })));
    assert!(!pipeline.records()[0].edited);
}

#[test]
fn test_delete_row_keeps_stored_indices() {
    let mut pipeline = create_duplicate_pipeline();
    assert_eq!(pipeline.stats().unwrap().duplicate_count, 1);

    let removed = pipeline.delete_row(0).unwrap();
    assert_eq!(removed.index, 0);

    let indices: Vec<usize> = pipeline.records().iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);

    let stats = pipeline.stats().unwrap();
    assert_eq!(stats.total_records, 4);
    assert_eq!(stats.valid_records, 2);
    assert_eq!(stats.duplicate_count, 0);
}

#[test]
fn test_delete_row_out_of_range() {
    let mut pipeline = create_duplicate_pipeline();

    assert!(matches!(
        pipeline.delete_row(5),
        Err(Error::RowOutOfRange { position: 5, len: 5 })
    ));
    assert_eq!(pipeline.records().len(), 5);
}

#[test]
fn test_duplicate_patterns_preview() {
    let pipeline = create_duplicate_pipeline();

    assert_eq!(pipeline.duplicate_patterns().unwrap(), (2, 1, 1));
    assert_eq!(pipeline.records().len(), 5);

    let unprocessed = create_scenario_pipeline();
    assert!(unprocessed.duplicate_patterns().unwrap_err().is_usage());
}

#[test]
fn test_deduplicate() {
    let mut pipeline = create_duplicate_pipeline();

    let removed = pipeline.deduplicate().unwrap();
    assert_eq!(removed, 1);

    let names: Vec<&str> = pipeline
        .records()
        .iter()
        .map(|r| r.fields.value_or_empty("name"))
        .collect();
    assert_eq!(names, vec!["Amina", "Brian", "Chebet", "Chebet again"]);
    assert_eq!(pipeline.stats().unwrap().duplicate_count, 0);

    assert_eq!(pipeline.deduplicate().unwrap(), 0);
    assert_eq!(pipeline.records().len(), 4);
}

#[test]
fn test_sort_by_bundle_toggles_direction() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", Some("bundle")).unwrap();

    let next = pipeline.sort_by_bundle(SortDirection::Descending).unwrap();
    assert_eq!(next, SortDirection::Ascending);
    let bundles: Vec<&str> = pipeline
        .records()
        .iter()
        .map(|r| r.fields.value_or_empty("bundle"))
        .collect();
    assert_eq!(bundles, vec!["20", "10", "5", "bad"]);

    let next = pipeline.sort_by_bundle(next).unwrap();
    assert_eq!(next, SortDirection::Descending);
    let bundles: Vec<&str> = pipeline
        .records()
        .iter()
        .map(|r| r.fields.value_or_empty("bundle"))
        .collect();
    assert_eq!(bundles, vec!["bad", "5", "10", "20"]);

    assert_eq!(pipeline.stats().unwrap().total_records, 4);
}

#[test]
fn test_sort_requires_bundle_column() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", None).unwrap();
    let before = pipeline.records().to_vec();

    let err = pipeline.sort_by_bundle(SortDirection::Descending).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(pipeline.records(), before.as_slice());
}

#[test]
fn test_export_uses_selected_phone_column() {
    let mut pipeline = create_scenario_pipeline();
    pipeline.process("phone", None).unwrap();

    let rows = pipeline
        .export(&ExportOptions {
            valid_only: true,
            include_carrier: true,
        })
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("phone"), Some("+254797693561"));
    assert!(!rows[0].contains("Telco"));
    assert_eq!(rows[1].get("Telco"), Some("Safaricom"));
}

#[test]
fn test_invalid_rows_are_numbered_by_position() {
    let mut pipeline = create_duplicate_pipeline();
    pipeline.delete_row(0).unwrap();

    let invalid: Vec<(usize, usize)> = pipeline
        .invalid_rows()
        .map(|(row, record)| (row, record.index))
        .collect();
    assert_eq!(invalid, vec![(3, 3), (4, 4)]);
}

#[test]
fn test_reset() {
    let mut pipeline = create_duplicate_pipeline();

    pipeline.reset();

    assert!(!pipeline.is_processed());
    assert!(pipeline.records().is_empty());
    assert!(pipeline.raw_records().is_empty());
    assert!(pipeline.columns().is_empty());
    assert!(pipeline.selection().is_none());
}
