//! Tests for the record processing pipeline
//!
//! This module provides unit tests for every pipeline component plus shared
//! fixtures.

pub mod processor_tests;
pub mod sorting_tests;

// Test helper functions and fixtures
use crate::app::models::{AnnotatedRecord, RawRecord};
use crate::app::services::record_processor::{DatasetPipeline, enrich};

/// Annotate a single phone value as record `index`
pub fn create_annotated(index: usize, phone: &str) -> AnnotatedRecord {
    let fields = RawRecord::from_pairs([("phone", phone)]);
    AnnotatedRecord::new(fields, index, phone, enrich(phone))
}

/// Annotate a list of phone values in order
pub fn create_annotated_records(phones: &[&str]) -> Vec<AnnotatedRecord> {
    phones
        .iter()
        .enumerate()
        .map(|(index, phone)| create_annotated(index, phone))
        .collect()
}

/// Build `name,phone,bundle` raw rows
pub fn create_raw_records(rows: &[(&str, &str, &str)]) -> (Vec<String>, Vec<RawRecord>) {
    let columns = vec!["name".to_string(), "phone".to_string(), "bundle".to_string()];
    let records = rows
        .iter()
        .map(|&(name, phone, bundle)| {
            RawRecord::from_pairs([("name", name), ("phone", phone), ("bundle", bundle)])
        })
        .collect();
    (columns, records)
}

/// Phone scenario with three valid numbers and one short value
pub fn create_scenario_pipeline() -> DatasetPipeline {
    let (columns, records) = create_raw_records(&[
        ("Amina", "0797693561", "10"),
        ("Brian", "+254712345678", "bad"),
        ("Chebet", "12345", "5"),
        ("Dennis", "797693561", "20"),
    ]);
    DatasetPipeline::new(columns, records).unwrap()
}

/// Processed pipeline where rows 0 and 2 share a canonical number
pub fn create_duplicate_pipeline() -> DatasetPipeline {
    let (columns, records) = create_raw_records(&[
        ("Amina", "0712345678", "10"),
        ("Brian", "0722000111", "5"),
        ("Amina again", "+254 712 345 678", "20"),
        ("Chebet", "12345", "1"),
        ("Chebet again", "12345", "2"),
    ]);
    let mut pipeline = DatasetPipeline::new(columns, records).unwrap();
    pipeline.process("phone", Some("bundle")).unwrap();
    pipeline
}
