//! Test utilities for exporter testing

use crate::app::models::{AnnotatedRecord, RawRecord};
use crate::app::services::record_processor::enrich;


/// Annotate a `name,phone` row the way the pipeline would
pub fn create_annotated(index: usize, name: &str, phone: &str) -> AnnotatedRecord {
    let fields = RawRecord::from_pairs([("name", name), ("phone", phone)]);
    AnnotatedRecord::new(fields, index, phone, enrich(phone))
}

/// One Safaricom number, one valid number without a known carrier, one invalid
pub fn create_mixed_records() -> Vec<AnnotatedRecord> {
    vec![
        create_annotated(0, "Amina", "0712345678"),
        create_annotated(1, "Brian", "0797693561"),
        create_annotated(2, "Chebet", "12345"),
    ]
}
