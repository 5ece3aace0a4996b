//! Phone enrichment for raw records
//!
//! This is the single revalidation path: bulk processing and single-field
//! edits both derive a record's phone bookkeeping through [`enrich`].

use crate::app::models::{AnnotatedRecord, Enrichment, RawRecord};
use crate::app::services::phone_validator::{classify, normalize};
use indicatif::ProgressBar;
use tracing::debug;

/// Derive validity, canonical form and carrier from a raw phone value
///
/// The carrier is only looked up for valid numbers, so an invalid value never
/// carries a carrier.
///
/// # Arguments
///
/// * `phone_value` - Raw cell text from the phone column
///
/// # Returns
///
/// The derived fields to store on an [`AnnotatedRecord`]
pub fn enrich(phone_value: &str) -> Enrichment {
    let (is_valid, formatted_phone, errors) = normalize(phone_value).into_parts();
    let carrier = if is_valid {
        classify(&formatted_phone)
    } else {
        None
    };

    Enrichment {
        formatted_phone,
        is_valid,
        errors,
        carrier,
    }
}

/// Annotate every raw record in input order
///
/// # Arguments
///
/// * `records` - Raw records from the loader
/// * `phone_column` - Column holding the phone values
/// * `progress_bar` - Optional progress bar for tracking progress
///
/// # Returns
///
/// One annotated record per input, with `index` set to its position
pub fn enrich_records(
    records: &[RawRecord],
    phone_column: &str,
    progress_bar: Option<&ProgressBar>,
) -> Vec<AnnotatedRecord> {
    let mut annotated = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let phone_value = record.value_or_empty(phone_column);
        annotated.push(AnnotatedRecord::new(
            record.clone(),
            index,
            phone_value,
            enrich(phone_value),
        ));

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    debug!(
        "Enriched {} records from column '{}'",
        annotated.len(),
        phone_column
    );

    annotated
}

/// Re-run enrichment after the phone cell of a record was edited
///
/// Writes the new value into both `original_phone` and the raw phone column
/// so the displayed and exported cell follows the edit.
pub fn re_enrich_phone(record: &mut AnnotatedRecord, phone_column: &str, value: &str) {
    record.original_phone = value.to_string();
    record.fields.set(phone_column, value);
    record.apply_enrichment(enrich(value));
    record.edited = true;

    debug!(
        "Revalidated record {}: valid={}, formatted='{}'",
        record.index, record.is_valid, record.formatted_phone
    );
}
