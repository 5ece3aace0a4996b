//! Projection of annotated records back into plain rows

use crate::app::models::{AnnotatedRecord, RawRecord};
use crate::config::ExportOptions;
use crate::constants::TELCO_COLUMN;
use crate::{Error, Result};
use tracing::{debug, info};

/// Turn annotated records into exportable rows
///
/// Valid records export their canonical number in the phone column. With
/// `include_carrier`, records with a detected carrier gain a `Telco` cell;
/// records without one do not get the key at all. Bookkeeping such as
/// validity and errors never reaches the output.
///
/// # Arguments
///
/// * `records` - Current annotated collection
/// * `phone_column` - Column to overwrite with canonical numbers, if any
/// * `options` - Filtering and carrier column switches
///
/// # Returns
///
/// Plain rows in collection order, or [`Error::EmptyExport`] when a
/// valid-only export has nothing left
pub fn project(
    records: &[AnnotatedRecord],
    phone_column: Option<&str>,
    options: &ExportOptions,
) -> Result<Vec<RawRecord>> {
    let phone_column = phone_column.filter(|column| !column.is_empty());

    let retained: Vec<&AnnotatedRecord> = records
        .iter()
        .filter(|record| !options.valid_only || record.is_valid)
        .collect();

    if options.valid_only && retained.is_empty() {
        return Err(Error::empty_export("no valid records to export"));
    }

    let rows: Vec<RawRecord> = retained
        .into_iter()
        .map(|record| project_record(record, phone_column, options.include_carrier))
        .collect();

    info!(
        "Projected {} of {} records for export (valid_only={}, include_carrier={})",
        rows.len(),
        records.len(),
        options.valid_only,
        options.include_carrier
    );

    Ok(rows)
}

fn project_record(
    record: &AnnotatedRecord,
    phone_column: Option<&str>,
    include_carrier: bool,
) -> RawRecord {
    let mut row = record.fields.clone();

    if let Some(column) = phone_column {
        if !record.formatted_phone.is_empty() {
            row.set(column, record.formatted_phone.as_str());
        }
    }

    if include_carrier {
        if let Some(carrier) = record.carrier {
            row.set(TELCO_COLUMN, carrier.display_name());
        } else {
            debug!("Record {} has no detected carrier", record.index);
        }
    }

    row
}
