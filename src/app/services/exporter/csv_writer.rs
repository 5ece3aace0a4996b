//! CSV encoding for exported rows

use crate::app::models::RawRecord;
use crate::config::ExportOptions;
use crate::constants::{
    EXPORT_BASE_NAME, EXPORT_EXTENSION, EXPORT_TELCO_SUFFIX, EXPORT_VALID_ONLY_BASE_NAME,
};
use crate::{Error, Result};
use tracing::debug;

/// Header row for a set of exported rows
///
/// Follows the first row's key order, then appends keys that first appear
/// on later rows.
pub fn export_headers(rows: &[RawRecord]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for key in rows.iter().flat_map(RawRecord::keys) {
        if !headers.iter().any(|header| header == key) {
            headers.push(key.to_string());
        }
    }
    headers
}

/// Encode rows as CSV text
///
/// Comma delimited with `\n` line endings. Fields are quoted only when they
/// hold a comma, a quote or a line break, with inner quotes doubled. A
/// missing key is written as an empty cell. No rows encode to an empty
/// string.
///
/// # Arguments
///
/// * `rows` - Projected rows from the exporter
///
/// # Returns
///
/// The header line followed by one line per row
pub fn to_csv_string(rows: &[RawRecord]) -> Result<String> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let headers = export_headers(rows);
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(&headers)
        .map_err(|e| Error::csv_encoding("Failed to encode export header row", e))?;

    for (position, row) in rows.iter().enumerate() {
        writer
            .write_record(headers.iter().map(|header| row.value_or_empty(header)))
            .map_err(|e| {
                Error::csv_encoding(format!("Failed to encode export row {}", position + 1), e)
            })?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        Error::io(
            "Failed to flush CSV output",
            std::io::Error::new(e.error().kind(), e.error().to_string()),
        )
    })?;

    debug!(
        "Encoded {} rows with {} columns ({} bytes)",
        rows.len(),
        headers.len(),
        bytes.len()
    );

    String::from_utf8(bytes).map_err(|e| {
        Error::io(
            "CSV output is not valid UTF-8",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

/// Output file name for an export variant
pub fn export_file_name(options: &ExportOptions) -> String {
    let base = if options.valid_only {
        EXPORT_VALID_ONLY_BASE_NAME
    } else {
        EXPORT_BASE_NAME
    };
    let suffix = if options.include_carrier {
        EXPORT_TELCO_SUFFIX
    } else {
        ""
    };
    format!("{}{}.{}", base, suffix, EXPORT_EXTENSION)
}
