//! Core CSV loader implementation
//!
//! Reads delimited text into header-keyed [`RawRecord`]s. Cell values are
//! kept verbatim so that spreadsheet artefacts such as `2.54712345678E+11`
//! reach the phone normalizer untouched.

use std::path::Path;
use tracing::{debug, info, warn};

use super::stats::{LoadResult, LoadStats};
use crate::app::models::RawRecord;
use crate::{Error, Result};

const UTF8_BOM: char = '\u{feff}';

/// CSV loader for uploaded contact datasets
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a CSV file
    ///
    /// # Arguments
    ///
    /// * `path` - CSV file with a header row
    ///
    /// # Returns
    ///
    /// The header list, records and load statistics, or
    /// [`Error::EmptyDataset`] when the file holds no data rows
    pub async fn load_file(&self, path: &Path) -> Result<LoadResult> {
        info!("Loading CSV file: {}", path.display());

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(format!("Failed to read file {}", path.display()), e)
        })?;

        self.parse_str(&content, &path.display().to_string())
    }

    /// Parse CSV text held in memory
    ///
    /// `source_name` only labels errors and log lines.
    pub fn parse_str(&self, content: &str, source_name: &str) -> Result<LoadResult> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let header_width = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(source_name, "Failed to read CSV headers", Some(e)))?
            .len();
        let kept_columns = read_columns(&mut csv_reader, source_name)?;
        let columns: Vec<String> = kept_columns.iter().map(|(_, name)| name.clone()).collect();
        debug!("Columns in {}: {:?}", source_name, columns);

        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            let row = result.map_err(|e| {
                Error::csv_parsing(
                    source_name,
                    format!("Failed to read data row {}", stats.total_rows + 1),
                    Some(e),
                )
            })?;
            stats.total_rows += 1;

            if row.len() < header_width {
                stats.padded_rows += 1;
            } else if row.len() > header_width {
                stats.truncated_rows += 1;
            }

            let record = kept_columns
                .iter()
                .map(|(cell, column)| (column.clone(), row.get(*cell).unwrap_or("").to_string()))
                .collect::<RawRecord>();
            records.push(record);
        }

        if records.is_empty() {
            return Err(Error::empty_dataset(source_name));
        }

        if !stats.is_rectangular() {
            warn!(
                "{} rows in {} did not match the header width ({} padded, {} truncated)",
                stats.ragged_rows(),
                source_name,
                stats.padded_rows,
                stats.truncated_rows
            );
        }

        info!(
            "Loaded {} records with {} columns from {}",
            records.len(),
            columns.len(),
            source_name
        );

        Ok(LoadResult {
            columns,
            records,
            stats,
        })
    }
}

/// Read the header row, trimming names and dropping repeated ones
///
/// Each kept column is paired with its cell index in the file, so values
/// after a dropped duplicate stay under their own header.
fn read_columns(
    csv_reader: &mut csv::Reader<&[u8]>,
    source_name: &str,
) -> Result<Vec<(usize, String)>> {
    let headers = csv_reader.headers().map_err(|e| {
        Error::csv_parsing(source_name, "Failed to read CSV headers", Some(e))
    })?;

    let mut columns: Vec<(usize, String)> = Vec::with_capacity(headers.len());
    for (cell, header) in headers.iter().map(str::trim).enumerate() {
        if columns.iter().any(|(_, existing)| existing == header) {
            warn!("Duplicate column '{}' in {} ignored", header, source_name);
            continue;
        }
        columns.push((cell, header.to_string()));
    }

    Ok(columns)
}
