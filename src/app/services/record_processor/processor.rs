//! Dataset pipeline implementation and state handling
//!
//! This module contains the [`DatasetPipeline`] that owns the loaded rows,
//! the annotated collection derived from them and its statistics. Every
//! mutating operation either completes, statistics included, or fails before
//! touching the collection.

use crate::app::models::{AnnotatedRecord, EditTarget, RawRecord, SortDirection};
use crate::app::services::csv_loader::LoadResult;
use crate::app::services::exporter;
use crate::config::{ColumnSelection, ExportOptions};
use crate::constants::PROGRESS_BAR_THRESHOLD;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::{
    deduplication::{analyze_duplicate_patterns, deduplicate_records},
    enrichment::{enrich_records, re_enrich_phone},
    sorting::sort_records_by_bundle,
    stats::DatasetStats,
};

/// Annotated collection plus the selection it was built with
#[derive(Debug, Clone)]
struct ProcessedState {
    selection: ColumnSelection,
    records: Vec<AnnotatedRecord>,
    stats: DatasetStats,
}

impl ProcessedState {
    fn recompute_stats(&mut self) {
        self.stats = DatasetStats::compute(&self.records);
    }
}

/// State machine over one loaded dataset
///
/// Raw rows are kept from load until [`reset`](Self::reset). Processing
/// builds the annotated collection, which edits, deletions, deduplication
/// and sorting then work on.
///
/// # Example
///
/// ```rust
/// use csv_phone_cleaner::{DatasetPipeline, RawRecord};
///
/// # fn example() -> csv_phone_cleaner::Result<()> {
/// let columns = vec!["name".to_string(), "phone".to_string()];
/// let records = vec![
///     RawRecord::from_pairs([("name", "Amina"), ("phone", "0712345678")]),
///     RawRecord::from_pairs([("name", "Brian"), ("phone", "12345")]),
/// ];
///
/// let mut pipeline = DatasetPipeline::new(columns, records)?;
/// let stats = pipeline.process("phone", None)?;
/// assert_eq!(stats.valid_records, 1);
/// assert_eq!(stats.invalid_records, 1);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DatasetPipeline {
    columns: Vec<String>,
    raw_records: Vec<RawRecord>,
    state: Option<ProcessedState>,
    show_progress: bool,
}

impl DatasetPipeline {
    /// Create a pipeline over loaded rows
    ///
    /// # Arguments
    ///
    /// * `columns` - Header names in file order
    /// * `raw_records` - Loaded rows, at least one
    pub fn new(columns: Vec<String>, raw_records: Vec<RawRecord>) -> Result<Self> {
        if raw_records.is_empty() {
            return Err(Error::empty_dataset("input"));
        }

        Ok(Self {
            columns,
            raw_records,
            state: None,
            show_progress: false,
        })
    }

    /// Create a pipeline from a loader result
    pub fn from_load_result(result: LoadResult) -> Result<Self> {
        Self::new(result.columns, result.records)
    }

    /// Show a progress bar while processing large datasets
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Annotate every raw record from the selected phone column
    ///
    /// Replaces any previously processed collection. Row order follows the
    /// input and each record's `index` is its position in this pass.
    ///
    /// # Arguments
    ///
    /// * `phone_column` - Column holding phone values (required)
    /// * `bundle_column` - Optional numeric column used for sorting
    ///
    /// # Returns
    ///
    /// Statistics over the new collection
    pub fn process(
        &mut self,
        phone_column: &str,
        bundle_column: Option<&str>,
    ) -> Result<&DatasetStats> {
        let selection = ColumnSelection::new(phone_column, bundle_column.map(str::to_string));
        selection.validate(&self.columns)?;

        info!(
            "Processing {} records using phone column '{}'",
            self.raw_records.len(),
            phone_column
        );

        let progress_bar = (self.show_progress && self.raw_records.len() >= PROGRESS_BAR_THRESHOLD)
            .then(|| {
                Self::create_processing_progress_bar(
                    self.raw_records.len() as u64,
                    "Validating phone numbers",
                )
            });

        let records = enrich_records(
            &self.raw_records,
            &selection.phone_column,
            progress_bar.as_ref(),
        );

        if let Some(pb) = progress_bar {
            pb.finish_with_message(format!("Validated {} records", records.len()));
        }

        let stats = DatasetStats::compute(&records);
        info!("Processing complete: {}", stats.summary());

        let state = self.state.insert(ProcessedState {
            selection,
            records,
            stats,
        });
        Ok(&state.stats)
    }

    /// Overwrite one field of the record at a current position
    ///
    /// A phone edit re-runs enrichment and mirrors the value into the raw
    /// phone cell. Any other column is overwritten directly.
    ///
    /// # Arguments
    ///
    /// * `position` - Zero-based position in the current collection
    /// * `target` - Field to change
    /// * `value` - New raw value
    pub fn edit_field(
        &mut self,
        position: usize,
        target: EditTarget,
        value: &str,
    ) -> Result<&DatasetStats> {
        let columns = &self.columns;
        let state = Self::processed_mut(&mut self.state, "edit")?;
        let len = state.records.len();
        let phone_column = state.selection.phone_column.clone();

        let target = target.resolve(&phone_column);
        if let EditTarget::Column(column) = &target {
            if !columns.iter().any(|known| known == column) {
                return Err(Error::configuration(format!(
                    "Unknown column '{}'. Available columns: {}",
                    column,
                    columns.join(", ")
                )));
            }
        }

        let record = state
            .records
            .get_mut(position)
            .ok_or_else(|| Error::row_out_of_range(position, len))?;

        match target {
            EditTarget::Phone => re_enrich_phone(record, &phone_column, value),
            EditTarget::Column(column) => {
                debug!(
                    "Setting '{}' on record {} to '{}'",
                    column, record.index, value
                );
                record.fields.set(column, value);
                record.edited = true;
            }
        }

        state.recompute_stats();
        Ok(&state.stats)
    }

    /// Remove the record at a current position
    ///
    /// Remaining records keep their stored `index`.
    ///
    /// # Returns
    ///
    /// The removed record
    pub fn delete_row(&mut self, position: usize) -> Result<AnnotatedRecord> {
        let state = Self::processed_mut(&mut self.state, "delete")?;
        if position >= state.records.len() {
            return Err(Error::row_out_of_range(position, state.records.len()));
        }

        let removed = state.records.remove(position);
        state.recompute_stats();

        debug!(
            "Deleted record {} at position {}, {} records remaining",
            removed.index,
            position,
            state.records.len()
        );
        Ok(removed)
    }

    /// Drop later rows that repeat a valid canonical number
    ///
    /// # Returns
    ///
    /// Number of rows removed
    pub fn deduplicate(&mut self) -> Result<usize> {
        let state = Self::processed_mut(&mut self.state, "deduplicate")?;

        let (distinct, repeated, _) = analyze_duplicate_patterns(&state.records);
        debug!("{} distinct valid numbers, {} repeated", distinct, repeated);

        let records = std::mem::take(&mut state.records);
        let (records, removed) = deduplicate_records(records);
        state.records = records;
        state.recompute_stats();

        Ok(removed)
    }

    /// Count what a deduplication pass would remove, without removing it
    ///
    /// # Returns
    ///
    /// Tuple of (distinct valid numbers, numbers occurring more than once,
    /// removable rows)
    pub fn duplicate_patterns(&self) -> Result<(usize, usize, usize)> {
        let state = self.processed("analyze duplicates")?;
        Ok(analyze_duplicate_patterns(&state.records))
    }

    /// Stable sort by the selected bundle column
    ///
    /// # Arguments
    ///
    /// * `direction` - Direction to sort in now
    ///
    /// # Returns
    ///
    /// The direction the next sort should use
    pub fn sort_by_bundle(&mut self, direction: SortDirection) -> Result<SortDirection> {
        let state = Self::processed_mut(&mut self.state, "sort")?;
        let bundle_column = state
            .selection
            .bundle_column
            .clone()
            .ok_or_else(|| Error::usage("Please select a bundle column to sort"))?;

        info!("Sorting by '{}' ({})", bundle_column, direction);
        sort_records_by_bundle(&mut state.records, &bundle_column, direction);
        state.recompute_stats();

        Ok(direction.toggled())
    }

    /// Project the current collection into exportable rows
    pub fn export(&self, options: &ExportOptions) -> Result<Vec<RawRecord>> {
        let state = self.processed("export")?;
        exporter::project(
            &state.records,
            Some(state.selection.phone_column.as_str()),
            options,
        )
    }

    /// Drop processed state and loaded rows
    pub fn reset(&mut self) {
        info!("Resetting pipeline");
        self.state = None;
        self.raw_records.clear();
        self.columns.clear();
    }

    /// Check if the dataset has been processed
    pub fn is_processed(&self) -> bool {
        self.state.is_some()
    }

    /// Annotated records in current order, empty before processing
    pub fn records(&self) -> &[AnnotatedRecord] {
        self.state
            .as_ref()
            .map(|state| state.records.as_slice())
            .unwrap_or(&[])
    }

    /// Statistics over the current collection
    pub fn stats(&self) -> Option<&DatasetStats> {
        self.state.as_ref().map(|state| &state.stats)
    }

    /// Header names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Column selection used by the last processing pass
    pub fn selection(&self) -> Option<&ColumnSelection> {
        self.state.as_ref().map(|state| &state.selection)
    }

    /// Rows as loaded
    pub fn raw_records(&self) -> &[RawRecord] {
        &self.raw_records
    }

    /// Records with phone issues, numbered from 1 by current position
    pub fn invalid_rows(&self) -> impl Iterator<Item = (usize, &AnnotatedRecord)> {
        self.records()
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.is_valid)
            .map(|(position, record)| (position + 1, record))
    }

    fn processed(&self, operation: &str) -> Result<&ProcessedState> {
        self.state
            .as_ref()
            .ok_or_else(|| Error::usage(format!("Process the data before trying to {}", operation)))
    }

    fn processed_mut<'a>(
        state: &'a mut Option<ProcessedState>,
        operation: &str,
    ) -> Result<&'a mut ProcessedState> {
        state
            .as_mut()
            .ok_or_else(|| Error::usage(format!("Process the data before trying to {}", operation)))
    }

    /// Create a progress bar for processing operations
    fn create_processing_progress_bar(total: u64, operation: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(operation.to_string());
        pb
    }
}
