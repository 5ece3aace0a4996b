//! Record processing pipeline for contact datasets
//!
//! This module holds the stateful part of the cleaner: it annotates loaded
//! rows with phone validation results and keeps the collection and its
//! statistics consistent while the user edits, deletes, deduplicates and
//! sorts.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - [`DatasetPipeline`] state machine and operation orchestration
//! - [`enrichment`] - The single phone revalidation path
//! - [`deduplication`] - First-occurrence deduplication on canonical numbers
//! - [`sorting`] - Bundle value coercion and stable sorting
//! - [`stats`] - Whole-collection statistics
//!
//! # Statistics
//!
//! [`DatasetStats`] is recomputed from the full collection after every
//! mutation. A single edit therefore costs O(n), which is fine for
//! spreadsheet-sized inputs.
//!
//! # Example Usage
//!
//! ```rust
//! use csv_phone_cleaner::{DatasetPipeline, RawRecord};
//! use csv_phone_cleaner::app::models::SortDirection;
//!
//! # fn example() -> csv_phone_cleaner::Result<()> {
//! let columns = vec!["phone".to_string(), "bundle".to_string()];
//! let records = vec![
//!     RawRecord::from_pairs([("phone", "0712345678"), ("bundle", "5")]),
//!     RawRecord::from_pairs([("phone", "+254712345678"), ("bundle", "20")]),
//! ];
//!
//! let mut pipeline = DatasetPipeline::new(columns, records)?;
//! pipeline.process("phone", Some("bundle"))?;
//! assert_eq!(pipeline.stats().map(|s| s.duplicate_count), Some(1));
//!
//! let next = pipeline.sort_by_bundle(SortDirection::Descending)?;
//! assert_eq!(next, SortDirection::Ascending);
//!
//! assert_eq!(pipeline.deduplicate()?, 1);
//! println!("{}", pipeline.stats().map(|s| s.summary()).unwrap_or_default());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod deduplication;
pub mod enrichment;
pub mod processor;
pub mod sorting;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::DatasetPipeline;
pub use stats::DatasetStats;

// Re-export utility functions that might be useful externally
pub use deduplication::{analyze_duplicate_patterns, deduplicate_records};
pub use enrichment::enrich;
pub use sorting::coerce_bundle;
