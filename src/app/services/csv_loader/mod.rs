//! CSV loading for contact datasets
//!
//! This module is the input side of the cleaner: it turns a delimited text
//! file with a header row into the column list and [`RawRecord`] collection
//! the dataset pipeline consumes.
//!
//! ## Architecture
//!
//! - [`loader`] - File reading, header handling and row shaping
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use csv_phone_cleaner::app::services::csv_loader::CsvLoader;
//!
//! # fn example() -> csv_phone_cleaner::Result<()> {
//! let result = CsvLoader::new().parse_str("name,phone\nAmina,0712345678\n", "inline")?;
//!
//! assert_eq!(result.columns, vec!["name", "phone"]);
//! assert_eq!(result.records[0].get("phone"), Some("0712345678"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`RawRecord`]: crate::app::models::RawRecord

pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::CsvLoader;
pub use stats::{LoadResult, LoadStats};
