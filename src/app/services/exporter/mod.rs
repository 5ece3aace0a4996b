//! Export of cleaned datasets
//!
//! This module projects the annotated collection back into the input's
//! column shape and encodes it as CSV for the file writer.
//!
//! ## Architecture
//!
//! - [`projector`] - Filtering, canonical phone substitution and the optional `Telco` column
//! - [`csv_writer`] - Header derivation, CSV encoding and output file naming

pub mod csv_writer;
pub mod projector;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use csv_writer::{export_file_name, export_headers, to_csv_string};
pub use projector::project;
