//! Phone validation for Kenyan mobile numbers
//!
//! This module turns free-text phone cells into canonical `+254XXXXXXXXX`
//! numbers with per-value diagnostics, and infers the carrier of canonical
//! numbers from static prefix tables.
//!
//! ## Architecture
//!
//! - [`normalizer`] - Raw value to [`ValidationResult`](crate::app::models::ValidationResult)
//! - [`scientific`] - Lossless recovery of exponent-notation digit strings
//! - [`carrier`] - Prefix-table carrier classification
//! - [`batch`] - Validation of loose value lists
//!
//! ## Usage
//!
//! ```rust
//! use csv_phone_cleaner::app::services::phone_validator::{classify, normalize};
//! use csv_phone_cleaner::Carrier;
//!
//! let result = normalize("0712 345-678");
//! assert!(result.is_valid());
//! assert_eq!(result.formatted(), "+254712345678");
//! assert_eq!(classify(result.formatted()), Some(Carrier::Safaricom));
//! ```

pub mod batch;
pub mod carrier;
pub mod normalizer;
pub mod scientific;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use batch::{BatchValidation, validate_batch};
pub use carrier::{classify, prefixes_for};
pub use normalizer::{normalize, normalize_number};
pub use scientific::{expand_scientific_notation, is_scientific_notation};
