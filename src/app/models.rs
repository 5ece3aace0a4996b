//! Data models for phone cleaning
//!
//! This module contains the core data structures for representing raw CSV
//! rows, phone validation outcomes, carrier classification and the annotated
//! records the dataset pipeline works on.

use crate::constants::{CANONICAL_DIGIT_COUNT, CANONICAL_PREFIX};
use crate::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Raw Records
// =============================================================================

/// One row from the input collaborator: column name to raw cell value
///
/// Fields keep their insertion order so export can follow the first record's
/// key order. Lookups are by name; order carries no meaning for processing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Build a record from `(column, value)` pairs, later duplicates overwrite earlier ones
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.set(key, value);
        }
        record
    }

    /// Get the value stored under `column`
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value.as_str())
    }

    /// Get the value under `column`, treating an absent column as empty
    pub fn value_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Set `column` to `value`, appending the column if it is new
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Remove `column`, returning its value if present
    pub fn remove(&mut self, column: &str) -> Option<String> {
        let position = self.fields.iter().position(|(key, _)| key == column)?;
        Some(self.fields.remove(position).1)
    }

    /// Whether `column` is present
    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(key, _)| key == column)
    }

    /// Column names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// `(column, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

// =============================================================================
// Phone Validation
// =============================================================================

/// A single reason a phone value failed normalization
///
/// The rendered text is what users see in reports and CSV error columns.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneIssue {
    #[error("Phone number is empty")]
    Empty,

    /// Ten digits that do not start with 7
    #[error("Invalid phone number format")]
    InvalidFormat,

    #[error("Invalid length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid country code: must start with 254")]
    InvalidCountryCode,

    #[error("Phone number contains non-digit characters")]
    NonDigitCharacters,

    #[error("Invalid Kenyan mobile number (must start with 254-7xx or 254-1xx)")]
    InvalidMobileRange,
}

impl PhoneIssue {
    /// Length issue against the canonical digit count
    pub fn invalid_length(actual: usize) -> Self {
        Self::InvalidLength {
            expected: CANONICAL_DIGIT_COUNT,
            actual,
        }
    }
}

impl Serialize for PhoneIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of normalizing one raw phone value
///
/// Built in one piece by the normalizer: `formatted` is non-empty exactly
/// when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    formatted: String,
    errors: Vec<PhoneIssue>,
}

impl ValidationResult {
    /// Build a result from the cleaned digit string and the accumulated issues
    pub fn from_checks(cleaned: &str, errors: Vec<PhoneIssue>) -> Self {
        if errors.is_empty() {
            Self {
                is_valid: true,
                formatted: format!("{}{}", CANONICAL_PREFIX, cleaned),
                errors,
            }
        } else {
            Self::invalid(errors)
        }
    }

    /// Build an invalid result
    pub fn invalid(errors: Vec<PhoneIssue>) -> Self {
        debug_assert!(!errors.is_empty(), "invalid result needs at least one issue");
        Self {
            is_valid: false,
            formatted: String::new(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Canonical `+254XXXXXXXXX` form, empty when invalid
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn errors(&self) -> &[PhoneIssue] {
        &self.errors
    }

    /// Split into `(is_valid, formatted, errors)`
    pub fn into_parts(self) -> (bool, String, Vec<PhoneIssue>) {
        (self.is_valid, self.formatted, self.errors)
    }
}

// =============================================================================
// Carriers
// =============================================================================

/// Mobile network operator inferred from a number's prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Carrier {
    Safaricom,
    Airtel,
    Telkom,
    Equitel,
}

impl Carrier {
    /// All carriers with a prefix table
    pub const ALL: [Carrier; 4] = [
        Carrier::Safaricom,
        Carrier::Airtel,
        Carrier::Telkom,
        Carrier::Equitel,
    ];

    /// Capitalised display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Carrier::Safaricom => "Safaricom",
            Carrier::Airtel => "Airtel",
            Carrier::Telkom => "Telkom",
            Carrier::Equitel => "Equitel",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Annotated Records
// =============================================================================

/// Derived phone fields produced by the record enricher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub formatted_phone: String,
    pub is_valid: bool,
    pub errors: Vec<PhoneIssue>,
    pub carrier: Option<Carrier>,
}

/// A raw record plus its phone validation bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRecord {
    /// Original columns; the phone column mirrors `original_phone` after an edit
    pub fields: RawRecord,

    /// Position in the collection when it was processed
    ///
    /// Stable identifier for error reporting. Not renumbered on deletion, so
    /// it is not an offset into the current collection.
    pub index: usize,

    /// Raw phone value at the last enrichment or edit
    pub original_phone: String,

    /// Canonical phone, non-empty only when valid
    pub formatted_phone: String,

    pub is_valid: bool,

    /// Validation failure reasons, empty iff valid
    pub errors: Vec<PhoneIssue>,

    /// Detected carrier, only ever set on valid records
    pub carrier: Option<Carrier>,

    /// Set once any field has been overridden after processing
    pub edited: bool,
}

impl AnnotatedRecord {
    /// Create an annotated record from its raw fields and an enrichment
    pub fn new(
        fields: RawRecord,
        index: usize,
        original_phone: impl Into<String>,
        enrichment: Enrichment,
    ) -> Self {
        let mut record = Self {
            fields,
            index,
            original_phone: original_phone.into(),
            formatted_phone: String::new(),
            is_valid: false,
            errors: Vec::new(),
            carrier: None,
            edited: false,
        };
        record.apply_enrichment(enrichment);
        record
    }

    /// Overwrite the derived phone fields
    pub fn apply_enrichment(&mut self, enrichment: Enrichment) {
        self.formatted_phone = enrichment.formatted_phone;
        self.is_valid = enrichment.is_valid;
        self.errors = enrichment.errors;
        self.carrier = enrichment.carrier;
    }

    /// Check the validity bookkeeping is self-consistent
    pub fn invariants_hold(&self) -> bool {
        self.is_valid == self.errors.is_empty()
            && self.is_valid == !self.formatted_phone.is_empty()
            && (self.carrier.is_none() || self.is_valid)
    }

    /// Errors joined for single-line reports
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// Pipeline Controls
// =============================================================================

/// Sort order for bundle sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest bundle first
    Ascending,
    /// Largest bundle first
    #[default]
    Descending,
}

impl SortDirection {
    /// The direction the next sort should use
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(Error::configuration(format!(
                "Unknown sort direction '{}': expected 'asc' or 'desc'",
                other
            ))),
        }
    }
}

/// Field targeted by a single-row edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// The designated phone field; triggers revalidation
    Phone,
    /// Any other column, overwritten directly
    Column(String),
}

impl EditTarget {
    /// Resolve a column edit that names the phone column into a phone edit
    pub fn resolve(self, phone_column: &str) -> Self {
        match self {
            EditTarget::Column(name) if name == phone_column => EditTarget::Phone,
            other => other,
        }
    }
}
