//! Application constants for the phone cleaner
//!
//! This module contains the numbering-plan reference data, carrier prefix
//! tables, export naming rules and default values used throughout the
//! application.

// =============================================================================
// Numbering Plan
// =============================================================================

/// Kenyan country calling code
pub const COUNTRY_CODE: &str = "254";

/// Digits in a canonical number without the leading `+`
pub const CANONICAL_DIGIT_COUNT: usize = 12;

/// Prefix prepended to valid canonical numbers
pub const CANONICAL_PREFIX: char = '+';

/// Digits accepted directly after the country code
pub const MOBILE_RANGE_DIGITS: &[char] = &['7', '1'];

/// Length of the carrier prefix that follows the country code
pub const CARRIER_PREFIX_LEN: usize = 3;

/// Largest exponent expanded when undoing spreadsheet scientific notation
///
/// Canonical numbers need an exponent of 11; anything past this bound is
/// left as typed and fails the length check instead of allocating.
pub const MAX_SCIENTIFIC_EXPONENT: i64 = 64;

// =============================================================================
// Carrier Prefix Tables
// =============================================================================

/// Carrier prefix tables keyed on the three digits after `254`
///
/// Approximate: numbers can be ported between networks, so a match is a
/// best guess rather than a guarantee.
pub mod carrier_prefixes {
    pub const SAFARICOM: &[&str] = &[
        "700", "701", "702", "703", "704", "705", "706", "707", "708", "709", "710", "711", "712",
        "713", "714", "715", "716", "717", "718", "719", "720", "721", "722", "723", "724", "725",
        "726", "727", "728", "729", "739", "740", "741", "742", "743", "744", "745", "746", "747",
        "748", "749", "750", "751", "752", "753", "754", "755", "756", "757", "758", "759", "768",
        "769",
    ];

    pub const AIRTEL: &[&str] = &[
        "730", "731", "732", "733", "734", "735", "736", "737", "738", "760", "761", "762", "763",
        "764", "765", "766", "767",
    ];

    pub const TELKOM: &[&str] = &[
        "770", "771", "772", "773", "774", "775", "776", "777", "778", "779",
    ];

    pub const EQUITEL: &[&str] = &[
        "780", "781", "782", "783", "784", "785", "786", "787", "788", "789",
    ];
}

/// Caveat shown wherever carrier counts are reported
pub const CARRIER_PORTABILITY_CAVEAT: &str = "Results are approximate due to number portability in Kenya. \
     Actual telco may differ from detected provider.";

// =============================================================================
// Export
// =============================================================================

/// Column added to exported rows when carrier output is requested
pub const TELCO_COLUMN: &str = "Telco";

/// Base file name for a full export
pub const EXPORT_BASE_NAME: &str = "cleaned_data";

/// Base file name for a valid-only export
pub const EXPORT_VALID_ONLY_BASE_NAME: &str = "valid_records_only";

/// Suffix appended to the base name when the Telco column is included
pub const EXPORT_TELCO_SUFFIX: &str = "_with_telco";

/// Extension for exported files
pub const EXPORT_EXTENSION: &str = "csv";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

// =============================================================================
// Reporting
// =============================================================================

/// Datasets at least this large get a progress bar during processing
pub const PROGRESS_BAR_THRESHOLD: usize = 10_000;

/// Invalid rows listed in a human-readable summary before truncating
pub const MAX_REPORTED_INVALID_ROWS: usize = 20;
