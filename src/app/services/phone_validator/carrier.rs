//! Carrier detection from canonical phone numbers
//!
//! Lookup goes through a prefix table built once from the constant carrier
//! lists. The tables cover the four named networks only and ignore number
//! portability, so every result is an estimate.

use crate::app::models::Carrier;
use crate::constants::{CANONICAL_PREFIX, CARRIER_PREFIX_LEN, COUNTRY_CODE, carrier_prefixes};
use std::collections::HashMap;
use std::sync::LazyLock;

static PREFIX_TABLE: LazyLock<HashMap<&'static str, Carrier>> = LazyLock::new(|| {
    Carrier::ALL
        .iter()
        .flat_map(|&carrier| {
            prefixes_for(carrier)
                .iter()
                .map(move |&prefix| (prefix, carrier))
        })
        .collect()
});

/// Reserved three-digit prefixes for a carrier
pub fn prefixes_for(carrier: Carrier) -> &'static [&'static str] {
    match carrier {
        Carrier::Safaricom => carrier_prefixes::SAFARICOM,
        Carrier::Airtel => carrier_prefixes::AIRTEL,
        Carrier::Telkom => carrier_prefixes::TELKOM,
        Carrier::Equitel => carrier_prefixes::EQUITEL,
    }
}

/// Detect the carrier of a canonical phone number
///
/// Accepts `+254XXXXXXXXX` or `254XXXXXXXXX`. Input too short to hold a
/// carrier prefix yields `None` rather than an error.
///
/// # Arguments
///
/// * `formatted` - Canonical phone number from the normalizer
///
/// # Returns
///
/// The carrier owning the three digits after the country code, if any
pub fn classify(formatted: &str) -> Option<Carrier> {
    let digits = formatted.strip_prefix(CANONICAL_PREFIX).unwrap_or(formatted);
    let start = COUNTRY_CODE.len();
    let prefix = digits.get(start..start + CARRIER_PREFIX_LEN)?;
    PREFIX_TABLE.get(prefix).copied()
}
