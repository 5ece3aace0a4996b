//! Phone number normalization into canonical `+254XXXXXXXXX` form
//!
//! Normalization runs as a fixed sequence of total steps: empty check,
//! scientific-notation recovery, digit extraction, shape normalization and
//! structural validation. Structural checks all run and their issues
//! accumulate, so a single bad value can report several problems at once.

use crate::app::models::{PhoneIssue, ValidationResult};
use crate::constants::{CANONICAL_DIGIT_COUNT, COUNTRY_CODE, MOBILE_RANGE_DIGITS};

use super::scientific::expand_scientific_notation;

/// Validate and format a raw phone value
///
/// # Arguments
///
/// * `raw` - Cell text exactly as read from the input (may be empty)
///
/// # Returns
///
/// A [`ValidationResult`] whose `formatted` value is `+254...` when valid and
/// empty otherwise
pub fn normalize(raw: &str) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::invalid(vec![PhoneIssue::Empty]);
    }

    let rendered = expand_scientific_notation(raw).unwrap_or_else(|| raw.to_string());
    let cleaned = strip_non_digits(&rendered);

    let mut errors = Vec::new();
    let cleaned = normalize_shape(cleaned, &mut errors);
    check_structure(&cleaned, &mut errors);

    ValidationResult::from_checks(&cleaned, errors)
}

/// Validate and format a numeric cell value
///
/// The number is rendered without an exponent before normalization, so
/// `2.54797693561e11` behaves exactly like the text `"254797693561"`.
pub fn normalize_number(value: f64) -> ValidationResult {
    normalize(&value.to_string())
}

/// Keep only ASCII digits
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Apply the first matching shape rule to the cleaned digit string
///
/// The 9-digit rule prepends the country code whatever the leading digit,
/// while the 10-digit rule only accepts a leading `7`. A 10-digit value
/// starting with `7` therefore becomes 13 digits and fails the length check.
fn normalize_shape(cleaned: String, errors: &mut Vec<PhoneIssue>) -> String {
    if cleaned.starts_with(COUNTRY_CODE) {
        cleaned
    } else if let Some(local) = cleaned.strip_prefix('0') {
        format!("{}{}", COUNTRY_CODE, local)
    } else if cleaned.len() == 9 {
        format!("{}{}", COUNTRY_CODE, cleaned)
    } else if cleaned.len() == 10 {
        if cleaned.starts_with('7') {
            format!("{}{}", COUNTRY_CODE, cleaned)
        } else {
            errors.push(PhoneIssue::InvalidFormat);
            cleaned
        }
    } else {
        cleaned
    }
}

fn check_structure(cleaned: &str, errors: &mut Vec<PhoneIssue>) {
    if cleaned.len() != CANONICAL_DIGIT_COUNT {
        errors.push(PhoneIssue::invalid_length(cleaned.len()));
    }

    if !cleaned.starts_with(COUNTRY_CODE) {
        errors.push(PhoneIssue::InvalidCountryCode);
    }

    // Empty input that survived stripping lands here
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(PhoneIssue::NonDigitCharacters);
    }

    let range_digit = cleaned.chars().nth(COUNTRY_CODE.len());
    if !range_digit.is_some_and(|digit| MOBILE_RANGE_DIGITS.contains(&digit)) {
        errors.push(PhoneIssue::InvalidMobileRange);
    }
}
