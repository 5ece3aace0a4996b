//! Recovery of digit strings mangled into scientific notation
//!
//! Spreadsheet tools coerce long digit runs into exponent form
//! (`2.54797e+11`). The expansion here works on the decimal digit string
//! itself, so no precision is lost to binary floating point regardless of how
//! many significant digits the mantissa carries.

use crate::constants::MAX_SCIENTIFIC_EXPONENT;
use regex::Regex;
use std::sync::LazyLock;

/// Whole-value exponent notation: sign, mantissa, `e`/`E`, signed exponent
static SCIENTIFIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?)([0-9]*)(?:\.([0-9]*))?[eE]([+-]?[0-9]+)\s*$")
        .expect("scientific notation pattern is valid")
});

/// Check whether a raw value is written in exponent notation
pub fn is_scientific_notation(value: &str) -> bool {
    parse_parts(value).is_some()
}

/// Re-render an exponent-notation value as a plain decimal integer string
///
/// A fractional remainder is rounded half-up. Values that are not in
/// exponent notation, or whose exponent exceeds
/// [`MAX_SCIENTIFIC_EXPONENT`], yield `None` and should be used as typed.
///
/// # Arguments
///
/// * `value` - Raw cell text, e.g. `"2.54797693561e11"`
///
/// # Returns
///
/// The expanded integer string, e.g. `"254797693561"`
pub fn expand_scientific_notation(value: &str) -> Option<String> {
    let parts = parse_parts(value)?;
    if parts.exponent.unsigned_abs() > MAX_SCIENTIFIC_EXPONENT.unsigned_abs() {
        return None;
    }

    let digits = format!("{}{}", parts.integer, parts.fraction);
    let point = parts.integer.len() as i64 + parts.exponent;

    let (integer, fraction) = if point >= digits.len() as i64 {
        let padding = "0".repeat((point - digits.len() as i64) as usize);
        (format!("{}{}", digits, padding), String::new())
    } else if point <= 0 {
        let padding = "0".repeat((-point) as usize);
        ("0".to_string(), format!("{}{}", padding, digits))
    } else {
        let split = point as usize;
        (digits[..split].to_string(), digits[split..].to_string())
    };

    let mut integer = strip_leading_zeros(&integer);
    if fraction.as_bytes().first().is_some_and(|&b| b >= b'5') {
        integer = increment_decimal(&integer);
    }

    if parts.negative && integer != "0" {
        Some(format!("-{}", integer))
    } else {
        Some(integer)
    }
}

struct ScientificParts<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
}

fn parse_parts(value: &str) -> Option<ScientificParts<'_>> {
    let captures = SCIENTIFIC_PATTERN.captures(value)?;
    let integer = captures.get(2).map_or("", |m| m.as_str());
    let fraction = captures.get(3).map_or("", |m| m.as_str());
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    // Overflowing exponents are far past the cap anyway
    let exponent = captures
        .get(4)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(i64::MAX);

    Some(ScientificParts {
        negative: captures.get(1).is_some_and(|m| m.as_str() == "-"),
        integer,
        fraction,
        exponent,
    })
}

fn strip_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Add one to a non-negative decimal digit string
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8(bytes).unwrap_or_default();
        }
    }
    format!("1{}", String::from_utf8(bytes).unwrap_or_default())
}
