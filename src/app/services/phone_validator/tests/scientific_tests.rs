//! Tests for scientific-notation recovery

use crate::app::services::phone_validator::scientific::{
    expand_scientific_notation, is_scientific_notation,
};

#[test]
fn test_detects_exponent_notation() {
    assert!(is_scientific_notation("2.54797e+11"));
    assert!(is_scientific_notation("1E5"));
    assert!(is_scientific_notation(" 2.5e3 "));
    assert!(is_scientific_notation(".5e1"));
}

#[test]
fn test_rejects_non_exponent_values() {
    assert!(!is_scientific_notation("254797693561"));
    assert!(!is_scientific_notation("e"));
    assert!(!is_scientific_notation("e10"));
    assert!(!is_scientific_notation("Tel e 0712"));
    assert!(!is_scientific_notation("0712345678 ext"));
}

#[test]
fn test_full_precision_expansion() {
    assert_eq!(
        expand_scientific_notation("2.54797693561e11").as_deref(),
        Some("254797693561")
    );
    assert_eq!(
        expand_scientific_notation("2.547976935610E+11").as_deref(),
        Some("254797693561")
    );
}

#[test]
fn test_expansion_pads_with_zeros() {
    assert_eq!(
        expand_scientific_notation("2.54797E+11").as_deref(),
        Some("254797000000")
    );
    assert_eq!(expand_scientific_notation(".5e1").as_deref(), Some("5"));
}

#[test]
fn test_fraction_rounds_half_up() {
    assert_eq!(expand_scientific_notation("1.5e0").as_deref(), Some("2"));
    assert_eq!(expand_scientific_notation("1.4e0").as_deref(), Some("1"));
    assert_eq!(expand_scientific_notation("9.99e1").as_deref(), Some("100"));
    assert_eq!(expand_scientific_notation("5e-1").as_deref(), Some("1"));
    assert_eq!(expand_scientific_notation("1e-3").as_deref(), Some("0"));
}

#[test]
fn test_leading_zeros_and_sign() {
    assert_eq!(expand_scientific_notation("007e2").as_deref(), Some("700"));
    assert_eq!(expand_scientific_notation("-2.5e2").as_deref(), Some("-250"));
}

#[test]
fn test_exponent_cap() {
    let expanded = expand_scientific_notation("1e64").unwrap();
    assert_eq!(expanded.len(), 65);
    assert!(expand_scientific_notation("1e65").is_none());
    assert!(expand_scientific_notation("1e99999999999999999999").is_none());
}

#[test]
fn test_extreme_negative_exponent_is_rejected() {
    assert!(expand_scientific_notation("1e-9223372036854775808").is_none());
    assert!(expand_scientific_notation("1e-65").is_none());
    assert_eq!(expand_scientific_notation("5e-1").as_deref(), Some("1"));

    let result = crate::app::services::phone_validator::normalize("1e-9223372036854775808");
    assert!(!result.is_valid());
}
