//! Tests for phone normalization, scientific-notation recovery and carrier detection
//!
//! Shared assertion helpers live here; each component has its own test module.

mod scientific_tests;

use crate::app::models::{PhoneIssue, ValidationResult};

/// Assert a value normalizes to the given canonical number
pub fn assert_valid(result: &ValidationResult, expected: &str) {
    assert!(
        result.is_valid(),
        "expected valid {}, got errors {:?}",
        expected,
        result.errors()
    );
    assert_eq!(result.formatted(), expected);
    assert!(result.errors().is_empty());
}

/// Assert a value is rejected with exactly these issues, in order
pub fn assert_issues(result: &ValidationResult, expected: &[PhoneIssue]) {
    assert!(!result.is_valid());
    assert_eq!(result.formatted(), "");
    assert_eq!(result.errors(), expected);
}
