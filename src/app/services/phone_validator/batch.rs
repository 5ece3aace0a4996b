//! Batch validation of loose phone values

use crate::app::models::{Carrier, ValidationResult};
use serde::Serialize;

use super::{carrier::classify, normalizer::normalize};

/// Validation outcome for one value in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchValidation {
    /// Position in the input batch
    pub index: usize,
    /// Value as supplied
    pub original: String,
    #[serde(flatten)]
    pub result: ValidationResult,
    /// Detected carrier for valid numbers
    pub carrier: Option<Carrier>,
}

/// Validate every value and attach carrier information to the valid ones
pub fn validate_batch<S: AsRef<str>>(values: &[S]) -> Vec<BatchValidation> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let original = value.as_ref();
            let result = normalize(original);
            let carrier = if result.is_valid() {
                classify(result.formatted())
            } else {
                None
            };
            BatchValidation {
                index,
                original: original.to_string(),
                result,
                carrier,
            }
        })
        .collect()
}
