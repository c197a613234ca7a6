//! Error types for lookups and dataset loading.

use std::fmt;
use thiserror::Error;

// ============================================================================
// Lookup Errors
// ============================================================================

/// Why a strict record lookup found nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The input is longer than two UTF-16 code units
    MalformedCode,
    /// The input looks like an alpha-2 code but the dataset has no record for it
    NotInDataset,
}

impl NotFoundReason {
    /// Classify a failed lookup by the shape of the input.
    ///
    /// Length is measured in UTF-16 code units, so a single astral character
    /// already counts as two.
    pub fn for_code(code: &str) -> Self {
        if code.encode_utf16().count() > 2 {
            NotFoundReason::MalformedCode
        } else {
            NotFoundReason::NotInDataset
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::MalformedCode => write!(f, "not a valid ISO alpha-2 code"),
            NotFoundReason::NotInDataset => write!(
                f,
                "code not present in the dataset, request a data update"
            ),
        }
    }
}

/// Errors returned by [`crate::NameOrderLookup::record`] and its JSON entry point
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The supplied country code was not a string
    #[error("Country code must be a 2 alpha-character string, got {0}")]
    InvalidArgument(String),

    /// No record matched the supplied country code
    #[error("Country code {code:?} is not recognised: {reason}")]
    NotFound {
        code: String,
        reason: NotFoundReason,
    },
}

impl LookupError {
    /// Build a `NotFound` error with the qualifier derived from the input
    pub fn not_found(code: &str) -> Self {
        LookupError::NotFound {
            code: code.to_string(),
            reason: NotFoundReason::for_code(code),
        }
    }
}

// ============================================================================
// Dataset Errors
// ============================================================================

/// Errors raised while building a dataset from JSON
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The JSON was malformed or did not match the record shape
    #[error("Failed to parse naming order data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record had no usable English naming order
    #[error("Record {code:?} has no English naming order")]
    MissingEnglish { code: String },
}
