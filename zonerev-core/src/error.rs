//! Error types for zone config rewriting

use thiserror::Error;

/// Zone rewriting error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    /// A required config field is absent.
    #[error("Missing required field '{field}' in zone config")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
    /// A config field holds a value of the wrong JSON type.
    #[error("Field '{field}' has type {found}, expected {expected}")]
    TypeMismatch {
        /// Name of the offending field
        field: &'static str,
        /// Expected JSON type (e.g. "string", "integer")
        expected: &'static str,
        /// JSON type actually found
        found: &'static str,
    },
    /// The finish index is so far from the path length that the new index
    /// cannot be represented.
    #[error("Field 'zone.finish_index' value {finish_index} is out of range for a path of {len} points")]
    FinishIndexOutOfRange {
        /// Finish index as read from the config
        finish_index: i64,
        /// Number of points in the path
        len: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ZoneError>;
