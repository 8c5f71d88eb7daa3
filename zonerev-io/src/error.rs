//! Error types for reading, locating and writing zone documents

use thiserror::Error;
use zonerev_core::ZoneError;

/// Errors that can occur while reversing a zone document
#[derive(Debug, Error)]
pub enum ReverseError {
    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be opened
    #[error("Cannot open '{path}': {source}")]
    OpenInput {
        /// Path that was requested
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("JSON error while parsing input document: {source}")]
    JsonParse {
        /// Underlying serde_json error
        source: serde_json::Error,
    },

    /// The reversed document could not be serialized
    #[error("JSON error while writing output document: {source}")]
    JsonWrite {
        /// Underlying serde_json error
        source: serde_json::Error,
    },

    /// Invalid pointer syntax
    #[error(
        "Invalid JSON Pointer syntax: '{pointer}' - {reason}\n\
         \n\
         JSON Pointers must:\n\
         - Start with '/' (or be empty string for root)\n\
         - Use '~0' to escape '~' and '~1' to escape '/'\n\
         \n\
         See RFC 6901 for details."
    )]
    InvalidPointer {
        /// The invalid pointer string
        pointer: String,
        /// Explanation of why the pointer is invalid
        reason: String,
    },

    /// Pointer path not found in document
    #[error(
        "Zone config not found: '{pointer}' does not exist.\n\
         \n\
         Reached: '{reached_path}'\n\
         Available keys at this level: {available_keys}"
    )]
    PointerNotFound {
        /// JSON Pointer path that was not found
        pointer: String,
        /// Path segment successfully navigated before failure
        reached_path: String,
        /// Comma-separated list of keys available at the failure point
        available_keys: String,
    },

    /// Pointer target is not an object
    #[error("Zone config type mismatch: '{pointer}' points to {found_type}, expected object")]
    PointerTargetWrongType {
        /// JSON Pointer path to the target
        pointer: String,
        /// Actual type found (e.g. "array", "string")
        found_type: String,
    },

    /// Zone config could not be reversed
    #[error("{0}")]
    Zone(#[from] ZoneError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReverseError>;
