//! zonerev core - Primitives for reversing directional zone definitions
//!
//! This crate holds the pure transformations behind zone reversal with no I/O
//! dependencies:
//!
//! - Cyclic path rotation that relocates the finish segment
//! - Directional suffix rule sets (`_in`/`_out`, compass points)
//! - Field rewriting of a zone config object
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod rotate;
pub mod rules;

// Re-export commonly used types
pub use config::{Rename, ReverseReport, Unconverted, ZoneConfig};
pub use error::{Result, ZoneError};
pub use rotate::{reverse_path, rotate_left, rotate_right, Rotation};
pub use rules::{Fixup, RuleSet, SuffixRule};
