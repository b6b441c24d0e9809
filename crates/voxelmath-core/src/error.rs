//! Error types for geometric queries.

use crate::facing::Axis;
use thiserror::Error;

/// Errors produced by geometric constructors and lookups.
///
/// Every operation in this workspace is a deterministic pure computation;
/// any of these surfacing means the call site passed invalid input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Box construction with a minimum bound above the maximum.
    #[error("invalid bounds: min {min} is greater than max {max} on the {axis} axis")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },

    /// Zero-length direction passed to a ray traversal.
    #[error("start and end points are the same, giving a zero direction vector")]
    DegenerateRay,

    /// Out-of-range value passed to an axis/facing lookup.
    #[error("invalid {kind} value {value}")]
    InvalidEnumValue { kind: &'static str, value: u8 },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
