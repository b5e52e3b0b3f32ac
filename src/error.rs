//! Error types for the SRP integer library.

use thiserror::Error;

/// Errors that can occur when building, combining or serializing SRP integers.
///
/// This enum is exposed to Swift/Kotlin via UniFFI as a flat error type,
/// meaning the error variants are exposed as simple enum cases with string messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
#[cfg_attr(feature = "uniffi", uniffi(flat_error))]
pub enum SrpIntegerError {
    /// Malformed hex or decimal input
    #[error("Parse error: {0}")]
    Parse(String),

    /// `to_hex` called on a value whose width was never set
    #[error("This SrpInteger has no specified length")]
    UnspecifiedWidth,

    /// Strict padding asked to shrink the width
    #[error("Cannot pad to a shorter length: current {current}, requested {requested}")]
    PadShrink { current: usize, requested: usize },

    /// Zero or negative modulus
    #[error("Invalid modulus: {0}")]
    InvalidModulus(String),

    #[error("Exponent must not be negative")]
    NegativeExponent,

    /// Negative values have no fixed-width hex form
    #[error("Cannot serialize a negative SrpInteger as hex")]
    NegativeValue,

    /// Buffer for the requested width or byte count could not be reserved
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// Failure reported by the OS random source
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// Error serializing/deserializing JSON
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SrpIntegerError {
    fn from(err: serde_json::Error) -> Self {
        SrpIntegerError::Json(err.to_string())
    }
}

impl From<std::collections::TryReserveError> for SrpIntegerError {
    fn from(err: std::collections::TryReserveError) -> Self {
        SrpIntegerError::Allocation(err.to_string())
    }
}

impl From<rand::Error> for SrpIntegerError {
    fn from(err: rand::Error) -> Self {
        SrpIntegerError::RandomSource(err.to_string())
    }
}

/// Result type alias for SRP integer operations.
pub type SrpIntegerResult<T> = Result<T, SrpIntegerError>;
