//! Error types
//!
//! The conversion engine itself is fail-open and never returns these. They come
//! from parsing user-facing names (systems, families, temperature units) at the
//! edges of the crate.

use thiserror::Error;

/// Errors raised while parsing conversion parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unknown measurement system: '{0}' (expected 'standard' or 'metric')")]
    UnknownSystem(String),

    #[error("Unknown unit family: '{0}' (expected 'volume' or 'weight')")]
    UnknownFamily(String),

    #[error("Unknown temperature unit: '{0}' (expected 'C' or 'F')")]
    UnknownTemperatureUnit(String),
}

/// Result type for parameter parsing
pub type ParseResult<T> = Result<T, ConversionError>;
