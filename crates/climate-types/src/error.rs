//! Error types for value parsing in climate-types.

use thiserror::Error;

/// Errors that can occur when building climate values from raw input.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Room index outside the fixed set `1..=3`.
    #[error("Invalid room index {0}: expected 1, 2 or 3")]
    InvalidRoomIndex(usize),

    /// Unit text that matches no known temperature or pressure unit.
    #[error("Unknown unit: {0:?}")]
    UnknownUnit(String),

    /// Airflow text that matches no known direction.
    #[error("Unknown airflow direction: {0:?}")]
    UnknownAirflow(String),
}

/// Result type alias using climate-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
