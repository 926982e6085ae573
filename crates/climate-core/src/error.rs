//! Error types for climate-core.
//!
//! # Recovery
//!
//! | Error Type | Strategy |
//! |------------|----------|
//! | [`Error::InvalidIndex`] | Caller bug; no room was touched |
//! | [`Error::PersistenceUnavailable`] | Log and continue with defaults |
//! | [`Error::MalformedSettings`] | Log and continue with defaults |
//! | [`Error::EncodeSettings`] | Log; the previous file is left untouched |
//!
//! None of these errors is fatal: the window keeps running with the
//! in-memory state it already has.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the room store and the preference file.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Room index outside `1..=3`.
    #[error("Invalid room index {0}: expected 1, 2 or 3")]
    InvalidIndex(usize),

    /// Preference file could not be read or written.
    #[error("Settings file {} unavailable: {source}", path.display())]
    PersistenceUnavailable {
        /// Location of the preference file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Preference file exists but is not a readable document.
    #[error("Settings file {} is malformed: {reason}", path.display())]
    MalformedSettings {
        /// Location of the preference file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Preferences could not be turned into a settings document.
    #[error("Failed to encode settings: {0}")]
    EncodeSettings(String),
}

impl Error {
    /// Create a persistence error for a file location.
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PersistenceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-settings error for a file location.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedSettings {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using climate-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidIndex(4);
        assert_eq!(err.to_string(), "Invalid room index 4: expected 1, 2 or 3");

        let err = Error::persistence(
            "/tmp/settings.xml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("/tmp/settings.xml"));
        assert!(err.to_string().contains("file not found"));

        let err = Error::malformed("settings.xml", "unexpected end of input");
        assert!(err.to_string().contains("malformed"));
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_encode_error_display() {
        let err = Error::EncodeSettings("unsupported value".into());
        assert_eq!(
            err.to_string(),
            "Failed to encode settings: unsupported value"
        );
    }

    #[test]
    fn test_persistence_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::persistence(
            "settings.xml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("io source");
        assert!(source.to_string().contains("denied"));
    }
}
