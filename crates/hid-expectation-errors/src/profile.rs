//! Product profile errors.

use crate::ConfigError;
use crate::common::ErrorSeverity;

/// Product profile loading and validation errors.
///
/// # Examples
///
/// ```
/// use logi_hid_expectation_errors::{ConfigError, ProfileError, ErrorSeverity};
///
/// let err = ProfileError::invalid("mouse profiles cannot name a guideline version");
/// assert_eq!(err.severity(), ErrorSeverity::Error);
///
/// let err: ProfileError = ConfigError::UnsupportedVersion("4.0".into()).into();
/// assert_eq!(err.severity(), ErrorSeverity::Critical);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// Profile file could not be read
    #[error("Failed to read profile from {path}: {reason}")]
    Io {
        /// File path
        path: String,
        /// Failure reason
        reason: String,
    },

    /// Profile text is not valid profile JSON
    #[error("Invalid profile JSON: {0}")]
    InvalidJson(String),

    /// Profile parsed but is inconsistent
    #[error("Invalid profile: {0}")]
    Invalid(String),

    /// Profile names a value the engine does not support
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ProfileError {
    /// Create an invalid profile error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        ProfileError::Invalid(reason.into())
    }

    /// Get the severity of this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProfileError::Config(e) => e.severity(),
            _ => ErrorSeverity::Error,
        }
    }
}
