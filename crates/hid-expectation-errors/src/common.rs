//! Top-level error type and classification shared by every engine crate.

use core::fmt;

use crate::{ConfigError, LookupDiagnostic, ProfileError, SchemaError};

/// Top-level error type wrapping every engine sub-error.
#[derive(Debug, thiserror::Error)]
pub enum ExpectationError {
    /// Rejected engine configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report schema errors
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Product profile errors
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Lookup diagnostics surfaced through the fallible lookup path
    #[error("Lookup diagnostic: {0}")]
    Lookup(#[from] LookupDiagnostic),
}

impl ExpectationError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExpectationError::Config(_) => ErrorCategory::Config,
            ExpectationError::Schema(_) => ErrorCategory::Schema,
            ExpectationError::Profile(_) => ErrorCategory::Profile,
            ExpectationError::Lookup(_) => ErrorCategory::Lookup,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExpectationError::Config(e) => e.severity(),
            ExpectationError::Schema(e) => e.severity(),
            ExpectationError::Profile(e) => e.severity(),
            ExpectationError::Lookup(e) => e.severity(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Configuration errors invalidate the current test configuration; everything
    /// else leaves the engine usable.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Engine configuration errors
    Config = 0,
    /// Report schema errors
    Schema = 1,
    /// Product profile errors
    Profile = 2,
    /// Lookup diagnostics
    Lookup = 3,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Schema => write!(f, "Schema"),
            ErrorCategory::Profile => write!(f, "Profile"),
            ErrorCategory::Lookup => write!(f, "Lookup"),
        }
    }
}

/// Error severity levels, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational; the operation degraded gracefully
    Info = 0,
    /// Warning; the result may not be what the caller expected
    Warning = 1,
    /// Error; the operation failed
    Error = 2,
    /// Critical; the current configuration cannot be used
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Config.to_string(), "Config");
        assert_eq!(ErrorCategory::Lookup.to_string(), "Lookup");
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::Error);
        assert!(ErrorSeverity::Error > ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning > ErrorSeverity::Info);
    }

    #[test]
    fn test_expectation_error_category() {
        let err: ExpectationError = ConfigError::UnsupportedProtocol(7).into();
        assert_eq!(err.category(), ErrorCategory::Config);

        let err: ExpectationError = SchemaError::UnknownClass("HidJoystick".into()).into();
        assert_eq!(err.category(), ErrorCategory::Schema);
    }

    #[test]
    fn test_config_errors_are_not_recoverable() {
        let err: ExpectationError = ConfigError::UnsupportedVersion("9.9".into()).into();
        assert!(!err.is_recoverable());

        let err: ExpectationError = LookupDiagnostic::UnknownKey {
            key: "KEYBOARD_A".into(),
            os: "windowsOS".into(),
        }
        .into();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_expectation_error_is_std_error() {
        let err: ExpectationError = ConfigError::UnsupportedOption("glow".into()).into();
        let _: &dyn std::error::Error = &err;
    }
}
