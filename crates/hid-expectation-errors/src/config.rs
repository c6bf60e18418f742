//! Engine configuration errors.
//!
//! Raised synchronously by `configure`, `set_protocol` and the `FromStr`
//! implementations of the engine's symbolic enums.

use crate::common::ErrorSeverity;

/// Rejected engine configuration.
///
/// # Examples
///
/// ```
/// use logi_hid_expectation_errors::{ConfigError, ErrorSeverity};
///
/// let err = ConfigError::unsupported_schema("keyboard", "HidJoystick");
/// assert_eq!(err.to_string(), "Unsupported keyboard report schema: HidJoystick");
/// assert_eq!(err.severity(), ErrorSeverity::Critical);
///
/// let err = ConfigError::unknown_name("OS variant", "beOS");
/// assert_eq!(err.severity(), ErrorSeverity::Error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A report schema is not allowed in the slot it was given for
    #[error("Unsupported {slot} report schema: {name}")]
    UnsupportedSchema {
        /// Schema slot (`mouse`, `keyboard` or `consumer`)
        slot: String,
        /// Offending schema name
        name: String,
    },

    /// Guideline version string does not name a known version
    #[error("Unsupported guideline version: {0}")]
    UnsupportedVersion(String),

    /// Known version requested for the wrong product family
    #[error("Unsupported {family} keyboard guideline version: {version}")]
    UnsupportedGuidelineVersion {
        /// Product family (`gaming` or `productivity`)
        family: String,
        /// Requested version
        version: String,
    },

    /// USB protocol mode outside `{BOOT, REPORT}`
    #[error("Unsupported USB protocol mode: {0}")]
    UnsupportedProtocol(u8),

    /// Product option name not recognised
    #[error("Unsupported product option: {0}")]
    UnsupportedOption(String),

    /// Symbolic name that does not parse
    #[error("Unknown {kind}: {name}")]
    UnknownName {
        /// What was being parsed
        kind: String,
        /// Offending input
        name: String,
    },
}

impl ConfigError {
    /// Create an unsupported schema error.
    pub fn unsupported_schema(slot: impl Into<String>, name: impl Into<String>) -> Self {
        ConfigError::UnsupportedSchema {
            slot: slot.into(),
            name: name.into(),
        }
    }

    /// Create an unsupported guideline version error.
    pub fn unsupported_guideline(family: impl Into<String>, version: impl Into<String>) -> Self {
        ConfigError::UnsupportedGuidelineVersion {
            family: family.into(),
            version: version.into(),
        }
    }

    /// Create an unknown name error.
    pub fn unknown_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ConfigError::UnknownName {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Get the severity of this error.
    ///
    /// Anything that would leave the engine without a usable table is critical.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::UnknownName { .. } => ErrorSeverity::Error,
            _ => ErrorSeverity::Critical,
        }
    }
}
