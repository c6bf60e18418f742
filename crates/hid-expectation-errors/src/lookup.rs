//! Non-fatal lookup diagnostics.

use crate::common::ErrorSeverity;

/// Why a lookup degraded to the no-op sequence.
///
/// `lookup` never returns these; `try_lookup` does, so callers that want to
/// fail fast on a missing translation can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupDiagnostic {
    /// The key has no entry in the active translation table
    #[error("Unknown key {key} for {os}")]
    UnknownKey {
        /// Key name
        key: String,
        /// Requested OS variant
        os: String,
    },

    /// The key has an entry but neither the requested variant nor `all`
    #[error("Key {key} has no sequence for {os}")]
    MissingVariant {
        /// Key name
        key: String,
        /// Requested OS variant
        os: String,
    },
}

impl LookupDiagnostic {
    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LookupDiagnostic::UnknownKey { .. } => ErrorSeverity::Warning,
            LookupDiagnostic::MissingVariant { .. } => ErrorSeverity::Info,
        }
    }
}
