//! Report schema errors.

use crate::common::ErrorSeverity;

/// Report schema errors raised while resolving or encoding report fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The report class has no field by that name
    #[error("Report {class} has no field named {field}")]
    UnknownField {
        /// Report class name
        class: String,
        /// Requested field name
        field: String,
    },

    /// The value does not fit the field's bit width
    #[error("Value {value} out of range for {class}.{field}: expected {min}..={max}")]
    ValueOutOfRange {
        /// Report class name
        class: String,
        /// Field name
        field: String,
        /// Rejected value
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// The name does not identify a report class
    #[error("Unknown report class: {0}")]
    UnknownClass(String),
}

impl SchemaError {
    /// Create an unknown field error.
    pub fn unknown_field(class: impl Into<String>, field: impl Into<String>) -> Self {
        SchemaError::UnknownField {
            class: class.into(),
            field: field.into(),
        }
    }

    /// Get the severity of this error.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}
