//! Prelude module for convenient error handling imports.
//!
//! ```
//! use logi_hid_expectation_errors::prelude::*;
//!
//! fn reject(name: &str) -> Result<()> {
//!     Err(ConfigError::unsupported_schema("mouse", name).into())
//! }
//!
//! assert!(reject("HidGamepad").is_err());
//! ```

pub use crate::{
    Result,
    common::{ErrorCategory, ErrorSeverity, ExpectationError},
    config::ConfigError,
    lookup::LookupDiagnostic,
    profile::ProfileError,
    schema::SchemaError,
};
