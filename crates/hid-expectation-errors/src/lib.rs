//! Centralized error types for the HID report expectation engine
//!
//! The engine only fails at configuration time. Lookups never return an
//! error to the caller of `lookup`; misses are reported as a
//! [`LookupDiagnostic`] through `try_lookup` and logged otherwise.
//!
//! # Architecture
//!
//! - [`common`]: the top-level [`ExpectationError`], its category and severity
//! - [`config`]: rejected engine configurations and unparsable symbolic names
//! - [`schema`]: report-schema field and value errors
//! - [`profile`]: product profile loading and validation errors
//! - [`lookup`]: non-fatal lookup diagnostics
//!
//! # Example
//!
//! ```
//! use logi_hid_expectation_errors::prelude::*;
//!
//! fn pick_protocol(raw: u8) -> Result<u8> {
//!     if raw > 1 {
//!         return Err(ConfigError::UnsupportedProtocol(raw).into());
//!     }
//!     Ok(raw)
//! }
//!
//! assert!(pick_protocol(2).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod config;
pub mod lookup;
pub mod prelude;
pub mod profile;
pub mod schema;

pub use common::{ErrorCategory, ErrorSeverity, ExpectationError};
pub use config::ConfigError;
pub use lookup::LookupDiagnostic;
pub use profile::ProfileError;
pub use schema::SchemaError;

/// A specialized `Result` type for expectation engine operations.
pub type Result<T> = std::result::Result<T, ExpectationError>;
