//! Report class registry.
//!
//! Every report a Logitech keyboard or mouse emits belongs to one of seven
//! classes. Each class has a fixed, bit-packed layout of named fields; this
//! crate describes those layouts and can render a report from field values.
//!
//! ```
//! use logi_hid_report_schemas::{ReportClass, encode, field_exists};
//!
//! assert!(field_exists(ReportClass::HidKeyboard, "key_code1"));
//! assert!(!field_exists(ReportClass::HidConsumer, "key_code1"));
//!
//! let report = encode(ReportClass::HidConsumer, [("key_1", 0xCD)])?;
//! assert_eq!(report, vec![0xCD, 0x00, 0x00, 0x00]);
//! # Ok::<(), logi_hid_expectation_errors::SchemaError>(())
//! ```

#![deny(static_mut_refs)]

pub mod builder;
pub mod class;
pub mod layout;

pub use builder::ReportBuilder;
pub use class::ReportClass;
pub use layout::{FieldSpec, POSITION, PowerState, ReportSchema, schema, schema_by_name};

use logi_hid_expectation_errors::SchemaError;

/// Whether `class` has a field called `name` (ASCII case-insensitive).
pub fn field_exists(class: ReportClass, name: &str) -> bool {
    schema(class).field_exists(name)
}

/// Render a report of `class` with the given fields set.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownField`] for a field the class does not have
/// and [`SchemaError::ValueOutOfRange`] for a value wider than its field.
pub fn encode<'a, I>(class: ReportClass, values: I) -> Result<Vec<u8>, SchemaError>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    schema(class).encode(values)
}
