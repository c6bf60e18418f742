//! Expected HID report sequences for Logitech keyboards and mice.
//!
//! Given a product configuration (keyboard guideline version, product
//! family, report schemas and product options), the engine answers, for a
//! logical key and a host OS, which reports the device must emit when the
//! key is pressed and when it is released.
//!
//! The translation table is composed from layers at configure time: shared
//! pointer buttons, mouse buttons, keys common to every keyboard, the
//! guideline chain of the configured version, and product options. A later
//! layer replaces the whole entry of a key.
//!
//! ```
//! use logi_hid_expectations::prelude::*;
//!
//! let mut engine = ExpectationEngine::new(EngineConfig::productivity(GuidelineVersion::V2_0))?;
//! let muhenkan = engine.lookup(KeyId::Muhenkan, OsVariant::Mac);
//! assert_eq!(
//!     muhenkan.to_string(),
//!     "make: [HidKeyboardBitmap{KEYBOARD_LANG2=1}]; break: [HidKeyboardBitmap{KEYBOARD_LANG2=-1}]"
//! );
//!
//! engine.use_protocol(Protocol::Boot);
//! assert!(engine.lookup(KeyId::PrevTrack, OsVariant::Windows).is_silent());
//! # Ok::<(), logi_hid_expectation_errors::ConfigError>(())
//! ```

#![deny(static_mut_refs)]

pub mod engine;
pub mod entry;
pub mod keys;
pub mod os;
pub mod prelude;
pub mod primitives;
pub mod profile;
pub mod resolver;
pub mod sequence;
mod tables;
pub mod version;

pub use engine::{ConsumerKeys, ExpectationEngine};
pub use entry::{Entry, TranslationTable};
pub use keys::KeyId;
pub use os::OsVariant;
pub use profile::ProductProfile;
pub use resolver::{ActiveSchemas, EngineConfig, Layer};
pub use sequence::{FieldValue, ReportStep, Sequence, Stimulus};
pub use tables::Fragment;
pub use version::{GuidelineVersion, ProductFamily, ProductOption, Protocol};
