//! Common imports for test scenarios.

pub use crate::{
    ConsumerKeys, EngineConfig, Entry, ExpectationEngine, GuidelineVersion, KeyId, OsVariant,
    ProductOption, ProductProfile, Protocol, ReportStep, Sequence, Stimulus, TranslationTable,
};
pub use logi_hid_expectation_errors::{ConfigError, LookupDiagnostic, ProfileError};
pub use logi_hid_report_schemas::ReportClass;
