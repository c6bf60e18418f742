//! The query surface used by test scenarios.

use std::collections::{BTreeMap, HashMap};

use logi_hid_expectation_errors::{ConfigError, LookupDiagnostic, ProfileError};
use logi_hid_report_schemas::ReportClass;
use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

use crate::entry::{Entry, TranslationTable};
use crate::keys::KeyId;
use crate::os::OsVariant;
use crate::primitives::none_on_make_none_on_break;
use crate::profile::ProductProfile;
use crate::resolver::{ActiveSchemas, EngineConfig, compose};
use crate::sequence::Sequence;
use crate::version::Protocol;

/// First consumer usage of every consumer-class sequence, per key and host.
pub type ConsumerKeys = BTreeMap<KeyId, BTreeMap<OsVariant, i32>>;

#[derive(Debug, Default)]
struct Memo {
    not_single_action: HashMap<Option<OsVariant>, Vec<KeyId>>,
    consumer_keys: Option<ConsumerKeys>,
}

/// Expected-report oracle for one configured product.
///
/// Reconfiguration takes `&mut self`, so a rebuild can never race a lookup
/// on the same engine.
///
/// # Examples
///
/// ```
/// use logi_hid_expectations::prelude::*;
///
/// let engine = ExpectationEngine::new(EngineConfig::productivity(GuidelineVersion::V2_0))?;
/// let sequence = engine.lookup(KeyId::KeyboardA, OsVariant::Windows);
/// assert_eq!(
///     sequence.to_string(),
///     "make: [HidKeyboardBitmap{KEYBOARD_A=1}]; break: [HidKeyboardBitmap{KEYBOARD_A=-1}]"
/// );
/// # Ok::<(), logi_hid_expectation_errors::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ExpectationEngine {
    config: EngineConfig,
    configured: ActiveSchemas,
    protocol: Protocol,
    table: TranslationTable,
    memo: Mutex<Memo>,
}

impl ExpectationEngine {
    /// Build an engine configured with `config`, in report protocol.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let mut engine = Self {
            config: EngineConfig::mouse_only(),
            configured: ActiveSchemas::default(),
            protocol: Protocol::Report,
            table: TranslationTable::new(),
            memo: Mutex::new(Memo::default()),
        };
        engine.configure(config)?;
        Ok(engine)
    }

    /// Build an engine for the device a product profile describes.
    pub fn from_profile(profile: &ProductProfile) -> Result<Self, ProfileError> {
        let config = profile.to_engine_config()?;
        info!(profile = %profile.name, "Configuring from product profile");
        Ok(Self::new(config)?)
    }

    /// Replace the configuration and rebuild the table.
    ///
    /// The engine returns to report protocol. On error the previous
    /// configuration stays in effect.
    pub fn configure(&mut self, config: EngineConfig) -> Result<(), ConfigError> {
        let schemas = config.validate()?;
        info!(
            version = ?config.version,
            family = %config.family(),
            schemas = %schemas,
            options = ?config.options,
            "Configuring expectation engine"
        );
        self.config = config;
        self.configured = schemas;
        self.protocol = Protocol::Report;
        self.rebuild();
        Ok(())
    }

    /// Switch USB protocol mode from its raw value (0 = boot, 1 = report).
    pub fn set_protocol(&mut self, mode: u8) -> Result<(), ConfigError> {
        let protocol = Protocol::try_from(mode)?;
        self.use_protocol(protocol);
        Ok(())
    }

    /// Switch USB protocol mode and rebuild against the schemas it allows.
    pub fn use_protocol(&mut self, protocol: Protocol) {
        self.protocol = protocol;
        info!(
            protocol = %protocol,
            schemas = %self.active_schemas(),
            "Switching USB protocol"
        );
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.table = compose(
            &self.config.layers(),
            self.active_schemas(),
            &self.config.options,
        );
        *self.memo.get_mut() = Memo::default();
    }

    /// Expected sequence for `key` on `os`.
    ///
    /// Never fails: a miss is logged and answered with the silent sequence.
    pub fn lookup(&self, key: KeyId, os: OsVariant) -> Sequence {
        match self.try_lookup(key, os) {
            Ok(sequence) => sequence.clone(),
            Err(diagnostic @ LookupDiagnostic::UnknownKey { .. }) => {
                warn!(key = %key, os = %os, "{diagnostic}");
                none_on_make_none_on_break()
            }
            Err(diagnostic) => {
                debug!(key = %key, os = %os, "{diagnostic}");
                none_on_make_none_on_break()
            }
        }
    }

    /// Like [`lookup`](Self::lookup), but reports misses to the caller.
    pub fn try_lookup(&self, key: KeyId, os: OsVariant) -> Result<&Sequence, LookupDiagnostic> {
        let entry = self
            .table
            .get(key)
            .ok_or_else(|| LookupDiagnostic::UnknownKey {
                key: key.to_string(),
                os: os.to_string(),
            })?;
        self.resolve(entry, os)
            .ok_or_else(|| LookupDiagnostic::MissingVariant {
                key: key.to_string(),
                os: os.to_string(),
            })
    }

    /// In boot protocol the boot sequence of an entry wins over any host.
    fn resolve<'a>(&self, entry: &'a Entry, os: OsVariant) -> Option<&'a Sequence> {
        let boot = match self.protocol {
            Protocol::Boot => entry.get(OsVariant::Boot),
            Protocol::Report => None,
        };
        boot.or_else(|| entry.resolve(os))
    }

    /// Keys whose press or release is not exactly one report.
    ///
    /// With `Some(os)` only the sequence that `os` resolves to is examined
    /// and keys with none are skipped; with `None` every variant counts.
    pub fn not_single_action_keys(&self, variant: Option<OsVariant>) -> Vec<KeyId> {
        let mut memo = self.memo.lock();
        memo.not_single_action
            .entry(variant)
            .or_insert_with(|| {
                trace!(variant = ?variant, "Computing not-single-action keys");
                self.table
                    .iter()
                    .filter(|(_, entry)| match variant {
                        Some(os) => entry.resolve(os).is_some_and(|s| !s.is_single_action()),
                        None => entry.variants().any(|(_, s)| !s.is_single_action()),
                    })
                    .map(|(key, _)| *key)
                    .collect()
            })
            .clone()
    }

    /// Keys that press through the consumer report, with the usage each
    /// host expects.
    pub fn consumer_keys(&self) -> ConsumerKeys {
        let mut memo = self.memo.lock();
        memo.consumer_keys
            .get_or_insert_with(|| {
                trace!("Computing consumer keys");
                consumer_usages(&self.table)
            })
            .clone()
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Schemas the current table was built against.
    pub fn active_schemas(&self) -> ActiveSchemas {
        self.configured.for_protocol(self.protocol)
    }
}

fn consumer_usages(table: &TranslationTable) -> ConsumerKeys {
    let mut keys = ConsumerKeys::new();
    for (key, entry) in table {
        let usages: BTreeMap<OsVariant, i32> = entry
            .variants()
            .filter_map(|(os, sequence)| {
                let first = sequence.make.first()?;
                if ReportClass::CONSUMER_SCHEMAS.contains(&first.class) {
                    first.first_value().map(|usage| (os, usage))
                } else {
                    None
                }
            })
            .collect();
        if !usages.is_empty() {
            keys.insert(*key, usages);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::GuidelineVersion;
    use logi_hid_usage_tables::consumer;

    fn engine(config: EngineConfig) -> Result<ExpectationEngine, ConfigError> {
        ExpectationEngine::new(config)
    }

    #[test]
    fn failed_configure_keeps_previous_table() -> Result<(), ConfigError> {
        let mut engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
        let before = engine.table().clone();
        let result = engine.configure(EngineConfig::gaming(GuidelineVersion::V2_8));
        assert_eq!(result, Err(ConfigError::unsupported_guideline("gaming", "2.8")));
        assert_eq!(engine.table(), &before);
        Ok(())
    }

    #[test]
    fn unknown_key_degrades_to_silence() -> Result<(), ConfigError> {
        let engine = engine(EngineConfig::mouse_only())?;
        assert!(engine.lookup(KeyId::KeyboardA, OsVariant::Windows).is_silent());
        assert_eq!(
            engine.try_lookup(KeyId::KeyboardA, OsVariant::Windows),
            Err(LookupDiagnostic::UnknownKey {
                key: "KEYBOARD_A".to_string(),
                os: "windowsOS".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn missing_variant_is_distinguished() -> Result<(), ConfigError> {
        let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
        assert!(matches!(
            engine.try_lookup(KeyId::Eject, OsVariant::Windows),
            Err(LookupDiagnostic::MissingVariant { .. })
        ));
        assert!(engine.lookup(KeyId::Eject, OsVariant::Windows).is_silent());
        Ok(())
    }

    #[test]
    fn rebuild_clears_memo() -> Result<(), ConfigError> {
        let mut engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
        assert!(engine.consumer_keys().contains_key(&KeyId::PlayPause));
        assert!(!engine.not_single_action_keys(None).is_empty());
        engine.configure(EngineConfig::mouse_only())?;
        assert!(engine.consumer_keys().is_empty());
        assert!(!engine.not_single_action_keys(None).contains(&KeyId::PlayPause));
        Ok(())
    }

    #[test]
    fn consumer_keys_record_first_usage_per_host() -> Result<(), ConfigError> {
        let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
        let keys = engine.consumer_keys();
        let home = keys.get(&KeyId::Home);
        assert_eq!(
            home.and_then(|h| h.get(&OsVariant::Mac)).copied(),
            Some(i32::from(consumer::OVERVIEW))
        );
        assert_eq!(home.and_then(|h| h.get(&OsVariant::Boot)), None);
        Ok(())
    }

    #[test]
    fn configure_returns_to_report_protocol() -> Result<(), ConfigError> {
        let mut engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
        engine.set_protocol(0)?;
        assert_eq!(engine.protocol(), Protocol::Boot);
        engine.configure(EngineConfig::productivity(GuidelineVersion::V2_1))?;
        assert_eq!(engine.protocol(), Protocol::Report);
        assert_eq!(engine.set_protocol(2), Err(ConfigError::UnsupportedProtocol(2)));
        Ok(())
    }
}
