//! Engine configuration, validation and layer composition.

use std::collections::BTreeSet;
use std::fmt;

use logi_hid_expectation_errors::ConfigError;
use logi_hid_report_schemas::ReportClass;
use tracing::debug;

use crate::entry::TranslationTable;
use crate::tables::{self, Ctx};
use crate::version::{GuidelineVersion, ProductFamily, ProductOption, Protocol};

/// Report schemas the translation table is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSchemas {
    pub mouse: ReportClass,
    pub keyboard: ReportClass,
    pub consumer: ReportClass,
}

impl Default for ActiveSchemas {
    fn default() -> Self {
        Self {
            mouse: ReportClass::HidMouse,
            keyboard: ReportClass::HidKeyboardBitmap,
            consumer: ReportClass::HidConsumer,
        }
    }
}

impl ActiveSchemas {
    /// Schemas in effect under `protocol`.
    ///
    /// Boot protocol hosts only understand the boot-compatible mouse and
    /// keyboard layouts; the consumer schema is kept.
    pub fn for_protocol(self, protocol: Protocol) -> Self {
        match protocol {
            Protocol::Report => self,
            Protocol::Boot => Self {
                mouse: self.mouse.boot_variant(),
                keyboard: self.keyboard.boot_variant(),
                consumer: self.consumer,
            },
        }
    }
}

impl fmt::Display for ActiveSchemas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.mouse, self.keyboard, self.consumer)
    }
}

/// One step of the table composition, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Common,
    Mouse,
    KeyboardCommon,
    Guideline(GuidelineVersion),
    Options,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Common => f.write_str("common"),
            Layer::Mouse => f.write_str("mouse"),
            Layer::KeyboardCommon => f.write_str("keyboard_common"),
            Layer::Guideline(version) => write!(f, "guideline {version}"),
            Layer::Options => f.write_str("options"),
        }
    }
}

/// Typed engine configuration.
///
/// `None` schemas select the defaults: `HidMouse`, `HidKeyboardBitmap` and
/// `HidConsumer`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub version: Option<GuidelineVersion>,
    pub is_gaming: bool,
    pub mouse_schema: Option<ReportClass>,
    pub keyboard_schema: Option<ReportClass>,
    pub consumer_schema: Option<ReportClass>,
    pub options: BTreeSet<ProductOption>,
}

impl EngineConfig {
    /// Productivity keyboard following `version`.
    pub fn productivity(version: GuidelineVersion) -> Self {
        Self {
            version: Some(version),
            ..Self::default()
        }
    }

    /// Gaming product following `version`.
    pub fn gaming(version: GuidelineVersion) -> Self {
        Self {
            version: Some(version),
            is_gaming: true,
            ..Self::default()
        }
    }

    /// Pointing device with no keyboard guideline.
    pub fn mouse_only() -> Self {
        Self::default()
    }

    pub fn with_mouse_schema(mut self, schema: ReportClass) -> Self {
        self.mouse_schema = Some(schema);
        self
    }

    pub fn with_keyboard_schema(mut self, schema: ReportClass) -> Self {
        self.keyboard_schema = Some(schema);
        self
    }

    pub fn with_consumer_schema(mut self, schema: ReportClass) -> Self {
        self.consumer_schema = Some(schema);
        self
    }

    pub fn with_option(mut self, option: ProductOption) -> Self {
        self.options.insert(option);
        self
    }

    /// Family the guideline version must belong to.
    pub fn family(&self) -> ProductFamily {
        match (self.version, self.is_gaming) {
            (_, true) => ProductFamily::Gaming,
            (Some(_), false) => ProductFamily::Productivity,
            (None, false) => ProductFamily::Mouse,
        }
    }

    /// Check every input and return the schemas to build against.
    pub fn validate(&self) -> Result<ActiveSchemas, ConfigError> {
        let defaults = ActiveSchemas::default();
        let schemas = ActiveSchemas {
            mouse: pick("mouse", self.mouse_schema, defaults.mouse, &ReportClass::MOUSE_SCHEMAS)?,
            keyboard: pick(
                "keyboard",
                self.keyboard_schema,
                defaults.keyboard,
                &ReportClass::KEYBOARD_SCHEMAS,
            )?,
            consumer: pick(
                "consumer",
                self.consumer_schema,
                defaults.consumer,
                &ReportClass::CONSUMER_SCHEMAS,
            )?,
        };

        if let Some(version) = self.version {
            let family = if self.is_gaming {
                ProductFamily::Gaming
            } else {
                ProductFamily::Productivity
            };
            if version.family() != family {
                return Err(ConfigError::unsupported_guideline(family.name(), version.name()));
            }
        }

        Ok(schemas)
    }

    /// Layers to compose, in order.
    ///
    /// The guideline of a version is its own fragment stacked on those of
    /// every predecessor in its family.
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers = vec![Layer::Common, Layer::Mouse];
        if let Some(version) = self.version {
            layers.push(Layer::KeyboardCommon);
            layers.extend(version.chain().iter().copied().map(Layer::Guideline));
        }
        layers.push(Layer::Options);
        layers
    }
}

fn pick(
    slot: &str,
    requested: Option<ReportClass>,
    default: ReportClass,
    allowed: &[ReportClass],
) -> Result<ReportClass, ConfigError> {
    let schema = requested.unwrap_or(default);
    if allowed.contains(&schema) {
        Ok(schema)
    } else {
        Err(ConfigError::unsupported_schema(slot, schema.name()))
    }
}

/// Fold `layers` into one table, later layers replacing whole entries.
pub fn compose(
    layers: &[Layer],
    schemas: ActiveSchemas,
    options: &BTreeSet<ProductOption>,
) -> TranslationTable {
    let ctx = Ctx::new(schemas);
    let mut table = TranslationTable::new();
    for &layer in layers {
        let fragment = tables::fragment(layer, &ctx, options);
        debug!(layer = %layer, entries = fragment.len(), "Composing layer");
        table.overlay(fragment);
    }
    debug!(keys = table.len(), "Translation table composed");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyId;

    #[test]
    fn defaults_select_bitmap_keyboard() -> Result<(), ConfigError> {
        let schemas = EngineConfig::productivity(GuidelineVersion::V2_0).validate()?;
        assert_eq!(schemas, ActiveSchemas::default());
        Ok(())
    }

    #[test]
    fn wrong_slot_schema_is_rejected() {
        let err = EngineConfig::mouse_only()
            .with_keyboard_schema(ReportClass::HidMouse)
            .validate();
        assert_eq!(
            err,
            Err(ConfigError::unsupported_schema("keyboard", "HidMouse"))
        );
    }

    #[test]
    fn family_mismatch_names_requested_family() {
        let err = EngineConfig::gaming(GuidelineVersion::V2_0).validate();
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("Unsupported gaming keyboard guideline version: 2.0".to_string())
        );
        assert_eq!(
            EngineConfig::productivity(GuidelineVersion::V1_1).validate(),
            Err(ConfigError::unsupported_guideline("productivity", "1.1"))
        );
    }

    #[test]
    fn boot_substitutes_mouse_and_keyboard() {
        let schemas = ActiveSchemas {
            mouse: ReportClass::HidMouseNvidiaExtension,
            keyboard: ReportClass::HidKeyboardBitmap,
            consumer: ReportClass::HidConsumer,
        };
        let boot = schemas.for_protocol(Protocol::Boot);
        assert_eq!(boot.mouse, ReportClass::HidMouse);
        assert_eq!(boot.keyboard, ReportClass::HidKeyboard);
        assert_eq!(boot.consumer, ReportClass::HidConsumer);
        assert_eq!(schemas.for_protocol(Protocol::Report), schemas);
    }

    #[test]
    fn layers_follow_version_chain() {
        let layers = EngineConfig::gaming(GuidelineVersion::V1_1).layers();
        assert_eq!(
            layers,
            vec![
                Layer::Common,
                Layer::Mouse,
                Layer::KeyboardCommon,
                Layer::Guideline(GuidelineVersion::V1_0),
                Layer::Guideline(GuidelineVersion::V1_1),
                Layer::Options,
            ]
        );
        assert_eq!(
            EngineConfig::mouse_only().layers(),
            vec![Layer::Common, Layer::Mouse, Layer::Options]
        );
    }

    #[test]
    fn mouse_only_table_has_no_keyboard_keys() {
        let config = EngineConfig::mouse_only();
        let table = compose(&config.layers(), ActiveSchemas::default(), &config.options);
        assert!(table.contains(KeyId::Button16));
        assert!(!table.contains(KeyId::KeyboardA));
    }
}
