//! JSON product profiles.
//!
//! A test bench describes the device under test once; the profile resolves
//! to an [`EngineConfig`]. Names are kept as strings on disk so an unknown
//! schema or option is reported with the offending text.

use std::collections::BTreeSet;
use std::path::Path;

use logi_hid_expectation_errors::{ConfigError, ProfileError};
use logi_hid_report_schemas::ReportClass;
use serde::{Deserialize, Serialize};

use crate::resolver::EngineConfig;
use crate::version::{GuidelineVersion, ProductFamily, ProductOption};

/// Device description stored alongside a test campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductProfile {
    pub name: String,
    pub family: ProductFamily,

    #[serde(default)]
    pub guideline_version: Option<String>,

    #[serde(default)]
    pub mouse_report: Option<String>,

    #[serde(default)]
    pub keyboard_report: Option<String>,

    #[serde(default)]
    pub consumer_report: Option<String>,

    #[serde(default)]
    pub options: Vec<String>,
}

impl ProductProfile {
    /// Parse and validate a profile.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let profile: ProductProfile =
            serde_json::from_str(json).map_err(|e| ProfileError::InvalidJson(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read, parse and validate a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ProfileError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ProfileError> {
        serde_json::to_string_pretty(self).map_err(|e| ProfileError::InvalidJson(e.to_string()))
    }

    /// Structural checks that do not need name resolution.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::invalid("profile name is empty"));
        }

        match (self.family, &self.guideline_version) {
            (ProductFamily::Mouse, Some(version)) => {
                return Err(ProfileError::invalid(format!(
                    "mouse profiles cannot name a guideline version (got {version})"
                )));
            }
            (ProductFamily::Productivity, None) => {
                return Err(ProfileError::invalid(
                    "productivity profiles must name a guideline version",
                ));
            }
            _ => {}
        }

        let mut seen = BTreeSet::new();
        for option in &self.options {
            if !seen.insert(option.to_ascii_lowercase()) {
                return Err(ProfileError::invalid(format!("option {option} listed twice")));
            }
        }

        Ok(())
    }

    /// Resolve every name and check the combination the engine will see.
    pub fn to_engine_config(&self) -> Result<EngineConfig, ProfileError> {
        self.validate()?;

        let version = self
            .guideline_version
            .as_deref()
            .map(str::parse::<GuidelineVersion>)
            .transpose()?;
        let options = self
            .options
            .iter()
            .map(|option| option.parse::<ProductOption>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        let config = EngineConfig {
            version,
            is_gaming: self.family == ProductFamily::Gaming,
            mouse_schema: schema("mouse", self.mouse_report.as_deref())?,
            keyboard_schema: schema("keyboard", self.keyboard_report.as_deref())?,
            consumer_schema: schema("consumer", self.consumer_report.as_deref())?,
            options,
        };
        config.validate()?;
        Ok(config)
    }
}

fn schema(slot: &str, name: Option<&str>) -> Result<Option<ReportClass>, ConfigError> {
    name.map(|name| {
        ReportClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::unsupported_schema(slot, name))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYBOARD: &str = r#"{
        "name": "example keyboard",
        "family": "productivity",
        "guideline_version": "2.8",
        "mouse_report": "HidMouse",
        "keyboard_report": "HidKeyboardBitmap",
        "consumer_report": "HidConsumer",
        "options": ["katahira"]
    }"#;

    #[test]
    fn full_profile_resolves() -> Result<(), ProfileError> {
        let config = ProductProfile::from_json_str(KEYBOARD)?.to_engine_config()?;
        assert_eq!(config.version, Some(GuidelineVersion::V2_8));
        assert!(!config.is_gaming);
        assert_eq!(config.keyboard_schema, Some(ReportClass::HidKeyboardBitmap));
        assert!(config.options.contains(&ProductOption::Katahira));
        Ok(())
    }

    #[test]
    fn minimal_mouse_profile() -> Result<(), ProfileError> {
        let profile = ProductProfile::from_json_str(r#"{"name": "m", "family": "mouse"}"#)?;
        assert_eq!(profile.to_engine_config()?, EngineConfig::mouse_only());
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ProductProfile::from_json_str(r#"{"name": "m", "family": "mouse", "rgb": true}"#);
        assert!(matches!(err, Err(ProfileError::InvalidJson(_))));
    }

    #[test]
    fn mouse_with_version_is_invalid() {
        let err = ProductProfile::from_json_str(
            r#"{"name": "m", "family": "mouse", "guideline_version": "2.0"}"#,
        );
        assert!(matches!(err, Err(ProfileError::Invalid(_))));
    }

    #[test]
    fn unknown_schema_names_its_slot() -> Result<(), ProfileError> {
        let profile = ProductProfile::from_json_str(
            r#"{"name": "k", "family": "gaming", "guideline_version": "1.0", "keyboard_report": "HidJoystick"}"#,
        )?;
        assert_eq!(
            profile.to_engine_config(),
            Err(ProfileError::Config(ConfigError::unsupported_schema(
                "keyboard",
                "HidJoystick"
            )))
        );
        Ok(())
    }

    #[test]
    fn family_mismatch_surfaces_from_config() -> Result<(), ProfileError> {
        let profile = ProductProfile::from_json_str(
            r#"{"name": "k", "family": "gaming", "guideline_version": "2.0"}"#,
        )?;
        assert_eq!(
            profile.to_engine_config(),
            Err(ProfileError::Config(ConfigError::unsupported_guideline(
                "gaming", "2.0"
            )))
        );
        Ok(())
    }

    #[test]
    fn load_reads_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("keyboard.json");
        std::fs::write(&path, KEYBOARD)?;
        let profile = ProductProfile::load(&path)?;
        assert_eq!(profile.name, "example keyboard");

        let missing = ProductProfile::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ProfileError::Io { .. })));
        Ok(())
    }
}
