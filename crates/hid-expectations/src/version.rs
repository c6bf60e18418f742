//! Guideline versions, product families, options and USB protocol modes.

use core::fmt;
use core::str::FromStr;

use logi_hid_expectation_errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Product family a device belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFamily {
    Gaming,
    Productivity,
    /// Pointing device without a keyboard guideline.
    Mouse,
}

impl ProductFamily {
    pub const fn name(self) -> &'static str {
        match self {
            ProductFamily::Gaming => "gaming",
            ProductFamily::Productivity => "productivity",
            ProductFamily::Mouse => "mouse",
        }
    }
}

impl fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keyboard guideline document version.
///
/// Versions are ordered; within a family every version extends its
/// predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GuidelineVersion {
    V1_0,
    V1_1,
    V2_0,
    V2_1,
    V2_2,
    V2_3,
    V2_4,
    V2_5,
    V2_6,
    V2_7,
    V2_8,
    V3_0,
    V3_1,
    V3_2,
    V3_3,
}

impl GuidelineVersion {
    pub const ALL: [GuidelineVersion; 15] = [
        GuidelineVersion::V1_0,
        GuidelineVersion::V1_1,
        GuidelineVersion::V2_0,
        GuidelineVersion::V2_1,
        GuidelineVersion::V2_2,
        GuidelineVersion::V2_3,
        GuidelineVersion::V2_4,
        GuidelineVersion::V2_5,
        GuidelineVersion::V2_6,
        GuidelineVersion::V2_7,
        GuidelineVersion::V2_8,
        GuidelineVersion::V3_0,
        GuidelineVersion::V3_1,
        GuidelineVersion::V3_2,
        GuidelineVersion::V3_3,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            GuidelineVersion::V1_0 => "1.0",
            GuidelineVersion::V1_1 => "1.1",
            GuidelineVersion::V2_0 => "2.0",
            GuidelineVersion::V2_1 => "2.1",
            GuidelineVersion::V2_2 => "2.2",
            GuidelineVersion::V2_3 => "2.3",
            GuidelineVersion::V2_4 => "2.4",
            GuidelineVersion::V2_5 => "2.5",
            GuidelineVersion::V2_6 => "2.6",
            GuidelineVersion::V2_7 => "2.7",
            GuidelineVersion::V2_8 => "2.8",
            GuidelineVersion::V3_0 => "3.0",
            GuidelineVersion::V3_1 => "3.1",
            GuidelineVersion::V3_2 => "3.2",
            GuidelineVersion::V3_3 => "3.3",
        }
    }

    /// Family whose guideline document defines this version.
    pub const fn family(self) -> ProductFamily {
        match self {
            GuidelineVersion::V1_0 | GuidelineVersion::V1_1 => ProductFamily::Gaming,
            _ => ProductFamily::Productivity,
        }
    }

    /// Versions of the same family from the first one up to `self`, oldest first.
    pub fn chain(self) -> &'static [GuidelineVersion] {
        let family = self.family();
        let start = VERSIONS
            .iter()
            .position(|v| v.family() == family)
            .unwrap_or_default();
        let end = VERSIONS
            .iter()
            .position(|v| *v == self)
            .unwrap_or_default();
        VERSIONS.get(start..=end).unwrap_or_default()
    }

    /// The version this one extends, if any.
    pub fn predecessor(self) -> Option<GuidelineVersion> {
        match self.chain() {
            [.., previous, _] => Some(*previous),
            _ => None,
        }
    }
}

static VERSIONS: [GuidelineVersion; 15] = GuidelineVersion::ALL;

impl fmt::Display for GuidelineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GuidelineVersion {
    type Err = ConfigError;

    /// Accepts `2.0`, `v2.0` and `V2_0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed)
            .replace('_', ".");
        GuidelineVersion::ALL
            .into_iter()
            .find(|v| v.name() == number)
            .ok_or_else(|| ConfigError::UnsupportedVersion(s.to_string()))
    }
}

/// Product capability affecting the expected reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductOption {
    /// Back/forward buttons double as a virtual thumb wheel.
    HorizontalScrolling,
    /// Reconfigurable button mapped to the emoji menu.
    EmojiMenuButton,
    /// Dedicated Katakana/Hiragana key.
    Katahira,
}

impl ProductOption {
    pub const ALL: [ProductOption; 3] = [
        ProductOption::HorizontalScrolling,
        ProductOption::EmojiMenuButton,
        ProductOption::Katahira,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ProductOption::HorizontalScrolling => "horizontal_scrolling",
            ProductOption::EmojiMenuButton => "emoji_menu_button",
            ProductOption::Katahira => "katahira",
        }
    }
}

impl fmt::Display for ProductOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductOption {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductOption::ALL
            .into_iter()
            .find(|option| option.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnsupportedOption(s.to_string()))
    }
}

/// USB HID protocol mode negotiated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Protocol {
    Boot = 0,
    #[default]
    Report = 1,
}

impl Protocol {
    pub const fn name(self) -> &'static str {
        match self {
            Protocol::Boot => "boot",
            Protocol::Report => "report",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Protocol {
    type Error = ConfigError;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(Protocol::Boot),
            1 => Ok(Protocol::Report),
            other => Err(ConfigError::UnsupportedProtocol(other)),
        }
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Protocol::Boot, Protocol::Report]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::unknown_name("protocol", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_stay_within_family() {
        assert_eq!(
            GuidelineVersion::V1_1.chain(),
            &[GuidelineVersion::V1_0, GuidelineVersion::V1_1]
        );
        assert_eq!(GuidelineVersion::V2_0.chain(), &[GuidelineVersion::V2_0]);
        assert_eq!(GuidelineVersion::V3_3.chain().len(), 13);
        for version in GuidelineVersion::ALL {
            assert!(version.chain().iter().all(|v| v.family() == version.family()));
            assert_eq!(version.chain().last(), Some(&version));
        }
    }

    #[test]
    fn predecessors() {
        assert_eq!(GuidelineVersion::V1_0.predecessor(), None);
        assert_eq!(GuidelineVersion::V2_0.predecessor(), None);
        assert_eq!(
            GuidelineVersion::V3_0.predecessor(),
            Some(GuidelineVersion::V2_8)
        );
    }

    #[test]
    fn parse_versions() -> Result<(), ConfigError> {
        assert_eq!("2.8".parse::<GuidelineVersion>()?, GuidelineVersion::V2_8);
        assert_eq!("v3.1".parse::<GuidelineVersion>()?, GuidelineVersion::V3_1);
        assert_eq!("V1_1".parse::<GuidelineVersion>()?, GuidelineVersion::V1_1);
        assert_eq!(
            "4.0".parse::<GuidelineVersion>(),
            Err(ConfigError::UnsupportedVersion("4.0".to_string()))
        );
        Ok(())
    }

    #[test]
    fn protocol_from_u8() {
        assert_eq!(Protocol::try_from(0), Ok(Protocol::Boot));
        assert_eq!(Protocol::try_from(1), Ok(Protocol::Report));
        assert_eq!(
            Protocol::try_from(2),
            Err(ConfigError::UnsupportedProtocol(2))
        );
        assert_eq!(Protocol::default(), Protocol::Report);
    }

    #[test]
    fn options_parse_case_insensitively() -> Result<(), ConfigError> {
        assert_eq!(
            "HORIZONTAL_SCROLLING".parse::<ProductOption>()?,
            ProductOption::HorizontalScrolling
        );
        assert_eq!(
            "touchpad".parse::<ProductOption>(),
            Err(ConfigError::UnsupportedOption("touchpad".to_string()))
        );
        Ok(())
    }
}
