//! Host operating system variants an entry can be keyed by.

use core::fmt;
use core::str::FromStr;

use logi_hid_expectation_errors::ConfigError;

/// Host OS (or host mode) a sequence applies to.
///
/// `All` is the fallback for any variant without its own sequence. `Boot`
/// holds the sequence to expect while the host runs the USB boot protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OsVariant {
    Windows,
    Mac,
    /// macOS with the ISO `§`/`` ` `` keys swapped back to the US layout.
    InvertedMac,
    Ipad,
    Chrome,
    /// ChromeOS host connected over BLE without the receiver.
    ChromeBleDirect,
    WinEmb,
    Linux,
    Android,
    WebOs,
    Tizen,
    Boot,
    All,
}

impl OsVariant {
    pub const ALL: [OsVariant; 13] = [
        OsVariant::Windows,
        OsVariant::Mac,
        OsVariant::InvertedMac,
        OsVariant::Ipad,
        OsVariant::Chrome,
        OsVariant::ChromeBleDirect,
        OsVariant::WinEmb,
        OsVariant::Linux,
        OsVariant::Android,
        OsVariant::WebOs,
        OsVariant::Tizen,
        OsVariant::Boot,
        OsVariant::All,
    ];

    /// Name used by test benches to identify the host.
    pub const fn name(self) -> &'static str {
        match self {
            OsVariant::Windows => "windowsOS",
            OsVariant::Mac => "macOS",
            OsVariant::InvertedMac => "invertedMacOS",
            OsVariant::Ipad => "iPadOS",
            OsVariant::Chrome => "chromeOS",
            OsVariant::ChromeBleDirect => "chromeBleDirect",
            OsVariant::WinEmb => "windowsEmbedded",
            OsVariant::Linux => "linuxOS",
            OsVariant::Android => "androidOS",
            OsVariant::WebOs => "webOS",
            OsVariant::Tizen => "tizenOS",
            OsVariant::Boot => "bootProtocol",
            OsVariant::All => "all",
        }
    }

    /// Whether the variant names a concrete host rather than a fallback slot.
    pub const fn is_host(self) -> bool {
        !matches!(self, OsVariant::Boot | OsVariant::All)
    }
}

impl fmt::Display for OsVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OsVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OsVariant::ALL
            .into_iter()
            .find(|os| os.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::unknown_name("OS variant", s))
    }
}
