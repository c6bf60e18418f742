//! Closed set of report classes.

use core::fmt;
use core::str::FromStr;

use logi_hid_expectation_errors::ConfigError;

/// Identifier of one of the report layouts a device can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportClass {
    /// Boot-compatible keyboard: modifier byte plus six usage slots.
    HidKeyboard,
    /// N-key rollover keyboard: one bit per usage.
    HidKeyboardBitmap,
    /// Boot-compatible mouse.
    HidMouse,
    /// Mouse report with the vendor extension byte appended.
    HidMouseNvidiaExtension,
    /// Consumer control: two 16-bit usage slots.
    HidConsumer,
    /// Generic Desktop system control (power state, do-not-disturb, mic mute).
    HidSystemControl,
    /// Telephony call state management.
    HidCallStateManagementControl,
}

impl ReportClass {
    /// Every report class in declaration order.
    pub const ALL: [ReportClass; 7] = [
        ReportClass::HidKeyboard,
        ReportClass::HidKeyboardBitmap,
        ReportClass::HidMouse,
        ReportClass::HidMouseNvidiaExtension,
        ReportClass::HidConsumer,
        ReportClass::HidSystemControl,
        ReportClass::HidCallStateManagementControl,
    ];

    /// Schemas accepted in the mouse slot.
    pub const MOUSE_SCHEMAS: [ReportClass; 2] =
        [ReportClass::HidMouse, ReportClass::HidMouseNvidiaExtension];

    /// Schemas accepted in the keyboard slot.
    pub const KEYBOARD_SCHEMAS: [ReportClass; 2] =
        [ReportClass::HidKeyboard, ReportClass::HidKeyboardBitmap];

    /// Schemas accepted in the consumer slot.
    pub const CONSUMER_SCHEMAS: [ReportClass; 1] = [ReportClass::HidConsumer];

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            ReportClass::HidKeyboard => "HidKeyboard",
            ReportClass::HidKeyboardBitmap => "HidKeyboardBitmap",
            ReportClass::HidMouse => "HidMouse",
            ReportClass::HidMouseNvidiaExtension => "HidMouseNvidiaExtension",
            ReportClass::HidConsumer => "HidConsumer",
            ReportClass::HidSystemControl => "HidSystemControl",
            ReportClass::HidCallStateManagementControl => "HidCallStateManagementControl",
        }
    }

    pub const fn is_keyboard(self) -> bool {
        matches!(
            self,
            ReportClass::HidKeyboard | ReportClass::HidKeyboardBitmap
        )
    }

    pub const fn is_mouse(self) -> bool {
        matches!(
            self,
            ReportClass::HidMouse | ReportClass::HidMouseNvidiaExtension
        )
    }

    /// Whether the class can be emitted while the host runs the boot protocol.
    pub const fn is_boot_compatible(self) -> bool {
        matches!(self, ReportClass::HidKeyboard | ReportClass::HidMouse)
    }

    /// The class substituted for this one under the boot protocol.
    ///
    /// Keyboard and mouse classes collapse to their boot variants; the other
    /// classes have no boot form and are returned unchanged.
    pub const fn boot_variant(self) -> ReportClass {
        match self {
            ReportClass::HidKeyboardBitmap => ReportClass::HidKeyboard,
            ReportClass::HidMouseNvidiaExtension => ReportClass::HidMouse,
            other => other,
        }
    }
}

impl fmt::Display for ReportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::unknown_name("report class", s))
    }
}
