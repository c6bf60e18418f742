//! USB HID usage codes used by the expectation engine.
//!
//! Three usage pages are covered: Keyboard/Keypad (0x07), Consumer (0x0C) and
//! the system-control collection of Generic Desktop (0x01). Every constant is
//! also reachable by its symbolic name through [`usage`].

#![deny(static_mut_refs)]

use core::fmt;
use core::str::FromStr;

use logi_hid_expectation_errors::ConfigError;

macro_rules! usages {
    ($(#[$meta:meta])* pub mod $module:ident { $($(#[$doc:meta])* $name:ident = $value:expr),* $(,)? }) => {
        $(#[$meta])*
        pub mod $module {
            $(
                $(#[$doc])*
                pub const $name: u16 = $value;
            )*

            /// Every usage on this page, keyed by its symbolic name.
            pub const TABLE: &[(&str, u16)] = &[$((stringify!($name), $name)),*];
        }
    };
}

usages! {
    /// Keyboard/Keypad page (0x07).
    pub mod keyboard {
        KEYBOARD_NO_EVENT = 0x00,
        /// Phantom state reported when too many keys are held.
        KEYBOARD_ERROR_ROLLOVER = 0x01,
        KEYBOARD_POST_FAIL = 0x02,
        KEYBOARD_ERROR_UNDEFINED = 0x03,
        KEYBOARD_A_AND_A = 0x04,
        KEYBOARD_B_AND_B = 0x05,
        KEYBOARD_C_AND_C = 0x06,
        KEYBOARD_D_AND_D = 0x07,
        KEYBOARD_E_AND_E = 0x08,
        KEYBOARD_F_AND_F = 0x09,
        KEYBOARD_G_AND_G = 0x0A,
        KEYBOARD_H_AND_H = 0x0B,
        KEYBOARD_I_AND_I = 0x0C,
        KEYBOARD_J_AND_J = 0x0D,
        KEYBOARD_K_AND_K = 0x0E,
        KEYBOARD_L_AND_L = 0x0F,
        KEYBOARD_M_AND_M = 0x10,
        KEYBOARD_N_AND_N = 0x11,
        KEYBOARD_O_AND_O = 0x12,
        KEYBOARD_P_AND_P = 0x13,
        KEYBOARD_Q_AND_Q = 0x14,
        KEYBOARD_R_AND_R = 0x15,
        KEYBOARD_S_AND_S = 0x16,
        KEYBOARD_T_AND_T = 0x17,
        KEYBOARD_U_AND_U = 0x18,
        KEYBOARD_V_AND_V = 0x19,
        KEYBOARD_W_AND_W = 0x1A,
        KEYBOARD_X_AND_X = 0x1B,
        KEYBOARD_Y_AND_Y = 0x1C,
        KEYBOARD_Z_AND_Z = 0x1D,
        KEYBOARD_1_AND_EXCLAMATION_MARK = 0x1E,
        KEYBOARD_2_AND_AT = 0x1F,
        KEYBOARD_3_AND_HASH = 0x20,
        KEYBOARD_4_AND_DOLLAR = 0x21,
        KEYBOARD_5_AND_PERCENT = 0x22,
        KEYBOARD_6_AND_CARET = 0x23,
        KEYBOARD_7_AND_AMPERSAND = 0x24,
        KEYBOARD_8_AND_ASTERISK = 0x25,
        KEYBOARD_9_AND_LEFT_PARENTHESIS = 0x26,
        KEYBOARD_0_AND_RIGHT_PARENTHESIS = 0x27,
        KEYBOARD_RETURN_ENTER = 0x28,
        KEYBOARD_ESCAPE = 0x29,
        KEYBOARD_DELETE_BACKSPACE = 0x2A,
        KEYBOARD_TAB = 0x2B,
        KEYBOARD_SPACE_BAR = 0x2C,
        KEYBOARD_DASH_AND_UNDERSCORE = 0x2D,
        KEYBOARD_EQUAL_AND_PLUS = 0x2E,
        KEYBOARD_LEFT_BRACKET_AND_BRACE = 0x2F,
        KEYBOARD_RIGHT_BRACKET_AND_BRACE = 0x30,
        KEYBOARD_BACKSLASH_AND_PIPE = 0x31,
        /// Non-US `#` and `~`.
        KEYBOARD_NON_US_AND_TILDE = 0x32,
        KEYBOARD_SEMICOLON_AND_COLON = 0x33,
        KEYBOARD_APOSTROPHE_AND_QUOTATION_MARK = 0x34,
        KEYBOARD_GRAVE_ACCENT_AND_TILDE = 0x35,
        KEYBOARD_COMMA_AND_LESS = 0x36,
        KEYBOARD_PERIOD_AND_MORE = 0x37,
        KEYBOARD_FORWARD_SLASH_AND_QUESTION_MARK = 0x38,
        KEYBOARD_CAPS_LOCK = 0x39,
        KEYBOARD_F1 = 0x3A,
        KEYBOARD_F2 = 0x3B,
        KEYBOARD_F3 = 0x3C,
        KEYBOARD_F4 = 0x3D,
        KEYBOARD_F5 = 0x3E,
        KEYBOARD_F6 = 0x3F,
        KEYBOARD_F7 = 0x40,
        KEYBOARD_F8 = 0x41,
        KEYBOARD_F9 = 0x42,
        KEYBOARD_F10 = 0x43,
        KEYBOARD_F11 = 0x44,
        KEYBOARD_F12 = 0x45,
        KEYBOARD_PRINT_SCREEN = 0x46,
        KEYBOARD_SCROLL_LOCK = 0x47,
        KEYBOARD_PAUSE = 0x48,
        KEYBOARD_INSERT = 0x49,
        KEYBOARD_HOME = 0x4A,
        KEYBOARD_PAGE_UP = 0x4B,
        KEYBOARD_DELETE_FORWARD = 0x4C,
        KEYBOARD_END = 0x4D,
        KEYBOARD_PAGE_DOWN = 0x4E,
        KEYBOARD_RIGHT_ARROW = 0x4F,
        KEYBOARD_LEFT_ARROW = 0x50,
        KEYBOARD_DOWN_ARROW = 0x51,
        KEYBOARD_UP_ARROW = 0x52,
        KEYPAD_NUM_LOCK_AND_CLEAR = 0x53,
        KEYPAD_FORWARD_SLASH = 0x54,
        KEYPAD_ASTERISK = 0x55,
        KEYPAD_DASH = 0x56,
        KEYPAD_PLUS = 0x57,
        KEYPAD_ENTER = 0x58,
        KEYPAD_1_AND_END = 0x59,
        KEYPAD_2_AND_DOWN_ARROW = 0x5A,
        KEYPAD_3_AND_PAGE_DN = 0x5B,
        KEYPAD_4_AND_LEFT_ARROW = 0x5C,
        KEYPAD_5 = 0x5D,
        KEYPAD_6_AND_RIGHT_ARROW = 0x5E,
        KEYPAD_7_AND_HOME = 0x5F,
        KEYPAD_8_AND_UP_ARROW = 0x60,
        KEYPAD_9_AND_PAGE_UP = 0x61,
        KEYPAD_0_AND_INSERT = 0x62,
        /// Keypad `.` and Delete.
        KEYPAD_COMMA_AND_DELETE = 0x63,
        KEYBOARD_NON_US_BACKSLASH_AND_PIPE = 0x64,
        /// Windows "context menu" key.
        KEYBOARD_APPLICATION = 0x65,
        KEYBOARD_POWER = 0x66,
        KEYPAD_EQUAL = 0x67,
        KEYBOARD_F13 = 0x68,
        KEYBOARD_F14 = 0x69,
        KEYBOARD_F15 = 0x6A,
        KEYBOARD_F16 = 0x6B,
        KEYBOARD_F17 = 0x6C,
        KEYBOARD_F18 = 0x6D,
        KEYBOARD_F19 = 0x6E,
        KEYBOARD_F20 = 0x6F,
        KEYBOARD_F21 = 0x70,
        KEYBOARD_F22 = 0x71,
        KEYBOARD_F23 = 0x72,
        KEYBOARD_F24 = 0x73,
        KEYBOARD_EXECUTE = 0x74,
        KEYBOARD_HELP = 0x75,
        KEYBOARD_MENU = 0x76,
        KEYBOARD_SELECT = 0x77,
        KEYBOARD_STOP = 0x78,
        KEYBOARD_AGAIN = 0x79,
        KEYBOARD_UNDO = 0x7A,
        KEYBOARD_CUT = 0x7B,
        KEYBOARD_COPY = 0x7C,
        KEYBOARD_PASTE = 0x7D,
        KEYBOARD_FIND = 0x7E,
        KEYBOARD_MUTE = 0x7F,
        KEYBOARD_VOLUME_UP = 0x80,
        KEYBOARD_VOLUME_DOWN = 0x81,
        KEYBOARD_LOCKING_CAPS_LOCK = 0x82,
        KEYBOARD_LOCKING_NUM_LOCK = 0x83,
        KEYBOARD_LOCKING_SCROLL_LOCK = 0x84,
        KEYPAD_COMMA = 0x85,
        KEYPAD_EQUAL_SIGN = 0x86,
        /// Ro (JIS).
        KEYBOARD_INTERNATIONAL1 = 0x87,
        /// Katakana/Hiragana (JIS).
        KEYBOARD_INTERNATIONAL2 = 0x88,
        /// Yen (JIS).
        KEYBOARD_INTERNATIONAL3 = 0x89,
        /// Henkan (JIS).
        KEYBOARD_INTERNATIONAL4 = 0x8A,
        /// Muhenkan (JIS).
        KEYBOARD_INTERNATIONAL5 = 0x8B,
        KEYBOARD_INTERNATIONAL6 = 0x8C,
        KEYBOARD_INTERNATIONAL7 = 0x8D,
        KEYBOARD_INTERNATIONAL8 = 0x8E,
        KEYBOARD_INTERNATIONAL9 = 0x8F,
        /// Hangul/English toggle; Kana on Apple layouts.
        KEYBOARD_LANG1 = 0x90,
        /// Hanja conversion; Alphanumeric on Apple layouts.
        KEYBOARD_LANG2 = 0x91,
        KEYBOARD_LANG3 = 0x92,
        KEYBOARD_LANG4 = 0x93,
        KEYBOARD_LANG5 = 0x94,
        KEYBOARD_ALTERNATE_ERASE = 0x99,
        KEYBOARD_SYSREQ_ATTENTION = 0x9A,
        KEYBOARD_CANCEL = 0x9B,
        KEYBOARD_CLEAR = 0x9C,
        KEYBOARD_LEFT_CONTROL = 0xE0,
        KEYBOARD_LEFT_SHIFT = 0xE1,
        KEYBOARD_LEFT_ALT = 0xE2,
        KEYBOARD_LEFT_GUI = 0xE3,
        KEYBOARD_RIGHT_CONTROL = 0xE4,
        KEYBOARD_RIGHT_SHIFT = 0xE5,
        KEYBOARD_RIGHT_ALT = 0xE6,
        KEYBOARD_RIGHT_GUI = 0xE7,
    }
}

usages! {
    /// Consumer page (0x0C).
    pub mod consumer {
        POWER = 0x30,
        MENU = 0x40,
        BRIGHTNESS_UP = 0x6F,
        BRIGHTNESS_DOWN = 0x70,
        KBD_BACKLIGHT_UP = 0x79,
        KBD_BACKLIGHT_DOWN = 0x7A,
        SCAN_NEXT_TRACK = 0xB5,
        SCAN_PREVIOUS_TRACK = 0xB6,
        STOP = 0xB7,
        EJECT = 0xB8,
        PLAY_PAUSE = 0xCD,
        VOICE_COMMAND = 0xCF,
        START_OR_STOP_MICROPHONE_CAPTURE = 0xD5,
        /// Start or stop a voice dictation session.
        VOICE_DICTATION = 0xD8,
        /// Invoke or dismiss the emoji picker.
        EMOJI_PICKER = 0xD9,
        MUTE = 0xE2,
        VOLUME_UP = 0xE9,
        VOLUME_DOWN = 0xEA,
        AL_CALCULATOR = 0x192,
        AL_CONTROL_PANEL = 0x19F,
        AC_NEW = 0x201,
        AC_OPEN = 0x202,
        AC_CLOSE = 0x203,
        AC_PRINT = 0x208,
        AC_COPY = 0x21B,
        AC_CUT = 0x21C,
        AC_PASTE = 0x21D,
        AC_SEARCH = 0x221,
        AC_HOME = 0x223,
        AC_BACK = 0x224,
        AC_FORWARD = 0x225,
        AC_REFRESH = 0x227,
        AC_VIEW_TOGGLE = 0x232,
        AC_NEXT_KEYBOARD_LAYOUT_SELECT = 0x29D,
        /// AC Desktop Show All Windows; Mission Control on macOS.
        OVERVIEW = 0x29F,
        /// Launchpad as interpreted by macOS.
        AC_LAUNCHPAD = 0x2A0,
        AC_DESKTOP_SHOW_ALL_APPLICATIONS = 0x2A2,
    }
}

usages! {
    /// System control collection of the Generic Desktop page (0x01).
    pub mod system_control {
        SYSTEM_POWER_DOWN = 0x81,
        SYSTEM_SLEEP = 0x82,
        SYSTEM_WAKE_UP = 0x83,
        SYSTEM_DO_NOT_DISTURB = 0x9B,
        SYSTEM_MICROPHONE_MUTE = 0xA9,
    }
}

/// Largest keyboard usage that is still a keyboard state rather than a key.
///
/// Usages above it are "real" keys: slot reports carry them in `key_code1`,
/// bitmap reports raise the bit named after them.
pub const KEYBOARD_ERROR_ROLLOVER: u16 = keyboard::KEYBOARD_ERROR_ROLLOVER;

/// Usage pages covered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UsagePage {
    /// Generic Desktop, system control collection
    SystemControl,
    /// Keyboard/Keypad
    Keyboard,
    /// Consumer
    Consumer,
}

impl UsagePage {
    /// Every supported page.
    pub const ALL: [UsagePage; 3] = [
        UsagePage::SystemControl,
        UsagePage::Keyboard,
        UsagePage::Consumer,
    ];

    /// Numeric HID usage page identifier.
    pub const fn page_id(self) -> u16 {
        match self {
            UsagePage::SystemControl => 0x01,
            UsagePage::Keyboard => 0x07,
            UsagePage::Consumer => 0x0C,
        }
    }

    /// Canonical page name.
    pub const fn name(self) -> &'static str {
        match self {
            UsagePage::SystemControl => "system_control",
            UsagePage::Keyboard => "keyboard",
            UsagePage::Consumer => "consumer",
        }
    }

    /// Name/code pairs of this page.
    pub fn table(self) -> &'static [(&'static str, u16)] {
        match self {
            UsagePage::SystemControl => system_control::TABLE,
            UsagePage::Keyboard => keyboard::TABLE,
            UsagePage::Consumer => consumer::TABLE,
        }
    }
}

impl fmt::Display for UsagePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UsagePage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsagePage::ALL
            .into_iter()
            .find(|page| page.name() == s)
            .ok_or_else(|| ConfigError::unknown_name("usage page", s))
    }
}

/// Look up a usage code by symbolic name.
pub fn usage(page: UsagePage, name: &str) -> Option<u16> {
    page.table()
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, code)| code)
}

/// Symbolic name of a usage code, if the page defines one.
pub fn usage_name(page: UsagePage, code: u16) -> Option<&'static str> {
    page.table()
        .iter()
        .find(|&&(_, candidate)| candidate == code)
        .map(|&(name, _)| name)
}

/// Whether a keyboard usage names an actual key (see [`KEYBOARD_ERROR_ROLLOVER`]).
pub const fn is_key_usage(code: i32) -> bool {
    code > KEYBOARD_ERROR_ROLLOVER as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(usage(UsagePage::Keyboard, "KEYBOARD_A_AND_A"), Some(0x04));
        assert_eq!(usage(UsagePage::Consumer, "AC_HOME"), Some(0x223));
        assert_eq!(
            usage(UsagePage::SystemControl, "SYSTEM_SLEEP"),
            Some(system_control::SYSTEM_SLEEP)
        );
        assert_eq!(usage(UsagePage::Consumer, "KEYBOARD_A_AND_A"), None);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(usage_name(UsagePage::Keyboard, 0x2B), Some("KEYBOARD_TAB"));
        assert_eq!(usage_name(UsagePage::Consumer, 0xFFFF), None);
    }

    #[test]
    fn test_rollover_threshold() {
        assert!(!is_key_usage(1));
        assert!(!is_key_usage(0));
        assert!(is_key_usage(i32::from(keyboard::KEYBOARD_A_AND_A)));
    }

    #[test]
    fn test_page_round_trip_through_name() -> Result<(), ConfigError> {
        for page in UsagePage::ALL {
            assert_eq!(page.name().parse::<UsagePage>()?, page);
        }
        assert!("led".parse::<UsagePage>().is_err());
        Ok(())
    }
}
