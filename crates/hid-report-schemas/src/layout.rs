//! Field layouts of every report class.

use core::fmt;

use logi_hid_expectation_errors::SchemaError;
use logi_hid_usage_tables::system_control;

use crate::builder::ReportBuilder;
use crate::class::ReportClass;

/// One named bit field of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub bit_offset: u16,
    pub bit_len: u8,
    pub signed: bool,
}

impl FieldSpec {
    pub const fn unsigned(name: &'static str, bit_offset: u16, bit_len: u8) -> Self {
        Self {
            name,
            bit_offset,
            bit_len,
            signed: false,
        }
    }

    pub const fn signed(name: &'static str, bit_offset: u16, bit_len: u8) -> Self {
        Self {
            name,
            bit_offset,
            bit_len,
            signed: true,
        }
    }

    pub const fn flag(name: &'static str, bit_offset: u16) -> Self {
        Self::unsigned(name, bit_offset, 1)
    }

    /// Smallest value the field accepts.
    pub const fn min(&self) -> i64 {
        if self.signed {
            -(1i64 << (self.bit_len - 1))
        } else {
            0
        }
    }

    /// Largest value the field accepts.
    ///
    /// Signed fields also take the unsigned range so raw register values such
    /// as `0xFF` for a pan of `-1` can be written as-is.
    pub const fn max(&self) -> i64 {
        (1i64 << self.bit_len) - 1
    }

    pub const fn accepts(&self, value: i64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

/// Layout of a report class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSchema {
    class: ReportClass,
    byte_len: usize,
    fields: &'static [FieldSpec],
    aliases: &'static [(&'static str, &'static str)],
}

impl ReportSchema {
    pub const fn class(&self) -> ReportClass {
        self.class
    }

    /// Report length in bytes, excluding the report ID.
    pub const fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Resolve a field by name. Matching ignores ASCII case and follows aliases.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        let fields = self.fields;
        let target = self
            .aliases
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map_or(name, |(_, canonical)| *canonical);
        fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(target))
    }

    pub fn field_exists(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Encode a report with the given field values; unnamed fields stay zero.
    pub fn encode<'a, I>(&self, values: I) -> Result<Vec<u8>, SchemaError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut builder = ReportBuilder::new(self.byte_len);
        for (name, value) in values {
            let field = self
                .field(name)
                .ok_or_else(|| SchemaError::unknown_field(self.class.name(), name))?;
            if !field.accepts(value) {
                return Err(SchemaError::ValueOutOfRange {
                    class: self.class.name().to_string(),
                    field: field.name.to_string(),
                    value,
                    min: field.min(),
                    max: field.max(),
                });
            }
            builder.write_bits(field.bit_offset, field.bit_len, value);
        }
        Ok(builder.into_inner())
    }
}

/// Symbolic `POWER_STATE` positions of the system control report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PowerState {
    SystemSleep = 1,
    SystemPowerDown = 2,
    SystemWakeUp = 3,
}

impl PowerState {
    pub const ALL: [PowerState; 3] = [
        PowerState::SystemSleep,
        PowerState::SystemPowerDown,
        PowerState::SystemWakeUp,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PowerState::SystemSleep => "SYSTEM_SLEEP",
            PowerState::SystemPowerDown => "SYSTEM_POWER_DOWN",
            PowerState::SystemWakeUp => "SYSTEM_WAKE_UP",
        }
    }

    /// Value written into the `POWER_STATE` field.
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// Generic Desktop usage the position stands for.
    pub const fn usage(self) -> u16 {
        match self {
            PowerState::SystemSleep => system_control::SYSTEM_SLEEP,
            PowerState::SystemPowerDown => system_control::SYSTEM_POWER_DOWN,
            PowerState::SystemWakeUp => system_control::SYSTEM_WAKE_UP,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `POWER_STATE` position table, keyed by symbolic name.
pub const POSITION: [(&str, u8); 3] = [
    ("SYSTEM_SLEEP", PowerState::SystemSleep.position()),
    ("SYSTEM_POWER_DOWN", PowerState::SystemPowerDown.position()),
    ("SYSTEM_WAKE_UP", PowerState::SystemWakeUp.position()),
];

static KEYBOARD_FIELDS: [FieldSpec; 14] = [
    FieldSpec::flag("keyboard_left_control", 0),
    FieldSpec::flag("keyboard_left_shift", 1),
    FieldSpec::flag("keyboard_left_alt", 2),
    FieldSpec::flag("keyboard_left_gui", 3),
    FieldSpec::flag("keyboard_right_control", 4),
    FieldSpec::flag("keyboard_right_shift", 5),
    FieldSpec::flag("keyboard_right_alt", 6),
    FieldSpec::flag("keyboard_right_gui", 7),
    // byte 1 is reserved
    FieldSpec::unsigned("key_code1", 16, 8),
    FieldSpec::unsigned("key_code2", 24, 8),
    FieldSpec::unsigned("key_code3", 32, 8),
    FieldSpec::unsigned("key_code4", 40, 8),
    FieldSpec::unsigned("key_code5", 48, 8),
    FieldSpec::unsigned("key_code6", 56, 8),
];

static KEYBOARD_ALIASES: [(&str, &str); 8] = [
    ("keyboard_control1", "keyboard_left_control"),
    ("keyboard_control2", "keyboard_left_shift"),
    ("keyboard_control3", "keyboard_left_alt"),
    ("keyboard_control4", "keyboard_left_gui"),
    ("keyboard_control5", "keyboard_right_control"),
    ("keyboard_control6", "keyboard_right_shift"),
    ("keyboard_control7", "keyboard_right_alt"),
    ("keyboard_control8", "keyboard_right_gui"),
];

/// Bit order of the N-key rollover report.
const BITMAP_NAMES: [&str; 128] = [
    "KEYBOARD_LEFT_CONTROL",
    "KEYBOARD_LEFT_SHIFT",
    "KEYBOARD_LEFT_ALT",
    "KEYBOARD_LEFT_GUI",
    "KEYBOARD_RIGHT_CONTROL",
    "KEYBOARD_RIGHT_SHIFT",
    "KEYBOARD_RIGHT_ALT",
    "KEYBOARD_RIGHT_GUI",
    "KEYBOARD_A",
    "KEYBOARD_B",
    "KEYBOARD_C",
    "KEYBOARD_D",
    "KEYBOARD_E",
    "KEYBOARD_F",
    "KEYBOARD_G",
    "KEYBOARD_H",
    "KEYBOARD_I",
    "KEYBOARD_J",
    "KEYBOARD_K",
    "KEYBOARD_L",
    "KEYBOARD_M",
    "KEYBOARD_N",
    "KEYBOARD_O",
    "KEYBOARD_P",
    "KEYBOARD_Q",
    "KEYBOARD_R",
    "KEYBOARD_S",
    "KEYBOARD_T",
    "KEYBOARD_U",
    "KEYBOARD_V",
    "KEYBOARD_W",
    "KEYBOARD_X",
    "KEYBOARD_Y",
    "KEYBOARD_Z",
    "KEYBOARD_1",
    "KEYBOARD_2",
    "KEYBOARD_3",
    "KEYBOARD_4",
    "KEYBOARD_5",
    "KEYBOARD_6",
    "KEYBOARD_7",
    "KEYBOARD_8",
    "KEYBOARD_9",
    "KEYBOARD_0",
    "KEYBOARD_RETURN_ENTER",
    "KEYBOARD_ESCAPE",
    "KEYBOARD_DELETE_BACKSPACE",
    "KEYBOARD_TAB",
    "KEYBOARD_SPACE_BAR",
    "KEYBOARD_DASH_AND_UNDERSCORE",
    "KEYBOARD_EQUAL_AND_PLUS",
    "KEYBOARD_LEFT_BRACKET_AND_BRACE",
    "KEYBOARD_RIGHT_BRACKET_AND_BRACE",
    "KEYBOARD_BACKSLASH_AND_PIPE",
    "KEYBOARD_NON_US_AND_TILDE",
    "KEYBOARD_SEMICOLON_AND_COLON",
    "KEYBOARD_APOSTROPHE_AND_QUOTATION_MARK",
    "KEYBOARD_GRAVE_ACCENT_AND_TILDE",
    "KEYBOARD_COMMA_AND_LESS",
    "KEYBOARD_PERIOD_AND_MORE",
    "KEYBOARD_FORWARD_SLASH_AND_QUESTION_MARK",
    "KEYBOARD_CAPS_LOCK",
    "KEYBOARD_F1",
    "KEYBOARD_F2",
    "KEYBOARD_F3",
    "KEYBOARD_F4",
    "KEYBOARD_F5",
    "KEYBOARD_F6",
    "KEYBOARD_F7",
    "KEYBOARD_F8",
    "KEYBOARD_F9",
    "KEYBOARD_F10",
    "KEYBOARD_F11",
    "KEYBOARD_F12",
    "KEYBOARD_PRINT_SCREEN",
    "KEYBOARD_SCROLL_LOCK",
    "KEYBOARD_PAUSE",
    "KEYBOARD_INSERT",
    "KEYBOARD_HOME",
    "KEYBOARD_PAGE_UP",
    "KEYBOARD_DELETE_FORWARD",
    "KEYBOARD_END",
    "KEYBOARD_PAGE_DOWN",
    "KEYBOARD_RIGHT_ARROW",
    "KEYBOARD_LEFT_ARROW",
    "KEYBOARD_DOWN_ARROW",
    "KEYBOARD_UP_ARROW",
    "KEYPAD_NUM_LOCK_AND_CLEAR",
    "KEYPAD_FORWARD_SLASH",
    "KEYPAD_ASTERISK",
    "KEYPAD_MINUS",
    "KEYPAD_PLUS",
    "KEYPAD_ENTER",
    "KEYPAD_1_AND_END",
    "KEYPAD_2_AND_DOWN_ARROW",
    "KEYPAD_3_AND_PAGE_DN",
    "KEYPAD_4_AND_LEFT_ARROW",
    "KEYPAD_5",
    "KEYPAD_6_AND_RIGHT_ARROW",
    "KEYPAD_7_AND_HOME",
    "KEYPAD_8_AND_UP_ARROW",
    "KEYPAD_9_AND_PAGE_UP",
    "KEYPAD_0_AND_INSERT",
    "KEYPAD_COMMA_AND_DELETE",
    "KEYBOARD_NON_US_BACKSLASH_AND_PIPE",
    "KEYBOARD_MENU",
    "KEYBOARD_POWER",
    "KEYPAD_EQUAL",
    "KEYBOARD_F13",
    "KEYBOARD_F14",
    "KEYBOARD_F15",
    "KEYBOARD_F16",
    "KEYBOARD_F17",
    "KEYBOARD_F18",
    "KEYBOARD_F19",
    "KEYBOARD_F20",
    "KEYBOARD_F21",
    "KEYBOARD_F22",
    "KEYBOARD_F23",
    "KEYBOARD_F24",
    "KEYBOARD_INTERNATIONAL1",
    "KEYBOARD_INTERNATIONAL2",
    "KEYBOARD_INTERNATIONAL3",
    "KEYBOARD_INTERNATIONAL4",
    "KEYBOARD_INTERNATIONAL5",
    "KEYBOARD_LANG1",
    "KEYBOARD_LANG2",
    "KEYBOARD_LANG3",
];

const fn bitmap_fields() -> [FieldSpec; 128] {
    let mut fields = [FieldSpec::flag("", 0); 128];
    let mut slots: &mut [FieldSpec] = &mut fields;
    let mut names: &[&str] = &BITMAP_NAMES;
    let mut bit: u16 = 0;
    while let [slot, rest @ ..] = slots {
        let [name, remaining @ ..] = names else {
            break;
        };
        *slot = FieldSpec::flag(*name, bit);
        slots = rest;
        names = remaining;
        bit = bit.saturating_add(1);
    }
    fields
}

static KEYBOARD_BITMAP_FIELDS: [FieldSpec; 128] = bitmap_fields();

macro_rules! mouse_fields {
    ($($extra:expr),* $(,)?) => {
        [
            FieldSpec::flag("button1", 0),
            FieldSpec::flag("button2", 1),
            FieldSpec::flag("button3", 2),
            FieldSpec::flag("button4", 3),
            FieldSpec::flag("button5", 4),
            FieldSpec::flag("button6", 5),
            FieldSpec::flag("button7", 6),
            FieldSpec::flag("button8", 7),
            FieldSpec::flag("button9", 8),
            FieldSpec::flag("button10", 9),
            FieldSpec::flag("button11", 10),
            FieldSpec::flag("button12", 11),
            FieldSpec::flag("button13", 12),
            FieldSpec::flag("button14", 13),
            FieldSpec::flag("button15", 14),
            FieldSpec::flag("button16", 15),
            FieldSpec::signed("x", 16, 16),
            FieldSpec::signed("y", 32, 16),
            FieldSpec::signed("wheel", 48, 8),
            FieldSpec::signed("ac_pan", 56, 8),
            $($extra),*
        ]
    };
}

static MOUSE_FIELDS: [FieldSpec; 20] = mouse_fields!();

static MOUSE_NVIDIA_FIELDS: [FieldSpec; 21] =
    mouse_fields!(FieldSpec::unsigned("vendor_extension", 64, 8));

static CONSUMER_FIELDS: [FieldSpec; 2] = [
    FieldSpec::unsigned("key_1", 0, 16),
    FieldSpec::unsigned("key_2", 16, 16),
];

static SYSTEM_CONTROL_FIELDS: [FieldSpec; 3] = [
    FieldSpec::unsigned("POWER_STATE", 0, 2),
    FieldSpec::flag("DO_NOT_DISTURB", 2),
    FieldSpec::flag("MICROPHONE_MUTE", 3),
];

static CALL_STATE_FIELDS: [FieldSpec; 1] = [FieldSpec::flag("CALL_MUTE_TOGGLE", 0)];

const fn layout(
    class: ReportClass,
    byte_len: usize,
    fields: &'static [FieldSpec],
) -> ReportSchema {
    ReportSchema {
        class,
        byte_len,
        fields,
        aliases: &[],
    }
}

static KEYBOARD: ReportSchema = ReportSchema {
    class: ReportClass::HidKeyboard,
    byte_len: 8,
    fields: &KEYBOARD_FIELDS,
    aliases: &KEYBOARD_ALIASES,
};
static KEYBOARD_BITMAP: ReportSchema =
    layout(ReportClass::HidKeyboardBitmap, 16, &KEYBOARD_BITMAP_FIELDS);
static MOUSE: ReportSchema = layout(ReportClass::HidMouse, 8, &MOUSE_FIELDS);
static MOUSE_NVIDIA: ReportSchema =
    layout(ReportClass::HidMouseNvidiaExtension, 9, &MOUSE_NVIDIA_FIELDS);
static CONSUMER: ReportSchema = layout(ReportClass::HidConsumer, 4, &CONSUMER_FIELDS);
static SYSTEM_CONTROL: ReportSchema =
    layout(ReportClass::HidSystemControl, 1, &SYSTEM_CONTROL_FIELDS);
static CALL_STATE: ReportSchema = layout(
    ReportClass::HidCallStateManagementControl,
    2,
    &CALL_STATE_FIELDS,
);

/// Layout of `class`.
pub fn schema(class: ReportClass) -> &'static ReportSchema {
    match class {
        ReportClass::HidKeyboard => &KEYBOARD,
        ReportClass::HidKeyboardBitmap => &KEYBOARD_BITMAP,
        ReportClass::HidMouse => &MOUSE,
        ReportClass::HidMouseNvidiaExtension => &MOUSE_NVIDIA,
        ReportClass::HidConsumer => &CONSUMER,
        ReportClass::HidSystemControl => &SYSTEM_CONTROL,
        ReportClass::HidCallStateManagementControl => &CALL_STATE,
    }
}

/// Layout of the class with the given name.
pub fn schema_by_name(name: &str) -> Result<&'static ReportSchema, SchemaError> {
    ReportClass::ALL
        .into_iter()
        .find(|class| class.name().eq_ignore_ascii_case(name))
        .map(schema)
        .ok_or_else(|| SchemaError::UnknownClass(name.to_string()))
}
