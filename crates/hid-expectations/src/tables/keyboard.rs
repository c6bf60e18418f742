//! Keys every keyboard product shares, whatever guideline it follows.

use logi_hid_report_schemas::PowerState;
use logi_hid_usage_tables::{consumer, keyboard as kb};

use super::{Ctx, Fragment, SET, code, silent};
use crate::entry::Entry;
use crate::keys::KeyId;
use crate::os::OsVariant::{self, Chrome, InvertedMac, Ipad, Mac, Windows};
use crate::sequence::Sequence;

pub(super) const WIN_CHROME: [OsVariant; 2] = [Windows, Chrome];
pub(super) const MAC_IPAD: [OsVariant; 2] = [Mac, Ipad];
const PC_LAYOUT: [OsVariant; 3] = [Windows, InvertedMac, Chrome];

/// Keys that send their own usage on every host, with the bitmap field
/// named after the key.
const PLAIN: &[(KeyId, &str, u16)] = &[
    (KeyId::KeyboardA, "KEYBOARD_A", kb::KEYBOARD_A_AND_A),
    (KeyId::KeyboardB, "KEYBOARD_B", kb::KEYBOARD_B_AND_B),
    (KeyId::KeyboardC, "KEYBOARD_C", kb::KEYBOARD_C_AND_C),
    (KeyId::KeyboardD, "KEYBOARD_D", kb::KEYBOARD_D_AND_D),
    (KeyId::KeyboardE, "KEYBOARD_E", kb::KEYBOARD_E_AND_E),
    (KeyId::KeyboardF, "KEYBOARD_F", kb::KEYBOARD_F_AND_F),
    (KeyId::KeyboardG, "KEYBOARD_G", kb::KEYBOARD_G_AND_G),
    (KeyId::KeyboardH, "KEYBOARD_H", kb::KEYBOARD_H_AND_H),
    (KeyId::KeyboardI, "KEYBOARD_I", kb::KEYBOARD_I_AND_I),
    (KeyId::KeyboardJ, "KEYBOARD_J", kb::KEYBOARD_J_AND_J),
    (KeyId::KeyboardK, "KEYBOARD_K", kb::KEYBOARD_K_AND_K),
    (KeyId::KeyboardL, "KEYBOARD_L", kb::KEYBOARD_L_AND_L),
    (KeyId::KeyboardM, "KEYBOARD_M", kb::KEYBOARD_M_AND_M),
    (KeyId::KeyboardN, "KEYBOARD_N", kb::KEYBOARD_N_AND_N),
    (KeyId::KeyboardO, "KEYBOARD_O", kb::KEYBOARD_O_AND_O),
    (KeyId::KeyboardP, "KEYBOARD_P", kb::KEYBOARD_P_AND_P),
    (KeyId::KeyboardQ, "KEYBOARD_Q", kb::KEYBOARD_Q_AND_Q),
    (KeyId::KeyboardR, "KEYBOARD_R", kb::KEYBOARD_R_AND_R),
    (KeyId::KeyboardS, "KEYBOARD_S", kb::KEYBOARD_S_AND_S),
    (KeyId::KeyboardT, "KEYBOARD_T", kb::KEYBOARD_T_AND_T),
    (KeyId::KeyboardU, "KEYBOARD_U", kb::KEYBOARD_U_AND_U),
    (KeyId::KeyboardV, "KEYBOARD_V", kb::KEYBOARD_V_AND_V),
    (KeyId::KeyboardW, "KEYBOARD_W", kb::KEYBOARD_W_AND_W),
    (KeyId::KeyboardX, "KEYBOARD_X", kb::KEYBOARD_X_AND_X),
    (KeyId::KeyboardY, "KEYBOARD_Y", kb::KEYBOARD_Y_AND_Y),
    (KeyId::KeyboardZ, "KEYBOARD_Z", kb::KEYBOARD_Z_AND_Z),
    (KeyId::Keyboard1, "KEYBOARD_1", kb::KEYBOARD_1_AND_EXCLAMATION_MARK),
    (KeyId::Keyboard2, "KEYBOARD_2", kb::KEYBOARD_2_AND_AT),
    (KeyId::Keyboard3, "KEYBOARD_3", kb::KEYBOARD_3_AND_HASH),
    (KeyId::Keyboard4, "KEYBOARD_4", kb::KEYBOARD_4_AND_DOLLAR),
    (KeyId::Keyboard5, "KEYBOARD_5", kb::KEYBOARD_5_AND_PERCENT),
    (KeyId::Keyboard6, "KEYBOARD_6", kb::KEYBOARD_6_AND_CARET),
    (KeyId::Keyboard7, "KEYBOARD_7", kb::KEYBOARD_7_AND_AMPERSAND),
    (KeyId::Keyboard8, "KEYBOARD_8", kb::KEYBOARD_8_AND_ASTERISK),
    (KeyId::Keyboard9, "KEYBOARD_9", kb::KEYBOARD_9_AND_LEFT_PARENTHESIS),
    (KeyId::Keyboard0, "KEYBOARD_0", kb::KEYBOARD_0_AND_RIGHT_PARENTHESIS),
    (KeyId::KeyboardF1, "KEYBOARD_F1", kb::KEYBOARD_F1),
    (KeyId::KeyboardF2, "KEYBOARD_F2", kb::KEYBOARD_F2),
    (KeyId::KeyboardF3, "KEYBOARD_F3", kb::KEYBOARD_F3),
    (KeyId::KeyboardF4, "KEYBOARD_F4", kb::KEYBOARD_F4),
    (KeyId::KeyboardF5, "KEYBOARD_F5", kb::KEYBOARD_F5),
    (KeyId::KeyboardF6, "KEYBOARD_F6", kb::KEYBOARD_F6),
    (KeyId::KeyboardF7, "KEYBOARD_F7", kb::KEYBOARD_F7),
    (KeyId::KeyboardF8, "KEYBOARD_F8", kb::KEYBOARD_F8),
    (KeyId::KeyboardF9, "KEYBOARD_F9", kb::KEYBOARD_F9),
    (KeyId::KeyboardF10, "KEYBOARD_F10", kb::KEYBOARD_F10),
    (KeyId::KeyboardF11, "KEYBOARD_F11", kb::KEYBOARD_F11),
    (KeyId::KeyboardF12, "KEYBOARD_F12", kb::KEYBOARD_F12),
    (KeyId::KeyboardF13, "KEYBOARD_F13", kb::KEYBOARD_F13),
    (KeyId::KeyboardF14, "KEYBOARD_F14", kb::KEYBOARD_F14),
    (KeyId::KeyboardF15, "KEYBOARD_F15", kb::KEYBOARD_F15),
    (KeyId::KeyboardF16, "KEYBOARD_F16", kb::KEYBOARD_F16),
    (KeyId::KeyboardF17, "KEYBOARD_F17", kb::KEYBOARD_F17),
    (KeyId::KeyboardF18, "KEYBOARD_F18", kb::KEYBOARD_F18),
    (KeyId::KeyboardF19, "KEYBOARD_F19", kb::KEYBOARD_F19),
    (KeyId::KeyboardF20, "KEYBOARD_F20", kb::KEYBOARD_F20),
    (KeyId::KeyboardF21, "KEYBOARD_F21", kb::KEYBOARD_F21),
    (KeyId::KeyboardF22, "KEYBOARD_F22", kb::KEYBOARD_F22),
    (KeyId::KeyboardF23, "KEYBOARD_F23", kb::KEYBOARD_F23),
    (KeyId::KeyboardF24, "KEYBOARD_F24", kb::KEYBOARD_F24),
    (KeyId::KeyboardRightArrow, "KEYBOARD_RIGHT_ARROW", kb::KEYBOARD_RIGHT_ARROW),
    (KeyId::KeyboardLeftArrow, "KEYBOARD_LEFT_ARROW", kb::KEYBOARD_LEFT_ARROW),
    (KeyId::KeyboardDownArrow, "KEYBOARD_DOWN_ARROW", kb::KEYBOARD_DOWN_ARROW),
    (KeyId::KeyboardUpArrow, "KEYBOARD_UP_ARROW", kb::KEYBOARD_UP_ARROW),
    (
        KeyId::KeyboardGraveAccentAndTilde,
        "KEYBOARD_GRAVE_ACCENT_AND_TILDE",
        kb::KEYBOARD_GRAVE_ACCENT_AND_TILDE,
    ),
    (KeyId::KeyboardReturnEnter, "KEYBOARD_RETURN_ENTER", kb::KEYBOARD_RETURN_ENTER),
    (
        KeyId::KeyboardBackslashAndPipe,
        "KEYBOARD_BACKSLASH_AND_PIPE",
        kb::KEYBOARD_BACKSLASH_AND_PIPE,
    ),
    (KeyId::KeyboardEscape, "KEYBOARD_ESCAPE", kb::KEYBOARD_ESCAPE),
    (KeyId::KeyboardEqualAndPlus, "KEYBOARD_EQUAL_AND_PLUS", kb::KEYBOARD_EQUAL_AND_PLUS),
    (KeyId::KeyboardBackspace, "KEYBOARD_DELETE_BACKSPACE", kb::KEYBOARD_DELETE_BACKSPACE),
    (
        KeyId::KeyboardDashAndUnderscore,
        "KEYBOARD_DASH_AND_UNDERSCORE",
        kb::KEYBOARD_DASH_AND_UNDERSCORE,
    ),
    (
        KeyId::KeyboardLeftBracketAndBrace,
        "KEYBOARD_LEFT_BRACKET_AND_BRACE",
        kb::KEYBOARD_LEFT_BRACKET_AND_BRACE,
    ),
    (
        KeyId::KeyboardRightBracketAndBrace,
        "KEYBOARD_RIGHT_BRACKET_AND_BRACE",
        kb::KEYBOARD_RIGHT_BRACKET_AND_BRACE,
    ),
    (
        KeyId::KeyboardSemicolonAndColon,
        "KEYBOARD_SEMICOLON_AND_COLON",
        kb::KEYBOARD_SEMICOLON_AND_COLON,
    ),
    (
        KeyId::KeyboardApostropheAndQuotationMark,
        "KEYBOARD_APOSTROPHE_AND_QUOTATION_MARK",
        kb::KEYBOARD_APOSTROPHE_AND_QUOTATION_MARK,
    ),
    (
        KeyId::KeyboardForwardSlashAndQuestionMark,
        "KEYBOARD_FORWARD_SLASH_AND_QUESTION_MARK",
        kb::KEYBOARD_FORWARD_SLASH_AND_QUESTION_MARK,
    ),
    (KeyId::KeyboardPeriodAndMore, "KEYBOARD_PERIOD_AND_MORE", kb::KEYBOARD_PERIOD_AND_MORE),
    (KeyId::KeyboardCommaAndLess, "KEYBOARD_COMMA_AND_LESS", kb::KEYBOARD_COMMA_AND_LESS),
    (KeyId::KeyboardSpaceBar, "KEYBOARD_SPACE_BAR", kb::KEYBOARD_SPACE_BAR),
    (KeyId::KeyboardNonUsAndTilde, "KEYBOARD_NON_US_AND_TILDE", kb::KEYBOARD_NON_US_AND_TILDE),
    (
        KeyId::KeyboardNonUsBackslashAndPipe,
        "KEYBOARD_NON_US_BACKSLASH_AND_PIPE",
        kb::KEYBOARD_NON_US_BACKSLASH_AND_PIPE,
    ),
    (KeyId::KeyboardPrintScreen, "KEYBOARD_PRINT_SCREEN", kb::KEYBOARD_PRINT_SCREEN),
    (
        KeyId::KeyboardInternational1,
        "KEYBOARD_INTERNATIONAL1",
        kb::KEYBOARD_INTERNATIONAL1,
    ),
    (
        KeyId::KeyboardInternational2,
        "KEYBOARD_INTERNATIONAL2",
        kb::KEYBOARD_INTERNATIONAL2,
    ),
    (
        KeyId::KeyboardInternational3,
        "KEYBOARD_INTERNATIONAL3",
        kb::KEYBOARD_INTERNATIONAL3,
    ),
    (
        KeyId::KeyboardInternational4,
        "KEYBOARD_INTERNATIONAL4",
        kb::KEYBOARD_INTERNATIONAL4,
    ),
    (
        KeyId::KeyboardInternational5,
        "KEYBOARD_INTERNATIONAL5",
        kb::KEYBOARD_INTERNATIONAL5,
    ),
    (KeyId::Yen, "KEYBOARD_INTERNATIONAL3", kb::KEYBOARD_INTERNATIONAL3),
    (KeyId::Ro, "KEYBOARD_INTERNATIONAL1", kb::KEYBOARD_INTERNATIONAL1),
    (KeyId::Hanja, "KEYBOARD_LANG2", kb::KEYBOARD_LANG2),
    (KeyId::Hanguel, "KEYBOARD_LANG1", kb::KEYBOARD_LANG1),
    (KeyId::KeypadEqual, "KEYPAD_EQUAL", kb::KEYPAD_EQUAL),
    (KeyId::KeypadForwardSlash, "KEYPAD_FORWARD_SLASH", kb::KEYPAD_FORWARD_SLASH),
    (KeyId::KeypadAsterisk, "KEYPAD_ASTERISK", kb::KEYPAD_ASTERISK),
    (KeyId::KeypadMinus, "KEYPAD_MINUS", kb::KEYPAD_DASH),
    (KeyId::KeypadPlus, "KEYPAD_PLUS", kb::KEYPAD_PLUS),
    (KeyId::KeypadEnter, "KEYPAD_ENTER", kb::KEYPAD_ENTER),
    (KeyId::Keypad1AndEnd, "KEYPAD_1_AND_END", kb::KEYPAD_1_AND_END),
    (KeyId::Keypad2AndDownArrow, "KEYPAD_2_AND_DOWN_ARROW", kb::KEYPAD_2_AND_DOWN_ARROW),
    (KeyId::Keypad3AndPageDn, "KEYPAD_3_AND_PAGE_DN", kb::KEYPAD_3_AND_PAGE_DN),
    (KeyId::Keypad4AndLeftArrow, "KEYPAD_4_AND_LEFT_ARROW", kb::KEYPAD_4_AND_LEFT_ARROW),
    (KeyId::Keypad5, "KEYPAD_5", kb::KEYPAD_5),
    (KeyId::Keypad6AndRightArrow, "KEYPAD_6_AND_RIGHT_ARROW", kb::KEYPAD_6_AND_RIGHT_ARROW),
    (KeyId::Keypad7AndHome, "KEYPAD_7_AND_HOME", kb::KEYPAD_7_AND_HOME),
    (KeyId::Keypad8AndUpArrow, "KEYPAD_8_AND_UP_ARROW", kb::KEYPAD_8_AND_UP_ARROW),
    (KeyId::Keypad9AndPageUp, "KEYPAD_9_AND_PAGE_UP", kb::KEYPAD_9_AND_PAGE_UP),
    (KeyId::Keypad0AndInsert, "KEYPAD_0_AND_INSERT", kb::KEYPAD_0_AND_INSERT),
    (KeyId::KeypadPeriodAndDelete, "KEYPAD_COMMA_AND_DELETE", kb::KEYPAD_COMMA_AND_DELETE),
    (KeyId::KeyboardPause, "KEYBOARD_PAUSE", kb::KEYBOARD_PAUSE),
    (KeyId::KeyboardPower, "KEYBOARD_POWER", kb::KEYBOARD_POWER),
    (KeyId::KeyboardDeleteForward, "KEYBOARD_DELETE_FORWARD", kb::KEYBOARD_DELETE_FORWARD),
    (KeyId::KeyboardPageUp, "KEYBOARD_PAGE_UP", kb::KEYBOARD_PAGE_UP),
    (KeyId::KeyboardPageDown, "KEYBOARD_PAGE_DOWN", kb::KEYBOARD_PAGE_DOWN),
    (KeyId::KeyboardCapsLock, "KEYBOARD_CAPS_LOCK", kb::KEYBOARD_CAPS_LOCK),
    (KeyId::KeyboardTab, "KEYBOARD_TAB", kb::KEYBOARD_TAB),
];

/// Modifiers that keep their position on every host.
const MODIFIERS: [(KeyId, &str); 4] = [
    (KeyId::KeyboardLeftShift, "KEYBOARD_LEFT_SHIFT"),
    (KeyId::KeyboardRightShift, "KEYBOARD_RIGHT_SHIFT"),
    (KeyId::KeyboardLeftControl, "KEYBOARD_LEFT_CONTROL"),
    (KeyId::KeyboardRightControl, "KEYBOARD_RIGHT_CONTROL"),
];

/// Media keys carried by the consumer report and silent in boot mode.
const MEDIA: [(KeyId, u16); 5] = [
    (KeyId::KeyboardStop, consumer::STOP),
    (KeyId::PrevTrack, consumer::SCAN_PREVIOUS_TRACK),
    (KeyId::PlayPause, consumer::PLAY_PAUSE),
    (KeyId::NextTrack, consumer::SCAN_NEXT_TRACK),
    (KeyId::KeyboardMute, consumer::MUTE),
];

/// Typed compound keys: each letter is pressed in turn.
const TYPED: [(KeyId, &[(&str, u16)]); 5] = [
    (
        KeyId::CompoundHome,
        &[
            ("KEYBOARD_H", kb::KEYBOARD_H_AND_H),
            ("KEYBOARD_O", kb::KEYBOARD_O_AND_O),
            ("KEYBOARD_M", kb::KEYBOARD_M_AND_M),
            ("KEYBOARD_E", kb::KEYBOARD_E_AND_E),
        ],
    ),
    (
        KeyId::CompoundHomeIso104,
        &[
            ("KEYBOARD_D", kb::KEYBOARD_D_AND_D),
            ("KEYBOARD_O", kb::KEYBOARD_O_AND_O),
            ("KEYBOARD_M", kb::KEYBOARD_M_AND_M),
        ],
    ),
    (
        KeyId::CompoundHomeIso105,
        &[
            ("KEYBOARD_M", kb::KEYBOARD_M_AND_M),
            ("KEYBOARD_A", kb::KEYBOARD_A_AND_A),
            ("KEYBOARD_I", kb::KEYBOARD_I_AND_I),
            ("KEYBOARD_S", kb::KEYBOARD_S_AND_S),
            ("KEYBOARD_O", kb::KEYBOARD_O_AND_O),
            ("KEYBOARD_N", kb::KEYBOARD_N_AND_N),
        ],
    ),
    (
        KeyId::CompoundHomeIso107,
        &[
            ("KEYBOARD_L", kb::KEYBOARD_L_AND_L),
            ("KEYBOARD_A", kb::KEYBOARD_A_AND_A),
            ("KEYBOARD_R", kb::KEYBOARD_R_AND_R),
        ],
    ),
    (
        KeyId::CompoundHomeJis109,
        &[
            ("KEYBOARD_J", kb::KEYBOARD_J_AND_J),
            ("KEYBOARD_I", kb::KEYBOARD_I_AND_I),
            ("KEYBOARD_T", kb::KEYBOARD_T_AND_T),
            ("KEYBOARD_A", kb::KEYBOARD_A_AND_A),
            ("KEYBOARD_K", kb::KEYBOARD_K_AND_K),
            ("KEYBOARD_U", kb::KEYBOARD_U_AND_U),
        ],
    ),
];

/// Control+arrow, the iPad stand-in for Home and End.
pub(super) fn ipad_jump(ctx: &Ctx, field: &'static str, usage: u16) -> Sequence {
    ctx.chord(&[("KEYBOARD_LEFT_CONTROL", SET), (field, code(usage))])
}

pub(super) fn scroll_lock(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.key("KEYBOARD_SCROLL_LOCK", kb::KEYBOARD_SCROLL_LOCK))
        .on_each(&[Mac, Ipad, Chrome], ctx.none())
}

pub(super) fn contextual_menu(ctx: &Ctx) -> Entry {
    Entry::default()
        .on_each(&WIN_CHROME, ctx.key("KEYBOARD_MENU", kb::KEYBOARD_APPLICATION))
        .on_each(&MAC_IPAD, ctx.none())
}

pub(super) fn keyboard_insert(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.key("KEYBOARD_INSERT", kb::KEYBOARD_INSERT))
        .on_each(&[Mac, Ipad, Chrome], ctx.none())
}

pub(super) fn keyboard_home(ctx: &Ctx) -> Entry {
    Entry::default()
        .on_each(&[Windows, Mac, Chrome], ctx.key("KEYBOARD_HOME", kb::KEYBOARD_HOME))
        .on(Ipad, ipad_jump(ctx, "KEYBOARD_LEFT_ARROW", kb::KEYBOARD_LEFT_ARROW))
}

pub(super) fn keyboard_end(ctx: &Ctx) -> Entry {
    Entry::default()
        .on_each(&[Windows, Mac, Chrome], ctx.key("KEYBOARD_END", kb::KEYBOARD_END))
        .on(Ipad, ipad_jump(ctx, "KEYBOARD_RIGHT_ARROW", kb::KEYBOARD_RIGHT_ARROW))
}

/// Modifier that swaps between the PC and Apple positions.
pub(super) fn swapped_modifier(ctx: &Ctx, pc: &'static str, apple: &'static str) -> Entry {
    Entry::default()
        .on_each(&WIN_CHROME, ctx.modifier(pc))
        .on_each(&MAC_IPAD, ctx.modifier(apple))
}

/// Japanese conversion key: an international usage on PC hosts, a
/// language usage on Apple hosts.
pub(super) fn conversion(
    ctx: &Ctx,
    pc: (&'static str, u16),
    apple: Option<(&'static str, u16)>,
) -> Entry {
    let apple = apple.map_or_else(|| ctx.none(), |(field, usage)| ctx.key(field, usage));
    Entry::default()
        .on_each(&WIN_CHROME, ctx.key(pc.0, pc.1))
        .on_each(&MAC_IPAD, apple)
}

pub(super) fn muhenkan(ctx: &Ctx) -> Entry {
    conversion(
        ctx,
        ("KEYBOARD_INTERNATIONAL5", kb::KEYBOARD_INTERNATIONAL5),
        Some(("KEYBOARD_LANG2", kb::KEYBOARD_LANG2)),
    )
}

pub(super) fn henkan(ctx: &Ctx) -> Entry {
    conversion(
        ctx,
        ("KEYBOARD_INTERNATIONAL4", kb::KEYBOARD_INTERNATIONAL4),
        Some(("KEYBOARD_LANG1", kb::KEYBOARD_LANG1)),
    )
}

pub(super) fn katahira(ctx: &Ctx) -> Entry {
    conversion(ctx, ("KEYBOARD_INTERNATIONAL2", kb::KEYBOARD_INTERNATIONAL2), None)
}

pub(super) fn kana(ctx: &Ctx) -> Entry {
    Entry::default()
        .on_each(&WIN_CHROME, ctx.none())
        .on_each(&MAC_IPAD, ctx.key("KEYBOARD_LANG1", kb::KEYBOARD_LANG1))
}

/// Key whose meaning follows the physical ISO/ANSI layout of the host.
fn layout_key(ctx: &Ctx, pc: (&'static str, u16), apple: (&'static str, u16), pc_hosts: &[OsVariant]) -> Entry {
    Entry::default()
        .on_each(pc_hosts, ctx.key(pc.0, pc.1))
        .on_each(&MAC_IPAD, ctx.key(apple.0, apple.1))
}

fn grave() -> (&'static str, u16) {
    ("KEYBOARD_GRAVE_ACCENT_AND_TILDE", kb::KEYBOARD_GRAVE_ACCENT_AND_TILDE)
}

fn non_us_backslash() -> (&'static str, u16) {
    ("KEYBOARD_NON_US_BACKSLASH_AND_PIPE", kb::KEYBOARD_NON_US_BACKSLASH_AND_PIPE)
}

pub(super) fn fragment(ctx: &Ctx) -> Fragment {
    let mut fragment: Fragment = PLAIN
        .iter()
        .map(|&(key, field, usage)| (key, Entry::all(ctx.key(field, usage))))
        .collect();

    fragment.extend(
        MODIFIERS
            .iter()
            .map(|&(key, field)| (key, Entry::all(ctx.modifier(field)))),
    );
    fragment.extend(
        MEDIA
            .iter()
            .map(|&(key, usage)| (key, Entry::all(ctx.consumer(usage)).boot_none())),
    );
    fragment.extend(TYPED.iter().map(|&(key, letters)| {
        let fields: Vec<(&'static str, i32)> = letters
            .iter()
            .map(|&(field, usage)| (field, code(usage)))
            .collect();
        (key, Entry::all(ctx.chord(&fields)))
    }));
    fragment.extend(silent(&[KeyId::FnKey, KeyId::ConnectButton]));

    fragment.extend([
        (KeyId::Muhenkan, muhenkan(ctx)),
        (KeyId::Henkan, henkan(ctx)),
        (KeyId::Katahira, katahira(ctx)),
        (KeyId::Kana, kana(ctx)),
        (
            KeyId::KeyboardMenu,
            Entry::default()
                .on(Windows, ctx.key("KEYBOARD_MENU", kb::KEYBOARD_MENU))
                .on_each(&MAC_IPAD, ctx.none()),
        ),
        (
            KeyId::Eject,
            Entry::default().on_each(&MAC_IPAD, ctx.consumer(consumer::EJECT)),
        ),
        (
            KeyId::KeyboardNoUs42,
            layout_key(
                ctx,
                ("KEYBOARD_NON_US_AND_TILDE", kb::KEYBOARD_NON_US_AND_TILDE),
                ("KEYBOARD_BACKSLASH_AND_PIPE", kb::KEYBOARD_BACKSLASH_AND_PIPE),
                &WIN_CHROME,
            ),
        ),
        (
            KeyId::KeyboardNoUs1,
            layout_key(ctx, grave(), non_us_backslash(), &PC_LAYOUT),
        ),
        (
            KeyId::KeyboardNoUs45,
            layout_key(ctx, non_us_backslash(), grave(), &PC_LAYOUT),
        ),
        (KeyId::KeyboardScrollLock, scroll_lock(ctx)),
        (KeyId::ContextualMenu, contextual_menu(ctx)),
        (KeyId::KeyboardInsert, keyboard_insert(ctx)),
        (KeyId::KeyboardHome, keyboard_home(ctx)),
        (KeyId::KeyboardEnd, keyboard_end(ctx)),
        (
            KeyId::KeypadNumLockAndClear,
            Entry::default()
                .on_each(
                    &[Windows, Mac, Ipad],
                    ctx.key("KEYPAD_NUM_LOCK_AND_CLEAR", kb::KEYPAD_NUM_LOCK_AND_CLEAR),
                )
                .on(Chrome, ctx.key("KEYBOARD_CLEAR", kb::KEYBOARD_CLEAR)),
        ),
        (
            KeyId::KeyboardLeftWinOrOption,
            swapped_modifier(ctx, "KEYBOARD_LEFT_GUI", "KEYBOARD_LEFT_ALT"),
        ),
        (
            KeyId::KeyboardRightWinOrOption,
            swapped_modifier(ctx, "KEYBOARD_RIGHT_GUI", "KEYBOARD_RIGHT_ALT"),
        ),
        (
            KeyId::KeyboardLeftAlt,
            swapped_modifier(ctx, "KEYBOARD_LEFT_ALT", "KEYBOARD_LEFT_GUI"),
        ),
        (
            KeyId::KeyboardRightAlt,
            swapped_modifier(ctx, "KEYBOARD_RIGHT_ALT", "KEYBOARD_RIGHT_GUI"),
        ),
        (
            KeyId::KeyboardRightControlOrOption,
            swapped_modifier(ctx, "KEYBOARD_RIGHT_CONTROL", "KEYBOARD_RIGHT_ALT"),
        ),
        (
            KeyId::DesktopSystemSleep,
            Entry::all(ctx.power_state(PowerState::SystemSleep)),
        ),
        (
            KeyId::CompoundAltTab,
            Entry::all(ctx.chord(&[
                ("keyboard_left_shift", SET),
                ("keyboard_left_gui", SET),
                ("KEYBOARD_P", code(kb::KEYBOARD_P_AND_P)),
            ])),
        ),
        (
            KeyId::CompoundCtrlAltDel,
            Entry::all(ctx.chord(&[
                ("keyboard_left_control", SET),
                ("keyboard_left_alt", SET),
                ("keyboard_delete_forward", code(kb::KEYBOARD_DELETE_FORWARD)),
            ])),
        ),
        (
            KeyId::CompoundPaste,
            Entry::all(ctx.chord(&[
                ("keyboard_left_control", SET),
                ("KEYBOARD_V", code(kb::KEYBOARD_V_AND_V)),
            ])),
        ),
    ]);
    fragment
}
