//! Productivity keyboard guidelines, 2.0 through 3.3.
//!
//! Each function returns only the keys its version adds or redefines; the
//! resolver stacks them in version order. Version 3.0 restates a large set
//! of keys with an Android variant, so the per-key builders of the earlier
//! versions are reused there.

use logi_hid_report_schemas::PowerState;
use logi_hid_usage_tables::{consumer as cc, keyboard as kb};

use super::keyboard::{self, MAC_IPAD, WIN_CHROME, ipad_jump};
use super::{Ctx, Fragment, SET, code, silent};
use crate::entry::Entry;
use crate::keys::KeyId;
use crate::os::OsVariant::{Android, Chrome, ChromeBleDirect, Ipad, Mac, Windows};
use crate::sequence::Sequence;

type Field = (&'static str, i32);

const GUI: Field = ("KEYBOARD_LEFT_GUI", SET);
const CTRL: Field = ("KEYBOARD_LEFT_CONTROL", SET);
const SHIFT: Field = ("KEYBOARD_LEFT_SHIFT", SET);
const ALT: Field = ("KEYBOARD_LEFT_ALT", SET);

const fn k(field: &'static str, usage: u16) -> Field {
    (field, code(usage))
}

fn mission_ctrl(ctx: &Ctx) -> Entry {
    let task_view = ctx.chord(&[GUI, k("KEYBOARD_TAB", kb::KEYBOARD_TAB)]);
    Entry::default()
        .on(Windows, task_view.clone())
        .on(Mac, ctx.consumer(cc::OVERVIEW))
        .on(Ipad, task_view)
        .on(Chrome, ctx.consumer(cc::OVERVIEW))
}

fn app_switch_launchpad(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(
            Windows,
            ctx.switch_chord(&[("KEYBOARD_LEFT_ALT", SET), k("key_code1", kb::KEYBOARD_TAB)]),
        )
        .on(Mac, ctx.consumer(cc::AC_LAUNCHPAD))
        .on(Ipad, ctx.consumer(cc::MENU))
        .on(Chrome, ctx.consumer(cc::AC_DESKTOP_SHOW_ALL_APPLICATIONS))
}

fn show_desktop(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.chord(&[GUI, k("KEYBOARD_D", kb::KEYBOARD_D_AND_D)]))
        .on(Mac, ctx.key("KEYBOARD_F11", kb::KEYBOARD_F11))
        .on(Ipad, ctx.consumer(cc::MENU))
        .on(Chrome, ctx.consumer(cc::AC_VIEW_TOGGLE))
}

fn calculator(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.consumer(cc::AL_CALCULATOR))
        .on_each(&MAC_IPAD, ctx.none())
        .on(Chrome, ctx.consumer(cc::AL_CALCULATOR))
        .boot_none()
}

fn screen_capture(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(
            Windows,
            ctx.chord(&[GUI, SHIFT, k("KEYBOARD_S", kb::KEYBOARD_S_AND_S)]),
        )
        .on(
            Mac,
            ctx.chord(&[GUI, SHIFT, k("KEYBOARD_4", kb::KEYBOARD_4_AND_DOLLAR)]),
        )
        .on(
            Ipad,
            ctx.chord(&[GUI, SHIFT, k("KEYBOARD_3", kb::KEYBOARD_3_AND_HASH)]),
        )
        .on(Chrome, print_screen(ctx))
}

fn print_screen(ctx: &Ctx) -> Sequence {
    ctx.key("KEYBOARD_PRINT_SCREEN", kb::KEYBOARD_PRINT_SCREEN)
}

fn screen_lock(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.chord(&[GUI, k("KEYBOARD_L", kb::KEYBOARD_L_AND_L)]))
        .on(
            Mac,
            ctx.chord(&[GUI, CTRL, k("KEYBOARD_Q", kb::KEYBOARD_Q_AND_Q)]),
        )
        .on(Ipad, ctx.consumer(cc::POWER))
        .on(Chrome, ctx.power_state(PowerState::SystemSleep))
}

fn home(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.consumer(cc::AC_HOME))
        .on(Mac, ctx.consumer(cc::OVERVIEW))
        .on(Ipad, ctx.consumer(cc::MENU))
        .on(Chrome, ctx.consumer(cc::AC_HOME))
        .boot_none()
}

fn multi_platf_back(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.consumer(cc::AC_BACK))
        .on_each(
            &MAC_IPAD,
            ctx.chord(&[GUI, k("KEYBOARD_LEFT_ARROW", kb::KEYBOARD_LEFT_ARROW)]),
        )
        .on(Chrome, ctx.consumer(cc::AC_BACK))
        .boot_none()
}

/// Emoji panel with the given Windows shortcut.
fn emoji_panel(ctx: &Ctx, windows: Sequence) -> Entry {
    Entry::default()
        .on(Windows, windows)
        .on_each(
            &MAC_IPAD,
            ctx.chord(&[GUI, CTRL, k("KEYBOARD_SPACE_BAR", kb::KEYBOARD_SPACE_BAR)]),
        )
        .on(Chrome, ctx.consumer(cc::EMOJI_PICKER))
}

fn win_period(ctx: &Ctx) -> Sequence {
    ctx.chord(&[GUI, k("KEYBOARD_PERIOD_AND_MORE", kb::KEYBOARD_PERIOD_AND_MORE)])
}

fn dictation(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.chord(&[GUI, k("KEYBOARD_H", kb::KEYBOARD_H_AND_H)]))
        .on_each(&MAC_IPAD, ctx.double_tap("KEYBOARD_LEFT_CONTROL"))
        .on(Chrome, ctx.consumer(cc::VOICE_DICTATION))
}

fn do_not_disturb(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.none())
        .on_each(&MAC_IPAD, ctx.system_flag("DO_NOT_DISTURB"))
        .on(Chrome, ctx.none())
}

fn mute_microphone(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.call_flag("CALL_MUTE_TOGGLE"))
        .on_each(&MAC_IPAD, ctx.none())
        .on(Chrome, ctx.consumer(cc::START_OR_STOP_MICROPHONE_CAPTURE))
        .on(ChromeBleDirect, ctx.system_flag("MICROPHONE_MUTE"))
}

/// Input source switch with the given Windows shortcut.
fn language_switch(ctx: &Ctx, windows: Sequence) -> Entry {
    Entry::default()
        .on(Windows, windows)
        .on_each(
            &MAC_IPAD,
            ctx.chord(&[CTRL, k("KEYBOARD_SPACE_BAR", kb::KEYBOARD_SPACE_BAR)]),
        )
        .on(Chrome, ctx.consumer(cc::AC_NEXT_KEYBOARD_LAYOUT_SELECT))
}

/// Browser shortcut: Control on PC hosts, Command on Apple hosts, a
/// dedicated consumer usage on ChromeOS.
fn browser_shortcut(ctx: &Ctx, usage: u16, chrome: u16) -> Entry {
    Entry::default()
        .on(
            Windows,
            ctx.chord(&[("keyboard_left_control", SET), k("key_code1", usage)]),
        )
        .on_each(
            &MAC_IPAD,
            ctx.chord(&[("keyboard_left_gui", SET), k("key_code1", usage)]),
        )
        .on(Chrome, ctx.consumer(chrome))
}

const BROWSER_SHORTCUTS: [(KeyId, u16, u16); 4] = [
    (KeyId::Refresh, kb::KEYBOARD_R_AND_R, cc::AC_REFRESH),
    (KeyId::OpenNewTab, kb::KEYBOARD_T_AND_T, cc::AC_NEW),
    (KeyId::CloseTab, kb::KEYBOARD_W_AND_W, cc::AC_CLOSE),
    (KeyId::Print, kb::KEYBOARD_P_AND_P, cc::AC_PRINT),
];

fn os_settings(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(
            Windows,
            ctx.chord(&[("keyboard_left_gui", SET), k("key_code1", kb::KEYBOARD_I_AND_I)]),
        )
        .on_each(&MAC_IPAD, ctx.none())
        .on(Chrome, ctx.consumer(cc::AL_CONTROL_PANEL))
}

fn fn_keypad_7(ctx: &Ctx) -> Entry {
    keyboard::keyboard_home(ctx)
}

fn fn_keypad_1(ctx: &Ctx) -> Entry {
    keyboard::keyboard_end(ctx)
}

fn fn_keypad_0(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.key("KEYBOARD_INSERT", kb::KEYBOARD_INSERT))
        .on_each(&[Mac, Ipad, Chrome], ctx.none())
}

fn fn_keypad_enter(ctx: &Ctx) -> Entry {
    let enter = ctx.key("KEYPAD_ENTER", kb::KEYPAD_ENTER);
    Entry::default()
        .on(Windows, enter.clone())
        .on_each(&MAC_IPAD, ctx.key("KEYPAD_EQUAL", kb::KEYPAD_EQUAL))
        .on(Chrome, enter)
}

fn num_lock(ctx: &Ctx) -> Sequence {
    ctx.key("KEYPAD_NUM_LOCK_AND_CLEAR", kb::KEYPAD_NUM_LOCK_AND_CLEAR)
}

fn keypad_num_lock(ctx: &Ctx) -> Entry {
    Entry::default()
        .on_each(&[Windows, Mac, Ipad], num_lock(ctx))
        .on(
            Chrome,
            ctx.key("KEYBOARD_DELETE_FORWARD", kb::KEYBOARD_DELETE_FORWARD),
        )
}

fn backspace(ctx: &Ctx) -> Sequence {
    ctx.key("KEYBOARD_DELETE_BACKSPACE", kb::KEYBOARD_DELETE_BACKSPACE)
}

fn delete_forward(ctx: &Ctx) -> Sequence {
    ctx.key("KEYBOARD_DELETE_FORWARD", kb::KEYBOARD_DELETE_FORWARD)
}

fn keypad_enter(ctx: &Ctx) -> Sequence {
    ctx.key("KEYPAD_ENTER", kb::KEYPAD_ENTER)
}

fn pause(ctx: &Ctx) -> Sequence {
    ctx.key("KEYBOARD_PAUSE", kb::KEYBOARD_PAUSE)
}

fn lang1(ctx: &Ctx) -> Sequence {
    ctx.key("KEYBOARD_LANG1", kb::KEYBOARD_LANG1)
}

fn lang2(ctx: &Ctx) -> Sequence {
    ctx.key("KEYBOARD_LANG2", kb::KEYBOARD_LANG2)
}

fn fn_keyboard_backspace(ctx: &Ctx) -> Entry {
    Entry::default()
        .on_each(&WIN_CHROME, backspace(ctx))
        .on_each(&MAC_IPAD, delete_forward(ctx))
}

fn fn_keyboard_enter(ctx: &Ctx) -> Entry {
    Entry::default()
        .on(Windows, ctx.key("KEYBOARD_RETURN_ENTER", kb::KEYBOARD_RETURN_ENTER))
        .on_each(&[Mac, Ipad, Chrome], keypad_enter(ctx))
}

fn fn_keyboard_b(ctx: &Ctx) -> Entry {
    Entry::default()
        .on_each(&WIN_CHROME, pause(ctx))
        .on_each(&MAC_IPAD, ctx.key("KEYBOARD_B", kb::KEYBOARD_B_AND_B))
}

/// Right-hand modifier that sends a language key on PC hosts.
fn fn_right_modifier(ctx: &Ctx, pc: Sequence, apple: &'static str) -> Entry {
    Entry::default()
        .on_each(&WIN_CHROME, pc)
        .on_each(&MAC_IPAD, ctx.modifier(apple))
}

fn fn_keyboard_right_alt(ctx: &Ctx) -> Entry {
    fn_right_modifier(ctx, lang1(ctx), "KEYBOARD_RIGHT_GUI")
}

fn fn_keyboard_right_control(ctx: &Ctx) -> Entry {
    fn_right_modifier(ctx, lang2(ctx), "KEYBOARD_RIGHT_CONTROL")
}

/// Fn layer keys that map onto a navigation key on every host.
const FN_NAVIGATION: [(KeyId, &str, u16); 10] = [
    (KeyId::FnKeypad8, "KEYBOARD_UP_ARROW", kb::KEYBOARD_UP_ARROW),
    (KeyId::FnKeypad9, "KEYBOARD_PAGE_UP", kb::KEYBOARD_PAGE_UP),
    (KeyId::FnKeypad4, "KEYBOARD_LEFT_ARROW", kb::KEYBOARD_LEFT_ARROW),
    (KeyId::FnKeypad6, "KEYBOARD_RIGHT_ARROW", kb::KEYBOARD_RIGHT_ARROW),
    (KeyId::FnKeypad2, "KEYBOARD_DOWN_ARROW", kb::KEYBOARD_DOWN_ARROW),
    (KeyId::FnKeypad3, "KEYBOARD_PAGE_DOWN", kb::KEYBOARD_PAGE_DOWN),
    (KeyId::FnKeypadPeriod, "KEYBOARD_DELETE_FORWARD", kb::KEYBOARD_DELETE_FORWARD),
    (KeyId::FnKeyboardUpArrow, "KEYBOARD_PAGE_UP", kb::KEYBOARD_PAGE_UP),
    (KeyId::FnKeyboardDownArrow, "KEYBOARD_PAGE_DOWN", kb::KEYBOARD_PAGE_DOWN),
    (KeyId::FnKeyboardSpaceBar, "KEYBOARD_LANG1", kb::KEYBOARD_LANG1),
];

/// Fn layer letters that keep their own usage.
const FN_LETTERS: [(KeyId, &str, u16); 5] = [
    (KeyId::FnKeyboardU, "KEYBOARD_U", kb::KEYBOARD_U_AND_U),
    (KeyId::FnKeyboardO, "KEYBOARD_O", kb::KEYBOARD_O_AND_O),
    (KeyId::FnKeyboardI, "KEYBOARD_I", kb::KEYBOARD_I_AND_I),
    (KeyId::FnKeyboardC, "KEYBOARD_C", kb::KEYBOARD_C_AND_C),
    (KeyId::FnKeyboardP, "KEYBOARD_P", kb::KEYBOARD_P_AND_P),
];

/// Keys carried by the consumer report on every host and silent in boot
/// mode.
const CONSUMER_EVERYWHERE: [(KeyId, u16); 5] = [
    (KeyId::BrightnessDown, cc::BRIGHTNESS_DOWN),
    (KeyId::BrightnessUp, cc::BRIGHTNESS_UP),
    (KeyId::KeyboardVolumeDown, cc::VOLUME_DOWN),
    (KeyId::KeyboardVolumeUp, cc::VOLUME_UP),
    (KeyId::MultiPlatfSearchSpotlight, cc::AC_SEARCH),
];

pub(super) fn v2_0(ctx: &Ctx) -> Fragment {
    let mut fragment = silent(&[
        KeyId::FnLock,
        KeyId::BacklightDown,
        KeyId::BacklightUp,
        KeyId::MuteMicrophone,
        KeyId::LightningPatterns,
        KeyId::Host1,
        KeyId::Host2,
        KeyId::Host3,
        KeyId::SmilingFaceWithHeartShapedEyes,
        KeyId::LoudlyCryingFace,
        KeyId::EmojiSmiley,
        KeyId::EmojiSmileyWithTears,
    ]);
    fragment.extend(
        CONSUMER_EVERYWHERE
            .iter()
            .map(|&(key, usage)| (key, Entry::all(ctx.consumer(usage)).boot_none())),
    );
    fragment.extend(
        FN_NAVIGATION
            .iter()
            .chain(FN_LETTERS.iter())
            .map(|&(key, field, usage)| (key, Entry::all(ctx.key(field, usage)))),
    );
    fragment.extend([
        (KeyId::MissionCtrlTaskView, mission_ctrl(ctx)),
        (KeyId::AppSwitchLaunchpad, app_switch_launchpad(ctx)),
        (KeyId::ShowDesktop, show_desktop(ctx)),
        (KeyId::Calculator, calculator(ctx)),
        (KeyId::ScreenCapture, screen_capture(ctx)),
        (KeyId::ScreenLock, screen_lock(ctx)),
        (KeyId::Home, home(ctx)),
        (KeyId::MultiPlatfBack, multi_platf_back(ctx)),
        (KeyId::EmojiPanel, emoji_panel(ctx, win_period(ctx))),
        (KeyId::Dictation, dictation(ctx)),
        (
            KeyId::DoNotDisturb,
            Entry::default()
                .on(Windows, ctx.none())
                .on(Mac, ctx.system_flag("DO_NOT_DISTURB"))
                .on_each(&[Ipad, Chrome], ctx.none()),
        ),
        (
            KeyId::LanguageSwitch,
            language_switch(
                ctx,
                ctx.switch_chord(&[GUI, k("key_code1", kb::KEYBOARD_SPACE_BAR)]),
            ),
        ),
        (KeyId::FnKeypad7, fn_keypad_7(ctx)),
        (KeyId::FnKeypad1, fn_keypad_1(ctx)),
        (
            KeyId::FnKeypad0,
            Entry::default()
                .on(Windows, ctx.key("KEYBOARD_INSERT", kb::KEYBOARD_INSERT))
                .on_each(
                    &[Mac, Ipad, Chrome],
                    ctx.key("KEYPAD_0_AND_INSERT", kb::KEYPAD_0_AND_INSERT),
                ),
        ),
        (KeyId::FnKeypadEnter, fn_keypad_enter(ctx)),
        (KeyId::FnKeyboardBackspace, fn_keyboard_backspace(ctx)),
        (KeyId::FnKeyboardEnter, fn_keyboard_enter(ctx)),
        (KeyId::FnKeyboardB, fn_keyboard_b(ctx)),
        (
            KeyId::FnKeyboardLeftArrow,
            Entry::all(ctx.key("KEYBOARD_HOME", kb::KEYBOARD_HOME)),
        ),
        (
            KeyId::FnKeyboardRightArrow,
            Entry::all(ctx.key("KEYBOARD_END", kb::KEYBOARD_END)),
        ),
        (KeyId::FnKeyboardRightAlt, fn_keyboard_right_alt(ctx)),
        (KeyId::FnKeyboardRightControl, fn_keyboard_right_control(ctx)),
        (
            KeyId::FnKeyboardRightControlOrOption,
            fn_right_modifier(ctx, lang2(ctx), "KEYBOARD_RIGHT_ALT"),
        ),
    ]);
    fragment
}

pub(super) fn v2_1(ctx: &Ctx) -> Fragment {
    let mut fragment: Fragment = BROWSER_SHORTCUTS
        .iter()
        .map(|&(key, usage, chrome)| (key, browser_shortcut(ctx, usage, chrome)))
        .collect();
    fragment.push((
        KeyId::MuteMicrophone,
        Entry::all(ctx.none()).on(Chrome, ctx.consumer(cc::START_OR_STOP_MICROPHONE_CAPTURE)),
    ));
    fragment.push((KeyId::OsSettings, os_settings(ctx)));
    fragment
}

pub(super) fn v2_3(ctx: &Ctx) -> Fragment {
    vec![
        (KeyId::DoNotDisturb, do_not_disturb(ctx)),
        (KeyId::FnKeypad0, fn_keypad_0(ctx)),
        (KeyId::KeypadNumLockAndClear, keypad_num_lock(ctx)),
    ]
}

pub(super) fn v2_4(ctx: &Ctx) -> Fragment {
    let hyper_space = ctx.chord(&[
        SHIFT,
        CTRL,
        ALT,
        GUI,
        k("KEYBOARD_SPACE_BAR", kb::KEYBOARD_SPACE_BAR),
    ]);
    vec![(KeyId::EmojiPanel, emoji_panel(ctx, hyper_space))]
}

pub(super) fn v2_6(ctx: &Ctx) -> Fragment {
    vec![(
        KeyId::MuteMicrophone,
        Entry::all(ctx.none())
            .on(ChromeBleDirect, ctx.system_flag("MICROPHONE_MUTE"))
            .on(Chrome, ctx.consumer(cc::START_OR_STOP_MICROPHONE_CAPTURE)),
    )]
}

pub(super) fn v2_7(ctx: &Ctx) -> Fragment {
    let mut fragment = vec![
        (KeyId::MuteMicrophone, mute_microphone(ctx)),
        (
            KeyId::FnKeyboardLeftArrow,
            Entry::all(ctx.key("KEYBOARD_HOME", kb::KEYBOARD_HOME)).on(
                Ipad,
                ipad_jump(ctx, "KEYBOARD_LEFT_ARROW", kb::KEYBOARD_LEFT_ARROW),
            ),
        ),
        (
            KeyId::FnKeyboardRightArrow,
            Entry::all(ctx.key("KEYBOARD_END", kb::KEYBOARD_END)).on(
                Ipad,
                ipad_jump(ctx, "KEYBOARD_RIGHT_ARROW", kb::KEYBOARD_RIGHT_ARROW),
            ),
        ),
    ];
    fragment.extend(silent(&[KeyId::BacklightDown, KeyId::BacklightUp]));
    fragment
}

pub(super) fn v2_8(ctx: &Ctx) -> Fragment {
    vec![
        (
            KeyId::FnKeyboardG,
            Entry::all(ctx.key("KEYBOARD_G", kb::KEYBOARD_G_AND_G)),
        ),
        (KeyId::Katahira, keyboard::katahira(ctx)),
        (
            KeyId::GlobeKey,
            Entry::all(ctx.none()).on_each(
                &MAC_IPAD,
                ctx.consumer(cc::AC_NEXT_KEYBOARD_LAYOUT_SELECT),
            ),
        ),
    ]
}

/// Android joins the host list: earlier definitions are restated with an
/// Android variant.
pub(super) fn v3_0(ctx: &Ctx) -> Fragment {
    let none = ctx.none();
    let with_android = |entry: Entry, android: Sequence| entry.on(Android, android);
    vec![
        (
            KeyId::KeyboardScrollLock,
            with_android(
                keyboard::scroll_lock(ctx),
                ctx.key("KEYBOARD_SCROLL_LOCK", kb::KEYBOARD_SCROLL_LOCK),
            ),
        ),
        (
            KeyId::MissionCtrlTaskView,
            with_android(
                mission_ctrl(ctx),
                ctx.chord(&[ALT, k("KEYBOARD_TAB", kb::KEYBOARD_TAB)]),
            ),
        ),
        (
            KeyId::AppSwitchLaunchpad,
            with_android(app_switch_launchpad(ctx), none.clone()),
        ),
        (KeyId::ShowDesktop, with_android(show_desktop(ctx), none.clone())),
        (
            KeyId::Calculator,
            with_android(calculator(ctx), ctx.consumer(cc::AL_CALCULATOR)),
        ),
        (
            KeyId::ScreenCapture,
            with_android(screen_capture(ctx), print_screen(ctx)),
        ),
        (
            KeyId::ContextualMenu,
            with_android(
                keyboard::contextual_menu(ctx),
                ctx.key("KEYBOARD_MENU", kb::KEYBOARD_APPLICATION),
            ),
        ),
        (
            KeyId::ScreenLock,
            with_android(screen_lock(ctx), ctx.power_state(PowerState::SystemSleep)),
        ),
        (KeyId::Home, with_android(home(ctx), ctx.consumer(cc::AC_HOME))),
        (
            KeyId::MultiPlatfBack,
            with_android(multi_platf_back(ctx), ctx.consumer(cc::AC_BACK)),
        ),
        (
            KeyId::EmojiPanel,
            with_android(
                emoji_panel(ctx, win_period(ctx)),
                ctx.modifier("KEYBOARD_LEFT_ALT"),
            ),
        ),
        (KeyId::Dictation, with_android(dictation(ctx), none.clone())),
        (
            KeyId::DoNotDisturb,
            with_android(do_not_disturb(ctx), none.clone()),
        ),
        (
            KeyId::MuteMicrophone,
            with_android(mute_microphone(ctx), none.clone()),
        ),
        (
            KeyId::LanguageSwitch,
            with_android(
                language_switch(
                    ctx,
                    ctx.switch_chord(&[GUI, k("KEYBOARD_SPACE_BAR", kb::KEYBOARD_SPACE_BAR)]),
                ),
                ctx.chord(&[GUI, k("KEYBOARD_SPACE_BAR", kb::KEYBOARD_SPACE_BAR)]),
            ),
        ),
        (
            KeyId::Refresh,
            with_android(
                browser_shortcut(ctx, kb::KEYBOARD_R_AND_R, cc::AC_REFRESH),
                none.clone(),
            ),
        ),
        (
            KeyId::OpenNewTab,
            with_android(
                browser_shortcut(ctx, kb::KEYBOARD_T_AND_T, cc::AC_NEW),
                none.clone(),
            ),
        ),
        (
            KeyId::CloseTab,
            with_android(
                browser_shortcut(ctx, kb::KEYBOARD_W_AND_W, cc::AC_CLOSE),
                none.clone(),
            ),
        ),
        (
            KeyId::Print,
            with_android(
                browser_shortcut(ctx, kb::KEYBOARD_P_AND_P, cc::AC_PRINT),
                none.clone(),
            ),
        ),
        (KeyId::OsSettings, with_android(os_settings(ctx), none.clone())),
        (
            KeyId::KeyboardInsert,
            with_android(keyboard::keyboard_insert(ctx), none.clone()),
        ),
        (
            KeyId::KeyboardHome,
            with_android(
                keyboard::keyboard_home(ctx),
                ctx.key("KEYBOARD_HOME", kb::KEYBOARD_HOME),
            ),
        ),
        (
            KeyId::KeyboardEnd,
            with_android(
                keyboard::keyboard_end(ctx),
                ctx.key("KEYBOARD_END", kb::KEYBOARD_END),
            ),
        ),
        (
            KeyId::FnKeypad7,
            with_android(fn_keypad_7(ctx), ctx.key("KEYBOARD_HOME", kb::KEYBOARD_HOME)),
        ),
        (
            KeyId::FnKeypad1,
            with_android(fn_keypad_1(ctx), ctx.key("KEYBOARD_END", kb::KEYBOARD_END)),
        ),
        (KeyId::FnKeypad0, with_android(fn_keypad_0(ctx), none.clone())),
        (
            KeyId::FnKeypadEnter,
            with_android(fn_keypad_enter(ctx), keypad_enter(ctx)),
        ),
        (
            KeyId::KeypadNumLockAndClear,
            with_android(keypad_num_lock(ctx), num_lock(ctx)),
        ),
        (
            KeyId::FnKeyboardBackspace,
            with_android(fn_keyboard_backspace(ctx), backspace(ctx)),
        ),
        (
            KeyId::FnKeyboardEnter,
            with_android(fn_keyboard_enter(ctx), keypad_enter(ctx)),
        ),
        (KeyId::FnKeyboardB, with_android(fn_keyboard_b(ctx), pause(ctx))),
        (
            KeyId::FnKeyboardRightAlt,
            with_android(fn_keyboard_right_alt(ctx), lang1(ctx)),
        ),
        (
            KeyId::FnKeyboardRightControl,
            with_android(fn_keyboard_right_control(ctx), lang2(ctx)),
        ),
        (
            KeyId::KeyboardLeftWinOrOption,
            with_android(
                keyboard::swapped_modifier(ctx, "KEYBOARD_LEFT_GUI", "KEYBOARD_LEFT_ALT"),
                ctx.modifier("KEYBOARD_LEFT_GUI"),
            ),
        ),
        (
            KeyId::KeyboardRightWinOrOption,
            with_android(
                keyboard::swapped_modifier(ctx, "KEYBOARD_RIGHT_GUI", "KEYBOARD_RIGHT_ALT"),
                ctx.modifier("KEYBOARD_RIGHT_GUI"),
            ),
        ),
        (
            KeyId::KeyboardLeftAlt,
            with_android(
                keyboard::swapped_modifier(ctx, "KEYBOARD_LEFT_ALT", "KEYBOARD_LEFT_GUI"),
                ctx.modifier("KEYBOARD_LEFT_ALT"),
            ),
        ),
        (
            KeyId::KeyboardRightAlt,
            with_android(
                keyboard::swapped_modifier(ctx, "KEYBOARD_RIGHT_ALT", "KEYBOARD_RIGHT_GUI"),
                ctx.modifier("KEYBOARD_RIGHT_ALT"),
            ),
        ),
        (
            KeyId::Muhenkan,
            with_android(
                keyboard::muhenkan(ctx),
                ctx.key("KEYBOARD_INTERNATIONAL5", kb::KEYBOARD_INTERNATIONAL5),
            ),
        ),
        (
            KeyId::Henkan,
            with_android(
                keyboard::henkan(ctx),
                ctx.key("KEYBOARD_INTERNATIONAL4", kb::KEYBOARD_INTERNATIONAL4),
            ),
        ),
        (
            KeyId::Katahira,
            with_android(
                keyboard::katahira(ctx),
                ctx.key("KEYBOARD_INTERNATIONAL2", kb::KEYBOARD_INTERNATIONAL2),
            ),
        ),
        (KeyId::Kana, with_android(keyboard::kana(ctx), none)),
    ]
}

pub(super) fn v3_1() -> Fragment {
    silent(&[
        KeyId::BacklightCycling,
        KeyId::SmartAction1,
        KeyId::SmartAction2,
        KeyId::SmartAction3,
        KeyId::SmartAction4,
    ])
}

/// Apple-specific SKUs.
pub(super) fn v3_2(ctx: &Ctx) -> Fragment {
    vec![
        (
            KeyId::HomeAppleSku,
            Entry::all(ctx.none())
                .on(Mac, ctx.key("KEYBOARD_ESCAPE", kb::KEYBOARD_ESCAPE))
                .on(Ipad, ctx.consumer(cc::MENU)),
        ),
        (
            KeyId::FwDeleteAppleSku,
            Entry::all(ctx.none())
                .on(Mac, delete_forward(ctx))
                // iPad hosts expect the keyboard usage in a consumer report.
                .on(
                    Ipad,
                    ctx.consumer_field("KEYBOARD_DELETE_FORWARD", code(kb::KEYBOARD_DELETE_FORWARD)),
                ),
        ),
    ]
}

/// Clipboard shortcut: Control on Windows, Command on Apple hosts, an
/// application-control usage on ChromeOS and Android.
fn clipboard(ctx: &Ctx, field: &'static str, usage: u16, consumer: u16) -> Entry {
    Entry::default()
        .on(Windows, ctx.chord(&[CTRL, k(field, usage)]))
        .on_each(&MAC_IPAD, ctx.chord(&[GUI, k(field, usage)]))
        .on_each(&[Chrome, Android], ctx.consumer(consumer))
}

pub(super) fn v3_3(ctx: &Ctx) -> Fragment {
    vec![
        (
            KeyId::WindowsCopilot,
            Entry::all(ctx.none()).on(
                Windows,
                ctx.chord(&[GUI, SHIFT, k("KEYBOARD_F23", kb::KEYBOARD_F23)]),
            ),
        ),
        (
            KeyId::Cut,
            clipboard(ctx, "KEYBOARD_X", kb::KEYBOARD_X_AND_X, cc::AC_CUT),
        ),
        (
            KeyId::Copy,
            clipboard(ctx, "KEYBOARD_C", kb::KEYBOARD_C_AND_C, cc::AC_COPY),
        ),
        (
            KeyId::Paste,
            clipboard(ctx, "KEYBOARD_V", kb::KEYBOARD_V_AND_V, cc::AC_PASTE),
        ),
    ]
}
