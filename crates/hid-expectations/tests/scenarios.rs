//! Scenario tests: expected sequences for concrete product configurations.
//!
//! Each test configures an engine the way a test bench would and checks the
//! reports a key must produce on a given host.

use std::sync::Once;

use logi_hid_expectations::prelude::*;
use logi_hid_expectations::{ProductFamily, primitives};
use logi_hid_usage_tables::consumer;
use tracing_subscriber::filter::LevelFilter;

type TestResult = Result<(), Box<dyn std::error::Error>>;

static TRACING: Once = Once::new();

/// Route engine logs to the test output.
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_test_writer()
            .init();
    });
}

fn engine(config: EngineConfig) -> Result<ExpectationEngine, ConfigError> {
    init_tracing();
    ExpectationEngine::new(config)
}

fn config_for(version: GuidelineVersion) -> EngineConfig {
    match version.family() {
        ProductFamily::Gaming => EngineConfig::gaming(version),
        _ => EngineConfig::productivity(version),
    }
}

fn rendered(engine: &ExpectationEngine, key: KeyId, os: OsVariant) -> String {
    engine.lookup(key, os).to_string()
}

// ── Reference scenarios ──────────────────────────────────────────────────────

#[test]
fn test_letter_key_on_windows_is_one_bitmap_bit() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    let sequence = engine.lookup(KeyId::KeyboardA, OsVariant::Windows);
    assert_eq!(
        sequence.make,
        vec![ReportStep::single(ReportClass::HidKeyboardBitmap, "KEYBOARD_A", 1)]
    );
    assert_eq!(
        sequence.release,
        vec![ReportStep::single(ReportClass::HidKeyboardBitmap, "KEYBOARD_A", -1)]
    );
    Ok(())
}

#[test]
fn test_muhenkan_on_mac_sends_lang2() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    assert_eq!(
        rendered(&engine, KeyId::Muhenkan, OsVariant::Mac),
        "make: [HidKeyboardBitmap{KEYBOARD_LANG2=1}]; break: [HidKeyboardBitmap{KEYBOARD_LANG2=-1}]"
    );
    Ok(())
}

#[test]
fn test_app_switch_releases_alt_during_press() -> TestResult {
    let engine = engine(
        EngineConfig::productivity(GuidelineVersion::V2_0)
            .with_keyboard_schema(ReportClass::HidKeyboard),
    )?;
    let sequence = engine.lookup(KeyId::AppSwitchLaunchpad, OsVariant::Windows);
    let tab = i32::from(logi_hid_usage_tables::keyboard::KEYBOARD_TAB);
    assert_eq!(
        sequence.make,
        vec![
            ReportStep::single(ReportClass::HidKeyboard, "KEYBOARD_LEFT_ALT", 1),
            ReportStep::single(ReportClass::HidKeyboard, "key_code1", tab),
            ReportStep::single(ReportClass::HidKeyboard, "KEYBOARD_LEFT_ALT", -1),
        ]
    );
    assert_eq!(
        sequence.release,
        vec![ReportStep::single(ReportClass::HidKeyboard, "key_code1", -tab)]
    );
    Ok(())
}

#[test]
fn test_media_keys_are_silent_in_boot_protocol_for_every_version() -> TestResult {
    for version in GuidelineVersion::ALL {
        let mut engine = engine(config_for(version))?;
        engine.use_protocol(Protocol::Boot);
        for os in [OsVariant::Windows, OsVariant::Mac, OsVariant::Chrome] {
            let sequence = engine.lookup(KeyId::PrevTrack, os);
            assert!(sequence.is_silent(), "PREV_TRACK on {os} under {version}");
        }
    }
    Ok(())
}

#[test]
fn test_horizontal_scrolling_moves_back_button_to_release() -> TestResult {
    let engine = engine(
        EngineConfig::productivity(GuidelineVersion::V2_0)
            .with_option(ProductOption::HorizontalScrolling),
    )?;
    assert_eq!(
        rendered(&engine, KeyId::BackButton, OsVariant::Windows),
        "make: []; break: [HidMouse{button4=1}, HidMouse{button4=-1}]"
    );
    assert_eq!(
        rendered(&engine, KeyId::ForwardButton, OsVariant::Mac),
        "make: []; break: [HidMouse{button5=1}, HidMouse{button5=-1}]"
    );
    Ok(())
}

#[test]
fn test_dictation_on_mac_double_taps_control() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    let sequence = engine.lookup(KeyId::Dictation, OsVariant::Mac);
    let values: Vec<(&str, i32)> = sequence
        .make
        .iter()
        .flat_map(|step| step.fields.iter().map(|f| (f.field, f.value)))
        .collect();
    assert_eq!(
        values,
        vec![
            ("KEYBOARD_LEFT_CONTROL", 1),
            ("KEYBOARD_LEFT_CONTROL", -1),
            ("KEYBOARD_LEFT_CONTROL", 1),
            ("KEYBOARD_LEFT_CONTROL", -1),
        ]
    );
    assert!(sequence.release.is_empty());
    Ok(())
}

#[test]
fn test_tilt_left_pans_on_every_host() -> TestResult {
    let engine = engine(EngineConfig::gaming(GuidelineVersion::V1_0))?;
    for os in OsVariant::ALL {
        assert_eq!(
            rendered(&engine, KeyId::TiltLeft, os),
            "make: [HidMouse{ac_pan=255}]; break: []",
            "TILT_LEFT on {os}"
        );
    }
    assert_eq!(
        rendered(&engine, KeyId::TiltRight, OsVariant::Linux),
        "make: [HidMouse{ac_pan=1}]; break: []"
    );
    Ok(())
}

// ── Guideline versions ───────────────────────────────────────────────────────

#[test]
fn test_browser_shortcuts_arrive_with_2_1() -> TestResult {
    let keyboard = ReportClass::HidKeyboard;
    let v2_0 = engine(EngineConfig::productivity(GuidelineVersion::V2_0).with_keyboard_schema(keyboard))?;
    assert!(matches!(
        v2_0.try_lookup(KeyId::Refresh, OsVariant::Windows),
        Err(LookupDiagnostic::UnknownKey { .. })
    ));

    let v2_1 = engine(EngineConfig::productivity(GuidelineVersion::V2_1).with_keyboard_schema(keyboard))?;
    assert_eq!(
        rendered(&v2_1, KeyId::Refresh, OsVariant::Windows),
        "make: [HidKeyboard{keyboard_left_control=1}, HidKeyboard{key_code1=21}]; \
         break: [HidKeyboard{key_code1=-21}, HidKeyboard{keyboard_left_control=-1}]"
    );
    assert_eq!(
        v2_1.lookup(KeyId::Refresh, OsVariant::Chrome).make_class(),
        Some(ReportClass::HidConsumer)
    );
    Ok(())
}

#[test]
fn test_editorial_revisions_match_their_predecessor() -> TestResult {
    let v2_1 = engine(EngineConfig::productivity(GuidelineVersion::V2_1))?;
    let v2_2 = engine(EngineConfig::productivity(GuidelineVersion::V2_2))?;
    assert_eq!(v2_1.table(), v2_2.table());

    let v2_4 = engine(EngineConfig::productivity(GuidelineVersion::V2_4))?;
    let v2_5 = engine(EngineConfig::productivity(GuidelineVersion::V2_5))?;
    assert_eq!(v2_4.table(), v2_5.table());
    Ok(())
}

#[test]
fn test_do_not_disturb_reaches_ipad_with_2_3() -> TestResult {
    let v2_0 = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    assert!(v2_0.lookup(KeyId::DoNotDisturb, OsVariant::Ipad).is_silent());

    let v2_3 = engine(EngineConfig::productivity(GuidelineVersion::V2_3))?;
    assert_eq!(
        rendered(&v2_3, KeyId::DoNotDisturb, OsVariant::Ipad),
        "make: [HidSystemControl{DO_NOT_DISTURB=1}]; break: [HidSystemControl{DO_NOT_DISTURB=-1}]"
    );
    Ok(())
}

#[test]
fn test_emoji_panel_shortcut_history() -> TestResult {
    let v2_0 = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    assert_eq!(v2_0.lookup(KeyId::EmojiPanel, OsVariant::Windows).make.len(), 2);

    // Shift+Control+Alt+Win+Space
    let v2_4 = engine(EngineConfig::productivity(GuidelineVersion::V2_4))?;
    assert_eq!(v2_4.lookup(KeyId::EmojiPanel, OsVariant::Windows).make.len(), 5);

    let v3_0 = engine(EngineConfig::productivity(GuidelineVersion::V3_0))?;
    assert_eq!(
        v3_0.lookup(KeyId::EmojiPanel, OsVariant::Windows),
        v2_0.lookup(KeyId::EmojiPanel, OsVariant::Windows)
    );
    assert_eq!(
        rendered(&v3_0, KeyId::EmojiPanel, OsVariant::Android),
        "make: [HidKeyboardBitmap{KEYBOARD_LEFT_ALT=1}]; break: [HidKeyboardBitmap{KEYBOARD_LEFT_ALT=-1}]"
    );
    Ok(())
}

#[test]
fn test_fn_arrows_jump_with_control_on_ipad_from_2_7() -> TestResult {
    let v2_6 = engine(EngineConfig::productivity(GuidelineVersion::V2_6))?;
    assert_eq!(
        rendered(&v2_6, KeyId::FnKeyboardLeftArrow, OsVariant::Ipad),
        "make: [HidKeyboardBitmap{KEYBOARD_HOME=1}]; break: [HidKeyboardBitmap{KEYBOARD_HOME=-1}]"
    );

    let v2_7 = engine(EngineConfig::productivity(GuidelineVersion::V2_7))?;
    assert_eq!(
        rendered(&v2_7, KeyId::FnKeyboardLeftArrow, OsVariant::Ipad),
        "make: [HidKeyboardBitmap{KEYBOARD_LEFT_CONTROL=1}, HidKeyboardBitmap{KEYBOARD_LEFT_ARROW=1}]; \
         break: [HidKeyboardBitmap{KEYBOARD_LEFT_ARROW=-1}, HidKeyboardBitmap{KEYBOARD_LEFT_CONTROL=-1}]"
    );
    assert_eq!(
        v2_7.lookup(KeyId::FnKeyboardLeftArrow, OsVariant::Windows),
        v2_6.lookup(KeyId::FnKeyboardLeftArrow, OsVariant::Windows)
    );
    Ok(())
}

#[test]
fn test_microphone_mute_by_host_in_2_7() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_7))?;
    assert_eq!(
        engine.lookup(KeyId::MuteMicrophone, OsVariant::Windows).make_class(),
        Some(ReportClass::HidCallStateManagementControl)
    );
    assert_eq!(
        engine.lookup(KeyId::MuteMicrophone, OsVariant::ChromeBleDirect).make_class(),
        Some(ReportClass::HidSystemControl)
    );
    assert!(engine.lookup(KeyId::MuteMicrophone, OsVariant::Mac).is_silent());
    Ok(())
}

#[test]
fn test_globe_key_is_apple_only() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_8))?;
    let mac = engine.lookup(KeyId::GlobeKey, OsVariant::Mac);
    assert_eq!(
        mac.make.first().and_then(ReportStep::first_value),
        Some(i32::from(consumer::AC_NEXT_KEYBOARD_LAYOUT_SELECT))
    );
    assert!(engine.lookup(KeyId::GlobeKey, OsVariant::Windows).is_silent());
    Ok(())
}

#[test]
fn test_android_variants_appear_with_3_0() -> TestResult {
    let v2_8 = engine(EngineConfig::productivity(GuidelineVersion::V2_8))?;
    let v3_0 = engine(EngineConfig::productivity(GuidelineVersion::V3_0))?;

    // Before 3.0 Android falls back to nothing for host-specific keys.
    assert!(matches!(
        v2_8.try_lookup(KeyId::Calculator, OsVariant::Android),
        Err(LookupDiagnostic::MissingVariant { .. })
    ));
    assert_eq!(
        v3_0.lookup(KeyId::Calculator, OsVariant::Android).make_class(),
        Some(ReportClass::HidConsumer)
    );
    assert_eq!(
        rendered(&v3_0, KeyId::Muhenkan, OsVariant::Android),
        "make: [HidKeyboardBitmap{KEYBOARD_INTERNATIONAL5=1}]; \
         break: [HidKeyboardBitmap{KEYBOARD_INTERNATIONAL5=-1}]"
    );
    assert_eq!(
        v3_0.lookup(KeyId::Calculator, OsVariant::Windows),
        v2_8.lookup(KeyId::Calculator, OsVariant::Windows)
    );
    Ok(())
}

#[test]
fn test_smart_actions_are_silent_from_3_1() -> TestResult {
    let v3_0 = engine(EngineConfig::productivity(GuidelineVersion::V3_0))?;
    assert!(!v3_0.table().contains(KeyId::SmartAction1));

    let v3_1 = engine(EngineConfig::productivity(GuidelineVersion::V3_1))?;
    assert_eq!(
        v3_1.try_lookup(KeyId::SmartAction1, OsVariant::Windows),
        Ok(&primitives::none_on_make_none_on_break())
    );
    Ok(())
}

#[test]
fn test_apple_sku_keys_in_3_2() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V3_2))?;
    assert_eq!(
        rendered(&engine, KeyId::FwDeleteAppleSku, OsVariant::Ipad),
        "make: [HidConsumer{KEYBOARD_DELETE_FORWARD=76}]; break: [HidConsumer{KEYBOARD_DELETE_FORWARD=-76}]"
    );
    assert_eq!(
        rendered(&engine, KeyId::HomeAppleSku, OsVariant::Mac),
        "make: [HidKeyboardBitmap{KEYBOARD_ESCAPE=1}]; break: [HidKeyboardBitmap{KEYBOARD_ESCAPE=-1}]"
    );
    assert!(engine.lookup(KeyId::HomeAppleSku, OsVariant::Windows).is_silent());
    Ok(())
}

#[test]
fn test_copilot_and_clipboard_in_3_3() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V3_3))?;
    assert_eq!(engine.lookup(KeyId::WindowsCopilot, OsVariant::Windows).make.len(), 3);
    assert!(engine.lookup(KeyId::WindowsCopilot, OsVariant::Mac).is_silent());
    assert_eq!(
        engine.lookup(KeyId::Copy, OsVariant::Chrome).make_class(),
        Some(ReportClass::HidConsumer)
    );
    Ok(())
}

#[test]
fn test_g_keys_arrive_with_gaming_1_1() -> TestResult {
    let v1_0 = engine(EngineConfig::gaming(GuidelineVersion::V1_0))?;
    assert!(!v1_0.table().contains(KeyId::G1));

    let v1_1 = engine(EngineConfig::gaming(GuidelineVersion::V1_1))?;
    assert!(v1_1.lookup(KeyId::G1, OsVariant::Windows).is_silent());
    assert!(v1_1.table().contains(KeyId::TiltLeft));
    assert!(v1_1.table().contains(KeyId::KeyboardA));
    Ok(())
}

// ── Options ──────────────────────────────────────────────────────────────────

#[test]
fn test_katahira_option_covers_apple_hosts() -> TestResult {
    let plain = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    assert!(plain.lookup(KeyId::Katahira, OsVariant::Mac).is_silent());

    let katahira = engine(
        EngineConfig::productivity(GuidelineVersion::V2_0).with_option(ProductOption::Katahira),
    )?;
    assert_eq!(
        rendered(&katahira, KeyId::Katahira, OsVariant::Mac),
        "make: [HidKeyboardBitmap{KEYBOARD_INTERNATIONAL2=1}]; \
         break: [HidKeyboardBitmap{KEYBOARD_INTERNATIONAL2=-1}]"
    );
    Ok(())
}

#[test]
fn test_emoji_menu_button_is_a_mouse_button() -> TestResult {
    let engine = engine(
        EngineConfig::productivity(GuidelineVersion::V3_0)
            .with_option(ProductOption::EmojiMenuButton),
    )?;
    for os in [OsVariant::Windows, OsVariant::Android, OsVariant::Ipad] {
        assert_eq!(
            rendered(&engine, KeyId::EmojiPanel, os),
            "make: [HidMouse{button6=1}]; break: [HidMouse{button6=-1}]"
        );
    }
    Ok(())
}

// ── Protocol and schemas ─────────────────────────────────────────────────────

#[test]
fn test_boot_protocol_switches_to_slot_keyboard() -> TestResult {
    let mut engine = engine(
        EngineConfig::productivity(GuidelineVersion::V2_0)
            .with_mouse_schema(ReportClass::HidMouseNvidiaExtension),
    )?;
    engine.set_protocol(0)?;
    assert_eq!(engine.protocol(), Protocol::Boot);
    assert_eq!(engine.active_schemas().keyboard, ReportClass::HidKeyboard);
    assert_eq!(engine.active_schemas().mouse, ReportClass::HidMouse);
    assert_eq!(
        rendered(&engine, KeyId::KeyboardA, OsVariant::Windows),
        "make: [HidKeyboard{key_code1=4}]; break: [HidKeyboard{key_code1=-4}]"
    );

    engine.set_protocol(1)?;
    assert_eq!(engine.active_schemas().keyboard, ReportClass::HidKeyboardBitmap);
    assert_eq!(
        engine.active_schemas().mouse,
        ReportClass::HidMouseNvidiaExtension
    );
    Ok(())
}

#[test]
fn test_boot_variant_is_reachable_in_report_protocol() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    assert!(!engine.lookup(KeyId::Home, OsVariant::Windows).is_silent());
    assert!(engine.lookup(KeyId::Home, OsVariant::Boot).is_silent());
    // No boot sequence: the ALL sequence answers.
    assert_eq!(
        engine.lookup(KeyId::KeyboardA, OsVariant::Boot),
        engine.lookup(KeyId::KeyboardA, OsVariant::Windows)
    );
    Ok(())
}

#[test]
fn test_unknown_protocol_is_rejected() -> TestResult {
    let mut engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    assert_eq!(engine.set_protocol(7), Err(ConfigError::UnsupportedProtocol(7)));
    assert_eq!(engine.protocol(), Protocol::Report);
    Ok(())
}

#[test]
fn test_app_switch_gesture_is_windows_only() -> TestResult {
    let engine = engine(EngineConfig::mouse_only())?;
    let windows = engine.lookup(KeyId::AppSwitchGesture, OsVariant::Windows);
    assert_eq!(windows.make.len(), 3);
    assert_eq!(
        windows.release,
        vec![ReportStep::single(ReportClass::HidKeyboard, "keyboard_control4", 0)]
    );
    assert!(matches!(
        engine.try_lookup(KeyId::AppSwitchGesture, OsVariant::Mac),
        Err(LookupDiagnostic::MissingVariant { .. })
    ));
    Ok(())
}

// ── Queries ──────────────────────────────────────────────────────────────────

#[test]
fn test_not_single_action_keys_per_variant() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;

    let mac = engine.not_single_action_keys(Some(OsVariant::Mac));
    assert!(mac.contains(&KeyId::Dictation));
    assert!(mac.contains(&KeyId::ScreenCapture));
    assert!(!mac.contains(&KeyId::KeyboardA));

    let windows = engine.not_single_action_keys(Some(OsVariant::Windows));
    assert!(windows.contains(&KeyId::AppSwitchLaunchpad));
    assert!(!windows.contains(&KeyId::Eject));

    let any = engine.not_single_action_keys(None);
    assert!(!any.contains(&KeyId::KeyboardA));
    assert!(any.contains(&KeyId::Dictation));
    assert!(any.contains(&KeyId::FnLock));
    Ok(())
}

#[test]
fn test_consumer_keys_cover_media_and_host_specific_usages() -> TestResult {
    let engine = engine(EngineConfig::productivity(GuidelineVersion::V2_0))?;
    let keys = engine.consumer_keys();

    let play = keys.get(&KeyId::PlayPause);
    assert_eq!(
        play.and_then(|usages| usages.get(&OsVariant::All)).copied(),
        Some(i32::from(consumer::PLAY_PAUSE))
    );
    assert!(!keys.contains_key(&KeyId::KeyboardA));
    assert_eq!(
        keys.get(&KeyId::Dictation)
            .map(|usages| usages.keys().copied().collect::<Vec<_>>()),
        Some(vec![OsVariant::Chrome])
    );
    Ok(())
}

#[test]
fn test_engine_from_profile() -> TestResult {
    let profile = ProductProfile::from_json_str(
        r#"{
            "name": "bench keyboard",
            "family": "productivity",
            "guideline_version": "3.0",
            "keyboard_report": "HidKeyboard",
            "options": ["katahira"]
        }"#,
    )?;
    let engine = ExpectationEngine::from_profile(&profile)?;
    assert_eq!(engine.config().version, Some(GuidelineVersion::V3_0));
    assert_eq!(engine.active_schemas().keyboard, ReportClass::HidKeyboard);
    assert_eq!(
        rendered(&engine, KeyId::Katahira, OsVariant::Android),
        "make: [HidKeyboard{key_code1=135}]; break: [HidKeyboard{key_code1=-135}]"
    );
    Ok(())
}
