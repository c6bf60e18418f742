use logi_hid_report_schemas::ReportClass;
use logi_hid_usage_tables::keyboard::KEYBOARD_TAB;

use super::{Ctx, Fragment, SET, code, silent};
use crate::entry::Entry;
use crate::keys::KeyId;
use crate::os::OsVariant;
use crate::sequence::{FieldValue, ReportStep, Sequence};

const BUTTONS: [(KeyId, &str); 16] = [
    (KeyId::Button1, "button1"),
    (KeyId::Button2, "button2"),
    (KeyId::Button3, "button3"),
    (KeyId::Button4, "button4"),
    (KeyId::Button5, "button5"),
    (KeyId::Button6, "button6"),
    (KeyId::Button7, "button7"),
    (KeyId::Button8, "button8"),
    (KeyId::Button9, "button9"),
    (KeyId::Button10, "button10"),
    (KeyId::Button11, "button11"),
    (KeyId::Button12, "button12"),
    (KeyId::Button13, "button13"),
    (KeyId::Button14, "button14"),
    (KeyId::Button15, "button15"),
    (KeyId::Button16, "button16"),
];

/// Task view gesture on Windows: Win held, Win+Tab, Win with the slot
/// cleared, then Win released.
///
/// Always described with the slot keyboard report, whatever schema the
/// keyboard slot uses.
fn app_switch_gesture() -> Sequence {
    let win = FieldValue::new("keyboard_control4", SET);
    let step = |fields: Vec<FieldValue>| ReportStep::new(ReportClass::HidKeyboard, fields);
    Sequence::new(
        vec![
            step(vec![win]),
            step(vec![win, FieldValue::new("key_code1", code(KEYBOARD_TAB))]),
            step(vec![win, FieldValue::new("key_code1", 0)]),
        ],
        vec![step(vec![FieldValue::new("keyboard_control4", 0)])],
    )
}

pub(super) fn fragment(ctx: &Ctx) -> Fragment {
    let mut fragment = vec![
        (KeyId::BackButton, Entry::all(ctx.button("button4"))),
        (KeyId::ForwardButton, Entry::all(ctx.button("button5"))),
        (KeyId::DpiChange, Entry::all(ctx.button("button6"))),
        (
            KeyId::AppSwitchGesture,
            Entry::default().on(OsVariant::Windows, app_switch_gesture()),
        ),
    ];
    fragment.extend(
        BUTTONS
            .iter()
            .map(|&(key, field)| (key, Entry::all(ctx.button(field)))),
    );
    fragment.extend(silent(&[
        KeyId::SmartShift,
        KeyId::VirtualGestureButton,
        KeyId::DpiSwitch,
        KeyId::LaunchDidot,
    ]));
    fragment
}
