//! The four sequence shapes every table entry is built from.

use logi_hid_report_schemas::ReportClass;
use logi_hid_usage_tables::is_key_usage;

use crate::sequence::{FieldValue, ReportStep, Sequence};

/// Keyboard usages are carried differently by the two keyboard layouts: the
/// slot report puts the usage in `key_code1`, the bitmap report raises the
/// bit named after the key.
fn place_usage(class: ReportClass, field: &'static str, value: i32) -> FieldValue {
    match class {
        ReportClass::HidKeyboard if is_key_usage(value) => FieldValue::new("key_code1", value),
        ReportClass::HidKeyboardBitmap if is_key_usage(value) => FieldValue::new(field, 1),
        _ => FieldValue::new(field, value),
    }
}

/// No report on press, none on release.
pub fn none_on_make_none_on_break() -> Sequence {
    Sequence::default()
}

/// Nothing on press; a full set/clear pair once the control is released.
pub fn none_on_make_two_on_break(class: ReportClass, field: &'static str, value: i32) -> Sequence {
    let set = FieldValue::new(field, value);
    Sequence::new(
        Vec::new(),
        vec![
            ReportStep::new(class, vec![set]),
            ReportStep::new(class, vec![set.negated()]),
        ],
    )
}

/// One set report per field on press, in order; the matching clear reports
/// on release, in reverse order.
///
/// With `switch_key`, the first release report is emitted while the key is
/// still held, at the end of the press sequence.
pub fn make_break(class: ReportClass, fields: &[(&'static str, i32)], switch_key: bool) -> Sequence {
    let placed: Vec<FieldValue> = fields
        .iter()
        .map(|&(field, value)| place_usage(class, field, value))
        .collect();
    let mut make: Vec<ReportStep> = placed
        .iter()
        .map(|field| ReportStep::new(class, vec![*field]))
        .collect();
    let mut release: Vec<ReportStep> = placed
        .iter()
        .rev()
        .map(|field| ReportStep::new(class, vec![field.negated()]))
        .collect();
    if switch_key && !release.is_empty() {
        make.push(release.remove(0));
    }
    Sequence::new(make, release)
}

/// Press-release-press-release on press; nothing on release.
pub fn double_click(class: ReportClass, field: &'static str, value: i32) -> Sequence {
    let set = place_usage(class, field, value);
    let click = [set, set.negated(), set, set.negated()];
    Sequence::new(
        click
            .into_iter()
            .map(|field| ReportStep::new(class, vec![field]))
            .collect(),
        Vec::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use logi_hid_usage_tables::keyboard;

    const TAB: i32 = keyboard::KEYBOARD_TAB as i32;

    #[test]
    fn make_break_mirrors_release() {
        let sequence = make_break(
            ReportClass::HidKeyboardBitmap,
            &[("KEYBOARD_LEFT_CONTROL", 1), ("KEYBOARD_V", 0x19)],
            false,
        );
        assert_eq!(
            sequence.to_string(),
            "make: [HidKeyboardBitmap{KEYBOARD_LEFT_CONTROL=1}, HidKeyboardBitmap{KEYBOARD_V=1}]; \
             break: [HidKeyboardBitmap{KEYBOARD_V=-1}, HidKeyboardBitmap{KEYBOARD_LEFT_CONTROL=-1}]"
        );
    }

    #[test]
    fn slot_keyboard_moves_usage_to_key_code1() {
        let sequence = make_break(ReportClass::HidKeyboard, &[("KEYBOARD_TAB", TAB)], false);
        assert_eq!(
            sequence.make,
            vec![ReportStep::single(ReportClass::HidKeyboard, "key_code1", TAB)]
        );
        assert_eq!(
            sequence.release,
            vec![ReportStep::single(ReportClass::HidKeyboard, "key_code1", -TAB)]
        );
    }

    #[test]
    fn modifier_flags_are_left_alone() {
        let sequence = make_break(ReportClass::HidKeyboard, &[("KEYBOARD_LEFT_GUI", 1)], false);
        assert_eq!(
            sequence.make,
            vec![ReportStep::single(ReportClass::HidKeyboard, "KEYBOARD_LEFT_GUI", 1)]
        );
    }

    #[test]
    fn switch_key_relocates_first_release() {
        let sequence = make_break(
            ReportClass::HidKeyboard,
            &[("KEYBOARD_LEFT_ALT", 1), ("key_code1", TAB)],
            true,
        );
        assert_eq!(
            sequence.to_string(),
            "make: [HidKeyboard{KEYBOARD_LEFT_ALT=1}, HidKeyboard{key_code1=43}, \
             HidKeyboard{KEYBOARD_LEFT_ALT=-1}]; break: [HidKeyboard{key_code1=-43}]"
        );
    }

    #[test]
    fn non_keyboard_classes_keep_usage_values() {
        let sequence = make_break(ReportClass::HidConsumer, &[("key_1", 0xB6)], false);
        assert_eq!(sequence.make.first().and_then(ReportStep::first_value), Some(0xB6));
    }

    #[test]
    fn two_on_break() {
        let sequence = none_on_make_two_on_break(ReportClass::HidMouse, "button4", 1);
        assert!(sequence.make.is_empty());
        assert_eq!(
            sequence.to_string(),
            "make: []; break: [HidMouse{button4=1}, HidMouse{button4=-1}]"
        );
    }

    #[test]
    fn double_click_is_four_reports_on_press() {
        let sequence = double_click(ReportClass::HidKeyboardBitmap, "KEYBOARD_LEFT_CONTROL", 1);
        assert_eq!(sequence.make.len(), 4);
        assert!(sequence.release.is_empty());
        let values: Vec<_> = sequence
            .make
            .iter()
            .filter_map(ReportStep::first_value)
            .collect();
        assert_eq!(values, vec![1, -1, 1, -1]);
    }

    #[test]
    fn bitmap_double_click_flattens_usage() {
        let sequence = double_click(ReportClass::HidKeyboardBitmap, "KEYBOARD_A", 0x04);
        assert!(
            sequence
                .make
                .iter()
                .all(|step| step.first_value().map(i32::abs) == Some(1))
        );
    }

    #[test]
    fn silent_sequence() {
        assert!(none_on_make_none_on_break().is_silent());
    }
}
