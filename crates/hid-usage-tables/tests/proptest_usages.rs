//! Property-based tests for the usage catalog.
//!
//! - name lookups agree with the exported constants
//! - names are unique per page
//! - the rollover threshold splits states from keys

use logi_hid_usage_tables::{
    KEYBOARD_ERROR_ROLLOVER, UsagePage, consumer, is_key_usage, keyboard, usage, usage_name,
};
use proptest::prelude::*;

#[test]
fn names_are_unique_per_page() {
    for page in UsagePage::ALL {
        let table = page.table();
        for (i, (name, _)) in table.iter().enumerate() {
            let dupes = table.iter().skip(i + 1).filter(|(other, _)| other == name).count();
            assert_eq!(dupes, 0, "{name} declared twice on {page}");
        }
    }
}

#[test]
fn keyboard_codes_are_unique() {
    let table = keyboard::TABLE;
    for (i, (name, code)) in table.iter().enumerate() {
        assert!(
            table.iter().skip(i + 1).all(|(_, other)| other != code),
            "{name} shares code {code:#04x}"
        );
    }
}

#[test]
fn well_known_codes() {
    assert_eq!(KEYBOARD_ERROR_ROLLOVER, 0x01);
    assert_eq!(keyboard::KEYBOARD_TAB, 0x2B);
    assert_eq!(keyboard::KEYBOARD_LANG2, 0x91);
    assert_eq!(keyboard::KEYBOARD_LEFT_GUI, 0xE3);
    assert_eq!(consumer::SCAN_PREVIOUS_TRACK, 0xB6);
    assert_eq!(consumer::AL_CALCULATOR, 0x192);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Looking a usage up by the name the table gives it yields the same code.
    #[test]
    fn prop_name_lookup_consistent(page_idx in 0usize..3, entry in any::<prop::sample::Index>()) {
        let page = UsagePage::ALL[page_idx];
        let table = page.table();
        let (name, code) = table[entry.index(table.len())];
        prop_assert_eq!(usage(page, name), Some(code));
        prop_assert_eq!(usage_name(page, code), Some(name));
    }

    /// Every keyboard key usage (not a state) is above the rollover threshold.
    #[test]
    fn prop_keys_above_rollover(entry in any::<prop::sample::Index>()) {
        let (name, code) = keyboard::TABLE[entry.index(keyboard::TABLE.len())];
        let is_state = matches!(
            name,
            "KEYBOARD_NO_EVENT" | "KEYBOARD_ERROR_ROLLOVER" | "KEYBOARD_POST_FAIL" | "KEYBOARD_ERROR_UNDEFINED"
        );
        if !is_state && code > 0x03 {
            prop_assert!(is_key_usage(i32::from(code)), "{name} = {code:#04x}");
        }
    }

    /// Values at or below the threshold are never treated as key usages.
    #[test]
    fn prop_low_values_not_keys(value in i32::MIN..=1i32) {
        prop_assert!(!is_key_usage(value));
    }
}
