//! Declarative translation fragments.
//!
//! Each layer of the translation table is a [`Fragment`]: an ordered list of
//! whole entries. Fragments are built against the active report schemas, so
//! the same key yields a slot or bitmap keyboard report depending on the
//! configuration.

mod common;
mod gaming;
mod keyboard;
mod mouse;
mod options;
mod productivity;

use std::collections::BTreeSet;

use logi_hid_report_schemas::{PowerState, ReportClass};

use crate::entry::Entry;
use crate::keys::KeyId;
use crate::primitives::{double_click, make_break, none_on_make_none_on_break};
use crate::resolver::{ActiveSchemas, Layer};
use crate::sequence::Sequence;
use crate::version::{GuidelineVersion, ProductOption};

/// Entries contributed by one layer, in declaration order.
pub type Fragment = Vec<(KeyId, Entry)>;

/// Value of a set flag or modifier bit.
pub(crate) const SET: i32 = 1;

/// Widen a usage code to a field value.
pub(crate) const fn code(usage: u16) -> i32 {
    usage as i32
}

/// Sequence builders bound to the active report schemas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ctx {
    schemas: ActiveSchemas,
}

impl Ctx {
    pub(crate) fn new(schemas: ActiveSchemas) -> Self {
        Self { schemas }
    }

    pub(crate) fn none(&self) -> Sequence {
        none_on_make_none_on_break()
    }

    /// Single keyboard key.
    pub(crate) fn key(&self, field: &'static str, usage: u16) -> Sequence {
        make_break(self.schemas.keyboard, &[(field, code(usage))], false)
    }

    /// Single modifier bit.
    pub(crate) fn modifier(&self, field: &'static str) -> Sequence {
        make_break(self.schemas.keyboard, &[(field, SET)], false)
    }

    /// Several keyboard fields pressed in order.
    pub(crate) fn chord(&self, fields: &[(&'static str, i32)]) -> Sequence {
        make_break(self.schemas.keyboard, fields, false)
    }

    /// Keyboard chord whose first release is emitted during the press.
    pub(crate) fn switch_chord(&self, fields: &[(&'static str, i32)]) -> Sequence {
        make_break(self.schemas.keyboard, fields, true)
    }

    pub(crate) fn double_tap(&self, field: &'static str) -> Sequence {
        double_click(self.schemas.keyboard, field, SET)
    }

    /// Consumer usage in the first consumer slot.
    pub(crate) fn consumer(&self, usage: u16) -> Sequence {
        self.consumer_field("key_1", code(usage))
    }

    pub(crate) fn consumer_field(&self, field: &'static str, value: i32) -> Sequence {
        make_break(self.schemas.consumer, &[(field, value)], false)
    }

    pub(crate) fn button(&self, field: &'static str) -> Sequence {
        make_break(self.schemas.mouse, &[(field, SET)], false)
    }

    pub(crate) fn power_state(&self, state: PowerState) -> Sequence {
        make_break(
            ReportClass::HidSystemControl,
            &[("POWER_STATE", i32::from(state.position()))],
            false,
        )
    }

    pub(crate) fn system_flag(&self, field: &'static str) -> Sequence {
        make_break(ReportClass::HidSystemControl, &[(field, SET)], false)
    }

    pub(crate) fn call_flag(&self, field: &'static str) -> Sequence {
        make_break(ReportClass::HidCallStateManagementControl, &[(field, SET)], false)
    }

    pub(crate) fn schemas(&self) -> ActiveSchemas {
        self.schemas
    }
}

/// Entries with one silent sequence for every host.
pub(crate) fn silent(keys: &[KeyId]) -> Fragment {
    keys.iter()
        .map(|&key| (key, Entry::all(none_on_make_none_on_break())))
        .collect()
}

/// Build the fragment of one layer.
pub(crate) fn fragment(layer: Layer, ctx: &Ctx, options: &BTreeSet<ProductOption>) -> Fragment {
    match layer {
        Layer::Common => common::fragment(ctx),
        Layer::Mouse => mouse::fragment(ctx),
        Layer::KeyboardCommon => keyboard::fragment(ctx),
        Layer::Guideline(version) => guideline(version, ctx),
        Layer::Options => options::fragment(ctx, options),
    }
}

/// Keys added or redefined by `version` itself, on top of its predecessor.
fn guideline(version: GuidelineVersion, ctx: &Ctx) -> Fragment {
    match version {
        GuidelineVersion::V1_0 => gaming::v1_0(ctx),
        GuidelineVersion::V1_1 => gaming::v1_1(),
        GuidelineVersion::V2_0 => productivity::v2_0(ctx),
        GuidelineVersion::V2_1 => productivity::v2_1(ctx),
        GuidelineVersion::V2_3 => productivity::v2_3(ctx),
        GuidelineVersion::V2_4 => productivity::v2_4(ctx),
        GuidelineVersion::V2_6 => productivity::v2_6(ctx),
        GuidelineVersion::V2_7 => productivity::v2_7(ctx),
        GuidelineVersion::V2_8 => productivity::v2_8(ctx),
        GuidelineVersion::V3_0 => productivity::v3_0(ctx),
        GuidelineVersion::V3_1 => productivity::v3_1(),
        GuidelineVersion::V3_2 => productivity::v3_2(ctx),
        GuidelineVersion::V3_3 => productivity::v3_3(ctx),
        // Editorial revisions with no key changes.
        GuidelineVersion::V2_2 | GuidelineVersion::V2_5 => Fragment::new(),
    }
}
