use std::collections::BTreeSet;

use logi_hid_usage_tables::keyboard::KEYBOARD_INTERNATIONAL2;

use super::{Ctx, Fragment};
use crate::entry::Entry;
use crate::keys::KeyId;
use crate::primitives::none_on_make_two_on_break;
use crate::version::ProductOption;

/// Product-specific overrides, applied last.
pub(super) fn fragment(ctx: &Ctx, options: &BTreeSet<ProductOption>) -> Fragment {
    let mouse = ctx.schemas().mouse;
    let mut fragment = Fragment::new();
    for option in options {
        match option {
            // Virtual thumb wheel
            ProductOption::HorizontalScrolling => {
                fragment.push((
                    KeyId::BackButton,
                    Entry::all(none_on_make_two_on_break(mouse, "button4", super::SET)),
                ));
                fragment.push((
                    KeyId::ForwardButton,
                    Entry::all(none_on_make_two_on_break(mouse, "button5", super::SET)),
                ));
            }
            ProductOption::EmojiMenuButton => {
                fragment.push((KeyId::EmojiPanel, Entry::all(ctx.button("button6"))));
            }
            ProductOption::Katahira => {
                fragment.push((
                    KeyId::Katahira,
                    Entry::all(ctx.key("KEYBOARD_INTERNATIONAL2", KEYBOARD_INTERNATIONAL2)),
                ));
            }
        }
    }
    fragment
}
