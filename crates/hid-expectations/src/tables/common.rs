use super::{Ctx, Fragment, silent};
use crate::entry::Entry;
use crate::keys::KeyId;

/// Pointer buttons and host selectors shared by every product.
pub(super) fn fragment(ctx: &Ctx) -> Fragment {
    let mut fragment = vec![
        (KeyId::LeftButton, Entry::all(ctx.button("button1"))),
        (KeyId::RightButton, Entry::all(ctx.button("button2"))),
        (KeyId::MiddleButton, Entry::all(ctx.button("button3"))),
    ];
    fragment.extend(silent(&[KeyId::Host1, KeyId::Host2, KeyId::Host3]));
    fragment
}
