use super::{Ctx, Fragment, silent};
use crate::entry::Entry;
use crate::keys::KeyId;
use crate::sequence::{ReportStep, Sequence};

/// Horizontal pan values of a tilted wheel: -1 and +1 on an 8-bit field.
const PAN_LEFT: i32 = 255;
const PAN_RIGHT: i32 = 1;

/// Onboard controls handled by device firmware: the host sees nothing.
const FIRMWARE_KEYS: [KeyId; 32] = [
    KeyId::BleConnection,
    KeyId::Ls2BleConnectionToggle,
    KeyId::DimmingKey,
    KeyId::GameModeKey,
    KeyId::Roller0ScrollUp,
    KeyId::Roller0ScrollDown,
    KeyId::Roller1ScrollUp,
    KeyId::Roller1ScrollDown,
    KeyId::Ls2Connection,
    KeyId::CycleThroughAnimationEffects,
    KeyId::CycleThroughColorEffectSubSettings,
    KeyId::FkcToggle,
    KeyId::OnboardProfile1,
    KeyId::OnboardProfile2,
    KeyId::OnboardProfile3,
    KeyId::OnboardBaseProfile,
    KeyId::OnboardActuationMode,
    KeyId::OnboardRapidTriggerMode,
    KeyId::BacklightDown,
    KeyId::BacklightUp,
    KeyId::NoAction,
    KeyId::SelectNextDpi,
    KeyId::SelectPrevDpi,
    KeyId::CycleThroughDpi,
    KeyId::DefaultDpi,
    KeyId::DpiShift,
    KeyId::SelectNextOnboardProfile,
    KeyId::SelectPrevOnboardProfile,
    KeyId::CycleThroughOnboardProfile,
    KeyId::GShift,
    KeyId::BatteryLifeIndicator,
    KeyId::SwitchToSpecificOnboardProfile,
];

/// One pan report on press, nothing on release.
fn tilt(ctx: &Ctx, pan: i32) -> Sequence {
    Sequence::new(
        vec![ReportStep::single(ctx.schemas().mouse, "ac_pan", pan)],
        Vec::new(),
    )
}

pub(super) fn v1_0(ctx: &Ctx) -> Fragment {
    let mut fragment = silent(&FIRMWARE_KEYS);
    fragment.push((KeyId::TiltLeft, Entry::all(tilt(ctx, PAN_LEFT))));
    fragment.push((KeyId::TiltRight, Entry::all(tilt(ctx, PAN_RIGHT))));
    fragment
}

/// Programmable G-keys.
pub(super) fn v1_1() -> Fragment {
    silent(&[
        KeyId::G1,
        KeyId::G2,
        KeyId::G3,
        KeyId::G4,
        KeyId::G5,
        KeyId::G6,
        KeyId::G7,
        KeyId::G8,
        KeyId::G9,
    ])
}
