//! Progress-driven visual derivation for the track and hint.
//!
//! Both mappings are pure functions of the unlock progress. They are
//! independent: the track color finishes its ramp at one threshold, the
//! hint fade at another, and neither knows about the other.

use swipelock_core::Easing;

use crate::color::Color;

/// Colors and ramp thresholds for the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualSpec {
    pub inactive_track: Color,
    pub active_track: Color,
    pub hint: Color,
    /// Unlock progress at which the track reaches its active color.
    pub background_change_threshold: f32,
    /// Unlock progress at which the hint becomes fully transparent.
    pub hint_fade_threshold: f32,
}

impl Default for VisualSpec {
    fn default() -> Self {
        Self {
            inactive_track: Color::from_rgb_u8(0x11, 0x11, 0x11),
            active_track: Color::from_rgb_u8(0xFF, 0xDB, 0x00),
            hint: Color::WHITE,
            background_change_threshold: 0.4,
            hint_fade_threshold: 0.35,
        }
    }
}

/// Track background color for the given unlock progress.
///
/// The ramp is compressed into [0, threshold] and eased with a
/// decelerating curve, so the track lights up early in the swipe.
pub fn track_color(spec: &VisualSpec, progress: f32) -> Color {
    let threshold = spec.background_change_threshold.max(f32::EPSILON);
    let fraction = (progress / threshold).clamp(0.0, 1.0);
    let fraction = Easing::LinearOutSlowIn.transform(fraction);
    spec.inactive_track.lerp(spec.active_track, fraction)
}

/// Hint text color for the given unlock progress.
///
/// A plain linear alpha fade toward the hint color at alpha 0; no easing.
pub fn hint_color(spec: &VisualSpec, progress: f32) -> Color {
    let threshold = spec.hint_fade_threshold.max(f32::EPSILON);
    let fraction = (progress / threshold).clamp(0.0, 1.0);
    spec.hint.lerp(spec.hint.with_alpha(0.0), fraction)
}
