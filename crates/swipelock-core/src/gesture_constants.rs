//! Shared gesture tuning values for the swipe track.
//!
//! These values are in logical pixels unless noted otherwise. Density-aware
//! hosts convert the dp-denominated constants through their own density
//! before handing them to the model.

/// Drag threshold in logical pixels.
///
/// Pointer travel below this distance from the initial press position is
/// treated as jitter: the thumb does not move and no drag begins. 8.0
/// matches common platform conventions (Android's ViewConfiguration touch
/// slop is ~8dp).
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum release velocity in logical pixels per second.
///
/// Estimated release velocities are clamped to this ceiling before the
/// settle decision, matching Android's default maximum fling velocity on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Positional settle threshold, as a fraction of the travel away from the
/// anchor the drag started on. Releases past this fraction settle on the
/// far anchor; releases short of it snap back.
pub const SETTLE_FRACTION: f32 = 0.8;

/// Settle velocity threshold in dp per second.
///
/// Releases at or above this speed settle in the direction of travel no
/// matter how far the thumb has moved. This is ten times the usual
/// swipeable default; the track is short and an accidental flick should
/// not unlock it.
pub const VELOCITY_THRESHOLD_DP_PER_SEC: f32 = 1_250.0;

/// Duration of the settle animation in milliseconds.
pub const SETTLE_DURATION_MILLIS: u64 = 300;
