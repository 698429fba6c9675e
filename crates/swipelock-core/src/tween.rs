//! Fixed-duration eased interpolation of the track offset.
//!
//! A settle animation is a `Tween`: the offset it left from, the anchor
//! offset it is heading to, and a duration/easing spec. The tween is
//! advanced by host frame times; it captures its start time on the first
//! frame it sees, so a superseded-and-replaced tween can never inherit a
//! stale clock.

use crate::easing::Easing;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(
            crate::gesture_constants::SETTLE_DURATION_MILLIS,
            Easing::FastOutSlowIn,
        )
    }
}

/// One frame's worth of tween output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    pub offset: f32,
    pub finished: bool,
}

/// A tween in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start_offset: f32,
    target_offset: f32,
    spec: TweenSpec,
    start_time_nanos: Option<u64>,
}

impl Tween {
    pub fn new(start_offset: f32, target_offset: f32, spec: TweenSpec) -> Self {
        Self {
            start_offset,
            target_offset,
            spec,
            start_time_nanos: None,
        }
    }

    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    /// Advance to `now_nanos` and produce the offset for this frame.
    ///
    /// The first call pins the start time; later calls measure elapsed time
    /// against it. On the final frame the offset is exactly the target.
    pub fn sample(&mut self, now_nanos: u64) -> TweenFrame {
        let start_time = *self.start_time_nanos.get_or_insert(now_nanos);
        let elapsed_nanos = now_nanos.saturating_sub(start_time);
        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear >= 1.0 {
            return TweenFrame {
                offset: self.target_offset,
                finished: true,
            };
        }

        let eased = self.spec.easing.transform(linear);
        TweenFrame {
            offset: self.start_offset.lerp(&self.target_offset, eased),
            finished: false,
        }
    }
}
