//! Raw pointer stream to drag-gesture translation.
//!
//! Hosts without their own gesture stack feed timestamped pointer
//! positions here. Motion inside the touch slop is jitter and produces
//! nothing; once the slop is passed, the excess beyond it becomes the
//! first drag delta, and release emits the capped impulse velocity.

use swipelock_core::gesture_constants;
use swipelock_core::VelocityTracker1D;

/// Drag lifecycle events derived from raw pointer samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSignal {
    /// Slop passed; `delta` is the travel beyond the slop distance.
    Begin { delta: f32 },
    Move { delta: f32 },
    End { velocity: f32 },
}

pub struct DragRecognizer {
    touch_slop: f32,
    max_velocity: f32,
    tracker: VelocityTracker1D,
    pressed: bool,
    dragging: bool,
    last_x: f32,
    pending: f32,
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self::with_thresholds(
            gesture_constants::TOUCH_SLOP,
            gesture_constants::MAX_FLING_VELOCITY,
        )
    }

    pub fn with_thresholds(touch_slop: f32, max_velocity: f32) -> Self {
        Self {
            touch_slop,
            max_velocity,
            tracker: VelocityTracker1D::new(),
            pressed: false,
            dragging: false,
            last_x: 0.0,
            pending: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pointer_down(&mut self, time_ms: i64, x: f32) {
        self.pressed = true;
        self.dragging = false;
        self.pending = 0.0;
        self.last_x = x;
        self.tracker.reset();
        self.tracker.add_sample(time_ms, x);
    }

    pub fn pointer_move(&mut self, time_ms: i64, x: f32) -> Option<DragSignal> {
        if !self.pressed {
            return None;
        }
        self.tracker.add_sample(time_ms, x);
        let delta = x - self.last_x;
        self.last_x = x;

        if self.dragging {
            return Some(DragSignal::Move { delta });
        }

        self.pending += delta;
        if self.pending.abs() > self.touch_slop {
            self.dragging = true;
            // Only the travel beyond the slop reaches the thumb.
            let excess = self.pending - self.touch_slop.copysign(self.pending);
            self.pending = 0.0;
            Some(DragSignal::Begin { delta: excess })
        } else {
            None
        }
    }

    pub fn pointer_up(&mut self, time_ms: i64, x: f32) -> Option<DragSignal> {
        if !self.pressed {
            return None;
        }
        self.tracker.add_sample(time_ms, x);
        self.pressed = false;
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let velocity = self.tracker.calculate_velocity_with_max(self.max_velocity);
        Some(DragSignal::End { velocity })
    }

    /// Abandons the gesture in flight, e.g. when the pointer is grabbed by
    /// another control.
    pub fn cancel(&mut self) {
        self.pressed = false;
        self.dragging = false;
        self.pending = 0.0;
        self.tracker.reset();
    }
}
