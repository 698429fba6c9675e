//! The anchored drag/settle state machine.
//!
//! `AnchoredSwipeModel` owns the continuous offset between the Start and
//! End anchors and interprets the gesture lifecycle: drag deltas move the
//! offset (clamped to the track), releasing decides a settle target from
//! position and velocity, and a fixed-duration tween carries the thumb to
//! the winning anchor. Programmatic `animate_to` commands share the same
//! tween path. The model knows nothing about visuals.

use smallvec::SmallVec;

use crate::anchor::{Anchor, AnchorError, AnchorRange};
use crate::gesture_constants;
use crate::progress::SwipeProgress;
use crate::tween::{Tween, TweenSpec};

/// Host hook used to request the next animation frame.
///
/// While a settle tween is active the model asks for a frame after every
/// tick; the host answers by calling [`AnchoredSwipeModel::on_frame`] with
/// its frame time.
pub trait FrameScheduler {
    fn request_frame(&self);
}

type AnchorObserver = Box<dyn FnMut(Anchor)>;

/// Where the model currently is in its gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipePhase {
    /// Resting on an anchor; the offset equals that anchor's offset.
    Idle(Anchor),
    /// A drag owns the offset. `from` is the anchor the drag left.
    Dragging { from: Anchor },
    /// A settle tween is carrying the offset to `target`.
    Settling { from: Anchor, target: Anchor },
}

#[derive(Clone, Copy)]
enum Phase {
    Idle(Anchor),
    Dragging { from: Anchor },
    Settling { from: Anchor, target: Anchor, tween: Tween },
}

pub struct AnchoredSwipeModel {
    anchors: Option<AnchorRange>,
    offset: f32,
    phase: Phase,
    settle_spec: TweenSpec,
    /// Settle velocity gate in px/s; releases at or above it win on sign.
    velocity_threshold: f32,
    /// Positional settle gate as a fraction of travel away from `from`.
    settle_fraction: f32,
    observers: SmallVec<[AnchorObserver; 2]>,
    scheduler: Option<Box<dyn FrameScheduler>>,
}

impl AnchoredSwipeModel {
    /// Creates a model resting on `initial`. The offset snaps onto the
    /// anchor once [`configure_anchors`](Self::configure_anchors) supplies
    /// a valid range; until then the gesture is disabled.
    pub fn new(initial: Anchor) -> Self {
        Self {
            anchors: None,
            offset: 0.0,
            phase: Phase::Idle(initial),
            settle_spec: TweenSpec::default(),
            velocity_threshold: gesture_constants::VELOCITY_THRESHOLD_DP_PER_SEC,
            settle_fraction: gesture_constants::SETTLE_FRACTION,
            observers: SmallVec::new(),
            scheduler: None,
        }
    }

    pub fn set_settle_spec(&mut self, spec: TweenSpec) {
        self.settle_spec = spec;
    }

    /// Sets the settle velocity gate, in physical px/s.
    pub fn set_velocity_threshold(&mut self, px_per_sec: f32) {
        self.velocity_threshold = px_per_sec.abs();
    }

    pub fn set_settle_fraction(&mut self, fraction: f32) {
        self.settle_fraction = fraction.clamp(0.0, 1.0);
    }

    /// Registers an arrival observer. Each observer is called exactly once
    /// per anchor arrival, whether the arrival came from a drag settle or
    /// a programmatic `animate_to`. Observers must not call back into the
    /// model; record the event and act on it after the model call returns.
    pub fn add_anchor_observer(&mut self, observer: impl FnMut(Anchor) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn set_frame_scheduler(&mut self, scheduler: Box<dyn FrameScheduler>) {
        self.scheduler = Some(scheduler);
    }

    /// Replaces the anchor range.
    ///
    /// A degenerate or non-finite pair is rejected: the error is returned,
    /// any existing anchors are cleared and the gesture is disabled until
    /// a valid range arrives. Never panics.
    pub fn configure_anchors(&mut self, start: f32, end: f32) -> Result<(), AnchorError> {
        match AnchorRange::new(start, end) {
            Ok(range) => {
                self.anchors = Some(range);
                match self.phase {
                    // Invariant: an idle offset sits exactly on its anchor.
                    Phase::Idle(anchor) => self.offset = range.offset_of(anchor),
                    Phase::Dragging { .. } => self.offset = range.clamp(self.offset),
                    // A tween in flight was aiming at the old range's
                    // pixels; re-aim it at the target's new offset.
                    Phase::Settling { from, target, .. } => {
                        self.offset = range.clamp(self.offset);
                        self.start_settle(range, from, target);
                    }
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("rejecting anchor range: {err}");
                self.clear_anchors();
                Err(err)
            }
        }
    }

    /// Drops the anchors and disables the gesture. Any in-flight drag or
    /// settle is abandoned without an arrival event and the thumb returns
    /// to its last reference anchor.
    pub fn clear_anchors(&mut self) {
        self.anchors = None;
        self.offset = 0.0;
        let rest = match self.phase {
            Phase::Idle(anchor) => anchor,
            Phase::Dragging { from } => from,
            Phase::Settling { from, .. } => from,
        };
        self.phase = Phase::Idle(rest);
    }

    pub fn is_enabled(&self) -> bool {
        self.anchors.is_some()
    }

    /// Current offset along the drag axis, for thumb placement.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> SwipePhase {
        match self.phase {
            Phase::Idle(anchor) => SwipePhase::Idle(anchor),
            Phase::Dragging { from } => SwipePhase::Dragging { from },
            Phase::Settling { from, target, .. } => SwipePhase::Settling { from, target },
        }
    }

    /// The anchor the model is resting on, when idle.
    pub fn resting_anchor(&self) -> Option<Anchor> {
        match self.phase {
            Phase::Idle(anchor) => Some(anchor),
            _ => None,
        }
    }

    /// Raw progress between the anchors bounding the current offset.
    pub fn progress(&self) -> SwipeProgress {
        let Some(range) = self.anchors else {
            let rest = match self.phase {
                Phase::Idle(anchor) => anchor,
                Phase::Dragging { from } => from,
                Phase::Settling { from, .. } => from,
            };
            return SwipeProgress::resting(rest);
        };
        match self.phase {
            Phase::Idle(anchor) => SwipeProgress::resting(anchor),
            Phase::Dragging { from } | Phase::Settling { from, .. } => {
                SwipeProgress::between(from, range.fraction_from(from, self.offset))
            }
        }
    }

    /// Starts a drag. Steals the offset from an in-flight settle tween,
    /// whose arrival never fires. Returns false (and does nothing) while
    /// the gesture is disabled.
    pub fn drag_started(&mut self) -> bool {
        if self.anchors.is_none() {
            return false;
        }
        let from = match self.phase {
            Phase::Idle(anchor) => anchor,
            // Re-pressing mid-drag keeps the current drag.
            Phase::Dragging { from } => from,
            // The superseded tween keeps its reference anchor so progress
            // stays continuous under the finger.
            Phase::Settling { from, .. } => from,
        };
        self.phase = Phase::Dragging { from };
        true
    }

    /// Moves the offset by `delta`, clamped to the track. No-op outside an
    /// active drag.
    pub fn drag_delta(&mut self, delta: f32) {
        let Some(range) = self.anchors else { return };
        if let Phase::Dragging { .. } = self.phase {
            self.offset = range.clamp(self.offset + delta);
        }
    }

    /// Ends the drag and settles to the winning anchor.
    ///
    /// A release at or above the velocity threshold settles in the
    /// direction of travel (positive velocity toward End); otherwise the
    /// positional rule applies: past `settle_fraction` of the way from the
    /// origin anchor settles on the far anchor, short of it snaps back.
    pub fn drag_released(&mut self, velocity: f32) {
        let Some(range) = self.anchors else { return };
        let Phase::Dragging { from } = self.phase else {
            return;
        };
        let target = self.settle_target(range, from, velocity);
        log::debug!(
            "drag released: from={from:?} offset={} velocity={velocity} -> {target:?}",
            self.offset
        );
        self.start_settle(range, from, target);
    }

    /// Programmatic settle to `anchor`.
    ///
    /// Supersedes an in-flight tween (the abandoned target's arrival never
    /// fires) and restarts from the current offset. Animating onto the
    /// anchor the model already rests on is a no-op, as is any call while
    /// the gesture is disabled or a drag owns the offset.
    pub fn animate_to(&mut self, anchor: Anchor) {
        let Some(range) = self.anchors else { return };
        let from = match self.phase {
            Phase::Idle(current) if current == anchor => return,
            Phase::Idle(current) => current,
            Phase::Dragging { .. } => {
                log::debug!("animate_to({anchor:?}) ignored: drag owns the offset");
                return;
            }
            Phase::Settling { from, .. } => from,
        };
        self.start_settle(range, from, anchor);
    }

    /// Advances the active settle tween to `now_nanos`. Arrival observers
    /// fire from here, on the tick that completes the tween.
    pub fn on_frame(&mut self, now_nanos: u64) {
        let Phase::Settling { from, target, mut tween } = self.phase else {
            return;
        };
        let frame = tween.sample(now_nanos);
        self.offset = frame.offset;
        if frame.finished {
            self.phase = Phase::Idle(target);
            log::debug!("settled on {target:?}");
            self.notify_arrival(target);
        } else {
            self.phase = Phase::Settling { from, target, tween };
            self.request_frame();
        }
    }

    fn settle_target(&self, range: AnchorRange, from: Anchor, velocity: f32) -> Anchor {
        if velocity.abs() >= self.velocity_threshold {
            if velocity > 0.0 {
                Anchor::End
            } else {
                Anchor::Start
            }
        } else if range.fraction_from(from, self.offset) >= self.settle_fraction {
            from.opposite()
        } else {
            from
        }
    }

    fn start_settle(&mut self, range: AnchorRange, from: Anchor, target: Anchor) {
        let tween = Tween::new(self.offset, range.offset_of(target), self.settle_spec);
        self.phase = Phase::Settling { from, target, tween };
        self.request_frame();
    }

    fn request_frame(&self) {
        if let Some(scheduler) = &self.scheduler {
            scheduler.request_frame();
        }
    }

    fn notify_arrival(&mut self, anchor: Anchor) {
        for observer in &mut self.observers {
            observer(anchor);
        }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
