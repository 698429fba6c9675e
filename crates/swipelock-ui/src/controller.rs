//! Host binding for the slide-to-unlock control.
//!
//! The controller owns the gesture model and everything the host talks
//! to: the loading flag, the unlock callback, the haptic capability, the
//! pointer stream, and width reports. Derived visual values are
//! recomputed deterministically from the model on demand; there is no
//! implicit reactive graph.

use std::cell::RefCell;
use std::rc::Rc;

use swipelock_core::{
    unlock_progress, Anchor, AnchoredSwipeModel, FrameScheduler, SwipePhase,
};

use crate::color::Color;
use crate::recognizer::{DragRecognizer, DragSignal};
use crate::track::{TrackLayout, TrackSpec};
use crate::visuals::{hint_color, track_color};

/// Fire-and-forget haptic capability, injected by the host.
pub trait HapticFeedback {
    fn long_press(&self);
}

/// No-op haptics for hosts without a haptic engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn long_press(&self) {}
}

/// Render-ready view of the control, recomputed from the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Thumb offset along the track, physical px.
    pub offset: f32,
    /// Normalized unlock progress in [0, 1].
    pub progress: f32,
    pub track_color: Color,
    pub hint_color: Color,
    pub is_loading: bool,
}

pub struct SlideToUnlockController {
    model: AnchoredSwipeModel,
    layout: TrackLayout,
    spec: TrackSpec,
    recognizer: DragRecognizer,
    is_loading: bool,
    /// Loading change that arrived mid-drag; applied once the drag's own
    /// settle concludes. Latest value wins.
    pending_loading: Option<bool>,
    on_unlock: Box<dyn FnMut()>,
    haptics: Box<dyn HapticFeedback>,
    arrivals: Rc<RefCell<Vec<Anchor>>>,
}

impl SlideToUnlockController {
    /// Mounts the control. The thumb rests on End when `is_loading`, Start
    /// otherwise; mounting never animates and never fires the callback.
    ///
    /// The unlock callback fires on *every* End arrival, whether the user
    /// dragged there or a loading flip animated there. Hosts that only
    /// want user-initiated unlocks should check their own loading state
    /// inside the callback.
    pub fn new(
        spec: TrackSpec,
        density: f32,
        is_loading: bool,
        on_unlock: Box<dyn FnMut()>,
        haptics: Box<dyn HapticFeedback>,
    ) -> Self {
        let initial = if is_loading { Anchor::End } else { Anchor::Start };
        let mut model = AnchoredSwipeModel::new(initial);
        model.set_settle_spec(spec.settle_tween);
        model.set_velocity_threshold(spec.velocity_threshold.to_px(density));
        model.set_settle_fraction(spec.settle_fraction);

        let arrivals = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&arrivals);
        model.add_anchor_observer(move |anchor| sink.borrow_mut().push(anchor));

        let layout = TrackLayout::new(&spec, density);
        Self {
            model,
            layout,
            spec,
            recognizer: DragRecognizer::new(),
            is_loading,
            pending_loading: None,
            on_unlock,
            haptics,
            arrivals,
        }
    }

    pub fn spec(&self) -> &TrackSpec {
        &self.spec
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn phase(&self) -> SwipePhase {
        self.model.phase()
    }

    pub fn set_frame_scheduler(&mut self, scheduler: Box<dyn FrameScheduler>) {
        self.model.set_frame_scheduler(scheduler);
    }

    /// Reports the track's rendered width in physical pixels.
    pub fn track_width_changed(&mut self, width_px: f32) {
        self.layout.report_width(width_px);
        self.sync_anchors();
    }

    pub fn density_changed(&mut self, density: f32) {
        self.layout.set_density(density);
        self.model
            .set_velocity_threshold(self.spec.velocity_threshold.to_px(density));
        self.sync_anchors();
    }

    fn sync_anchors(&mut self) {
        if !self.layout.is_measured() {
            return;
        }
        match self.layout.end_offset() {
            Some(end) => {
                if let Err(err) = self.model.configure_anchors(0.0, end) {
                    log::warn!("layout produced an invalid anchor range: {err}");
                }
            }
            None => {
                log::warn!("degenerate track layout, gesture disabled");
                self.model.clear_anchors();
            }
        }
    }

    /// Flips the loading flag.
    ///
    /// While idle or settling this immediately animates toward the flag's
    /// anchor. While a drag is active the command is deferred: the drag
    /// keeps the offset, settles by its own rule, and the deferred flag is
    /// applied when that settle concludes.
    pub fn set_loading(&mut self, flag: bool) {
        if flag == self.is_loading {
            return;
        }
        self.is_loading = flag;
        log::debug!("loading -> {flag}");
        if matches!(self.model.phase(), SwipePhase::Dragging { .. }) {
            self.pending_loading = Some(flag);
        } else {
            self.pending_loading = None;
            self.apply_loading(flag);
        }
    }

    fn apply_loading(&mut self, flag: bool) {
        let target = if flag { Anchor::End } else { Anchor::Start };
        self.model.animate_to(target);
    }

    fn gesture_enabled(&self) -> bool {
        !self.is_loading && self.model.is_enabled()
    }

    // Raw pointer entry points, for hosts without their own gesture stack.

    pub fn pointer_down(&mut self, time_ms: i64, x: f32) {
        if self.gesture_enabled() {
            self.recognizer.pointer_down(time_ms, x);
        }
    }

    pub fn pointer_move(&mut self, time_ms: i64, x: f32) {
        match self.recognizer.pointer_move(time_ms, x) {
            Some(DragSignal::Begin { delta }) => {
                // Loading may have flipped since pointer-down; re-check.
                if self.gesture_enabled() && self.model.drag_started() {
                    self.model.drag_delta(delta);
                } else {
                    self.recognizer.cancel();
                }
            }
            Some(DragSignal::Move { delta }) => self.model.drag_delta(delta),
            _ => {}
        }
    }

    pub fn pointer_up(&mut self, time_ms: i64, x: f32) {
        if let Some(DragSignal::End { velocity }) = self.recognizer.pointer_up(time_ms, x) {
            self.model.drag_released(velocity);
        }
    }

    // Pre-digested drag entry points, for hosts that already recognize
    // drags and estimate release velocity themselves.

    pub fn drag_started(&mut self) -> bool {
        self.gesture_enabled() && self.model.drag_started()
    }

    pub fn drag_delta(&mut self, delta: f32) {
        self.model.drag_delta(delta);
    }

    pub fn drag_released(&mut self, velocity: f32) {
        self.model.drag_released(velocity);
    }

    /// Advances the settle animation and dispatches any arrival effects:
    /// haptic + unlock on End, and a deferred loading command once the
    /// model is back at rest.
    pub fn on_frame(&mut self, now_nanos: u64) {
        self.model.on_frame(now_nanos);
        self.process_arrivals();
    }

    fn process_arrivals(&mut self) {
        let arrived: Vec<Anchor> = self.arrivals.borrow_mut().drain(..).collect();
        for anchor in arrived {
            if anchor == Anchor::End {
                self.haptics.long_press();
                (self.on_unlock)();
            }
        }
        if self.model.resting_anchor().is_some() {
            if let Some(flag) = self.pending_loading.take() {
                self.apply_loading(flag);
            }
        }
    }

    /// Recomputes the derived visual values from the current model state.
    pub fn visual_state(&self) -> VisualState {
        let progress = unlock_progress(self.model.progress());
        VisualState {
            offset: self.model.offset(),
            progress,
            track_color: track_color(&self.spec.visuals, progress),
            hint_color: hint_color(&self.spec.visuals, progress),
            is_loading: self.is_loading,
        }
    }
}
