//! End-to-end exercises of the controller: gesture in, effects out.

use std::cell::Cell;
use std::rc::Rc;

use swipelock_core::SwipePhase;
use swipelock_ui::{HapticFeedback, SlideToUnlockController, TrackSpec};

const FRAME: u64 = 16_666_667; // ~60 FPS

struct CountingHaptics(Rc<Cell<u32>>);

impl HapticFeedback for CountingHaptics {
    fn long_press(&self) {
        self.0.set(self.0.get() + 1);
    }
}

struct Harness {
    controller: SlideToUnlockController,
    unlocks: Rc<Cell<u32>>,
    haptics: Rc<Cell<u32>>,
    now: u64,
}

impl Harness {
    fn new(is_loading: bool) -> Self {
        let unlocks = Rc::new(Cell::new(0));
        let haptics = Rc::new(Cell::new(0));
        let unlock_sink = Rc::clone(&unlocks);
        let mut controller = SlideToUnlockController::new(
            TrackSpec::default(),
            1.0,
            is_loading,
            Box::new(move || unlock_sink.set(unlock_sink.get() + 1)),
            Box::new(CountingHaptics(Rc::clone(&haptics))),
        );
        // 360px wide at density 1 leaves a 300px slide.
        controller.track_width_changed(360.0);
        Self {
            controller,
            unlocks,
            haptics,
            now: 0,
        }
    }

    /// Pumps frames until no settle is in flight. Returns the offsets seen.
    fn pump_to_rest(&mut self) -> Vec<f32> {
        let mut offsets = Vec::new();
        for _ in 0..100 {
            if !matches!(self.controller.phase(), SwipePhase::Settling { .. }) {
                return offsets;
            }
            self.now += FRAME;
            self.controller.on_frame(self.now);
            offsets.push(self.controller.visual_state().offset);
        }
        panic!("control did not come to rest within 100 frames");
    }
}

#[test]
fn mounting_rests_without_side_effects() {
    let harness = Harness::new(false);
    assert_eq!(harness.controller.visual_state().offset, 0.0);
    assert_eq!(harness.unlocks.get(), 0);

    let loading = Harness::new(true);
    assert_eq!(loading.controller.visual_state().offset, 300.0);
    assert_eq!(loading.unlocks.get(), 0);
    assert_eq!(loading.haptics.get(), 0);
}

#[test]
fn drag_past_threshold_unlocks_exactly_once() {
    let mut h = Harness::new(false);
    assert!(h.controller.drag_started());
    h.controller.drag_delta(250.0); // 0.83 of the track
    h.controller.drag_released(0.0);
    h.pump_to_rest();

    assert_eq!(h.controller.visual_state().offset, 300.0);
    assert_eq!(h.unlocks.get(), 1);
    assert_eq!(h.haptics.get(), 1);

    // Idle frames must not re-fire anything.
    for _ in 0..5 {
        h.now += FRAME;
        h.controller.on_frame(h.now);
    }
    assert_eq!(h.unlocks.get(), 1);
}

#[test]
fn short_drag_snaps_back_silently() {
    let mut h = Harness::new(false);
    assert!(h.controller.drag_started());
    h.controller.drag_delta(200.0); // 0.67 of the track
    h.controller.drag_released(0.0);
    h.pump_to_rest();

    assert_eq!(h.controller.visual_state().offset, 0.0);
    assert_eq!(h.unlocks.get(), 0);
    assert_eq!(h.haptics.get(), 0);
}

#[test]
fn fast_release_unlocks_from_anywhere() {
    let mut h = Harness::new(false);
    assert!(h.controller.drag_started());
    h.controller.drag_delta(90.0); // 0.3 of the track
    h.controller.drag_released(2_000.0);
    h.pump_to_rest();

    assert_eq!(h.unlocks.get(), 1);
}

#[test]
fn loading_flip_animates_and_fires_once() {
    let mut h = Harness::new(false);
    h.controller.set_loading(true);
    assert!(matches!(
        h.controller.phase(),
        SwipePhase::Settling { .. }
    ));
    h.pump_to_rest();

    assert_eq!(h.controller.visual_state().offset, 300.0);
    assert_eq!(h.unlocks.get(), 1);
    assert_eq!(h.haptics.get(), 1);

    h.controller.set_loading(false);
    h.pump_to_rest();
    assert_eq!(h.controller.visual_state().offset, 0.0);
    assert_eq!(h.unlocks.get(), 1, "returning to Start must not unlock");
}

#[test]
fn loading_flip_mid_drag_is_deferred() {
    let mut h = Harness::new(false);
    assert!(h.controller.drag_started());
    h.controller.drag_delta(100.0); // 0.33, will snap back on release

    h.controller.set_loading(true);
    assert!(
        matches!(h.controller.phase(), SwipePhase::Dragging { .. }),
        "the drag keeps the offset until released"
    );

    h.controller.drag_released(0.0);
    let offsets = h.pump_to_rest();

    // The drag's own settle ran first: the thumb went back to Start
    // before the deferred loading command carried it to End.
    assert!(
        offsets.contains(&0.0),
        "expected an intermediate rest at Start, got {offsets:?}"
    );
    assert_eq!(h.controller.visual_state().offset, 300.0);
    assert_eq!(h.unlocks.get(), 1);
    assert_eq!(h.haptics.get(), 1);
}

#[test]
fn rearrival_after_bounce_fires_again() {
    let mut h = Harness::new(false);
    assert!(h.controller.drag_started());
    h.controller.drag_delta(300.0);
    h.controller.drag_released(0.0);
    h.pump_to_rest();
    assert_eq!(h.unlocks.get(), 1);

    // Flipping loading on while already resting at End is a no-op: the
    // thumb is there, no new arrival happens.
    h.controller.set_loading(true);
    h.pump_to_rest();
    assert_eq!(h.unlocks.get(), 1);

    // Bounce to Start and back: the second End arrival fires again.
    h.controller.set_loading(false);
    h.pump_to_rest();
    assert_eq!(h.controller.visual_state().offset, 0.0);

    h.controller.set_loading(true);
    h.pump_to_rest();
    assert_eq!(h.unlocks.get(), 2);
    assert_eq!(h.haptics.get(), 2);
}

#[test]
fn gesture_is_gated_while_loading() {
    let mut h = Harness::new(true);
    assert!(!h.controller.drag_started());

    h.controller.pointer_down(0, 10.0);
    h.controller.pointer_move(10, 200.0);
    h.controller.pointer_up(20, 290.0);
    assert_eq!(h.controller.visual_state().offset, 300.0);
    assert_eq!(h.unlocks.get(), 0);
}

#[test]
fn degenerate_width_disables_without_panicking() {
    let mut h = Harness::new(false);
    h.controller.track_width_changed(50.0);
    assert!(!h.controller.drag_started());
    assert_eq!(h.controller.visual_state().offset, 0.0);

    // A later valid width re-enables the gesture.
    h.controller.track_width_changed(360.0);
    assert!(h.controller.drag_started());
}

#[test]
fn raw_pointer_stream_drives_a_full_unlock() {
    let mut h = Harness::new(false);
    h.controller.pointer_down(0, 100.0);
    h.controller.pointer_move(10, 104.0); // inside the slop
    assert_eq!(h.controller.visual_state().offset, 0.0);

    h.controller.pointer_move(20, 120.0); // slop passed, 12px excess
    assert_eq!(h.controller.visual_state().offset, 12.0);

    h.controller.pointer_move(30, 200.0);
    assert_eq!(h.controller.visual_state().offset, 92.0);

    // A fast finish: ~6000 px/s over the last samples.
    h.controller.pointer_up(40, 260.0);
    h.pump_to_rest();

    assert_eq!(h.controller.visual_state().offset, 300.0);
    assert_eq!(h.unlocks.get(), 1);
}

#[test]
fn visual_state_follows_the_drag() {
    let mut h = Harness::new(false);
    let spec = h.controller.spec().clone();

    let at_rest = h.controller.visual_state();
    assert_eq!(at_rest.progress, 0.0);
    assert_eq!(at_rest.track_color, spec.visuals.inactive_track);
    assert_eq!(at_rest.hint_color.a(), 1.0);

    assert!(h.controller.drag_started());
    h.controller.drag_delta(150.0); // progress 0.5
    let mid = h.controller.visual_state();
    assert_eq!(mid.progress, 0.5);
    assert_eq!(mid.track_color, spec.visuals.active_track);
    assert_eq!(mid.hint_color.a(), 0.0);

    h.controller.drag_delta(150.0);
    let full = h.controller.visual_state();
    assert_eq!(full.progress, 1.0);
}
