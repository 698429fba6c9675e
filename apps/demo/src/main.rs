//! Headless walkthrough of the slide-to-unlock control.
//!
//! Drives the public controller API through a scripted session: a timid
//! drag that snaps back, a committed swipe that unlocks, the loading
//! round-trip, and a degenerate relayout. Run with `RUST_LOG=debug` to see
//! the controller's own transition logging as well.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use instant::Instant;
use swipelock_core::SwipePhase;
use swipelock_ui::{NoHaptics, SlideToUnlockController, TrackSpec};

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

/// Pumps frames until the current settle finishes, logging the thumb.
fn pump_to_rest(controller: &mut SlideToUnlockController, now: &mut u64) {
    while matches!(controller.phase(), SwipePhase::Settling { .. }) {
        *now += FRAME_NANOS;
        controller.on_frame(*now);
        let state = controller.visual_state();
        log::info!(
            "  frame: offset={:7.2} progress={:.3} track_r={:.2} hint_alpha={:.2}",
            state.offset,
            state.progress,
            state.track_color.r(),
            state.hint_color.a()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let started = Instant::now();

    let width_px: f32 = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid track width {raw:?}"))?,
        None => 360.0,
    };

    let unlock_requested = Rc::new(Cell::new(false));
    let unlock_flag = Rc::clone(&unlock_requested);
    let mut controller = SlideToUnlockController::new(
        TrackSpec::default(),
        1.0,
        false,
        Box::new(move || unlock_flag.set(true)),
        Box::new(NoHaptics),
    );
    controller.track_width_changed(width_px);
    let mut now: u64 = 0;

    log::info!("mounted: {:?}", controller.visual_state());

    log::info!("-- timid drag, released short of the threshold --");
    controller.pointer_down(0, 40.0);
    for (t, x) in [(16, 60.0), (32, 90.0), (48, 130.0)] {
        controller.pointer_move(t, x);
    }
    // A hesitant pause before letting go: the tracker reads this as stopped.
    controller.pointer_up(120, 130.0);
    pump_to_rest(&mut controller, &mut now);
    log::info!("snapped back: {:?}", controller.visual_state());

    log::info!("-- committed swipe --");
    controller.pointer_down(1_000, 40.0);
    let mut t = 1_000;
    let mut x = 40.0;
    while x < 320.0 {
        t += 16;
        x += 45.0;
        controller.pointer_move(t, x);
    }
    controller.pointer_up(t + 16, x);
    pump_to_rest(&mut controller, &mut now);
    log::info!(
        "settled: {:?}, unlock requested = {}",
        controller.visual_state(),
        unlock_requested.get()
    );

    if unlock_requested.get() {
        log::info!("-- host enters loading --");
        controller.set_loading(true);
        pump_to_rest(&mut controller, &mut now);

        log::info!("-- work finished, loading cancelled --");
        controller.set_loading(false);
        pump_to_rest(&mut controller, &mut now);
        log::info!("back at rest: {:?}", controller.visual_state());
    }

    log::info!("-- degenerate relayout, gesture disabled --");
    controller.track_width_changed(40.0);
    controller.pointer_down(5_000, 10.0);
    controller.pointer_move(5_016, 200.0);
    controller.pointer_up(5_032, 200.0);
    log::info!("still static: {:?}", controller.visual_state());

    log::info!("walkthrough finished in {:?}", started.elapsed());
    Ok(())
}
