//! Gesture and settle-animation core for the Swipelock control.
//!
//! This crate owns everything about the "slide to unlock" interaction that
//! is independent of rendering: the two-anchor offset range, the
//! drag/settle state machine, the fixed-duration settle tween, release
//! velocity estimation, and the direction-normalized unlock progress.
//! Visual derivation and host wiring live in `swipelock-ui`.

pub mod anchor;
pub mod easing;
pub mod gesture_constants;
pub mod model;
pub mod progress;
pub mod tween;
pub mod velocity;

pub use anchor::{Anchor, AnchorError, AnchorRange};
pub use easing::Easing;
pub use model::{AnchoredSwipeModel, FrameScheduler, SwipePhase};
pub use progress::{unlock_progress, SwipeProgress};
pub use tween::{Lerp, Tween, TweenFrame, TweenSpec};
pub use velocity::VelocityTracker1D;
