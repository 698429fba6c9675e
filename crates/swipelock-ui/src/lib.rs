//! The slide-to-unlock control.
//!
//! Builds the user-facing pieces on top of `swipelock-core`: progress →
//! color mappings, density-aware track measurement, a touch-slop drag
//! recognizer, and the controller that binds a host's loading flag and
//! unlock callback to the gesture model.

pub mod color;
pub mod controller;
pub mod recognizer;
pub mod track;
pub mod unit;
pub mod visuals;

pub use color::Color;
pub use controller::{HapticFeedback, NoHaptics, SlideToUnlockController, VisualState};
pub use recognizer::{DragRecognizer, DragSignal};
pub use track::{TrackLayout, TrackSpec};
pub use unit::Dp;
pub use visuals::{hint_color, track_color, VisualSpec};
