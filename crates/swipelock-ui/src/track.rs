//! Track geometry and width measurement.
//!
//! The End anchor is wherever the thumb can slide to: the measured track
//! width minus the horizontal padding on both sides and the thumb itself.
//! Widths arrive from the host's layout system in physical pixels.

use swipelock_core::gesture_constants;
use swipelock_core::TweenSpec;

use crate::unit::Dp;
use crate::visuals::VisualSpec;

/// Static configuration of the control.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSpec {
    pub height: Dp,
    pub horizontal_padding: Dp,
    pub thumb_diameter: Dp,
    pub thumb_padding: Dp,
    pub hint_text: String,
    pub visuals: VisualSpec,
    pub settle_tween: TweenSpec,
    /// Settle velocity gate, dp per second.
    pub velocity_threshold: Dp,
    /// Positional settle gate as a fraction of travel from the origin anchor.
    pub settle_fraction: f32,
}

impl Default for TrackSpec {
    fn default() -> Self {
        Self {
            height: Dp(56.0),
            horizontal_padding: Dp(10.0),
            thumb_diameter: Dp(40.0),
            thumb_padding: Dp(8.0),
            hint_text: "Swipe to unlock reward".to_string(),
            visuals: VisualSpec::default(),
            settle_tween: TweenSpec::default(),
            velocity_threshold: Dp(gesture_constants::VELOCITY_THRESHOLD_DP_PER_SEC),
            settle_fraction: gesture_constants::SETTLE_FRACTION,
        }
    }
}

/// Observes the rendered track width and derives the End anchor offset.
#[derive(Debug, Clone, Copy)]
pub struct TrackLayout {
    horizontal_padding: Dp,
    thumb_diameter: Dp,
    density: f32,
    width_px: Option<f32>,
}

impl TrackLayout {
    pub fn new(spec: &TrackSpec, density: f32) -> Self {
        Self {
            horizontal_padding: spec.horizontal_padding,
            thumb_diameter: spec.thumb_diameter,
            density,
            width_px: None,
        }
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn set_density(&mut self, density: f32) {
        self.density = density;
    }

    /// Records the track's rendered width in physical pixels.
    pub fn report_width(&mut self, width_px: f32) {
        self.width_px = Some(width_px);
    }

    /// Whether a width has been reported yet.
    pub fn is_measured(&self) -> bool {
        self.width_px.is_some()
    }

    /// End anchor offset for the current measurements.
    ///
    /// `None` while unmeasured, or when the reserved space (padding plus
    /// thumb) leaves no room to slide — the degenerate-layout case.
    pub fn end_offset(&self) -> Option<f32> {
        let width = self.width_px?;
        let reserved =
            Dp(2.0 * self.horizontal_padding.0 + self.thumb_diameter.0).to_px(self.density);
        let end = width - reserved;
        (end > 0.0).then_some(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_offset_subtracts_padding_and_thumb() {
        let mut layout = TrackLayout::new(&TrackSpec::default(), 1.0);
        layout.report_width(360.0);
        assert_eq!(layout.end_offset(), Some(300.0));
    }

    #[test]
    fn end_offset_scales_with_density() {
        let mut layout = TrackLayout::new(&TrackSpec::default(), 2.0);
        layout.report_width(360.0);
        // Reserved space is (2*10 + 40)dp = 120px at density 2.
        assert_eq!(layout.end_offset(), Some(240.0));
    }

    #[test]
    fn unmeasured_layout_has_no_end() {
        let layout = TrackLayout::new(&TrackSpec::default(), 1.0);
        assert!(!layout.is_measured());
        assert_eq!(layout.end_offset(), None);
    }

    #[test]
    fn too_narrow_track_is_degenerate() {
        let mut layout = TrackLayout::new(&TrackSpec::default(), 1.0);
        layout.report_width(50.0);
        assert!(layout.is_measured());
        assert_eq!(layout.end_offset(), None);

        layout.report_width(60.0); // exactly the reserved space
        assert_eq!(layout.end_offset(), None);
    }
}
