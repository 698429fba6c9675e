//! Direction-normalized unlock progress.

use crate::anchor::Anchor;

/// Raw progress between the two anchors bounding the current offset.
///
/// `from` is the anchor the current motion is measured from; `fraction` is
/// the proportion of the span traveled toward `to`. At rest on an anchor
/// the two sides coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeProgress {
    pub from: Anchor,
    pub to: Anchor,
    pub fraction: f32,
}

impl SwipeProgress {
    /// Progress for a thumb resting on `anchor`.
    pub fn resting(anchor: Anchor) -> Self {
        Self {
            from: anchor,
            to: anchor,
            fraction: 1.0,
        }
    }

    pub fn between(from: Anchor, fraction: f32) -> Self {
        Self {
            from,
            to: from.opposite(),
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}

/// Normalizes travel direction so progress always reads 0 → 1 as
/// Start → End, whichever way the thumb is moving.
pub fn unlock_progress(progress: SwipeProgress) -> f32 {
    let at_anchor = progress.from == progress.to;
    let from_start = progress.from == Anchor::Start;
    if at_anchor {
        if from_start {
            0.0
        } else {
            1.0
        }
    } else if from_start {
        progress.fraction
    } else {
        1.0 - progress.fraction
    }
}
