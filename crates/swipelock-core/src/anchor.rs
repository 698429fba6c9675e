//! Anchor offsets for the swipe track.
//!
//! The thumb rests on exactly one of two anchors. `AnchorRange` is the
//! validated pair of offsets along the drag axis; everything downstream
//! (clamping, travel fractions, settle targets) is expressed against it.

use thiserror::Error;

/// The two valid resting positions for the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    End,
}

impl Anchor {
    /// The other anchor of the track.
    pub fn opposite(self) -> Self {
        match self {
            Anchor::Start => Anchor::End,
            Anchor::End => Anchor::Start,
        }
    }
}

/// Rejected anchor geometry.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum AnchorError {
    #[error("anchor offsets must be finite, got start={start} end={end}")]
    NonFinite { start: f32, end: f32 },
    #[error("end anchor must lie after start anchor, got start={start} end={end}")]
    Degenerate { start: f32, end: f32 },
}

/// Validated pair of anchor offsets, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRange {
    start: f32,
    end: f32,
}

impl AnchorRange {
    pub fn new(start: f32, end: f32) -> Result<Self, AnchorError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(AnchorError::NonFinite { start, end });
        }
        if end <= start {
            return Err(AnchorError::Degenerate { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn offset_of(&self, anchor: Anchor) -> f32 {
        match anchor {
            Anchor::Start => self.start,
            Anchor::End => self.end,
        }
    }

    /// Restricts an offset to the track.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.start, self.end)
    }

    /// Distance between the two anchors. Always positive.
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Proportion of the span traveled from `from` toward the opposite
    /// anchor, clamped to [0, 1].
    pub fn fraction_from(&self, from: Anchor, offset: f32) -> f32 {
        let traveled = match from {
            Anchor::Start => offset - self.start,
            Anchor::End => self.end - offset,
        };
        (traveled / self.span()).clamp(0.0, 1.0)
    }
}
