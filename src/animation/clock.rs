use serde::{Deserialize, Serialize};

use crate::animation::keyframe::MIN_KEYFRAMES;
use crate::errors::{AnimationError, Result};

/// Default segment parameter increment per tick (50 ticks per segment).
pub const DEFAULT_STEP: f32 = 0.02;

/// Playback progress: the active segment and the position inside it.
///
/// `frame_index` is p1 of the active control window; `t` lies in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackCursor {
    pub frame_index: usize,
    pub t: f32,
}

impl PlaybackCursor {
    #[must_use]
    pub const fn new(frame_index: usize, t: f32) -> Self {
        Self { frame_index, t }
    }
}

/// Fixed-step clock looping forever over `len` keyframe segments.
///
/// The clock owns no cursor; it maps one cursor to the next so the state can
/// live wherever the caller keeps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    step: f32,
    len: usize,
}

impl PlaybackClock {
    pub fn new(step: f32, len: usize) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(AnimationError::InvalidStep(step));
        }
        if len < MIN_KEYFRAMES {
            return Err(AnimationError::NotEnoughKeyframes {
                count: len,
                required: MIN_KEYFRAMES,
            });
        }
        Ok(Self { step, len })
    }

    #[inline]
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One tick: `t += step`; on reaching 1, `t` resets to 0 and the
    /// segment index moves to the next keyframe (cyclically).
    #[must_use]
    pub fn tick(&self, cursor: PlaybackCursor) -> PlaybackCursor {
        let mut next = cursor;
        next.t += self.step;

        if next.t >= 1.0 {
            next.t = 0.0;
            next.frame_index = (next.frame_index + 1) % self.len;
            log::trace!("Segment rollover to keyframe {}", next.frame_index);
        }

        next
    }

    /// Applies [`tick`](Self::tick) `steps` times.
    #[must_use]
    pub fn advance(&self, cursor: PlaybackCursor, steps: u32) -> PlaybackCursor {
        (0..steps).fold(cursor, |c, _| self.tick(c))
    }

    /// Validates a seek target and wraps its frame index into range.
    pub fn normalize(&self, cursor: PlaybackCursor) -> Result<PlaybackCursor> {
        if !cursor.t.is_finite() || !(0.0..1.0).contains(&cursor.t) {
            return Err(AnimationError::InvalidCursor { t: cursor.t });
        }
        Ok(PlaybackCursor::new(cursor.frame_index % self.len, cursor.t))
    }
}
