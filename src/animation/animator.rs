//! Animator
//!
//! [`Animator`] is the single entry point a host loop talks to. It binds a
//! [`KeyframeTrack`] to a [`PlaybackClock`] and keeps the only mutable state
//! of a run, the [`AnimationState`].
//!
//! # Per-tick contract
//!
//! [`Animator::tick`] advances the cursor and samples the track inside the
//! same `&mut self` call, returning a `Copy` [`AnimationFrame`]. A consumer
//! therefore always sees a `frame_index` and `t` that belong together.
//!
//! ```rust,ignore
//! let mut animator = Animator::from_config(&AnimationConfig::default())?;
//! loop {
//!     let frame = animator.tick(1);
//!     renderer.draw(frame.position, frame.resolved);
//! }
//! ```

use glam::Quat;

use crate::animation::clock::{PlaybackClock, PlaybackCursor};
use crate::animation::orientation::{QuaternionPolicy, ResolvedOrientation, resolve};
use crate::animation::tracks::KeyframeTrack;
use crate::config::AnimationConfig;
use crate::errors::Result;

/// Mutable playback state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub cursor: PlaybackCursor,
    /// Ticks applied since the start of the run (paused ticks excluded).
    pub ticks: u64,
}

impl AnimationState {
    /// Pure transition: the state after `steps` ticks of `clock`.
    #[must_use]
    pub fn advanced(self, clock: &PlaybackClock, steps: u32) -> Self {
        Self {
            cursor: clock.advance(self.cursor, steps),
            ticks: self.ticks + u64::from(steps),
        }
    }
}

/// Snapshot of one sampled pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub cursor: PlaybackCursor,
    pub position: [f32; 3],
    /// Interpolated orientation tuple, before interpretation.
    pub orientation: [f32; 4],
    pub resolved: ResolvedOrientation,
}

impl AnimationFrame {
    #[inline]
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.resolved.to_quat()
    }
}

#[derive(Debug, Clone)]
pub struct Animator {
    track: KeyframeTrack,
    clock: PlaybackClock,
    quaternion_policy: QuaternionPolicy,
    state: AnimationState,
    paused: bool,
}

impl Animator {
    #[must_use]
    pub fn new(track: KeyframeTrack, clock: PlaybackClock, quaternion_policy: QuaternionPolicy) -> Self {
        Self {
            track,
            clock,
            quaternion_policy,
            state: AnimationState::default(),
            paused: false,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Result<Self> {
        let track = KeyframeTrack::new(
            config.keyframes.clone(),
            config.spline,
            config.orientation,
            config.interpolator,
        );
        let clock = PlaybackClock::new(config.step, track.keyframes().len())?;

        log::debug!(
            "Animator ready: {} keyframes, {:?} spline, {:?} orientation ({:?}), step {}",
            track.keyframes().len(),
            config.spline,
            config.orientation,
            config.interpolator,
            config.step,
        );

        Ok(Self::new(track, clock, config.quaternion_policy))
    }

    #[must_use]
    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }

    #[must_use]
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[must_use]
    pub fn cursor(&self) -> PlaybackCursor {
        self.state.cursor
    }

    /// Advances by `steps` ticks (none while paused) and samples the result.
    pub fn tick(&mut self, steps: u32) -> AnimationFrame {
        if !self.paused {
            self.state = self.state.advanced(&self.clock, steps);
        }
        self.sample_at(self.state.cursor)
    }

    /// Samples the current cursor without advancing.
    #[must_use]
    pub fn current_frame(&self) -> AnimationFrame {
        self.sample_at(self.state.cursor)
    }

    /// Pure evaluation at an arbitrary cursor.
    #[must_use]
    pub fn sample_at(&self, cursor: PlaybackCursor) -> AnimationFrame {
        let position = self.track.interpolate_position(cursor.t, cursor.frame_index);
        let orientation = self.track.interpolate_orientation(cursor.t, cursor.frame_index);
        let resolved = resolve(orientation, self.track.orientation_mode(), self.quaternion_policy);

        AnimationFrame {
            cursor,
            position,
            orientation,
            resolved,
        }
    }

    /// Moves playback to `cursor`. The frame index wraps; `t` must be in `[0, 1)`.
    pub fn seek(&mut self, cursor: PlaybackCursor) -> Result<()> {
        self.state.cursor = self.clock.normalize(cursor)?;
        Ok(())
    }

    /// Rewinds to the first segment and clears the tick count.
    pub fn reset(&mut self) {
        self.state = AnimationState::default();
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }
}
