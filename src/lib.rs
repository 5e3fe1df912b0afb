//! Keyframe animation core.
//!
//! Plays a rigid body through a cyclic keyframe sequence, interpolating
//! position and orientation with Catmull-Rom or uniform cubic B-spline bases.
//! Rendering, windowing and timers are left to the host, which calls
//! [`Animator::tick`] once per frame.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod config;
pub mod errors;
pub mod utils;

pub use animation::{
    AnimationFrame, AnimationState, Animator, Keyframe, KeyframeSequence, KeyframeTrack,
    OrientationInterpolator, OrientationMode, PlaybackClock, PlaybackCursor, QuaternionPolicy,
    ResolvedOrientation, SplineMode,
};
pub use config::AnimationConfig;
pub use errors::{AnimationError, Result};
pub use utils::{FixedStepScheduler, FpsCounter};
