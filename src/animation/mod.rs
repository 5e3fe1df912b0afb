pub mod values;
pub mod spline;
pub mod keyframe;
pub mod tracks;
pub mod clock;
pub mod orientation;
pub mod animator;

pub use keyframe::{Keyframe, KeyframeSequence, MIN_KEYFRAMES};
pub use spline::{BasisFn, SplineMode, b_spline, catmull_rom};
pub use tracks::{ControlWindow, KeyframeTrack};
pub use clock::{DEFAULT_STEP, PlaybackClock, PlaybackCursor};
pub use orientation::{
    AxisRotation, OrientationInterpolator, OrientationMode, QuaternionPolicy, ResolvedOrientation,
};
pub use animator::{AnimationFrame, AnimationState, Animator};
pub use values::Interpolatable;
