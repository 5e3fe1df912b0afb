//! Animation Configuration
//!
//! [`AnimationConfig`] gathers everything fixed for the lifetime of a run:
//! the keyframe sequence, the spline basis, the orientation interpretation
//! and the clock step. The default reproduces the built-in four-keyframe demo
//! with Catmull-Rom splines and fixed angles.
//!
//! Configurations can be read from JSON; every field is optional:
//!
//! ```json
//! {
//!     "keyframes": [
//!         { "position": [0, 0, 0], "orientation": [0, 0, 0, 1] },
//!         { "position": [2, 0, 0], "orientation": [0, 0, 1, 0] },
//!         { "position": [0, 2, 0], "orientation": [0, 1, 0, 1] },
//!         { "position": [0, 0, 2], "orientation": [0, 0, 0, 0] }
//!     ],
//!     "spline": "b_spline",
//!     "orientation": "quaternion",
//!     "step": 0.02
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::clock::DEFAULT_STEP;
use crate::animation::keyframe::KeyframeSequence;
use crate::animation::orientation::{OrientationInterpolator, OrientationMode, QuaternionPolicy};
use crate::animation::spline::SplineMode;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub keyframes: KeyframeSequence,
    pub spline: SplineMode,
    pub orientation: OrientationMode,
    pub interpolator: OrientationInterpolator,
    pub quaternion_policy: QuaternionPolicy,
    /// Segment parameter increment per tick.
    pub step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            keyframes: KeyframeSequence::demo(),
            spline: SplineMode::default(),
            orientation: OrientationMode::default(),
            interpolator: OrientationInterpolator::default(),
            quaternion_policy: QuaternionPolicy::default(),
            step: DEFAULT_STEP,
        }
    }
}

impl AnimationConfig {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading animation config from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_keyframes(mut self, keyframes: KeyframeSequence) -> Self {
        self.keyframes = keyframes;
        self
    }

    #[must_use]
    pub fn with_spline(mut self, spline: SplineMode) -> Self {
        self.spline = spline;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: OrientationMode) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_interpolator(mut self, interpolator: OrientationInterpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    #[must_use]
    pub fn with_quaternion_policy(mut self, policy: QuaternionPolicy) -> Self {
        self.quaternion_policy = policy;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }
}
