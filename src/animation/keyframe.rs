use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::errors::{AnimationError, Result};

/// Minimum number of keyframes needed to form a control window.
pub const MIN_KEYFRAMES: usize = 4;

/// A recorded pose: position plus a 4-component orientation tuple.
///
/// The orientation is stored uninterpreted. Depending on the run's
/// [`OrientationMode`](crate::animation::OrientationMode) it holds either
/// three Euler angles in degrees (fourth component unused) or quaternion
/// components `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Keyframe {
    pub position: [f32; 3],
    pub orientation: [f32; 4],
}

impl Keyframe {
    #[must_use]
    pub const fn new(position: [f32; 3], orientation: [f32; 4]) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// Ordered, cyclic list of keyframes. Indices wrap modulo the length.
///
/// Always holds at least [`MIN_KEYFRAMES`] entries, so any index maps to a
/// valid 4-point window. The sequence is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyframeSequence {
    keyframes: Vec<Keyframe>,
}

impl KeyframeSequence {
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self> {
        if keyframes.len() < MIN_KEYFRAMES {
            return Err(AnimationError::NotEnoughKeyframes {
                count: keyframes.len(),
                required: MIN_KEYFRAMES,
            });
        }

        log::debug!("Keyframe sequence built with {} keyframes", keyframes.len());
        Ok(Self { keyframes })
    }

    /// The four-keyframe sequence the engine plays when nothing else is configured.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            keyframes: vec![
                Keyframe::new([0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0]),
                Keyframe::new([2.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]),
                Keyframe::new([0.0, 2.0, 0.0], [0.0, 1.0, 0.0, 1.0]),
                Keyframe::new([0.0, 0.0, 2.0], [0.0, 0.0, 0.0, 0.0]),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Cyclic access: `index` is reduced modulo the length.
    #[inline]
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &Keyframe {
        &self.keyframes[index % self.keyframes.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keyframes.iter()
    }
}

impl Default for KeyframeSequence {
    fn default() -> Self {
        Self::demo()
    }
}

impl TryFrom<Vec<Keyframe>> for KeyframeSequence {
    type Error = AnimationError;

    fn try_from(keyframes: Vec<Keyframe>) -> Result<Self> {
        Self::new(keyframes)
    }
}

impl<'de> Deserialize<'de> for KeyframeSequence {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keyframes = Vec::<Keyframe>::deserialize(deserializer)?;
        Self::new(keyframes).map_err(serde::de::Error::custom)
    }
}

impl Index<usize> for KeyframeSequence {
    type Output = Keyframe;

    fn index(&self, index: usize) -> &Keyframe {
        &self.keyframes[index]
    }
}

impl<'a> IntoIterator for &'a KeyframeSequence {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.keyframes.iter()
    }
}
