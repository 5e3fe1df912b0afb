use crate::animation::keyframe::{Keyframe, KeyframeSequence};
use crate::animation::orientation::{OrientationInterpolator, OrientationMode, slerp_orientation};
use crate::animation::spline::{BasisFn, SplineMode};
use crate::animation::values::Interpolatable;

/// Indices of the four keyframes controlling one spline segment.
///
/// For a segment starting at keyframe `i` in a sequence of length `n` the
/// window is `(i-1, i, i+1, i+2)`, every index reduced modulo `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlWindow {
    pub indices: [usize; 4],
}

impl ControlWindow {
    #[must_use]
    pub fn around(frame_index: usize, len: usize) -> Self {
        let i = frame_index % len;
        Self {
            indices: [(i + len - 1) % len, i, (i + 1) % len, (i + 2) % len],
        }
    }

    /// The keyframe the segment starts at (p1).
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.indices[1]
    }

    /// The keyframe the segment ends at (p2).
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.indices[2]
    }
}

/// Keyframe sequence bound to the run-wide interpolation settings.
///
/// Spline basis and orientation handling are fixed at construction; every
/// query is a pure function of `(t, frame_index)`.
#[derive(Debug, Clone)]
pub struct KeyframeTrack {
    keyframes: KeyframeSequence,
    spline: SplineMode,
    orientation_mode: OrientationMode,
    orientation_interpolator: OrientationInterpolator,
    basis: BasisFn,
}

impl KeyframeTrack {
    #[must_use]
    pub fn new(
        keyframes: KeyframeSequence,
        spline: SplineMode,
        orientation_mode: OrientationMode,
        orientation_interpolator: OrientationInterpolator,
    ) -> Self {
        Self {
            keyframes,
            spline,
            orientation_mode,
            orientation_interpolator,
            basis: spline.basis(),
        }
    }

    #[must_use]
    pub fn keyframes(&self) -> &KeyframeSequence {
        &self.keyframes
    }

    #[must_use]
    pub fn spline(&self) -> SplineMode {
        self.spline
    }

    #[must_use]
    pub fn orientation_mode(&self) -> OrientationMode {
        self.orientation_mode
    }

    #[must_use]
    pub fn orientation_interpolator(&self) -> OrientationInterpolator {
        self.orientation_interpolator
    }

    #[must_use]
    pub fn window(&self, frame_index: usize) -> ControlWindow {
        ControlWindow::around(frame_index, self.keyframes.len())
    }

    /// Interpolated position for segment `frame_index` at parameter `t`.
    #[must_use]
    pub fn interpolate_position(&self, t: f32, frame_index: usize) -> [f32; 3] {
        self.sample_channels(t, frame_index, |k| &k.position)
    }

    /// Interpolated orientation tuple for segment `frame_index` at parameter `t`.
    ///
    /// With [`OrientationInterpolator::ComponentWise`] a quaternion result is
    /// not renormalized and may drift off unit length.
    #[must_use]
    pub fn interpolate_orientation(&self, t: f32, frame_index: usize) -> [f32; 4] {
        match self.orientation_interpolator {
            OrientationInterpolator::ComponentWise => {
                self.sample_channels(t, frame_index, |k| &k.orientation)
            }
            OrientationInterpolator::Slerp => {
                let window = self.window(frame_index);
                slerp_orientation(
                    self.keyframes.get_wrapped(window.start()).orientation,
                    self.keyframes.get_wrapped(window.end()).orientation,
                    t,
                    self.orientation_mode,
                )
            }
        }
    }

    fn sample_channels<T, F>(&self, t: f32, frame_index: usize, channel: F) -> T
    where
        T: Interpolatable,
        F: Fn(&Keyframe) -> &T,
    {
        let [i0, i1, i2, i3] = self.window(frame_index).indices;
        let keys = &self.keyframes;

        T::interpolate_spline(
            channel(keys.get_wrapped(i0)),
            channel(keys.get_wrapped(i1)),
            channel(keys.get_wrapped(i2)),
            channel(keys.get_wrapped(i3)),
            t,
            self.basis,
        )
    }
}
