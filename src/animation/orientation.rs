//! Orientation interpretation and resolution.
//!
//! Keyframes store orientation as an uninterpreted 4-tuple. This module
//! decides what the tuple means ([`OrientationMode`]), how it is blended
//! between keyframes ([`OrientationInterpolator`]), and how a blended tuple
//! becomes a rotation a renderer can apply ([`ResolvedOrientation`]).
//!
//! # Quaternion caveat
//!
//! The default [`OrientationInterpolator::ComponentWise`] strategy blends the
//! four quaternion components independently and never renormalizes, so the
//! result is in general not a unit quaternion. Resolution then feeds `w`
//! straight into `acos`/`sqrt`; a `w` outside `[-1, 1]` yields NaN, which is
//! propagated unless [`QuaternionPolicy::Clamp`] is selected.

use glam::{EulerRot, Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Axis length below which the quaternion axis is treated as ill-defined.
pub const AXIS_EPSILON: f32 = 0.001;

/// How the 4-component orientation of a keyframe is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationMode {
    /// Degrees about X, then Y, then Z (intrinsic). Component 3 is unused.
    #[default]
    FixedAngles,
    /// Quaternion components `(x, y, z, w)`.
    Quaternion,
}

/// Strategy used to blend orientation tuples between keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationInterpolator {
    /// Same spline basis as position, applied per channel, no renormalization.
    #[default]
    ComponentWise,
    /// Spherical interpolation between the window's inner keyframes (p1, p2).
    Slerp,
}

/// Handling of a quaternion `w` component outside `[-1, 1]` during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuaternionPolicy {
    /// Feed `w` to `acos`/`sqrt` as-is; out-of-range input produces NaN.
    #[default]
    Propagate,
    /// Clamp `w` into `[-1, 1]` first.
    Clamp,
}

/// A single rotation of `angle_degrees` about `axis`.
///
/// `axis` is not guaranteed to be unit length (see the degenerate case in
/// [`resolve`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    pub angle_degrees: f32,
    pub axis: Vec3,
}

impl AxisRotation {
    #[must_use]
    pub const fn new(angle_degrees: f32, axis: Vec3) -> Self {
        Self {
            angle_degrees,
            axis,
        }
    }

    /// Unit-length rotation quaternion. A zero-length or non-finite axis
    /// falls back to X; a NaN angle still yields a NaN quaternion.
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        let axis = self.axis.try_normalize().unwrap_or(Vec3::X);
        Quat::from_axis_angle(axis, self.angle_degrees.to_radians())
    }
}

/// Rotation descriptor handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedOrientation {
    /// Three rotations about X, Y, Z, applied in that order.
    FixedAngles([AxisRotation; 3]),
    /// One rotation about an axis.
    AxisAngle(AxisRotation),
}

impl ResolvedOrientation {
    /// Composes the descriptor into a single quaternion.
    ///
    /// Fixed angles compose as `Rx * Ry * Rz`, matching successive
    /// post-multiplied rotations.
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        match self {
            ResolvedOrientation::FixedAngles(rotations) => rotations
                .iter()
                .fold(Quat::IDENTITY, |acc, r| acc * r.to_quat()),
            ResolvedOrientation::AxisAngle(rotation) => rotation.to_quat(),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        let finite = |r: &AxisRotation| r.angle_degrees.is_finite() && r.axis.is_finite();
        match self {
            ResolvedOrientation::FixedAngles(rotations) => rotations.iter().all(finite),
            ResolvedOrientation::AxisAngle(rotation) => finite(rotation),
        }
    }
}

/// Turns an interpolated orientation tuple into a rotation descriptor.
#[must_use]
pub fn resolve(
    orientation: [f32; 4],
    mode: OrientationMode,
    policy: QuaternionPolicy,
) -> ResolvedOrientation {
    match mode {
        OrientationMode::FixedAngles => {
            let [x, y, z, _] = orientation;
            ResolvedOrientation::FixedAngles([
                AxisRotation::new(x, Vec3::X),
                AxisRotation::new(y, Vec3::Y),
                AxisRotation::new(z, Vec3::Z),
            ])
        }
        OrientationMode::Quaternion => {
            ResolvedOrientation::AxisAngle(quaternion_axis_angle(orientation, policy))
        }
    }
}

fn quaternion_axis_angle(orientation: [f32; 4], policy: QuaternionPolicy) -> AxisRotation {
    let [x, y, z, w] = orientation;
    let w = match policy {
        QuaternionPolicy::Propagate => w,
        QuaternionPolicy::Clamp => w.clamp(-1.0, 1.0),
    };

    let angle_degrees = (2.0 * w.acos()).to_degrees();
    let s = (1.0 - w * w).sqrt();

    if s.is_nan() {
        log::trace!("Quaternion w = {w} outside [-1, 1], rotation is NaN");
    }

    // Near-identity: the axis direction does not matter.
    let axis = if s < AXIS_EPSILON {
        Vec3::new(x, y, z)
    } else {
        Vec3::new(x / s, y / s, z / s)
    };

    AxisRotation::new(angle_degrees, axis)
}

/// Spherical interpolation between two orientation tuples.
///
/// Quaternion tuples are normalized first; a zero tuple counts as identity.
/// Fixed-angle tuples go through intrinsic XYZ quaternions and come back as
/// degrees with component 3 set to zero.
#[must_use]
pub fn slerp_orientation(from: [f32; 4], to: [f32; 4], t: f32, mode: OrientationMode) -> [f32; 4] {
    match mode {
        OrientationMode::Quaternion => {
            let a = unit_quat(from);
            let b = unit_quat(to);
            a.slerp(b, t).to_array()
        }
        OrientationMode::FixedAngles => {
            let a = euler_degrees_to_quat(from);
            let b = euler_degrees_to_quat(to);
            let (x, y, z) = a.slerp(b, t).to_euler(EulerRot::XYZ);
            [x.to_degrees(), y.to_degrees(), z.to_degrees(), 0.0]
        }
    }
}

fn unit_quat(components: [f32; 4]) -> Quat {
    Vec4::from_array(components)
        .try_normalize()
        .map_or(Quat::IDENTITY, Quat::from_vec4)
}

fn euler_degrees_to_quat(angles: [f32; 4]) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        angles[0].to_radians(),
        angles[1].to_radians(),
        angles[2].to_radians(),
    )
}
