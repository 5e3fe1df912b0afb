use serde::{Deserialize, Serialize};

/// Scalar spline basis: four control values plus the segment parameter.
pub type BasisFn = fn(f32, f32, f32, f32, f32) -> f32;

/// Cubic basis used for both position and orientation channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineMode {
    /// Interpolating: the curve passes through every keyframe.
    #[default]
    CatmullRom,
    /// Uniform cubic B-spline: approximating and C² continuous.
    BSpline,
}

impl SplineMode {
    /// Resolves the mode to its basis function once, so per-channel
    /// evaluation is a plain call with no branching.
    #[inline]
    #[must_use]
    pub fn basis(self) -> BasisFn {
        match self {
            SplineMode::CatmullRom => catmull_rom,
            SplineMode::BSpline => b_spline,
        }
    }

    #[inline]
    #[must_use]
    pub fn evaluate(self, p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
        (self.basis())(p0, p1, p2, p3, t)
    }
}

/// Catmull-Rom segment between `p1` (t = 0) and `p2` (t = 1).
///
/// Total over all reals; values of `t` outside `[0, 1]` extrapolate.
#[must_use]
pub fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Uniform cubic B-spline segment controlled by `p0..p3`.
///
/// Does not pass through the control values: at t = 0 it sits at
/// `(p0 + 4·p1 + p2) / 6`.
#[must_use]
pub fn b_spline(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    let c3 = (-1.0 / 6.0) * p0 + 0.5 * p1 - 0.5 * p2 + (1.0 / 6.0) * p3;
    let c2 = 0.5 * p0 - p1 + 0.5 * p2;
    let c1 = -0.5 * p0 + 0.5 * p2;
    let c0 = (1.0 / 6.0) * p0 + (2.0 / 3.0) * p1 + (1.0 / 6.0) * p2;

    c3 * t3 + c2 * t2 + c1 * t + c0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_dispatch_matches_free_functions() {
        let (p0, p1, p2, p3, t) = (1.0, -2.0, 4.0, 0.5, 0.3);
        assert_eq!(
            SplineMode::CatmullRom.evaluate(p0, p1, p2, p3, t).to_bits(),
            catmull_rom(p0, p1, p2, p3, t).to_bits()
        );
        assert_eq!(
            SplineMode::BSpline.evaluate(p0, p1, p2, p3, t).to_bits(),
            b_spline(p0, p1, p2, p3, t).to_bits()
        );
    }

    #[test]
    fn constant_controls_stay_constant() {
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert!((catmull_rom(3.0, 3.0, 3.0, 3.0, t) - 3.0).abs() < 1e-5);
            assert!((b_spline(3.0, 3.0, 3.0, 3.0, t) - 3.0).abs() < 1e-5);
        }
    }
}
