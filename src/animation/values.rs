use crate::animation::spline::BasisFn;

/// A fixed-width bundle of independent scalar channels.
///
/// Positions (`[f32; 3]`) and orientation tuples (`[f32; 4]`) are both
/// interpolated channel by channel with no coupling between components.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_spline(p0: &Self, p1: &Self, p2: &Self, p3: &Self, t: f32, basis: BasisFn) -> Self;
}

impl<const N: usize> Interpolatable for [f32; N] {
    #[inline]
    fn interpolate_spline(p0: &Self, p1: &Self, p2: &Self, p3: &Self, t: f32, basis: BasisFn) -> Self {
        std::array::from_fn(|c| basis(p0[c], p1[c], p2[c], p3[c], t))
    }
}
