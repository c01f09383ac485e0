//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};
use crate::utils;
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// GJK and EPA only ever look at a shape through this trait.
pub trait SupportMap {
    // Evaluates the support function of this shape.
    //
    // A support function is a function associating a vector to the shape point which maximizes
    // their dot product.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.support_point(dir.as_ref())
    }
}

/// A raw vertex slice is a convex polygon whose convexity and
/// non-emptiness are left to the caller.
impl SupportMap for [Point<Real>] {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, self)
    }
}
