use crate::math::Real;

/// The iterative algorithm that failed to converge.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Algorithm {
    /// The Gilbert-Johnson-Keerthi intersection test.
    Gjk,
    /// The Expanding Polytope Algorithm computing the penetration.
    Epa,
}

/// Errors reported by the intersection queries when their input breaks one
/// of the preconditions of GJK or EPA.
///
/// A pair of shapes that simply does not overlap is *not* an error: the
/// queries return `Ok(None)` (or `Ok(false)`) in that case.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use obstacle2d::math::Point;
/// use obstacle2d::query::{self, IntersectError};
///
/// let triangle = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
/// ];
///
/// assert_eq!(query::intersect(&triangle, &[]), Err(IntersectError::EmptyShape));
///
/// let lifted = [Point::new(0.0, 2.0, 0.0)];
/// assert_eq!(
///     query::intersect(&triangle, &lifted),
///     Err(IntersectError::NonPlanarPoint { y: 2.0 })
/// );
/// # }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum IntersectError {
    /// One of the shapes has no vertex.
    #[error("a shape must contain at least one vertex")]
    EmptyShape,
    /// A vertex, or a point derived from the vertices, lies outside of the `y = 0` plane.
    #[error("point with a non-zero up coordinate ({y}) found; all shapes must lie on the y = 0 plane")]
    NonPlanarPoint {
        /// The offending up coordinate.
        y: Real,
    },
    /// A fourth point was added to the simplex, which cannot happen with planar inputs.
    #[error("the simplex cannot hold more than three points")]
    SimplexOverflow,
    /// The simplex collapsed to a set of points that does not span the expected feature.
    #[error("degenerate simplex: its points are collinear or missing")]
    DegenerateSimplex,
    /// An iterative algorithm reached its iteration cap without converging.
    #[error("{algorithm:?} did not converge after {iterations} iterations")]
    NonConvergent {
        /// The algorithm that stopped.
        algorithm: Algorithm,
        /// The number of iterations performed.
        iterations: usize,
    },
}
