//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK works on the **Minkowski difference** (also called Configuration Space Obstacle or CSO)
//! `A - B` of two convex shapes: the shapes overlap if and only if this difference contains the
//! origin. Instead of building the difference explicitly, GJK samples support points of the CSO
//! and maintains a [`Simplex`] (point, segment or triangle) that either ends up enclosing the
//! origin, or gets separated from it by a support plane.
//!
//! The simplex that proves the intersection is the starting point of the EPA penetration
//! computation, see [`crate::query::epa`].

use num::Zero;

use crate::math::{Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex, SimplexStep};
use crate::query::{Algorithm, IntersectError, IntersectOptions};
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The shapes are intersecting: the origin lies inside of the Minkowski difference, or on
    /// its boundary when the shapes are touching.
    ///
    /// The simplex passed to [`intersection`] then encloses the origin and can seed EPA.
    Intersection,
    /// The shapes are disjoint, or touching with the origin found on the boundary of a
    /// support plane.
    ///
    /// The vector is a separating axis: no point of the Minkowski difference has a positive
    /// projection on it.
    NoIntersection(Vector<Real>),
}

/// Tests whether the Minkowski difference `g1 - g2` contains the origin.
///
/// `init_dir` is the first search direction. Any direction works; pointing from `g1` toward
/// `g2` is a good guess. A zero `init_dir` is replaced by the `x` axis.
///
/// The `simplex` is reset before the search starts. On [`GJKResult::Intersection`] it holds
/// the final simplex enclosing the origin.
///
/// # Errors
///
/// - [`IntersectError::NonConvergent`] if no answer is found after
///   `options.max_gjk_iterations` support points.
/// - [`IntersectError::NonPlanarPoint`], [`IntersectError::DegenerateSimplex`] or
///   [`IntersectError::SimplexOverflow`] if the shapes are not planar convex polygons.
///
/// # Panics
///
/// Panics if a support map has no point, e.g. an empty `[Point<Real>]` slice. The `query` entry
/// points reject such shapes with [`IntersectError::EmptyShape`] before calling this.
pub fn intersection<G1, G2>(
    g1: &G1,
    g2: &G2,
    init_dir: &Vector<Real>,
    simplex: &mut Simplex,
    options: &IntersectOptions,
) -> Result<GJKResult, IntersectError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    simplex.reset();

    let mut dir = if init_dir.is_zero() {
        log::debug!("GJK started with a zero direction, searching along the x axis instead.");
        Vector::x()
    } else {
        *init_dir
    };

    for niter in 0..options.max_gjk_iterations {
        let support = CSOPoint::from_shapes(g1, g2, &dir);

        // The support plane orthogonal to `dir` separates the CSO from the origin.
        if dir.dot(&support.point.coords) <= 0.0 {
            log::trace!("GJK found a separating axis after {} iterations.", niter + 1);
            return Ok(GJKResult::NoIntersection(dir));
        }

        simplex.add_point(support)?;

        match simplex.update(&dir)? {
            SimplexStep::ContainsOrigin => {
                log::trace!(
                    "GJK enclosed the origin with {} points after {} iterations.",
                    simplex.len(),
                    niter + 1
                );
                return Ok(GJKResult::Intersection);
            }
            SimplexStep::Reduced(new_dir) => dir = new_dir,
        }
    }

    log::debug!(
        "GJK did not converge after {} iterations.",
        options.max_gjk_iterations
    );
    Err(IntersectError::NonConvergent {
        algorithm: Algorithm::Gjk,
        iterations: options.max_gjk_iterations,
    })
}
