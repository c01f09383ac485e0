use crate::math::{Point, Real};
use crate::query::epa::EPA;
use crate::query::gjk::{self, GJKResult, Simplex};
use crate::query::{IntersectError, IntersectOptions, Penetration};
use crate::shape::validate_vertices;

/// Computes the penetration between two planar convex polygons, if they overlap.
///
/// Both shapes are given by their vertices, all lying on the `y = 0` plane.
///
/// Returns `Ok(None)` if the shapes do not overlap. Otherwise, the returned penetration vector
/// points from `a` toward `b`: translating `b` by it separates the shapes. Touching shapes
/// (sharing boundary points only) are reported either as `Ok(None)` or as a penetration of
/// zero depth, depending on how GJK reaches the contact.
///
/// This uses the default [`IntersectOptions`]; see [`intersect_with_options`].
pub fn intersect(
    a: &[Point<Real>],
    b: &[Point<Real>],
) -> Result<Option<Penetration>, IntersectError> {
    intersect_with_options(a, b, &IntersectOptions::default())
}

/// Computes the penetration between two planar convex polygons using the given options.
///
/// The iteration caps of `options` are raised by the vertex count of `a` and `b`, see
/// [`IntersectOptions::for_vertex_count`].
///
/// # Errors
///
/// - [`IntersectError::EmptyShape`] if a shape has no vertex.
/// - [`IntersectError::NonPlanarPoint`] if a vertex is not on the `y = 0` plane.
/// - [`IntersectError::NonConvergent`] if GJK or EPA stop making progress, which only happens
///   with numerically degenerate inputs.
pub fn intersect_with_options(
    a: &[Point<Real>],
    b: &[Point<Real>],
    options: &IntersectOptions,
) -> Result<Option<Penetration>, IntersectError> {
    let options = options.for_vertex_count(a.len() + b.len());
    let mut simplex = Simplex::new();

    if !overlap(a, b, &mut simplex, &options)? {
        return Ok(None);
    }

    let mut epa = EPA::new();
    epa.penetration(a, b, &simplex, &options).map(Some)
}

/// Tests whether two planar convex polygons overlap, without computing the penetration.
///
/// Returns `true` exactly when [`intersect`] returns a penetration, touching shapes included.
/// Fails on the same inputs as [`intersect`].
pub fn intersection_test(a: &[Point<Real>], b: &[Point<Real>]) -> Result<bool, IntersectError> {
    intersection_test_with_options(a, b, &IntersectOptions::default())
}

/// Tests whether two planar convex polygons overlap using the given options.
///
/// Only `options.max_gjk_iterations` is relevant here. It is raised by the vertex count of `a`
/// and `b` like in [`intersect_with_options`].
pub fn intersection_test_with_options(
    a: &[Point<Real>],
    b: &[Point<Real>],
    options: &IntersectOptions,
) -> Result<bool, IntersectError> {
    let options = options.for_vertex_count(a.len() + b.len());
    overlap(a, b, &mut Simplex::new(), &options)
}

fn overlap(
    a: &[Point<Real>],
    b: &[Point<Real>],
    simplex: &mut Simplex,
    options: &IntersectOptions,
) -> Result<bool, IntersectError> {
    validate_vertices(a)?;
    validate_vertices(b)?;

    let init_dir = b[0] - a[0];

    match gjk::intersection(a, b, &init_dir, simplex, options)? {
        GJKResult::Intersection => Ok(true),
        GJKResult::NoIntersection(_) => Ok(false),
    }
}
