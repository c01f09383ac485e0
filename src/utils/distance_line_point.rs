use crate::math::{Point, Real, UP_AXIS};
use crate::query::IntersectError;
use na::ComplexField;

/// Computes the distance between `point` and the infinite line passing through `line.0` and `line.1`.
///
/// The computation happens on the `xz` plane: every input must have a zero up coordinate,
/// otherwise [`IntersectError::NonPlanarPoint`] is returned. The distance is measured to the
/// line, not to the segment. If both line points coincide, the distance to that point is
/// returned instead.
pub fn distance_line_point(
    line: (&Point<Real>, &Point<Real>),
    point: &Point<Real>,
) -> Result<Real, IntersectError> {
    for pt in [line.0, line.1, point] {
        check_planar(pt)?;
    }

    let (a, b) = line;
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    let len = ComplexField::sqrt(dx * dx + dz * dz);

    if len == 0.0 {
        return Ok((point - a).norm());
    }

    let num = dz * point.x - dx * point.z + b.x * a.z - b.z * a.x;
    Ok(ComplexField::abs(num) / len)
}

/// Computes the distance between the origin and the infinite line passing through `a` and `b`.
///
/// See [`distance_line_point`].
#[inline]
pub fn distance_line_origin(a: &Point<Real>, b: &Point<Real>) -> Result<Real, IntersectError> {
    distance_line_point((a, b), &Point::origin())
}

/// Returns an error if `pt` does not lie on the `y = 0` plane.
#[inline]
pub fn check_planar(pt: &Point<Real>) -> Result<(), IntersectError> {
    let y = pt[UP_AXIS];

    if y != 0.0 {
        Err(IntersectError::NonPlanarPoint { y })
    } else {
        Ok(())
    }
}
