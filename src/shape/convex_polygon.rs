use alloc::vec::Vec;

use crate::math::{Point, Real, Vector};
use crate::query::IntersectError;
use crate::shape::SupportMap;
use crate::utils;

/// A convex polygon lying on the `y = 0` plane.
///
/// Building a `ConvexPolygon` checks once that the vertex set is non-empty and
/// planar, so that these preconditions of the intersection queries hold for
/// every later query. Convexity is assumed and not checked.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Point<Real>>", into = "Vec<Point<Real>>")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
}

impl ConvexPolygon {
    /// Creates a new convex polygon from its vertices.
    ///
    /// The vertices are assumed to describe a convex polygon. Returns an error
    /// if `points` is empty or if any of its points has a non-zero `y` coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use obstacle2d::math::Point;
    /// use obstacle2d::query::IntersectError;
    /// use obstacle2d::shape::ConvexPolygon;
    ///
    /// let triangle = ConvexPolygon::try_new(vec![
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.0, 0.0, 1.0),
    /// ]);
    /// assert!(triangle.is_ok());
    /// assert_eq!(ConvexPolygon::try_new(vec![]), Err(IntersectError::EmptyShape));
    /// # }
    /// ```
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, IntersectError> {
        validate_vertices(&points)?;
        Ok(ConvexPolygon { points })
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Consumes this polygon and returns its vertices.
    #[inline]
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }

    /// The average of the vertices of this polygon.
    pub fn center(&self) -> Point<Real> {
        let sum = self
            .points
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
        Point::from(sum / self.points.len() as Real)
    }

    /// Translates in-place every vertex of this polygon.
    ///
    /// The `y` component of `shift` is ignored so the polygon stays planar.
    pub fn translate_mut(&mut self, shift: &Vector<Real>) {
        let planar_shift = Vector::new(shift.x, 0.0, shift.z);
        self.points.iter_mut().for_each(|pt| *pt += planar_shift);
    }

    /// Returns a copy of this polygon translated by `shift`.
    ///
    /// The `y` component of `shift` is ignored so the polygon stays planar.
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        let mut result = self.clone();
        result.translate_mut(shift);
        result
    }
}

impl TryFrom<Vec<Point<Real>>> for ConvexPolygon {
    type Error = IntersectError;

    fn try_from(points: Vec<Point<Real>>) -> Result<Self, IntersectError> {
        ConvexPolygon::try_new(points)
    }
}

impl From<ConvexPolygon> for Vec<Point<Real>> {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.points
    }
}

impl SupportMap for ConvexPolygon {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, self.points())
    }
}

/// Checks that `points` is a valid input for the intersection queries: non-empty, and lying on
/// the `y = 0` plane.
pub fn validate_vertices(points: &[Point<Real>]) -> Result<(), IntersectError> {
    if points.is_empty() {
        return Err(IntersectError::EmptyShape);
    }

    points.iter().try_for_each(utils::check_planar)
}
