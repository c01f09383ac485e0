use arrayvec::ArrayVec;
use num::Zero;

use crate::math::{Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::query::IntersectError;

/// The shape spanned by the points of a [`Simplex`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimplexState {
    /// A single point.
    Point,
    /// A segment; the newest point is the second one.
    Line,
    /// A triangle; the newest point is the third one.
    Triangle,
}

/// Outcome of a [`Simplex::update`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexStep {
    /// The origin lies inside of the simplex (possibly on its boundary).
    ContainsOrigin,
    /// The simplex was pruned to its feature closest to the origin and the
    /// search must continue along the given direction.
    Reduced(Vector<Real>),
}

/// The GJK working set: up to three points of the Minkowski difference.
///
/// Points are ordered from the oldest to the newest. The simplex grows by
/// appending support points and shrinks from the front whenever a point is
/// proven irrelevant to enclosing the origin.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: ArrayVec<CSOPoint, 3>,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex::default()
    }

    /// Removes every point from this simplex.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Appends `pt` as the newest point of this simplex.
    ///
    /// Fails with [`IntersectError::SimplexOverflow`] if the simplex already holds three points.
    pub fn add_point(&mut self, pt: CSOPoint) -> Result<(), IntersectError> {
        self.points
            .try_push(pt)
            .map_err(|_| IntersectError::SimplexOverflow)
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this simplex contain no point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of this simplex, from the oldest to the newest.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.points
    }

    /// The shape currently spanned by this simplex, or `None` if it is empty.
    pub fn state(&self) -> Option<SimplexState> {
        match self.points.len() {
            1 => Some(SimplexState::Point),
            2 => Some(SimplexState::Line),
            3 => Some(SimplexState::Triangle),
            _ => None,
        }
    }

    /// Checks whether this simplex contains the origin.
    ///
    /// `dir` is the search direction that produced the newest point. If the origin is not
    /// contained, the simplex is reduced to the feature closest to the origin and the next
    /// search direction is returned.
    pub fn update(&mut self, dir: &Vector<Real>) -> Result<SimplexStep, IntersectError> {
        match self.state() {
            Some(SimplexState::Point) => Ok(self.update_point(dir)),
            Some(SimplexState::Line) => Ok(self.update_line()),
            Some(SimplexState::Triangle) => self.update_triangle(),
            None => Err(IntersectError::DegenerateSimplex),
        }
    }

    fn update_point(&self, dir: &Vector<Real>) -> SimplexStep {
        if self.points[0].is_origin() {
            SimplexStep::ContainsOrigin
        } else {
            SimplexStep::Reduced(-dir)
        }
    }

    fn update_line(&mut self) -> SimplexStep {
        let a = self.points[0];
        let b = self.points[1];
        let ba = a - b;
        let bo = -b.point.coords;

        let dir = if ba.dot(&bo) > 0.0 {
            // The origin projects inside of the segment.
            ba.cross(&bo).cross(&ba)
        } else {
            // The older point cannot be closer to the origin than the newest.
            let _ = self.points.remove(0);
            bo
        };

        // A zero direction means the origin lies on the segment.
        if dir.is_zero() {
            SimplexStep::ContainsOrigin
        } else {
            SimplexStep::Reduced(dir)
        }
    }

    fn update_triangle(&mut self) -> Result<SimplexStep, IntersectError> {
        let a = self.points[0];
        let b = self.points[1];
        let c = self.points[2];
        let ca = a - c;
        let cb = b - c;
        let co = -c.point.coords;

        // The origin is in the Voronoï region of the newest vertex.
        if ca.dot(&co) <= 0.0 && cb.dot(&co) <= 0.0 {
            self.points.clear();
            self.points.push(c);
            return Ok(SimplexStep::Reduced(co));
        }

        let normal = ca.cross(&cb);

        if normal.is_zero() {
            return Err(IntersectError::DegenerateSimplex);
        }

        let ca_normal = ca.cross(&normal);
        let cb_normal = normal.cross(&cb);

        let dot_ca = ca_normal.dot(&co);
        if dot_ca >= 0.0 {
            // Keep the edge [a, c].
            let _ = self.points.remove(1);
            return Ok(Self::edge_step(dot_ca, ca_normal));
        }

        let dot_cb = cb_normal.dot(&co);
        if dot_cb >= 0.0 {
            // Keep the edge [b, c].
            let _ = self.points.remove(0);
            return Ok(Self::edge_step(dot_cb, cb_normal));
        }

        // The origin projects inside of the triangle. With planar inputs the triangle normal is
        // orthogonal to the plane, so the origin must lie exactly on the triangle.
        let dot_triangle = normal.dot(&co);

        if dot_triangle != 0.0 {
            let y = [a, b, c]
                .iter()
                .map(|pt| pt.point.y)
                .find(|y| *y != 0.0)
                .unwrap_or(dot_triangle);
            return Err(IntersectError::NonPlanarPoint { y });
        }

        Ok(SimplexStep::ContainsOrigin)
    }

    fn edge_step(dot: Real, edge_normal: Vector<Real>) -> SimplexStep {
        if dot == 0.0 {
            SimplexStep::ContainsOrigin
        } else {
            SimplexStep::Reduced(edge_normal)
        }
    }
}
