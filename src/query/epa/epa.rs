//! Penetration depth computation using the Expanding Polytope Algorithm.
//!
//! EPA starts from the simplex with which GJK proved that the Minkowski difference (CSO) of two
//! shapes contains the origin. That simplex becomes a polygon (the polytope) enclosing the
//! origin. At each iteration:
//!
//! 1. The polytope edge closest to the origin is found.
//! 2. A support point of the CSO is queried along the outward normal of that edge.
//! 3. If the support point is not significantly farther than the edge, the edge lies on the CSO
//!    boundary and its distance to the origin is the penetration depth.
//! 4. Otherwise the support point is inserted between the edge endpoints and the search resumes.

use alloc::vec::Vec;

use na::Unit;

use crate::math::{up, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::query::{Algorithm, IntersectError, IntersectOptions, Penetration};
use crate::shape::SupportMap;
use crate::utils;

#[derive(Copy, Clone, Debug)]
struct ClosestEdge {
    /// Index of the edge start point. The edge ends on the next point of the polytope cycle.
    start: usize,
    edge: Vector<Real>,
    dist: Real,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum EpaStep {
    Converged(Penetration),
    Expanded { edge_dist: Real, support_dist: Real },
}

/// The Expanding Polytope Algorithm in the `y = 0` plane.
///
/// The polytope is a cycle of CSO points stored in a `Vec`: the edge starting at index `i`
/// ends at index `(i + 1) % len`. New points are always inserted right after the start of the
/// edge they split, so the cycle stays simple.
///
/// The `EPA` structure can be reused across multiple queries to avoid allocations.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use obstacle2d::math::{Point, Vector};
/// use obstacle2d::query::epa::EPA;
/// use obstacle2d::query::gjk::{self, GJKResult, Simplex};
/// use obstacle2d::query::IntersectOptions;
///
/// let a = [
///     Point::new(-1.0, 0.0, -1.0),
///     Point::new(1.0, 0.0, -1.0),
///     Point::new(0.0, 0.0, 1.0),
/// ];
/// let b = [
///     Point::new(0.0, 0.0, 0.5),
///     Point::new(2.0, 0.0, 0.5),
///     Point::new(1.0, 0.0, 2.5),
/// ];
/// let options = IntersectOptions::default();
/// let mut simplex = Simplex::new();
///
/// let res = gjk::intersection(&a[..], &b[..], &(b[0] - a[0]), &mut simplex, &options);
/// assert_eq!(res, Ok(GJKResult::Intersection));
///
/// let mut epa = EPA::new();
/// let penetration = epa.penetration(&a[..], &b[..], &simplex, &options).unwrap();
/// assert!(penetration.depth > 0.0);
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct EPA {
    polytope: Vec<CSOPoint>,
}

impl EPA {
    /// Creates a new instance of the Expanding Polytope Algorithm.
    pub fn new() -> Self {
        EPA::default()
    }

    fn reset(&mut self) {
        self.polytope.clear();
    }

    /// The polytope reached by the last call to [`EPA::penetration`].
    pub fn polytope(&self) -> &[CSOPoint] {
        &self.polytope
    }

    /// Computes the penetration between two overlapping shapes.
    ///
    /// `simplex` must be the simplex returned by a GJK run that found an intersection between
    /// `g1` and `g2`. The returned penetration vector points from `g1` toward `g2`: translating
    /// `g2` by it separates the shapes.
    ///
    /// # Errors
    ///
    /// - [`IntersectError::DegenerateSimplex`] if `simplex` is empty.
    /// - [`IntersectError::NonPlanarPoint`] if a CSO point leaves the `y = 0` plane.
    /// - [`IntersectError::NonConvergent`] if the expansion did not converge after
    ///   `options.max_epa_iterations` iterations. Each expansion adds one vertex of the CSO, so
    ///   the cap should exceed the vertex count of both shapes, see
    ///   [`IntersectOptions::for_vertex_count`].
    ///
    /// # Panics
    ///
    /// Panics if a support map has no point, e.g. an empty `[Point<Real>]` slice.
    pub fn penetration<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
        options: &IntersectOptions,
    ) -> Result<Penetration, IntersectError>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.reset();

        if simplex.is_empty() {
            return Err(IntersectError::DegenerateSimplex);
        }

        self.polytope.extend_from_slice(simplex.points());

        for niter in 0..options.max_epa_iterations {
            match self.expand(g1, g2, options.epa_tolerance)? {
                EpaStep::Converged(penetration) => {
                    log::trace!(
                        "EPA converged after {} iterations with {} polytope points.",
                        niter + 1,
                        self.polytope.len()
                    );
                    return Ok(penetration);
                }
                EpaStep::Expanded {
                    edge_dist,
                    support_dist,
                } => {
                    log::trace!(
                        "EPA iteration {}: closest edge at {}, support at {}.",
                        niter,
                        edge_dist,
                        support_dist
                    );
                }
            }
        }

        log::debug!(
            "EPA did not converge after {} iterations.",
            options.max_epa_iterations
        );
        Err(IntersectError::NonConvergent {
            algorithm: Algorithm::Epa,
            iterations: options.max_epa_iterations,
        })
    }

    /// Runs one expansion step: finds the closest edge, and either accepts it as the CSO
    /// boundary or splits it with a new support point.
    fn expand<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        tolerance: Real,
    ) -> Result<EpaStep, IntersectError>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let Some(closest) = self.closest_edge()? else {
            // Every point of the polytope coincides. GJK only produces this when the single
            // point is the origin itself: the shapes are touching.
            log::debug!("EPA started from a single point: touching contact.");
            let pt = self.polytope[0].point.coords;
            return Ok(EpaStep::Converged(Penetration {
                depth: pt.norm(),
                vector: pt,
            }));
        };

        let Some(normal) = Unit::try_new(self.outward_direction(&closest), 0.0) else {
            return Err(IntersectError::DegenerateSimplex);
        };

        let support = CSOPoint::from_shapes_toward(g1, g2, &normal);
        let support_dist = normal.dot(&support.point.coords);

        let start = self.polytope[closest.start].point;
        let end = self.polytope[(closest.start + 1) % self.polytope.len()].point;
        // A support point equal to an edge endpoint cannot split that edge: rounding errors
        // exceed the tolerance at this scale.
        let stalled = support.point == start || support.point == end;

        if stalled {
            log::debug!("EPA support point already lies on the closest edge.");
        }

        if support_dist - closest.dist < tolerance || stalled {
            let depth = if support_dist < 0.0 { 0.0 } else { support_dist };
            return Ok(EpaStep::Converged(Penetration::new(&normal, depth)));
        }

        self.polytope.insert(closest.start + 1, support);

        Ok(EpaStep::Expanded {
            edge_dist: closest.dist,
            support_dist,
        })
    }

    /// Finds the polytope edge closest to the origin, skipping zero-length edges.
    fn closest_edge(&self) -> Result<Option<ClosestEdge>, IntersectError> {
        let len = self.polytope.len();
        let mut closest = None;
        let mut min_dist = Real::MAX;

        for i in 0..len {
            let a = self.polytope[i];
            let b = self.polytope[(i + 1) % len];
            let edge = b - a;

            if edge == Vector::zeros() {
                continue;
            }

            let dist = utils::distance_line_origin(&a.point, &b.point)?;

            if dist < min_dist {
                min_dist = dist;
                closest = Some(ClosestEdge {
                    start: i,
                    edge,
                    dist,
                });
            }
        }

        Ok(closest)
    }

    /// Direction orthogonal to the closest edge, pointing away from the polytope interior.
    fn outward_direction(&self, closest: &ClosestEdge) -> Vector<Real> {
        let eps_tol = DEFAULT_EPSILON * 100.0;
        let start = self.polytope[closest.start].point.coords;

        if closest.dist > eps_tol {
            // The origin is inside of the polytope, so the direction from the origin toward the
            // edge line points outward.
            return (-start).cross(&closest.edge).cross(&closest.edge);
        }

        // The origin lies on the edge line: orient the in-plane edge normal away from the
        // polytope centroid. With only two points both sides are valid.
        log::debug!("EPA closest edge passes through the origin.");
        let normal = up().cross(&closest.edge);
        let centroid = self
            .polytope
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.point.coords)
            / self.polytope.len() as Real;

        if normal.dot(&(centroid - start)) > 0.0 {
            -normal
        } else {
            normal
        }
    }
}
