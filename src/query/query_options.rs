use crate::math::Real;

/// The default convergence tolerance of the Expanding Polytope Algorithm.
pub const DEFAULT_EPA_TOLERANCE: Real = 1.0e-4;

/// The default iteration slack of both GJK and EPA.
///
/// The `query` entry points add it to the vertex count of the two shapes, see
/// [`IntersectOptions::for_vertex_count`].
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Tuning parameters of the intersection queries.
///
/// Every GJK or EPA iteration discovers at most one new vertex of the Minkowski difference of
/// the two shapes, and that difference has at most as many vertices as both shapes combined.
/// The entry points of [`crate::query`] thus raise both iteration caps by the total vertex
/// count of their inputs before running the algorithms. Reaching a cap then means that no
/// progress could be made, which is reported as [`IntersectError::NonConvergent`].
///
/// The [`gjk`](crate::query::gjk) and [`epa`](crate::query::epa) drivers use the caps as given.
///
/// [`IntersectError::NonConvergent`]: crate::query::IntersectError::NonConvergent
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use obstacle2d::query::IntersectOptions;
///
/// let options = IntersectOptions {
///     epa_tolerance: 1.0e-3,
///     ..IntersectOptions::default()
/// };
/// assert_eq!(options.max_epa_iterations, 100);
/// assert_eq!(options.for_vertex_count(512).max_epa_iterations, 612);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectOptions {
    /// EPA stops once the support point found along the closest edge normal
    /// is less than this distance away from that edge.
    pub epa_tolerance: Real,
    /// Maximum number of support points GJK may query.
    pub max_gjk_iterations: usize,
    /// Maximum number of expansions EPA may perform.
    pub max_epa_iterations: usize,
}

impl IntersectOptions {
    /// These options with both iteration caps raised by `num_vertices`, the total number of
    /// vertices of the two queried shapes.
    pub fn for_vertex_count(&self, num_vertices: usize) -> Self {
        IntersectOptions {
            max_gjk_iterations: self.max_gjk_iterations.saturating_add(num_vertices),
            max_epa_iterations: self.max_epa_iterations.saturating_add(num_vertices),
            ..*self
        }
    }
}

impl Default for IntersectOptions {
    fn default() -> Self {
        IntersectOptions {
            epa_tolerance: DEFAULT_EPA_TOLERANCE,
            max_gjk_iterations: DEFAULT_MAX_ITERATIONS,
            max_epa_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
