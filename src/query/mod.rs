//! Non-persistent intersection queries between planar convex polygons.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersect()`] to compute the penetration between two shapes, if they overlap.
//! * [`query::intersect_with_options()`] to do the same with custom tolerances and iteration caps.
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`query::intersection_test_with_options()`] to do the same with a custom GJK iteration cap.
//!
//! # Building blocks
//! The algorithms behind these functions are exposed by the [`gjk`] and [`epa`] submodules.
//! They work on any pair of [`SupportMap`](crate::shape::SupportMap) shapes and let the caller
//! choose the initial search direction and reuse the simplex and polytope buffers.
//!
//! [`query::intersect()`]: crate::query::intersect
//! [`query::intersect_with_options()`]: crate::query::intersect_with_options
//! [`query::intersection_test()`]: crate::query::intersection_test
//! [`query::intersection_test_with_options()`]: crate::query::intersection_test_with_options

pub use self::error::{Algorithm, IntersectError};
pub use self::intersect::{
    intersect, intersect_with_options, intersection_test, intersection_test_with_options,
};
pub use self::penetration::Penetration;
pub use self::query_options::{IntersectOptions, DEFAULT_EPA_TOLERANCE, DEFAULT_MAX_ITERATIONS};

pub mod epa;
mod error;
pub mod gjk;
mod intersect;
mod penetration;
mod query_options;
