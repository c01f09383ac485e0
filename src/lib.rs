/*!
obstacle2d
==========

**obstacle2d** detects overlaps between planar convex polygons and computes
the minimal translation separating them.

Shapes are given as vertex sets in 3D space lying on the `y = 0` plane.
Intersection is decided with the Gilbert-Johnson-Keerthi algorithm (GJK)
and the penetration vector is refined with the Expanding Polytope
Algorithm (EPA).

```
# #[cfg(feature = "f32")] {
use obstacle2d::math::Point;
use obstacle2d::query;

let a = [
    Point::new(-0.5, 0.0, -0.5),
    Point::new(0.5, 0.0, -0.5),
    Point::new(0.5, 0.0, 0.5),
    Point::new(-0.5, 0.0, 0.5),
];
let b: Vec<_> = a.iter().map(|p| Point::new(p.x + 0.5, 0.0, p.z)).collect();

let penetration = query::intersect(&a, &b).unwrap().expect("the squares overlap");
assert!((penetration.depth - 0.5).abs() < 1.0e-3);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![no_std]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub type Real = f64;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub type Real = f32;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Unit, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Index of the "up" coordinate. Every vertex handled by this crate has
    /// this coordinate set to zero.
    pub const UP_AXIS: usize = 1;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The unit vector normal to the plane the shapes live on.
    #[inline]
    pub fn up() -> UnitVector<Real> {
        Vector::y_axis()
    }
}
