//! The GJK algorithm for intersection detection.

pub use self::cso_point::CSOPoint;
pub use self::gjk::{intersection, GJKResult};
pub use self::simplex::{Simplex, SimplexState, SimplexStep};

mod cso_point;
mod gjk;
mod simplex;
