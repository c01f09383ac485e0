//! Shapes supported by the intersection queries.

pub use self::convex_polygon::{validate_vertices, ConvexPolygon};
pub use self::support_map::SupportMap;

mod convex_polygon;
mod support_map;
