//! Various unsorted geometrical operators.

pub use self::distance_line_point::{check_planar, distance_line_origin, distance_line_point};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod distance_line_point;
mod point_cloud_support_point;
