extern crate nalgebra as na;

use na::Vector3;
use obstacle2d::math::Point;
use obstacle2d::query;
use obstacle2d::shape::ConvexPolygon;

fn main() {
    let obstacle = ConvexPolygon::try_new(vec![
        Point::new(-1.0, 0.0, -1.0),
        Point::new(1.0, 0.0, -1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(-1.0, 0.0, 1.0),
    ])
    .expect("Invalid obstacle.");
    let agent = obstacle.translated(&Vector3::new(1.5, 0.0, 0.25));

    let penetration = query::intersect(obstacle.points(), agent.points())
        .expect("Invalid shapes.")
        .expect("The shapes should overlap.");
    println!(
        "Penetration depth: {}, vector: {:?}",
        penetration.depth, penetration.vector
    );

    let resolved = agent.translated(&(penetration.vector * 1.01));
    assert!(!query::intersection_test(obstacle.points(), resolved.points()).unwrap());
}
