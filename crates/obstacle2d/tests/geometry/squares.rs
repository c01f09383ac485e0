use approx::assert_relative_eq;
use obstacle2d::math::Vector;
use obstacle2d::query;

use crate::common::square;

#[test]
fn half_overlapping_unit_squares() {
    let a = square(0.0, 0.0, 0.5);
    let b = square(0.5, 0.0, 0.5);

    let pen = query::intersect(&a, &b)
        .unwrap()
        .expect("Penetration not found.");

    assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(pen.vector, Vector::new(0.5, 0.0, 0.0), epsilon = 1.0e-4);
}

#[test]
fn penetration_follows_the_shallowest_axis() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(0.2, 1.8, 1.0);

    let pen = query::intersect(&a, &b)
        .unwrap()
        .expect("Penetration not found.");

    assert_relative_eq!(pen.depth, 0.2, epsilon = 1.0e-4);
    assert_relative_eq!(pen.vector, Vector::new(0.0, 0.0, 0.2), epsilon = 1.0e-4);
}

#[test]
fn distant_unit_squares() {
    let a = square(0.0, 0.0, 0.5);
    let b = square(2.0, 0.0, 0.5);

    assert_eq!(query::intersect(&a, &b), Ok(None));
    assert_eq!(query::intersect(&b, &a), Ok(None));
}

#[test]
fn edge_touching_unit_squares() {
    let a = square(0.0, 0.0, 0.5);
    let b = square(1.0, 0.0, 0.5);

    // The first support plane already passes through the origin.
    assert_eq!(query::intersect(&a, &b), Ok(None));
    assert_eq!(query::intersection_test(&a, &b), Ok(false));
}

#[test]
fn separating_the_squares_removes_the_overlap() {
    let a = square(0.0, 0.0, 0.5);
    let b = square(0.3, 0.1, 0.5);

    let pen = query::intersect(&a, &b)
        .unwrap()
        .expect("Penetration not found.");

    let moved = crate::common::translated(&b, pen.vector.x * 1.01, pen.vector.z * 1.01);
    assert_eq!(query::intersect(&a, &moved), Ok(None));
}
