use approx::assert_relative_eq;
use obstacle2d::math::{Point, Real, Vector};
use obstacle2d::query::epa::EPA;
use obstacle2d::query::gjk::{self, GJKResult, Simplex};
use obstacle2d::query::{self, IntersectOptions};
use oorandom::Rand32;

use crate::common::{inradius, regular_polygon, square};

/// A `2 * hx` by `2 * hz` rectangle centered at `(x, 0, z)` and rotated by `angle` around the
/// up axis.
fn rectangle(x: Real, z: Real, hx: Real, hz: Real, angle: Real) -> Vec<Point<Real>> {
    let (sin, cos) = angle.sin_cos();
    [(-hx, -hz), (hx, -hz), (hx, hz), (-hx, hz)]
        .iter()
        .map(|(px, pz)| Point::new(x + px * cos - pz * sin, 0.0, z + px * sin + pz * cos))
        .collect()
}

fn penetration_with_reused_epa(
    epa: &mut EPA,
    a: &[Point<Real>],
    b: &[Point<Real>],
) -> query::Penetration {
    let options = IntersectOptions::default();
    let mut simplex = Simplex::new();

    let res = gjk::intersection(a, b, &(b[0] - a[0]), &mut simplex, &options);
    assert_eq!(res, Ok(GJKResult::Intersection));

    epa.penetration(a, b, &simplex, &options)
        .expect("Penetration not found.")
}

#[test]
fn large_size_ratio_rectangles() {
    let a = rectangle(0.0, 0.0, 10.0, 10.0, 0.0);
    let mut b = rectangle(5.0, 0.0, 300.0, 1.5, 1.5);

    for _ in 0..1000 {
        match query::intersect(&a, &b).unwrap() {
            Some(pen) => {
                assert!(pen.depth >= 0.0);
                assert_relative_eq!(pen.vector.norm(), pen.depth, epsilon = 1.0e-3);
                b = crate::common::translated(&b, 0.01, 0.003);
            }
            None => b = crate::common::translated(&b, -0.5, 0.0),
        }
    }
}

#[test]
fn epa_buffer_can_be_reused() {
    let mut epa = EPA::new();

    let a = regular_polygon(0.0, 0.0, 1.0, 7, 0.3);
    let b = regular_polygon(1.2, 0.4, 0.8, 5, 1.1);
    let first = penetration_with_reused_epa(&mut epa, &a, &b);

    let c = square(0.0, 0.0, 0.5);
    let d = square(0.5, 0.0, 0.5);
    let squares = penetration_with_reused_epa(&mut epa, &c, &d);
    assert_relative_eq!(squares.vector, Vector::new(0.5, 0.0, 0.0), epsilon = 1.0e-4);

    let again = penetration_with_reused_epa(&mut epa, &a, &b);
    assert_eq!(first, again);
}

#[test]
fn tighter_tolerance_is_never_shallower() {
    let a = regular_polygon(0.0, 0.0, 2.0, 24, 0.0);
    let b = regular_polygon(2.5, 1.0, 1.5, 16, 0.2);

    let coarse = IntersectOptions {
        epa_tolerance: 0.1,
        ..IntersectOptions::default()
    };
    let fine = IntersectOptions {
        epa_tolerance: 1.0e-5,
        ..IntersectOptions::default()
    };

    let coarse = query::intersect_with_options(&a, &b, &coarse)
        .unwrap()
        .expect("Penetration not found.");
    let fine = query::intersect_with_options(&a, &b, &fine)
        .unwrap()
        .expect("Penetration not found.");

    // Both depths overestimate the exact one, by less than their tolerance.
    assert!(fine.depth <= coarse.depth + 1.0e-4);
    assert!(coarse.depth - fine.depth < 0.1);
}

#[test]
fn high_vertex_count_nearly_concentric_polygons() {
    let a = regular_polygon(0.0, 0.0, 1.0, 256, 0.0);
    let b = regular_polygon(0.01, 0.0, 2.0, 256, 0.01);

    assert_eq!(query::intersection_test(&a, &b), Ok(true));

    let pen = query::intersect(&a, &b)
        .unwrap()
        .expect("Penetration not found.");

    // The polygons lie between their inscribed and circumscribed circles.
    let lower = inradius(1.0, 256) + inradius(2.0, 256) - 0.01;
    assert!(pen.depth >= lower - 1.0e-3, "{} < {}", pen.depth, lower);
    assert!(pen.depth <= 3.0 - 0.01 + 1.0e-3, "{}", pen.depth);
}

#[test]
fn dense_polygons_always_converge() {
    let mut rng = Rand32::new(300);

    for _ in 0..30 {
        let n = rng.rand_range(100..300) as usize;
        let m = rng.rand_range(100..300) as usize;
        let offset = rng.rand_float() * 0.5;
        let a = regular_polygon(0.0, 0.0, 1.0 + rng.rand_float(), n, rng.rand_float());
        let b = regular_polygon(offset, 0.0, 1.0 + rng.rand_float(), m, rng.rand_float());

        let pen = query::intersect(&a, &b)
            .unwrap()
            .expect("Penetration not found.");
        assert!(pen.depth > 0.0);
    }
}
