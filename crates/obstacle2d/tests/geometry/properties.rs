use approx::assert_relative_eq;
use obstacle2d::math::{Point, Real};
use obstacle2d::query;
use oorandom::Rand32;

use crate::common::{inradius, regular_polygon, translated};

struct Polygon {
    x: Real,
    z: Real,
    radius: Real,
    n: usize,
    points: Vec<Point<Real>>,
}

fn random_polygon(rng: &mut Rand32, x: Real, z: Real) -> Polygon {
    let radius = 0.5 + rng.rand_float() * 2.0;
    let n = rng.rand_range(3..12) as usize;
    let phase = rng.rand_float() * std::f32::consts::TAU;

    Polygon {
        x,
        z,
        radius,
        n,
        points: regular_polygon(x, z, radius, n, phase),
    }
}

/// A pair of polygons whose inscribed circles overlap by at least `0.05`.
fn overlapping_pair(rng: &mut Rand32) -> (Polygon, Polygon) {
    let x = rng.rand_float() * 10.0 - 5.0;
    let z = rng.rand_float() * 10.0 - 5.0;
    let a = random_polygon(rng, x, z);
    // The smallest inscribed circle `random_polygon` can produce.
    let reach = inradius(a.radius, a.n) + inradius(0.5, 3) - 0.05;
    let dist = rng.rand_float() * reach;
    let angle = rng.rand_float() * std::f32::consts::TAU;
    let (x, z) = (a.x + dist * angle.cos(), a.z + dist * angle.sin());
    let b = random_polygon(rng, x, z);
    (a, b)
}

fn penetration_depth(a: &[Point<Real>], b: &[Point<Real>]) -> Real {
    query::intersect(a, b)
        .unwrap()
        .expect("Penetration not found.")
        .depth
}

#[test]
fn overlapping_polygons_depth_is_bounded_by_their_circles() {
    let mut rng = Rand32::new(42);

    for _ in 0..200 {
        let (a, b) = overlapping_pair(&mut rng);
        let dist = ((b.x - a.x).powi(2) + (b.z - a.z).powi(2)).sqrt();

        let pen = query::intersect(&a.points, &b.points)
            .unwrap()
            .expect("Penetration not found.");

        let lower = inradius(a.radius, a.n) + inradius(b.radius, b.n) - dist;
        let upper = a.radius + b.radius - dist;
        assert!(pen.depth >= lower - 1.0e-3, "{} < {}", pen.depth, lower);
        assert!(pen.depth <= upper + 1.0e-3, "{} > {}", pen.depth, upper);
        assert_relative_eq!(pen.vector.norm(), pen.depth, epsilon = 1.0e-3);
        assert_eq!(query::intersection_test(&a.points, &b.points), Ok(true));
    }
}

#[test]
fn translation_invariance() {
    let mut rng = Rand32::new(1234);

    for _ in 0..200 {
        let (a, b) = overlapping_pair(&mut rng);
        let dx = rng.rand_float() * 40.0 - 20.0;
        let dz = rng.rand_float() * 40.0 - 20.0;

        let depth = penetration_depth(&a.points, &b.points);
        let moved = penetration_depth(
            &translated(&a.points, dx, dz),
            &translated(&b.points, dx, dz),
        );

        assert_relative_eq!(depth, moved, epsilon = 1.0e-3);
    }
}

#[test]
fn order_symmetry() {
    let mut rng = Rand32::new(7);

    for _ in 0..200 {
        let (a, b) = overlapping_pair(&mut rng);

        let ab = penetration_depth(&a.points, &b.points);
        let ba = penetration_depth(&b.points, &a.points);

        assert_relative_eq!(ab, ba, epsilon = 1.0e-3);
    }
}

#[test]
fn separated_polygons() {
    let mut rng = Rand32::new(2024);

    for _ in 0..200 {
        let a = random_polygon(&mut rng, 0.0, 0.0);
        let b = random_polygon(&mut rng, 0.0, 0.0);
        let dist = a.radius + b.radius + 0.01 + rng.rand_float() * 5.0;
        let angle = rng.rand_float() * std::f32::consts::TAU;
        let b_points = translated(&b.points, dist * angle.cos(), dist * angle.sin());

        assert_eq!(query::intersect(&a.points, &b_points), Ok(None));
        assert_eq!(query::intersect(&b_points, &a.points), Ok(None));
        assert_eq!(query::intersection_test(&a.points, &b_points), Ok(false));
    }
}
