use super::*;
use nalgebra::{vector, Vector2};

fn square(x0: f64, y0: f64, s: f64) -> Vec<Vector2<f64>> {
    vec![
        vector![x0, y0],
        vector![x0 + s, y0],
        vector![x0 + s, y0 + s],
        vector![x0, y0 + s],
    ]
}

#[test]
fn overlapping_squares_intersect() {
    let a = square(0.0, 0.0, 2.0);
    let b = square(1.0, 1.0, 2.0);
    assert!(convex_polys_intersect(&a, &b));
    assert!(convex_polys_intersect_by_edges(&a, &b));
}

#[test]
fn distant_squares_do_not_intersect() {
    let a = square(0.0, 0.0, 2.0);
    let b = square(10.0, 10.0, 2.0);
    assert!(!convex_polys_intersect(&a, &b));
    assert!(!convex_polys_intersect_by_edges(&a, &b));
}

#[test]
fn nested_and_touching_squares() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(4.0, 4.0, 1.0);
    // No edges cross; both formulations fall back to containment.
    assert!(convex_polys_intersect(&outer, &inner));
    assert!(convex_polys_intersect(&inner, &outer));
    assert!(convex_polys_intersect_by_edges(&outer, &inner));
    assert!(convex_polys_intersect_by_edges(&inner, &outer));
    // Shared edge x = 2.
    let right = square(2.0, 0.0, 2.0);
    assert!(convex_polys_intersect(&square(0.0, 0.0, 2.0), &right));
    // Corner contact only.
    let diag = square(2.0, 2.0, 1.0);
    assert!(convex_polys_intersect(&square(0.0, 0.0, 2.0), &diag));
}

#[test]
fn sat_separates_triangle_near_square_corner() {
    // Bounding boxes overlap, but the hypotenuse separates them.
    let sq = square(0.0, 0.0, 1.0);
    let tri = vec![vector![0.7, 1.4], vector![1.4, 0.7], vector![1.4, 1.4]];
    assert!(!convex_polys_intersect(&sq, &tri));
    let tri_close = vec![vector![0.5, 1.4], vector![1.4, 0.5], vector![1.4, 1.4]];
    assert!(convex_polys_intersect(&sq, &tri_close));
}

#[test]
fn circles_scenario() {
    let c1 = vector![0.0, 0.0];
    let c2 = vector![8.0, 0.0];
    assert!(!circles_intersect(c1, 5.0, c2, 2.0));
    assert!(circles_intersect(c1, 5.0, c2, 4.0));
    // Tangent counts.
    assert!(circles_intersect(c1, 5.0, c2, 3.0));
}

#[test]
fn point_in_triangle_scenario() {
    let tri = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 2.0]];
    assert!(point_in_poly(vector![1.0, 1.0], &tri));
    assert!(!point_in_poly(vector![5.0, 5.0], &tri));
    assert!(point_in_convex_poly(vector![1.0, 1.0], &tri));
    assert!(!point_in_convex_poly(vector![5.0, 5.0], &tri));
}

#[test]
fn circle_against_polygon() {
    let sq = square(0.0, 0.0, 2.0);
    // center inside
    assert!(convex_poly_circle_intersect(vector![1.0, 1.0], 0.1, &sq));
    // center outside, edge within reach
    assert!(convex_poly_circle_intersect(vector![3.0, 1.0], 1.0, &sq));
    // near the corner but out of reach: distance sqrt(2) > 1.4
    assert!(!convex_poly_circle_intersect(vector![3.0, 3.0], 1.4, &sq));
    assert!(convex_poly_circle_intersect(vector![3.0, 3.0], 1.5, &sq));
}

#[test]
fn geometry_dispatch_is_symmetric() {
    let poly = Geometry::Polygon(square(0.0, 0.0, 2.0));
    let circ = Geometry::Circle(Circle::new(vector![3.0, 1.0], 1.0).unwrap());
    assert!(geometries_intersect(&poly, &circ));
    assert!(geometries_intersect(&circ, &poly));
    let far = Geometry::Circle(Circle::new(vector![30.0, 1.0], 1.0).unwrap());
    assert!(!geometries_intersect(&far, &circ));
}

#[test]
fn hull_area_centroid() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 1.0], // interior
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![1.0, 0.0], // collinear on an edge
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.len(), 4);
    assert!((polygon_area_signed(&hull) - 4.0).abs() < 1e-12);
    let c = centroid(&hull).unwrap();
    assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
    assert!(convex_hull(&pts[..2]).is_none());
}

#[test]
fn hull_of_clockwise_input_is_ccw() {
    let mut cw = square(-1.0, -1.0, 2.0);
    cw.reverse();
    let hull = convex_hull(&cw).unwrap();
    assert_eq!(hull[0], vector![-1.0, -1.0]);
    assert!(polygon_area_signed(&hull) > 0.0);
    let line = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    assert!(convex_hull(&line).is_none());
}

#[test]
fn geometry_area_and_centroid() {
    let mut sq = square(2.0, 0.0, 2.0);
    sq.reverse();
    let poly = Geometry::Polygon(sq);
    assert!((poly.area() - 4.0).abs() < 1e-12);
    assert!((poly.centroid().unwrap() - vector![3.0, 1.0]).norm() < 1e-12);

    let disc = Geometry::Circle(Circle::new(vector![-1.0, 5.0], 2.0).unwrap());
    assert!((disc.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
    assert_eq!(disc.centroid(), Some(vector![-1.0, 5.0]));

    let flat = Geometry::Polygon(vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]]);
    assert_eq!(flat.area(), 0.0);
    assert!(flat.centroid().is_none());
}

#[test]
fn validation_reports_preconditions() {
    assert_eq!(
        validate_polygon(&[vector![0.0, 0.0], vector![1.0, 0.0]]),
        Err(GeomError::TooFewVertices(2))
    );
    assert_eq!(
        validate_polygon(&[vector![0.0, 0.0], vector![f64::NAN, 0.0], vector![1.0, 1.0]]),
        Err(GeomError::NonFinite)
    );
    assert!(validate_polygon(&square(0.0, 0.0, 1.0)).is_ok());
    assert!(matches!(
        Circle::new(vector![0.0, 0.0], -1.0),
        Err(GeomError::BadRadius(_))
    ));
}
