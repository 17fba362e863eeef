//! Pairwise intersection of convex polygons and circles.
//!
//! Semantics
//! - All shapes are closed: touching boundaries intersect.
//! - `convex_polys_intersect` (SAT) is the authoritative polygon/polygon test.
//!   `convex_polys_intersect_by_edges` is the edge-crossing formulation with a
//!   containment fallback; it agrees with SAT on well-formed convex input and
//!   is kept to cross-check it.

use nalgebra::Vector2;

use super::contain::point_in_convex_poly;
use super::dist::dist_to_segment;
use super::orient::segments_intersect;
use super::types::Geometry;
use super::vec::rot90;

#[inline]
fn edges(poly: &[Vector2<f64>]) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
    let n = poly.len();
    (0..n).map(move |k| (poly[k], poly[(k + 1) % n]))
}

/// Interval `[min, max]` of `poly` projected on `axis` (unnormalized).
fn project(poly: &[Vector2<f64>], axis: Vector2<f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in poly {
        let s = p.dot(&axis);
        lo = lo.min(s);
        hi = hi.max(s);
    }
    (lo, hi)
}

/// Some edge normal of `a` separates `a` from `b`.
fn separated_by_normals_of(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    for (p, q) in edges(a) {
        let e = q - p;
        if e.x == 0.0 && e.y == 0.0 {
            continue;
        }
        let axis = rot90(e);
        let (lo_a, hi_a) = project(a, axis);
        let (lo_b, hi_b) = project(b, axis);
        if hi_a < lo_b || hi_b < lo_a {
            return true;
        }
    }
    false
}

/// Separating Axis Theorem test for two closed convex polygons.
///
/// Both polygons are projected onto every edge normal of both; disjoint
/// projections on any axis separate them. Projections meeting at a single
/// value do not separate, so edge or vertex contact reports `true`.
/// Zero-length edges contribute no axis; empty input returns `false`.
pub fn convex_polys_intersect(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    !separated_by_normals_of(a, b) && !separated_by_normals_of(b, a)
}

/// Edge-crossing formulation: any pair of edges intersecting, else one polygon
/// wholly inside the other (every vertex passes `point_in_convex_poly`).
///
/// O(n·m) with early exit on the first crossing edge pair.
pub fn convex_polys_intersect_by_edges(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    for (p, q) in edges(a) {
        for (r, s) in edges(b) {
            if segments_intersect(p, q, r, s) {
                return true;
            }
        }
    }
    let a_in_b = a.iter().filter(|&&p| point_in_convex_poly(p, b)).count();
    if !a.is_empty() && a_in_b == a.len() {
        return true;
    }
    let b_in_a = b.iter().filter(|&&p| point_in_convex_poly(p, a)).count();
    !b.is_empty() && b_in_a == b.len()
}

/// Closed disc vs closed convex polygon: center inside, or some edge within
/// `radius` of the center.
pub fn convex_poly_circle_intersect(
    center: Vector2<f64>,
    radius: f64,
    poly: &[Vector2<f64>],
) -> bool {
    if point_in_convex_poly(center, poly) {
        return true;
    }
    edges(poly).any(|(p, q)| dist_to_segment(center, p, q) <= radius)
}

/// Closed discs intersect iff `|c1 − c2| <= r1 + r2`.
#[inline]
pub fn circles_intersect(c1: Vector2<f64>, r1: f64, c2: Vector2<f64>, r2: f64) -> bool {
    (c1 - c2).norm() <= r1 + r2
}

/// Dispatch on the geometry pair.
pub fn geometries_intersect(a: &Geometry, b: &Geometry) -> bool {
    match (a, b) {
        (Geometry::Polygon(p), Geometry::Polygon(q)) => convex_polys_intersect(p, q),
        (Geometry::Polygon(p), Geometry::Circle(c)) | (Geometry::Circle(c), Geometry::Polygon(p)) => {
            convex_poly_circle_intersect(c.center, c.radius, p)
        }
        (Geometry::Circle(c), Geometry::Circle(d)) => {
            circles_intersect(c.center, c.radius, d.center, d.radius)
        }
    }
}
