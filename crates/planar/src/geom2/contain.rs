//! Point containment for convex and simple polygons.

use nalgebra::Vector2;

use super::orient::{on_segment, orient};

/// `p` lies in the closed convex polygon `poly` (either winding).
///
/// Every edge orientation must agree with the first non-zero one; a zero
/// (p on an edge line) agrees with anything, so the boundary is inside.
///
/// Returns `false` for fewer than 3 vertices, for polygons whose vertices all
/// share the x or the y coordinate of vertex 0, and when `p` is collinear with
/// every edge (a flat polygon). Non-convex input gives unspecified results.
pub fn point_in_convex_poly(p: Vector2<f64>, poly: &[Vector2<f64>]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let v0 = poly[0];
    if poly.iter().all(|v| v.x == v0.x) || poly.iter().all(|v| v.y == v0.y) {
        return false;
    }
    let mut reference = orient(poly[0], poly[1], p);
    for k in 1..n {
        let s = orient(poly[k], poly[(k + 1) % n], p);
        if s == 0 {
            continue;
        }
        if reference == 0 {
            reference = s;
        } else if s != reference {
            return false;
        }
    }
    reference != 0
}

/// `p` lies in the closed simple polygon `poly` (convex or not).
///
/// Parity of crossings of the ray from `p` toward +x. An edge counts when its
/// endpoints sit on different sides of the ray's height, with a vertex exactly
/// at that height treated as above it. A ray that merely grazes a vertex thus
/// meets both incident edges or neither. Whether a crossing lies right of `p`
/// is read off the orientation of `p` against the edge, so no division occurs.
pub fn point_in_poly(p: Vector2<f64>, poly: &[Vector2<f64>]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for k in 0..n {
        let a = poly[k];
        let b = poly[(k + 1) % n];
        if on_segment(a, b, p) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let o = orient(a, b, p);
            let upward = b.y > a.y;
            if (upward && o > 0) || (!upward && o < 0) {
                inside = !inside;
            }
        }
    }
    inside
}
