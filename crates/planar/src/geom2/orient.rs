//! Orientation and segment predicates.
//!
//! All three functions are exact in the sense that they branch only on the
//! floating-point sign of a cross product; no tolerance is involved.

use nalgebra::Vector2;

use super::vec::cross;

/// Sign of (b−a)×(c−a) in {−1, 0, +1}.
///
/// This is the sign of `det [[ax, ay, 1], [bx, by, 1], [cx, cy, 1]]`.
/// +1 is a counterclockwise turn in y-up coordinates (clockwise on a y-down
/// screen). Swapping `b` and `c` negates the result exactly.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> i8 {
    let d = cross(b - a, c - a);
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

/// `p` lies in the axis-aligned bounding box of segment `a`–`b`.
///
/// Only meaningful when `p` is already known to be collinear with `a`, `b`.
#[inline]
fn within_box(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// `p` lies on the closed segment `a`–`b`.
#[inline]
pub(crate) fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    orient(a, b, p) == 0 && within_box(a, b, p)
}

/// Closed segments `a`–`b` and `c`–`d` share at least one point.
///
/// Straddle test, plus explicit collinear cases: an endpoint lying on the
/// other segment counts, so touching endpoints and collinear overlap report
/// `true` while collinear disjoint segments report `false`.
pub fn segments_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == 0 && within_box(a, b, c))
        || (o2 == 0 && within_box(a, b, d))
        || (o3 == 0 && within_box(c, d, a))
        || (o4 == 0 && within_box(c, d, b))
}

/// Segments cross at a single point interior to both.
///
/// Both endpoint pairs must lie strictly on opposite sides of the other
/// segment's line; any collinear touch or shared endpoint returns `false`.
pub fn segments_intersect_proper(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    (o1 - o2).abs() == 2 && (o3 - o4).abs() == 2
}
