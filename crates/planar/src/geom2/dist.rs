//! Point-to-line and point-to-segment distance via orthogonal projection.

use nalgebra::Vector2;

use super::vec::normalize;

/// Distance from `q` to the infinite line through `p` with direction `v`.
///
/// Length of the rejection of `q − p` from `v`. A zero-length `v` has no
/// line; the distance to `p` is returned.
pub fn dist_to_line(q: Vector2<f64>, p: Vector2<f64>, v: Vector2<f64>) -> f64 {
    let w = q - p;
    match normalize(v) {
        Some(u) => (w - u * w.dot(&u)).norm(),
        None => w.norm(),
    }
}

/// Distance from `p` to the closed segment `a`–`b`.
///
/// The projection parameter is measured in length units along `a→b`: below 0
/// the nearest point is `a`, past `|b − a|` it is `b`, otherwise the foot of
/// the perpendicular. A zero-length segment reduces to `|p − a|`.
pub fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let Some(u) = normalize(ab) else {
        return (p - a).norm();
    };
    let t = (p - a).dot(&u);
    if t < 0.0 {
        (p - a).norm()
    } else if t > ab.norm() {
        (p - b).norm()
    } else {
        dist_to_line(p, a, ab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn line_distance_ignores_direction_scale() {
        let q = vector![3.0, 4.0];
        let p = vector![0.0, 0.0];
        assert!((dist_to_line(q, p, vector![1.0, 0.0]) - 4.0).abs() < 1e-12);
        assert!((dist_to_line(q, p, vector![-7.0, 0.0]) - 4.0).abs() < 1e-12);
        assert!((dist_to_line(q, p, vector![0.0, 0.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_three_regions() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        assert!((dist_to_segment(vector![-3.0, 4.0], a, b) - 5.0).abs() < 1e-12);
        assert!((dist_to_segment(vector![2.0, -1.5], a, b) - 1.5).abs() < 1e-12);
        assert!((dist_to_segment(vector![7.0, 4.0], a, b) - 5.0).abs() < 1e-12);
    }
}
