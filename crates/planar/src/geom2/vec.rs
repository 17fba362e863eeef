//! Small vector helpers on top of `nalgebra::Vector2`.
//!
//! `nalgebra` already covers add/sub/scale/length; these fill in the few
//! operations the shape builders need under a name.

use nalgebra::{Matrix2, Vector2};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Unit vector in the direction of `v`, or `None` for a zero/non-finite `v`.
#[inline]
pub fn normalize(v: Vector2<f64>) -> Option<Vector2<f64>> {
    let n = v.norm();
    if !n.is_finite() || n <= 0.0 {
        return None;
    }
    Some(v / n)
}

/// `v` rotated by +90° (counterclockwise in y-up coordinates).
#[inline]
pub fn rot90(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// `v` rotated by `theta` radians.
#[inline]
pub fn rotate(v: Vector2<f64>, theta: f64) -> Vector2<f64> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c) * v
}

/// `p` rotated by `theta` radians around `center`.
#[inline]
pub fn rotate_about(p: Vector2<f64>, center: Vector2<f64>, theta: f64) -> Vector2<f64> {
    center + rotate(p - center, theta)
}

/// Scalar cross product `a × b`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn midpoint(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    (a + b) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotations_agree() {
        let v = vector![3.0, 1.0];
        assert!((rotate(v, FRAC_PI_2) - rot90(v)).norm() < 1e-12);
        let p = rotate_about(vector![2.0, 1.0], vector![1.0, 1.0], PI);
        assert!((p - vector![0.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn normalize_and_distance() {
        assert!(normalize(vector![0.0, 0.0]).is_none());
        let u = normalize(vector![0.0, -4.0]).unwrap();
        assert_eq!(u, vector![0.0, -1.0]);
        assert_eq!(distance(vector![1.0, 1.0], vector![4.0, 5.0]), 5.0);
        assert_eq!(midpoint(vector![0.0, 2.0], vector![4.0, 0.0]), vector![2.0, 1.0]);
        assert_eq!(cross(vector![1.0, 0.0], vector![0.0, 1.0]), 1.0);
    }
}
