//! Polygon builders from anchors.

use nalgebra::Vector2;

use crate::geom2::vec::rot90;

/// Isosceles triangle with base midpoint `base` and apex `apex`.
///
/// The base corners are `base ± rot90(apex − base)`, so the base is twice the
/// height long and both base corners are equidistant from the apex.
/// Returned as `[base − perp, base + perp, apex]`.
pub fn create_isosceles_triangle(base: Vector2<f64>, apex: Vector2<f64>) -> [Vector2<f64>; 3] {
    let perp = rot90(apex - base);
    [base - perp, base + perp, apex]
}

/// Rectangle corners from its center and four side midpoints.
///
/// `mids` is cyclic: `mids[0]` faces `mids[2]`, `mids[1]` faces `mids[3]`.
/// With `h = mids[1] − center` the corners are `mids[0] ± h` and `mids[2] ± h`,
/// returned in cyclic order. Right angles hold as long as the midpoints do
/// (which the drag rules maintain); the builder itself does not enforce them.
pub fn create_rectangle(center: Vector2<f64>, mids: &[Vector2<f64>; 4]) -> [Vector2<f64>; 4] {
    let h = mids[1] - center;
    [mids[0] + h, mids[2] + h, mids[2] - h, mids[0] - h]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn triangle_from_vertical_axis() {
        let t = create_isosceles_triangle(vector![0.0, 0.0], vector![0.0, 1.0]);
        assert_eq!(t[0], vector![1.0, 0.0]);
        assert_eq!(t[1], vector![-1.0, 0.0]);
        assert_eq!(t[2], vector![0.0, 1.0]);
    }

    #[test]
    fn axis_aligned_rectangle() {
        let c = vector![1.0, 1.0];
        let mids = [
            vector![3.0, 1.0],
            vector![1.0, 2.0],
            vector![-1.0, 1.0],
            vector![1.0, 0.0],
        ];
        let r = create_rectangle(c, &mids);
        assert_eq!(r[0], vector![3.0, 2.0]);
        assert_eq!(r[1], vector![-1.0, 2.0]);
        assert_eq!(r[2], vector![-1.0, 0.0]);
        assert_eq!(r[3], vector![3.0, 0.0]);
    }
}
