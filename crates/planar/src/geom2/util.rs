//! Whole-polygon helpers: hull, signed area, centroid.
//!
//! Used by the random shape sampler (hull of radial draws) and by
//! `Geometry::{area, centroid}` for scene reports. Inputs may have either
//! winding; outputs are CCW in y-up coordinates.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::vec::cross;

/// Points closer than this collapse into one before hulling.
const HULL_DEDUP_EPS: f64 = 1e-12;

fn lex_order(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// One monotone half of the hull: keeps only strict left turns, and leaves
/// off the final point since it starts the other half.
fn half_chain<'a>(pts: impl Iterator<Item = &'a Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut chain: Vec<Vector2<f64>> = Vec::new();
    for &p in pts {
        while let [.., o, a] = chain[..] {
            if cross(a - o, p - o) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}

/// Andrew's monotone chain convex hull, CCW (y-up), collinear points dropped.
///
/// Returns `None` when fewer than 3 distinct, non-collinear points remain.
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_order);
    pts.dedup_by(|a, b| (*a - *b).norm() < HULL_DEDUP_EPS);
    if pts.len() < 3 {
        return None;
    }
    let mut hull = half_chain(pts.iter());
    hull.extend(half_chain(pts.iter().rev()));
    (hull.len() >= 3).then_some(hull)
}

/// Shoelace signed area; positive for CCW in y-up coordinates.
pub fn polygon_area_signed(poly: &[Vector2<f64>]) -> f64 {
    let n = poly.len();
    let mut a = 0.0;
    for k in 0..n {
        a += cross(poly[k], poly[(k + 1) % n]);
    }
    0.5 * a
}

/// Area centroid of a simple polygon (either winding). `None` if flat.
pub fn centroid(poly: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if poly.len() < 3 {
        return None;
    }
    let mut a = 0.0;
    let mut c = Vector2::zeros();
    for k in 0..poly.len() {
        let p = poly[k];
        let q = poly[(k + 1) % poly.len()];
        let w = cross(p, q);
        a += w;
        c += (p + q) * w;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(c / (6.0 * a))
}
