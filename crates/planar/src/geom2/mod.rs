//! Exact 2D predicates over raw point data.
//!
//! Purpose
//! - Decide orientation, segment crossing, containment, and intersection for
//!   the small polygons and circles an interactive scene produces.
//! - Keep every function pure: inputs are `Vector2<f64>` values and slices,
//!   outputs are booleans or scalars.
//!
//! Conventions
//! - Orientation is the exact floating-point sign of (b−a)×(c−a); there is no
//!   epsilon. On a y-down screen a positive sign reads as a clockwise turn.
//! - Polygons are closed loops of ≥3 vertices in either winding. Predicates do
//!   not care which winding the caller uses.
//! - Boundaries are closed: touching counts as intersecting, a point on an
//!   edge counts as contained.
//!
//! Code cross-refs: `orient`, `contain`, `dist`, `intersect`, `crate::shapes`

mod contain;
mod dist;
mod intersect;
mod orient;
mod types;
mod util;
pub mod vec;

pub use contain::{point_in_convex_poly, point_in_poly};
pub use dist::{dist_to_line, dist_to_segment};
pub use intersect::{
    circles_intersect, convex_poly_circle_intersect, convex_polys_intersect,
    convex_polys_intersect_by_edges, geometries_intersect,
};
pub use orient::{orient, segments_intersect, segments_intersect_proper};
pub use types::{validate_polygon, Circle, GeomError, Geometry};
pub use util::{centroid, convex_hull, polygon_area_signed};

#[cfg(test)]
mod tests;
