//! Curated call surface for callers driving an interactive scene.
//!
//! Important
//! - Prefer these re-exports over reaching into submodules; the module split
//!   may change, this list is what the CLI and benches build on.

// 2D predicates
pub use crate::geom2::{
    centroid, circles_intersect, convex_hull, convex_poly_circle_intersect,
    convex_polys_intersect, convex_polys_intersect_by_edges, dist_to_line, dist_to_segment,
    geometries_intersect, orient, point_in_convex_poly, point_in_poly, polygon_area_signed,
    segments_intersect, segments_intersect_proper, validate_polygon, Circle, GeomError, Geometry,
};
// Anchored shapes and the interaction model
pub use crate::shapes::rand::{
    draw_convex_polygon, draw_shape, RadialCfg, RandomShapeCfg, ReplayToken, VertexCount,
};
pub use crate::shapes::{
    create_isosceles_triangle, create_rectangle, ActiveDrag, CircleShape, DragSession,
    IsoTriangle, Rect, Scene, SceneCfg, Shape, ShapeKind,
};

