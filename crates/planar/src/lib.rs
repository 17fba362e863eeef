//! 2D intersection predicates and anchor-driven shapes.
//!
//! Layout
//! - `geom2`: exact orientation, segment, containment, distance, and
//!   convex/circle intersection predicates over raw point slices.
//! - `shapes`: triangle/rectangle/circle builders driven by draggable anchors,
//!   plus the explicit `Scene` + `DragSession` model for interactive callers.
//!
//! API Policy
//! - Predicates take plain `Vector2<f64>` data and never retain references.
//! - Rendering and pointer capture are the caller's job; this crate only
//!   answers "do these intersect" and "where are the anchors now".

pub mod api;
pub mod geom2;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Circle, GeomError, Geometry};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        circles_intersect, convex_poly_circle_intersect, convex_polys_intersect,
        dist_to_segment, geometries_intersect, orient, point_in_convex_poly, point_in_poly,
        segments_intersect, segments_intersect_proper, Circle, GeomError, Geometry,
    };
    pub use crate::shapes::{
        create_isosceles_triangle, create_rectangle, ActiveDrag, CircleShape, DragSession,
        IsoTriangle, Rect, Scene, SceneCfg, Shape, ShapeKind,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
