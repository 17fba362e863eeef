//! Anchor-driven shapes and the interactive drag model.
//!
//! Purpose
//! - Turn a handful of user-editable anchors into a triangle, rectangle, or
//!   circle, and move those anchors under pointer drags without breaking the
//!   shape (isosceles stays isosceles, rectangles keep right angles).
//! - Replace per-demo closure state with an explicit `Scene` the caller owns
//!   and an explicit `ActiveDrag` value passed through the event handlers.
//!
//! Model
//! - Shapes store anchors only. `Shape::geometry()` recomputes polygon/circle
//!   on demand, so derived geometry can never drift from the anchors.
//! - One state, one transition: "apply drag delta to anchors" and the next
//!   query sees the recomputed geometry.
//!
//! Code cross-refs: `crate::geom2::{geometries_intersect, Geometry}`

mod build;
mod cfg;
pub mod rand;
mod scene;
mod shape;

pub use build::{create_isosceles_triangle, create_rectangle};
pub use scene::{ActiveDrag, DragSession, Scene, SceneCfg};
pub use shape::{CircleShape, IsoTriangle, Rect, Shape, ShapeKind};
