//! Defaults for the interaction model (internal).
//!
//! Units are whatever the caller's pointer events use, screen pixels in the
//! usual case.

/// Anchors within this distance of the pointer can be picked up.
pub(crate) const DEFAULT_PICK_RADIUS: f64 = 8.0;
/// Half-width of the square random shapes are centered in.
pub(crate) const DEFAULT_WORLD_EXTENT: f64 = 200.0;
/// Size range (half-extent / radius) for random shapes.
pub(crate) const DEFAULT_SIZE_RANGE: (f64, f64) = (10.0, 60.0);
/// Relative tolerance for the mirror and right-angle checks in `Rect::new`.
pub(crate) const RECT_EPS: f64 = 1e-9;
