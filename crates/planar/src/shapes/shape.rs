//! Shape variants and their anchor-preserving drag rules.
//!
//! Anchor indices
//! - Triangle: 0 = base midpoint, 1 = apex.
//! - Rectangle: 0 = center, 1..=4 = side midpoints `mids[0..4]`.
//! - Circle: 0 = center, 1 = rim (radius control).

use nalgebra::Vector2;

use super::build::{create_isosceles_triangle, create_rectangle};
use super::cfg::RECT_EPS;
use crate::geom2::vec::{cross, distance, normalize, rot90};
use crate::geom2::{Circle, GeomError, Geometry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

/// Isosceles triangle anchored at its base midpoint and apex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsoTriangle {
    pub base: Vector2<f64>,
    pub apex: Vector2<f64>,
}

impl IsoTriangle {
    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        create_isosceles_triangle(self.base, self.apex)
    }
}

/// Rectangle anchored at its center and four cyclic side midpoints.
///
/// Invariants (checked by `Rect::new`, kept by the drag rules):
/// - `mids[k + 2] = 2·center − mids[k]` (opposite midpoints mirror through the center).
/// - `(mids[0] − center) ⟂ (mids[1] − center)`.
///
/// The winding is remembered separately: once a midpoint sits on the center
/// the midpoints alone can no longer tell clockwise from counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub center: Vector2<f64>,
    pub mids: [Vector2<f64>; 4],
    ccw: bool,
}

impl Rect {
    /// Validating constructor. Midpoints must mirror through `center` and the
    /// two half-axes must be perpendicular (relative tolerance `RECT_EPS`).
    pub fn new(center: Vector2<f64>, mids: [Vector2<f64>; 4]) -> Result<Self, GeomError> {
        let finite = |p: &Vector2<f64>| p.x.is_finite() && p.y.is_finite();
        if !finite(&center) || !mids.iter().all(finite) {
            return Err(GeomError::NonFinite);
        }
        let scale = 1.0 + mids.iter().map(|m| (m - center).norm()).fold(0.0, f64::max);
        for k in 0..2 {
            let mirror = center * 2.0 - mids[k];
            if (mids[k + 2] - mirror).norm() > RECT_EPS * scale {
                return Err(GeomError::NotRectangle);
            }
        }
        let a = mids[0] - center;
        let b = mids[1] - center;
        if a.dot(&b).abs() > RECT_EPS * (1.0 + a.norm() * b.norm()) {
            return Err(GeomError::NotRectangle);
        }
        Ok(Self {
            center,
            mids,
            ccw: cross(a, b) >= 0.0,
        })
    }

    /// Axis-aligned rectangle with half extents `hw`, `hh`.
    pub fn axis_aligned(center: Vector2<f64>, hw: f64, hh: f64) -> Self {
        Self {
            center,
            mids: [
                center + Vector2::new(hw, 0.0),
                center + Vector2::new(0.0, hh),
                center - Vector2::new(hw, 0.0),
                center - Vector2::new(0.0, hh),
            ],
            ccw: hw * hh >= 0.0,
        }
    }

    /// Set the winding used while a half-axis is zero. Midpoints that span
    /// both axes determine the winding themselves and ignore this.
    pub fn with_ccw(mut self, ccw: bool) -> Self {
        if cross(self.mids[0] - self.center, self.mids[1] - self.center) == 0.0 {
            self.ccw = ccw;
        }
        self
    }

    /// `mids[0] → mids[1]` turns counterclockwise (y-up) around the center.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.ccw
    }

    #[inline]
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        create_rectangle(self.center, &self.mids)
    }

    /// Move side midpoint `k` by `delta`.
    ///
    /// The moved midpoint fixes the new half-extent `v` of its axis and the
    /// opposite midpoint becomes `center − v`. The two adjacent midpoints keep
    /// their distance to the center and are re-aimed along `v` rotated by 90°,
    /// on the same side as before. A zero `v` leaves them where they were.
    fn drag_mid(&mut self, k: usize, delta: Vector2<f64>) {
        let c = self.center;
        let next = (k + 1) % 4;
        let prev = (k + 3) % 4;
        let opp = (k + 2) % 4;
        let turn = cross(self.mids[k] - c, self.mids[next] - c);
        if turn != 0.0 {
            // k → next has the same sense as mids[0] → mids[1] for every k.
            self.ccw = turn > 0.0;
        }
        let handed = if self.ccw { 1.0 } else { -1.0 };
        let half_other = (self.mids[next] - c).norm();
        let moved = self.mids[k] + delta;
        let v = moved - c;
        self.mids[k] = moved;
        self.mids[opp] = c - v;
        if let Some(u) = normalize(v) {
            let w = rot90(u) * (handed * half_other);
            self.mids[next] = c + w;
            self.mids[prev] = c - w;
        }
    }
}

/// Circle anchored at its center and a rim point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleShape {
    pub center: Vector2<f64>,
    pub rim: Vector2<f64>,
}

impl CircleShape {
    #[inline]
    pub fn radius(&self) -> f64 {
        distance(self.rim, self.center)
    }
}

/// A draggable shape. Geometry is always derived from the anchors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Triangle(IsoTriangle),
    Rectangle(Rect),
    Circle(CircleShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn anchors(&self) -> Vec<Vector2<f64>> {
        match self {
            Shape::Triangle(t) => vec![t.base, t.apex],
            Shape::Rectangle(r) => {
                let mut v = Vec::with_capacity(5);
                v.push(r.center);
                v.extend_from_slice(&r.mids);
                v
            }
            Shape::Circle(c) => vec![c.center, c.rim],
        }
    }

    #[inline]
    pub fn anchor_count(&self) -> usize {
        match self {
            Shape::Triangle(_) | Shape::Circle(_) => 2,
            Shape::Rectangle(_) => 5,
        }
    }

    /// Recompute the polygon or circle from the current anchors.
    pub fn geometry(&self) -> Geometry {
        match self {
            Shape::Triangle(t) => Geometry::Polygon(t.vertices().to_vec()),
            Shape::Rectangle(r) => Geometry::Polygon(r.corners().to_vec()),
            Shape::Circle(c) => Geometry::Circle(Circle {
                center: c.center,
                radius: c.radius(),
            }),
        }
    }

    /// Rigid translation of every anchor.
    pub fn translate(&mut self, delta: Vector2<f64>) {
        match self {
            Shape::Triangle(t) => {
                t.base += delta;
                t.apex += delta;
            }
            Shape::Rectangle(r) => {
                r.center += delta;
                for m in &mut r.mids {
                    *m += delta;
                }
            }
            Shape::Circle(c) => {
                c.center += delta;
                c.rim += delta;
            }
        }
    }

    /// Apply a drag of anchor `i` by `delta`; returns `false` if `i` is out of
    /// range (nothing moves).
    ///
    /// Anchor 0 always translates the whole shape. The other anchors reshape:
    /// the triangle apex and the circle rim move alone, a rectangle midpoint
    /// follows `Rect::drag_mid`.
    pub fn drag_anchor(&mut self, i: usize, delta: Vector2<f64>) -> bool {
        if i >= self.anchor_count() {
            return false;
        }
        if i == 0 {
            self.translate(delta);
            return true;
        }
        match self {
            Shape::Triangle(t) => t.apex += delta,
            Shape::Rectangle(r) => r.drag_mid(i - 1, delta),
            Shape::Circle(c) => c.rim += delta,
        }
        true
    }
}
