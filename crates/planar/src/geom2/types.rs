//! Value types shared by the predicates.
//!
//! - `Circle`: center + non-negative radius.
//! - `Geometry`: what a shape evaluates to (polygon vertices or a circle).
//! - `GeomError`: precondition violations surfaced by validating constructors.

use std::fmt;

use nalgebra::Vector2;

use super::util::{centroid, polygon_area_signed};

/// Closed disc `{ x : |x − center| <= radius }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    /// Validating constructor. Rejects negative or non-finite radii and
    /// non-finite centers.
    pub fn new(center: Vector2<f64>, radius: f64) -> Result<Self, GeomError> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeomError::NonFinite);
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeomError::BadRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm() <= self.radius
    }
}

/// Derived geometry of a shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Vector2<f64>>),
    Circle(Circle),
}

impl Geometry {
    #[inline]
    pub fn as_polygon(&self) -> Option<&[Vector2<f64>]> {
        match self {
            Geometry::Polygon(v) => Some(v),
            Geometry::Circle(_) => None,
        }
    }
    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Geometry::Circle(c) => Some(c),
            Geometry::Polygon(_) => None,
        }
    }

    /// Unsigned enclosed area. Flat polygons give 0.
    pub fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(v) => polygon_area_signed(v).abs(),
            Geometry::Circle(c) => std::f64::consts::PI * c.radius * c.radius,
        }
    }

    /// Area centroid; `None` for a flat polygon.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        match self {
            Geometry::Polygon(v) => centroid(v),
            Geometry::Circle(c) => Some(c.center),
        }
    }
}

/// Precondition violations. The predicates themselves never return these;
/// callers validate once, then call the predicates freely.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A polygon needs at least three vertices.
    TooFewVertices(usize),
    /// Some coordinate is NaN or infinite.
    NonFinite,
    /// Radius is negative or not finite.
    BadRadius(f64),
    /// Rectangle midpoints do not mirror through the center at right angles.
    NotRectangle,
    /// Scene lookup failed.
    NoSuchShape(usize),
    /// Anchor index out of range for the addressed shape.
    NoSuchAnchor { shape: usize, anchor: usize },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::TooFewVertices(n) => {
                write!(f, "polygon has {} vertices (needs ≥3)", n)
            }
            GeomError::NonFinite => write!(f, "coordinate is not finite"),
            GeomError::BadRadius(r) => write!(f, "radius {} is negative or not finite", r),
            GeomError::NotRectangle => write!(
                f,
                "rectangle midpoints must mirror through the center at right angles"
            ),
            GeomError::NoSuchShape(i) => write!(f, "scene has no shape {}", i),
            GeomError::NoSuchAnchor { shape, anchor } => {
                write!(f, "shape {} has no anchor {}", shape, anchor)
            }
        }
    }
}

impl std::error::Error for GeomError {}

/// Check the predicate preconditions for a polygon: ≥3 vertices, all finite.
pub fn validate_polygon(poly: &[Vector2<f64>]) -> Result<(), GeomError> {
    if poly.len() < 3 {
        return Err(GeomError::TooFewVertices(poly.len()));
    }
    if poly.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(GeomError::NonFinite);
    }
    Ok(())
}
