//! Caller-owned scene and the pointer-driven drag session.

use nalgebra::Vector2;

use super::cfg::DEFAULT_PICK_RADIUS;
use super::shape::Shape;
use crate::geom2::vec::distance;
use crate::geom2::{geometries_intersect, GeomError, Geometry};

/// Interaction settings.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    /// Maximum pointer-to-anchor distance for a pick.
    pub pick_radius: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }
}

/// The anchor currently held by the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    pub shape: usize,
    pub anchor: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub cfg: SceneCfg,
}

impl Scene {
    pub fn new(cfg: SceneCfg) -> Self {
        Self {
            shapes: Vec::new(),
            cfg,
        }
    }

    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            cfg: SceneCfg::default(),
        }
    }

    /// Add a shape, returning its index.
    pub fn push(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Nearest anchor within `pick_radius` of `p`.
    ///
    /// Ties go to the earlier shape, then the lower anchor index.
    pub fn pick(&self, p: Vector2<f64>) -> Option<ActiveDrag> {
        let mut best: Option<(ActiveDrag, f64)> = None;
        for (si, shape) in self.shapes.iter().enumerate() {
            for (ai, a) in shape.anchors().into_iter().enumerate() {
                let d = distance(a, p);
                if d > self.cfg.pick_radius {
                    continue;
                }
                if best.as_ref().is_none_or(|(_, bd)| d < *bd) {
                    best = Some((
                        ActiveDrag {
                            shape: si,
                            anchor: ai,
                        },
                        d,
                    ));
                }
            }
        }
        best.map(|(drag, _)| drag)
    }

    /// Move the dragged anchor by `delta`.
    pub fn apply_drag(&mut self, drag: ActiveDrag, delta: Vector2<f64>) -> Result<(), GeomError> {
        let shape = self
            .shapes
            .get_mut(drag.shape)
            .ok_or(GeomError::NoSuchShape(drag.shape))?;
        if !shape.drag_anchor(drag.anchor, delta) {
            return Err(GeomError::NoSuchAnchor {
                shape: drag.shape,
                anchor: drag.anchor,
            });
        }
        Ok(())
    }

    pub fn geometries(&self) -> Vec<Geometry> {
        self.shapes.iter().map(Shape::geometry).collect()
    }

    /// All index pairs `(i, j)`, `i < j`, whose geometries intersect.
    pub fn intersecting_pairs(&self) -> Vec<(usize, usize)> {
        let geoms = self.geometries();
        let mut out = Vec::new();
        for i in 0..geoms.len() {
            for j in (i + 1)..geoms.len() {
                if geometries_intersect(&geoms[i], &geoms[j]) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    /// Per-shape flag: intersects at least one other shape.
    pub fn highlight(&self) -> Vec<bool> {
        let mut flags = vec![false; self.shapes.len()];
        for (i, j) in self.intersecting_pairs() {
            flags[i] = true;
            flags[j] = true;
        }
        flags
    }
}

/// Turns absolute pointer positions into anchor drags.
///
/// `pointer_down` picks an anchor, each `pointer_move` applies the delta from
/// the previous position, `pointer_up` ends the drag. Moves with nothing held
/// are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
    last: Option<Vector2<f64>>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> Option<ActiveDrag> {
        self.active
    }

    pub fn pointer_down(&mut self, scene: &Scene, p: Vector2<f64>) -> Option<ActiveDrag> {
        self.active = scene.pick(p);
        self.last = self.active.map(|_| p);
        self.active
    }

    /// Returns `Ok(true)` if an anchor moved.
    pub fn pointer_move(&mut self, scene: &mut Scene, p: Vector2<f64>) -> Result<bool, GeomError> {
        let (Some(drag), Some(last)) = (self.active, self.last) else {
            return Ok(false);
        };
        scene.apply_drag(drag, p - last)?;
        self.last = Some(p);
        Ok(true)
    }

    pub fn pointer_up(&mut self) -> Option<ActiveDrag> {
        self.last = None;
        self.active.take()
    }
}
