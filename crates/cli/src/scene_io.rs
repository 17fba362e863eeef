//! JSON scene files and pointer scripts, and the replay loop over them.
//!
//! Scene file:
//! ```json
//! { "pick_radius": 8.0,
//!   "shapes": [
//!     { "kind": "triangle", "base": [0, 0], "apex": [0, 30] },
//!     { "kind": "rectangle", "center": [50, 0], "mids": [[70, 0], [50, 10], [30, 0], [50, -10]] },
//!     { "kind": "circle", "center": [0, 80], "rim": [12, 80] } ] }
//! ```
//! Pointer script: `[{"type": "down", "at": [0, 0]}, {"type": "move", "at": [5, 0]}, {"type": "up"}]`.

use anyhow::{Context, Result};
use nalgebra::Vector2;
use planar::api::{ActiveDrag, CircleShape, DragSession, IsoTriangle, Rect, Scene, SceneCfg, Shape};
use planar::GeomError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

type P = [f64; 2];

#[inline]
fn v(p: P) -> Vector2<f64> {
    Vector2::new(p[0], p[1])
}

#[inline]
fn arr(p: Vector2<f64>) -> P {
    [p.x, p.y]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Triangle {
        base: P,
        apex: P,
    },
    Rectangle {
        center: P,
        mids: [P; 4],
        /// Winding to keep while a half-axis is zero; otherwise read off `mids`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ccw: Option<bool>,
    },
    Circle {
        center: P,
        rim: P,
    },
}

impl ShapeSpec {
    fn points(&self) -> Vec<P> {
        match self {
            ShapeSpec::Triangle { base, apex } => vec![*base, *apex],
            ShapeSpec::Rectangle { center, mids, .. } => {
                let mut out = vec![*center];
                out.extend_from_slice(mids);
                out
            }
            ShapeSpec::Circle { center, rim } => vec![*center, *rim],
        }
    }

    /// Finite coordinates everywhere; rectangles must also pass `Rect::new`.
    pub fn check(&self) -> Result<(), GeomError> {
        self.to_shape().map(|_| ())
    }

    pub fn to_shape(&self) -> Result<Shape, GeomError> {
        if !self.points().iter().flatten().all(|c| c.is_finite()) {
            return Err(GeomError::NonFinite);
        }
        Ok(match *self {
            ShapeSpec::Triangle { base, apex } => Shape::Triangle(IsoTriangle {
                base: v(base),
                apex: v(apex),
            }),
            ShapeSpec::Rectangle { center, mids, ccw } => {
                let r = Rect::new(v(center), mids.map(v))?;
                Shape::Rectangle(match ccw {
                    Some(ccw) => r.with_ccw(ccw),
                    None => r,
                })
            }
            ShapeSpec::Circle { center, rim } => Shape::Circle(CircleShape {
                center: v(center),
                rim: v(rim),
            }),
        })
    }

    pub fn from_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Triangle(t) => ShapeSpec::Triangle {
                base: arr(t.base),
                apex: arr(t.apex),
            },
            Shape::Rectangle(r) => ShapeSpec::Rectangle {
                center: arr(r.center),
                mids: r.mids.map(arr),
                ccw: Some(r.is_ccw()),
            },
            Shape::Circle(c) => ShapeSpec::Circle {
                center: arr(c.center),
                rim: arr(c.rim),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_radius: Option<f64>,
    pub shapes: Vec<ShapeSpec>,
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let file: SceneFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing scene {}", path.display()))?;
        for (i, s) in file.shapes.iter().enumerate() {
            s.check().with_context(|| format!("shape {} in {}", i, path.display()))?;
        }
        Ok(file)
    }

    pub fn to_scene(&self) -> Result<Scene> {
        let mut cfg = SceneCfg::default();
        if let Some(r) = self.pick_radius {
            cfg.pick_radius = r;
        }
        let mut scene = Scene::new(cfg);
        for (i, s) in self.shapes.iter().enumerate() {
            scene.push(s.to_shape().with_context(|| format!("shape {}", i))?);
        }
        Ok(scene)
    }

    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            pick_radius: Some(scene.cfg.pick_radius),
            shapes: scene.shapes.iter().map(ShapeSpec::from_shape).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { at: P },
    Move { at: P },
    Up,
}

pub fn load_script(path: &Path) -> Result<Vec<PointerEvent>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing script {}", path.display()))
}

/// Scene state after one pointer event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub step: usize,
    pub active: Option<(usize, usize)>,
    pub highlight: Vec<bool>,
}

/// Feed `events` through a `DragSession`, recording a frame per event.
pub fn replay(scene: &mut Scene, events: &[PointerEvent]) -> Result<Vec<Frame>> {
    let mut session = DragSession::new();
    let mut frames = Vec::with_capacity(events.len());
    for (step, ev) in events.iter().enumerate() {
        match *ev {
            PointerEvent::Down { at } => {
                let picked = session.pointer_down(scene, v(at));
                tracing::debug!(step, ?picked, "pointer_down");
            }
            PointerEvent::Move { at } => {
                session
                    .pointer_move(scene, v(at))
                    .with_context(|| format!("pointer move at step {}", step))?;
            }
            PointerEvent::Up => {
                session.pointer_up();
            }
        }
        frames.push(Frame {
            step,
            active: session
                .active()
                .map(|ActiveDrag { shape, anchor }| (shape, anchor)),
            highlight: scene.highlight(),
        });
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "shapes": [
            { "kind": "rectangle", "center": [0, 0],
              "mids": [[20, 0], [0, 10], [-20, 0], [0, -10]] },
            { "kind": "triangle", "base": [100, 0], "apex": [100, 10] },
            { "kind": "circle", "center": [0, 100], "rim": [5, 100] }
        ]
    }"#;

    #[test]
    fn parses_and_round_trips_shapes() {
        let file: SceneFile = serde_json::from_str(SCENE).unwrap();
        assert_eq!(file.shapes.len(), 3);
        let scene = file.to_scene().unwrap();
        assert!((scene.cfg.pick_radius - SceneCfg::default().pick_radius).abs() < 1e-12);
        let back = SceneFile::from_scene(&scene);
        let again = back.to_scene().unwrap();
        assert_eq!(again.shapes, scene.shapes);
        assert_eq!(
            back.shapes[0],
            ShapeSpec::Rectangle {
                center: [0.0, 0.0],
                mids: [[20.0, 0.0], [0.0, 10.0], [-20.0, 0.0], [0.0, -10.0]],
                ccw: Some(true),
            }
        );
    }

    #[test]
    fn rejects_skewed_rectangle() {
        let spec: ShapeSpec = serde_json::from_str(
            r#"{ "kind": "rectangle", "center": [0, 0],
                 "mids": [[20, 0], [8, 10], [-20, 0], [50, 50]] }"#,
        )
        .unwrap();
        assert_eq!(spec.check(), Err(GeomError::NotRectangle));
        let file = SceneFile {
            pick_radius: None,
            shapes: vec![spec],
        };
        assert!(file.to_scene().is_err());
    }

    #[test]
    fn load_reports_bad_shape_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        fs::write(
            &path,
            r#"{ "shapes": [
                { "kind": "circle", "center": [0, 0], "rim": [1, 0] },
                { "kind": "rectangle", "center": [0, 0],
                  "mids": [[20, 0], [0, 10], [-20, 0], [0, -11]] }
            ] }"#,
        )
        .unwrap();
        let err = SceneFile::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("shape 1"));
    }

    #[test]
    fn keeps_winding_of_flattened_rectangle() {
        let spec: ShapeSpec = serde_json::from_str(
            r#"{ "kind": "rectangle", "center": [0, 0],
                 "mids": [[0, 0], [0, -10], [0, 0], [0, 10]], "ccw": false }"#,
        )
        .unwrap();
        match spec.to_shape().unwrap() {
            Shape::Rectangle(r) => assert!(!r.is_ccw()),
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let spec = ShapeSpec::Circle {
            center: [f64::NAN, 0.0],
            rim: [1.0, 0.0],
        };
        assert_eq!(spec.check(), Err(GeomError::NonFinite));
    }

    #[test]
    fn replay_drags_triangle_into_rectangle() {
        let file: SceneFile = serde_json::from_str(SCENE).unwrap();
        let mut scene = file.to_scene().unwrap();
        let script: Vec<PointerEvent> = serde_json::from_str(
            r#"[{"type": "down", "at": [100, 1]},
                {"type": "move", "at": [60, 1]},
                {"type": "move", "at": [25, 1]},
                {"type": "up"}]"#,
        )
        .unwrap();
        let frames = replay(&mut scene, &script).unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].active, Some((1, 0)));
        assert_eq!(frames[1].highlight, vec![false, false, false]);
        assert_eq!(frames[2].highlight, vec![true, true, false]);
        assert_eq!(frames[3].active, None);
    }
}
