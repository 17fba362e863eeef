//! Random convex polygons and random anchored shapes (replayable).
//!
//! Purpose
//! - Feed benches, property tests, and the CLI sweep with reproducible input.
//!
//! Model
//! - Polygons: `n` equally spaced angles with bounded angular and radial
//!   jitter, then the convex hull (radial jitter alone can make a dent).
//! - Shapes: a uniform kind, a center in `[-extent, extent]²`, a size in the
//!   configured range, and a random orientation.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cfg::{DEFAULT_SIZE_RANGE, DEFAULT_WORLD_EXTENT};
use super::shape::{CircleShape, IsoTriangle, Rect, Shape};
use crate::geom2::convex_hull;
use crate::geom2::vec::rotate;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)`, `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 4 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
        }
    }
}

/// Random anchored-shape configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomShapeCfg {
    /// Centers are drawn from `[-extent, extent]²`.
    pub extent: f64,
    pub size_min: f64,
    pub size_max: f64,
}
impl Default for RandomShapeCfg {
    fn default() -> Self {
        Self {
            extent: DEFAULT_WORLD_EXTENT,
            size_min: DEFAULT_SIZE_RANGE.0,
            size_max: DEFAULT_SIZE_RANGE.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random convex polygon around the origin, CCW (y-up). `None` only if the
/// hull collapses, which needs pathological jitter settings.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Vector2<f64>>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    convex_hull(&pts)
}

/// Random triangle, rectangle, or circle.
pub fn draw_shape(cfg: RandomShapeCfg, tok: ReplayToken) -> Shape {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.abs();
    let lo = cfg.size_min.min(cfg.size_max).max(0.0);
    let hi = cfg.size_max.max(lo);
    let size = |rng: &mut StdRng| if hi > lo { rng.gen_range(lo..hi) } else { lo };
    let center = if e > 0.0 {
        Vector2::new(rng.gen_range(-e..e), rng.gen_range(-e..e))
    } else {
        Vector2::zeros()
    };
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    match rng.gen_range(0..3u8) {
        0 => Shape::Triangle(IsoTriangle {
            base: center,
            apex: center + rotate(Vector2::new(0.0, size(&mut rng)), theta),
        }),
        1 => {
            let hw = size(&mut rng);
            let hh = size(&mut rng);
            let mut r = Rect::axis_aligned(Vector2::zeros(), hw, hh);
            for m in &mut r.mids {
                *m = center + rotate(*m, theta);
            }
            r.center = center;
            Shape::Rectangle(r)
        }
        _ => Shape::Circle(CircleShape {
            center,
            rim: center + rotate(Vector2::new(size(&mut rng), 0.0), theta),
        }),
    }
}
