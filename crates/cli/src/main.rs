use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::api::{RandomShapeCfg, Scene};
use serde_json::{json, Value};
use std::panic::Location;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene_io;
mod sweep;

use provenance::Payload;
use scene_io::SceneFile;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scene intersection checks, drag replays, and predicate sweeps")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report which shapes of a scene file intersect
    Check {
        #[arg(long)]
        scene: PathBuf,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay a pointer script against a scene and record every frame
    Drag {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Overrides the scene file's pick radius
        #[arg(long)]
        pick_radius: Option<f64>,
    },
    /// Tabulate random shape pairs (SAT vs edge formulation) as .parquet or .csv
    Sweep {
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half-width of the square shape centers are drawn from
        #[arg(long, default_value_t = RandomShapeCfg::default().extent)]
        extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { scene, out } => check(&scene, out.as_deref(), cmd.tag),
        Action::Drag {
            scene,
            script,
            out,
            pick_radius,
        } => drag(&scene, &script, &out, pick_radius, cmd.tag),
        Action::Sweep {
            count,
            seed,
            extent,
            out,
        } => run_sweep(count, seed, extent, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn check_report(scene: &Scene) -> Value {
    let kinds: Vec<&str> = scene.shapes.iter().map(|s| s.kind().as_str()).collect();
    let geoms: Vec<_> = scene.shapes.iter().map(|s| s.geometry()).collect();
    let areas: Vec<f64> = geoms.iter().map(|g| g.area()).collect();
    let centroids: Vec<Option<[f64; 2]>> = geoms
        .iter()
        .map(|g| g.centroid().map(|c| [c.x, c.y]))
        .collect();
    json!({
        "shapes": kinds,
        "areas": areas,
        "centroids": centroids,
        "pairs": scene.intersecting_pairs(),
        "highlight": scene.highlight(),
    })
}

fn check(scene_path: &Path, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    let scene = SceneFile::load(scene_path)?.to_scene()?;
    let report = check_report(&scene);
    tracing::info!(
        scene = %scene_path.display(),
        shapes = scene.shapes.len(),
        pairs = report["pairs"].as_array().map_or(0, Vec::len),
        tag = ?tag,
        "check"
    );
    match out {
        Some(out) => {
            write_json(out, &report)?;
            let payload = Payload::new("check", json!({ "scene": scene_path })).with_tag(tag);
            provenance::write_sidecar(out, payload)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn drag(
    scene_path: &Path,
    script_path: &Path,
    out: &Path,
    pick_radius: Option<f64>,
    tag: Option<String>,
) -> Result<()> {
    let mut scene = SceneFile::load(scene_path)?.to_scene()?;
    if let Some(r) = pick_radius {
        scene.cfg.pick_radius = r;
    }
    let events = scene_io::load_script(script_path)?;
    let frames = scene_io::replay(&mut scene, &events)?;
    tracing::info!(
        scene = %scene_path.display(),
        events = events.len(),
        pairs = scene.intersecting_pairs().len(),
        tag = ?tag,
        "drag"
    );
    let doc = json!({
        "frames": frames,
        "scene": SceneFile::from_scene(&scene),
    });
    write_json(out, &doc)?;
    let payload = Payload::new(
        "drag",
        json!({
            "scene": scene_path,
            "script": script_path,
            "pick_radius": scene.cfg.pick_radius
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn run_sweep(count: u64, seed: u64, extent: f64, out: &Path, tag: Option<String>) -> Result<()> {
    let cfg = RandomShapeCfg {
        extent,
        ..RandomShapeCfg::default()
    };
    let (mut df, stats) = sweep::sweep_frame(count, seed, cfg)?;
    tracing::info!(
        pairs = stats.pairs,
        intersecting = stats.intersecting,
        polygon_pairs = stats.polygon_pairs,
        disagreements = stats.disagreements,
        tag = ?tag,
        "sweep"
    );
    sweep::write_frame(&mut df, out)?;
    let payload = Payload::new(
        "sweep",
        json!({
            "count": count,
            "seed": seed,
            "extent": extent,
            "size_range": [cfg.size_min, cfg.size_max],
            "disagreements": stats.disagreements
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new("report", json!({})).with_tag(tag);
    let doc = provenance::document(&payload, &[], Location::caller());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
