use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use patchgeom::{Point, Segment};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene;

use provenance::Provenance;
use scene::Scene;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Hit testing and intersection queries over 2D vector scenes")]
struct Cmd {
    /// Log kernel decisions at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Query a point against every shape of a scene file
    Query {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, default_value_t = 2.0)]
        threshold: f64,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Intersect two segments given as x1 y1 x2 y2 x3 y3 x4 y4
    Intersect {
        #[arg(
            num_args = 8,
            allow_negative_numbers = true,
            value_names = ["X1", "Y1", "X2", "Y2", "X3", "Y3", "X4", "Y4"]
        )]
        coords: Vec<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Query {
            scene,
            x,
            y,
            threshold,
            out,
        } => query(&scene, Point::new(x, y), threshold, out.as_deref()),
        Action::Intersect { coords } => intersect(&coords),
        Action::Report => report(),
    }
}

fn query(scene_file: &Path, p: Point, threshold: f64, out: Option<&Path>) -> Result<()> {
    tracing::info!(scene = %scene_file.display(), x = p.x, y = p.y, threshold, "query");
    let scene = Scene::load(scene_file)?;
    let report = scene.query(p, threshold);
    tracing::info!(
        paths = report.paths.len(),
        near = report.near_count(),
        "query_done"
    );
    let body = serde_json::to_vec_pretty(&report)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let prov = Provenance::new(
        "query",
        serde_json::json!({
            "scene": scene_file.to_string_lossy(),
            "x": p.x,
            "y": p.y,
            "threshold": threshold,
        }),
    );
    provenance::write_sidecar(out, &prov)?;
    Ok(())
}

fn intersect(coords: &[f64]) -> Result<()> {
    let [x1, y1, x2, y2, x3, y3, x4, y4] = *coords else {
        anyhow::bail!("intersect takes exactly 8 coordinates, got {}", coords.len());
    };
    let a = Segment::new(Point::new(x1, y1), Point::new(x2, y2));
    let b = Segment::new(Point::new(x3, y3), Point::new(x4, y4));
    let hit = a.intersection(&b);
    tracing::debug!(?a, ?b, ?hit, "intersect");
    let obj = serde_json::json!({
        "intersects": hit.is_some(),
        "point": hit,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = Provenance::new("report", serde_json::json!({})).to_json(&[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
