//! Scene files and point queries against them.
//!
//! A scene is a JSON document holding shapes in their flat numeric-list form:
//!
//! ```json
//! {
//!   "paths": [[0, 0, 0, 10, 0, 1, 10, 10, 1]],
//!   "rects": [[20, 20, 5, 5]],
//!   "transform": [1, 0, 0, 0, 1, 0]
//! }
//! ```
//!
//! `transform` is optional and is applied to every path on load. Rectangles
//! with a negative width or height are rejected.

use anyhow::{anyhow, bail, Context, Result};
use patchgeom::{AffineMatrix, Path, Point, Rectangle, ValueList};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Deserialize)]
struct RawScene {
    #[serde(default)]
    paths: Vec<Vec<f64>>,
    #[serde(default)]
    rects: Vec<Vec<f64>>,
    #[serde(default)]
    transform: Option<Vec<f64>>,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub paths: Vec<Path>,
    pub rects: Vec<Rectangle>,
}

impl Scene {
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawScene = serde_json::from_str(text).context("parsing scene json")?;
        let transform = match raw.transform {
            Some(v) => AffineMatrix::from_values(&v)
                .ok_or_else(|| anyhow!("transform needs 6 values, got {}", v.len()))?,
            None => AffineMatrix::identity(),
        };
        let paths = raw
            .paths
            .iter()
            .enumerate()
            .map(|(i, v)| {
                Path::from_values(v)
                    .map(|p| p.transformed(&transform))
                    .ok_or_else(|| {
                        anyhow!("path {i}: expected [x, y, mode] triples with mode 0..=3")
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        let rects = raw
            .rects
            .iter()
            .enumerate()
            .map(|(i, v)| -> Result<Rectangle> {
                let r = Rectangle::from_values(v)
                    .ok_or_else(|| anyhow!("rect {i}: expected [x, y, w, h]"))?;
                if !(r.width() >= 0.0 && r.height() >= 0.0) {
                    bail!(
                        "rect {i}: width and height must be non-negative, got {} x {}",
                        r.width(),
                        r.height()
                    );
                }
                Ok(r)
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(paths = paths.len(), rects = rects.len(), "scene_loaded");
        Ok(Self { paths, rects })
    }

    pub fn load(file: &std::path::Path) -> Result<Self> {
        let text =
            fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
        Self::parse(&text).with_context(|| format!("loading scene {}", file.display()))
    }

    /// Run a hit query for `p` against every shape.
    pub fn query(&self, p: Point, threshold: f64) -> QueryReport {
        let paths = self
            .paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let d = path.distance(p);
                PathHit {
                    index,
                    distance: d.is_finite().then_some(d),
                    near: path.near(p, threshold),
                    bounds: path.bounds(),
                    overlaps: self
                        .rects
                        .iter()
                        .enumerate()
                        .filter(|(_, r)| path.overlaps(r))
                        .map(|(i, _)| i)
                        .collect(),
                }
            })
            .collect();
        let rects = self
            .rects
            .iter()
            .enumerate()
            .map(|(index, rect)| RectHit {
                index,
                rect: *rect,
                contains: rect.contains(p),
            })
            .collect();
        QueryReport {
            point: p,
            threshold,
            paths,
            rects,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PathHit {
    pub index: usize,
    /// `None` for an empty path.
    pub distance: Option<f64>,
    pub near: bool,
    pub bounds: Option<Rectangle>,
    /// Indices of scene rectangles the path overlaps.
    pub overlaps: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct RectHit {
    pub index: usize,
    pub rect: Rectangle,
    pub contains: bool,
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub point: Point,
    pub threshold: f64,
    pub paths: Vec<PathHit>,
    pub rects: Vec<RectHit>,
}

impl QueryReport {
    pub fn near_count(&self) -> usize {
        self.paths.iter().filter(|h| h.near).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SCENE: &str = r#"{
        "paths": [[0, 0, 0, 10, 0, 1, 10, 10, 1], []],
        "rects": [[8, -1, 4, 2], [50, 50, 1, 1]]
    }"#;

    #[test]
    fn query_reports_distance_and_overlaps() {
        let scene = Scene::parse(SCENE).unwrap();
        assert_eq!(scene.paths.len(), 2);
        let report = scene.query(Point::new(5.0, 1.0), 2.0);
        let hit = &report.paths[0];
        assert!((hit.distance.unwrap() - 1.0).abs() < 1e-12);
        assert!(hit.near);
        assert_eq!(hit.overlaps, vec![0]);
        assert_eq!(hit.bounds, Some(Rectangle::new(0.0, 0.0, 10.0, 10.0)));
        // empty path: no distance, no bounds
        assert_eq!(report.paths[1].distance, None);
        assert!(!report.paths[1].near);
        assert!(report.paths[1].bounds.is_none());
        assert!(!report.rects[0].contains);
        assert_eq!(report.near_count(), 1);
    }

    #[test]
    fn transform_moves_paths_not_rects() {
        let text = r#"{
            "paths": [[0, 0, 0, 10, 0, 1]],
            "rects": [[0, 0, 1, 1]],
            "transform": [1, 0, 100, 0, 1, 0]
        }"#;
        let scene = Scene::parse(text).unwrap();
        assert_eq!(scene.paths[0].last_point(), Some(Point::new(110.0, 0.0)));
        assert_eq!(scene.rects[0], Rectangle::new(0.0, 0.0, 1.0, 1.0));
        let report = scene.query(Point::new(105.0, 0.0), 0.5);
        assert!(report.paths[0].near);
        assert!(report.paths[0].overlaps.is_empty());
    }

    #[test]
    fn bad_shapes_are_rejected() {
        assert!(Scene::parse(r#"{"paths": [[0, 0]]}"#).is_err());
        assert!(Scene::parse(r#"{"paths": [[0, 0, 7]]}"#).is_err());
        assert!(Scene::parse(r#"{"rects": [[0, 0, 1]]}"#).is_err());
        let err = Scene::parse(r#"{"rects": [[0, 0, -1, 2]]}"#).unwrap_err();
        assert!(err.to_string().contains("rect 0"));
        assert!(Scene::parse(r#"{"rects": [[0, 0, 3, -0.5]]}"#).is_err());
        assert!(Scene::parse(r#"{"rects": [[0, 0, 0, 0]]}"#).is_ok());
        assert!(Scene::parse(r#"{"transform": [1, 0, 0]}"#).is_err());
        assert!(Scene::parse("{}").unwrap().paths.is_empty());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scene.json");
        fs::write(&file, SCENE).unwrap();
        let scene = Scene::load(&file).unwrap();
        assert_eq!(scene.rects.len(), 2);
        assert!(Scene::load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn report_serializes() {
        let scene = Scene::parse(SCENE).unwrap();
        let json = serde_json::to_value(scene.query(Point::new(0.0, 0.0), 1.0)).unwrap();
        assert_eq!(json["point"]["x"], 0.0);
        assert_eq!(json["paths"][0]["distance"], 0.0);
        assert!(json["paths"][1]["distance"].is_null());
        assert_eq!(json["rects"][1]["rect"]["position"]["x"], 50.0);
    }
}
