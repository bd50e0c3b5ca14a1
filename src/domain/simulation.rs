//! Simulated price-path structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw simulation output from `/simulation-paths`.
///
/// A rectangular matrix: every path has the same number of steps, and
/// `mean_path` has one value per step. Produced entirely by the analytics
/// service; the core only reshapes it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathMatrix {
    pub paths: Vec<Vec<f64>>,
    pub mean_path: Vec<f64>,
}

/// One time step of the simulated price fan, chart-ready.
///
/// Serializes flat, so a point comes out as
/// `{"index": 1, "mean": 3.0, "path_0": 2.0, "path_1": 5.0}` and can be fed
/// to the chart layer directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub index: usize,
    /// Mean-path value at this step.
    pub mean: f64,
    /// Per-path values under stable `path_<i>` keys.
    #[serde(flatten)]
    pub paths: BTreeMap<String, f64>,
}

impl ChartPoint {
    /// Value of path `i` at this step, if present.
    pub fn path(&self, i: usize) -> Option<f64> {
        self.paths.get(&format!("path_{}", i)).copied()
    }
}

/// Chart-ready point stream, one point per time step.
pub type ChartPointSeries = Vec<ChartPoint>;
