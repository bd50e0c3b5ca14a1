//! Reshaping of simulated price paths into a chart-ready point stream.

use crate::domain::{ChartPoint, ChartPointSeries, PathMatrix};
use std::collections::BTreeMap;
use thiserror::Error;

/// Invalid path matrix received from the analytics service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("path matrix contains no paths")]
    Empty,

    #[error("ragged path matrix: path {path} has {found} steps, expected {expected}")]
    Ragged {
        path: usize,
        expected: usize,
        found: usize,
    },

    #[error("mean path has {found} steps, expected {expected}")]
    MeanMismatch { expected: usize, found: usize },
}

/// Pivots a row-per-path matrix into one point per time step.
///
/// Each point carries every path's value at that step under a stable
/// `path_<i>` key plus the mean-path value. A ragged matrix is an upstream
/// bug and is surfaced to the caller, never truncated or padded. Pure;
/// no state is shared between calls.
pub fn reshape(matrix: &PathMatrix) -> Result<ChartPointSeries, ShapeError> {
    let Some(first) = matrix.paths.first() else {
        return Err(ShapeError::Empty);
    };
    let steps = first.len();

    for (i, path) in matrix.paths.iter().enumerate() {
        if path.len() != steps {
            return Err(ShapeError::Ragged {
                path: i,
                expected: steps,
                found: path.len(),
            });
        }
    }
    if matrix.mean_path.len() != steps {
        return Err(ShapeError::MeanMismatch {
            expected: steps,
            found: matrix.mean_path.len(),
        });
    }

    let mut series = Vec::with_capacity(steps);
    for step in 0..steps {
        let mut paths = BTreeMap::new();
        for (i, path) in matrix.paths.iter().enumerate() {
            paths.insert(format!("path_{}", i), path[step]);
        }
        series.push(ChartPoint {
            index: step,
            mean: matrix.mean_path[step],
            paths,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests;
