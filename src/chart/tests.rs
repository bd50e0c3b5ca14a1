//! Tests for the path reshaper.

use super::*;

fn matrix(paths: Vec<Vec<f64>>, mean_path: Vec<f64>) -> PathMatrix {
    PathMatrix { paths, mean_path }
}

#[test]
fn test_reshape_two_paths() {
    let series = reshape(&matrix(
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        vec![2.0, 3.0, 4.0],
    ))
    .unwrap();

    assert_eq!(series.len(), 3);
    let point = &series[1];
    assert_eq!(point.index, 1);
    assert_eq!(point.path(0), Some(2.0));
    assert_eq!(point.path(1), Some(5.0));
    assert_eq!(point.mean, 3.0);
}

#[test]
fn test_reshape_preserves_ordering() {
    let series = reshape(&matrix(vec![vec![10.0, 20.0, 30.0]], vec![10.0, 20.0, 30.0])).unwrap();
    let indices: Vec<usize> = series.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_reshape_serializes_flat_path_keys() {
    let series = reshape(&matrix(
        vec![vec![1.0], vec![2.0]],
        vec![1.5],
    ))
    .unwrap();

    let json = serde_json::to_value(&series[0]).unwrap();
    assert_eq!(json["index"], 0);
    assert_eq!(json["mean"], 1.5);
    assert_eq!(json["path_0"], 1.0);
    assert_eq!(json["path_1"], 2.0);
}

#[test]
fn test_reshape_empty_matrix_fails() {
    let err = reshape(&matrix(vec![], vec![])).unwrap_err();
    assert_eq!(err, ShapeError::Empty);
}

#[test]
fn test_reshape_ragged_matrix_fails() {
    let err = reshape(&matrix(
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]],
        vec![2.0, 3.0, 4.0],
    ))
    .unwrap_err();

    assert_eq!(
        err,
        ShapeError::Ragged {
            path: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_reshape_mean_length_mismatch_fails() {
    let err = reshape(&matrix(vec![vec![1.0, 2.0]], vec![1.0])).unwrap_err();
    assert_eq!(
        err,
        ShapeError::MeanMismatch {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_reshape_is_pure() {
    let m = matrix(vec![vec![1.0, 2.0]], vec![1.0, 2.0]);
    assert_eq!(reshape(&m).unwrap(), reshape(&m).unwrap());
}
