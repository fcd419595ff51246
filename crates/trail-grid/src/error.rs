//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `trail-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("point ({x:.2}, {y:.2}) resolves outside the {rows}x{cols} grid")]
    OutOfBounds { x: f64, y: f64, rows: usize, cols: usize },

    #[error("{rows}x{cols} grid expects {expected} values, got {got}")]
    ShapeMismatch { rows: usize, cols: usize, expected: usize, got: usize },

    #[error("grid has zero rows or columns")]
    EmptyGrid,

    #[error("cell ({row}, {col}) holds invalid cost {value} (must be finite and non-negative, or NaN for undefined)")]
    InvalidCost { row: usize, col: usize, value: f64 },

    #[error("affine transform is singular (determinant ~ 0) and cannot be inverted")]
    SingularTransform,

    #[error("grid has no defined cells; cannot derive a sanitization value")]
    NoDefinedCells,
}

pub type GridResult<T> = Result<T, GridError>;
