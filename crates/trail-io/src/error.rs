//! Loader error type.

use thiserror::Error;

use trail_grid::GridError;

/// Errors produced by `trail-io`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("GeoJSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("row {row}, column {col}: cannot parse {value:?} as a cost value")]
    BadValue { row: usize, col: usize, value: String },

    #[error("feature {index}: expected a Point geometry")]
    NotAPoint { index: usize },

    #[error("feature {index}: missing or non-string property {key:?}")]
    MissingName { index: usize, key: String },

    #[error("feature {feature}, ring {ring}, position {position}: GeoJSON position has fewer than two ordinates")]
    BadPosition { feature: usize, ring: usize, position: usize },

    #[error("boundary file contains no Polygon or MultiPolygon features")]
    NoBoundaryPolygons,
}

pub type LoadResult<T> = Result<T, LoadError>;
