//! Cost raster loading from headerless CSV.
//!
//! One CSV row per grid row, one field per cell.  Empty fields, literal
//! `nan`, and values equal to the optional `nodata` marker all become
//! undefined (NaN) cells — the planner substitutes those during
//! sanitization.  Georeferencing is not part of the file; the caller
//! supplies the affine transform alongside.

use std::path::Path;

use trail_grid::{CostGrid, GridTransform};

use crate::{LoadError, LoadResult};

/// Load a cost grid from `path`.
///
/// Ragged rows and invalid cost values are rejected (via
/// [`GridError`](trail_grid::GridError)); unparseable fields fail with
/// [`LoadError::BadValue`].
pub fn load_cost_csv(
    path: &Path,
    transform: GridTransform,
    nodata: Option<f64>,
) -> LoadResult<CostGrid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let mut row = Vec::with_capacity(record.len());
        for (col_idx, field) in record.iter().enumerate() {
            row.push(parse_cost(field, nodata).ok_or_else(|| LoadError::BadValue {
                row: row_idx,
                col: col_idx,
                value: field.to_string(),
            })?);
        }
        rows.push(row);
    }

    Ok(CostGrid::from_rows(rows, transform)?)
}

/// Parse one field; `None` means unparseable (distinct from NaN, which is a
/// valid undefined cell).
fn parse_cost(field: &str, nodata: Option<f64>) -> Option<f64> {
    if field.is_empty() {
        return Some(f64::NAN);
    }
    let value: f64 = field.parse().ok()?;
    match nodata {
        Some(marker) if value == marker => Some(f64::NAN),
        _ => Some(value),
    }
}
