//! The cost raster.
//!
//! # Undefined cells
//!
//! Nodata cells are stored as `f64::NAN`.  The path search requires a fully
//! defined grid, so callers obtain a routable copy via [`CostGrid::sanitized`],
//! which substitutes every undefined cell with a large finite sentinel:
//! `UNDEFINED_COST_FACTOR × max-defined-value`.  The sentinel keeps such
//! cells avoidable but never literally impassable — a route may still cross
//! one when no alternative exists.

use trail_core::ProjPoint;

use crate::{Cell, GridError, GridResult, GridTransform};

/// Sanitization multiplier: undefined cells cost this many times the most
/// expensive defined cell.  Tunable via
/// [`CostGrid::sanitized_with`].
pub const UNDEFINED_COST_FACTOR: f64 = 10.0;

/// An immutable rectangular grid of per-cell traversal costs plus the
/// affine mapping to the raster's projected coordinate system.
///
/// Defined costs are finite and non-negative; undefined cells are NaN.
/// Never mutated after construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGrid {
    rows: usize,
    cols: usize,
    /// Row-major cost values, length `rows * cols`.
    data: Vec<f64>,
    transform: GridTransform,
}

impl CostGrid {
    /// Build a grid from row-major data.
    ///
    /// Validates shape and cost values: every non-NaN value must be finite
    /// and non-negative.
    pub fn from_vec(
        rows: usize,
        cols: usize,
        data: Vec<f64>,
        transform: GridTransform,
    ) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if data.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                expected: rows * cols,
                got: data.len(),
            });
        }
        for (i, &v) in data.iter().enumerate() {
            if !v.is_nan() && (!v.is_finite() || v < 0.0) {
                return Err(GridError::InvalidCost {
                    row: i / cols,
                    col: i % cols,
                    value: v,
                });
            }
        }
        Ok(Self { rows, cols, data, transform })
    }

    /// Build a grid from nested rows (test and loader convenience).
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>, transform: GridTransform) -> GridResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
            return Err(GridError::ShapeMismatch {
                rows: n_rows,
                cols: n_cols,
                expected: n_cols,
                got: bad.len(),
            });
        }
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Self::from_vec(n_rows, n_cols, data, transform)
    }

    // ── Dimensions & access ───────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (cell.row as usize) < self.rows && (cell.col as usize) < self.cols
    }

    /// Cost of `cell`.  NaN for undefined cells.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds; check [`in_bounds`](Self::in_bounds)
    /// first when the cell does not come from this grid.
    #[inline]
    pub fn cost(&self, cell: Cell) -> f64 {
        self.data[cell.linear(self.cols)]
    }

    #[inline]
    pub fn is_undefined(&self, cell: Cell) -> bool {
        self.cost(cell).is_nan()
    }

    /// `true` when no cell is NaN (e.g. after sanitization).
    pub fn is_fully_defined(&self) -> bool {
        self.data.iter().all(|v| !v.is_nan())
    }

    // ── Coordinate mapping ────────────────────────────────────────────────

    /// Resolve a projected coordinate to the containing cell.
    ///
    /// Fails with [`GridError::OutOfBounds`] when the point falls outside
    /// the grid extent — callers surface this before any pathfinding.
    pub fn resolve(&self, point: ProjPoint) -> GridResult<Cell> {
        let (row_f, col_f) = self.transform.invert(point);
        let row = row_f.floor();
        let col = col_f.floor();
        if row < 0.0 || col < 0.0 || row >= self.rows as f64 || col >= self.cols as f64 {
            return Err(GridError::OutOfBounds {
                x: point.x,
                y: point.y,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Cell::new(row as u32, col as u32))
    }

    /// Projected coordinate of `cell` (upper-left corner, matching the
    /// forward transform convention).
    #[inline]
    pub fn proj(&self, cell: Cell) -> ProjPoint {
        self.transform.apply(cell)
    }

    // ── Sanitization ──────────────────────────────────────────────────────

    /// Largest defined cost in the grid, or `None` if every cell is NaN.
    pub fn max_defined(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// Derived grid with every undefined cell replaced by
    /// [`UNDEFINED_COST_FACTOR`] × the maximum defined value.
    pub fn sanitized(&self) -> GridResult<CostGrid> {
        self.sanitized_with(UNDEFINED_COST_FACTOR)
    }

    /// Sanitize with a custom multiplier.
    ///
    /// Fails with [`GridError::NoDefinedCells`] when the grid holds no
    /// defined value to derive the sentinel from.
    pub fn sanitized_with(&self, factor: f64) -> GridResult<CostGrid> {
        if self.is_fully_defined() {
            return Ok(self.clone());
        }
        let sentinel = self.max_defined().ok_or(GridError::NoDefinedCells)? * factor;
        let data = self
            .data
            .iter()
            .map(|&v| if v.is_nan() { sentinel } else { v })
            .collect();
        Ok(CostGrid {
            rows: self.rows,
            cols: self.cols,
            data,
            transform: self.transform,
        })
    }
}
