//! Affine georeferencing between grid indices and projected coordinates.
//!
//! The transform follows the GDAL/rasterio coefficient convention:
//!
//! ```text
//! x = a·col + b·row + c
//! y = d·col + e·row + f
//! ```
//!
//! Applied to integer `(col, row)` it yields the cell's upper-left corner
//! (the usual pixel-corner convention).  The
//! inverse is precomputed at construction so per-point resolution is a
//! handful of multiply-adds.

use trail_core::ProjPoint;

use crate::{Cell, GridError, GridResult};

/// One-to-one affine mapping between (row, col) grid indices and (x, y)
/// projected coordinates.  Immutable for the lifetime of the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTransform {
    // Forward coefficients.
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    // Inverse of the 2x2 linear part, precomputed.
    inv_a: f64,
    inv_b: f64,
    inv_d: f64,
    inv_e: f64,
}

impl GridTransform {
    /// Build a transform from the six forward coefficients.
    ///
    /// Fails with [`GridError::SingularTransform`] when the linear part is
    /// not invertible, since a grid with such a transform could never
    /// resolve a coordinate back to a cell.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> GridResult<Self> {
        let det = a * e - b * d;
        if !det.is_finite() || det.abs() < f64::EPSILON {
            return Err(GridError::SingularTransform);
        }
        Ok(Self {
            a,
            b,
            c,
            d,
            e,
            f,
            inv_a: e / det,
            inv_b: -b / det,
            inv_d: -d / det,
            inv_e: a / det,
        })
    }

    /// The common north-up, square-cell raster: origin at the upper-left
    /// corner, `y` decreasing with row.
    pub fn north_up(origin_x: f64, origin_y: f64, cell_size: f64) -> GridResult<Self> {
        Self::new(cell_size, 0.0, origin_x, 0.0, -cell_size, origin_y)
    }

    /// Forward transform: cell → projected coordinate of its upper-left
    /// corner.
    #[inline]
    pub fn apply(&self, cell: Cell) -> ProjPoint {
        let col = cell.col as f64;
        let row = cell.row as f64;
        ProjPoint {
            x: self.a * col + self.b * row + self.c,
            y: self.d * col + self.e * row + self.f,
        }
    }

    /// Inverse transform: projected coordinate → fractional (row, col).
    ///
    /// Callers floor the result to obtain the containing cell; bounds
    /// checking is the grid's responsibility.
    #[inline]
    pub fn invert(&self, point: ProjPoint) -> (f64, f64) {
        let dx = point.x - self.c;
        let dy = point.y - self.f;
        let col = self.inv_a * dx + self.inv_b * dy;
        let row = self.inv_d * dx + self.inv_e * dy;
        (row, col)
    }
}
