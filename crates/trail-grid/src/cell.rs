//! Grid cell index type.

use std::fmt;

/// A (row, column) index into a [`CostGrid`](crate::CostGrid).
///
/// `row` grows downward (south in a north-up raster), `col` grows eastward.
/// The linear row-major index `row * cols + col` is the canonical ordering
/// used for deterministic tie-breaking in the path search.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Row-major linear index for a grid `cols` wide.
    #[inline]
    pub fn linear(self, cols: usize) -> usize {
        self.row as usize * cols + self.col as usize
    }

    /// Inverse of [`linear`](Self::linear).
    #[inline]
    pub fn from_linear(index: usize, cols: usize) -> Self {
        Self {
            row: (index / cols) as u32,
            col: (index % cols) as u32,
        }
    }

    /// `true` if `other` is one of this cell's 8 neighbors.
    pub fn is_adjacent(self, other: Cell) -> bool {
        let dr = (self.row as i64 - other.row as i64).abs();
        let dc = (self.col as i64 - other.col as i64).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
