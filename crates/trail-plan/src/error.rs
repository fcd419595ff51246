//! Planning-subsystem error type.
//!
//! Every error here is terminal for the current request: no partial route
//! is ever produced.

use thiserror::Error;

use trail_core::LocationId;
use trail_grid::{Cell, GridError};

/// Errors produced by `trail-plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// An endpoint lies outside the grid, or the cost field left it
    /// unreachable (the latter cannot occur on a sanitized grid).
    #[error("no least-cost path from {start} to {end}")]
    Unreachable { start: Cell, end: Cell },

    /// Fewer than two distinct sites selected.  This is a precondition the
    /// caller should detect before invoking the planner.
    #[error("selection has {sites} distinct site(s); need a start plus at least one more waypoint")]
    DegenerateSelection { sites: usize },

    #[error("{0} does not name a landmark in this planner's location set")]
    UnknownLocation(LocationId),
}

pub type PlanResult<T> = Result<T, PlanError>;
