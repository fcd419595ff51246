//! `trail-plan` — the routing core: least-cost paths, tour sequencing, and
//! route assembly over a [`trail_grid::CostGrid`].
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`location`]   | `Location`, `LocationSet` (insertion-ordered + R-tree)  |
//! | [`pathfinder`] | `PathFinder` trait, `CellPath`, `DijkstraPathFinder`    |
//! | [`sequencer`]  | `TourStrategy` trait, `NearestNextStrategy`             |
//! | [`assembler`]  | `RouteAssembler`, `Route`, `Leg`, `RouteMetrics`        |
//! | [`planner`]    | `TourPlanner` facade + `TourPlannerBuilder`             |
//! | [`error`]      | `PlanError`, `PlanResult<T>`                            |
//!
//! # Pipeline
//!
//! A [`TourPlanner`] owns the sanitized grid, the landmark set, a path
//! finder, and a sequencing strategy.  [`TourPlanner::plan`] runs the whole
//! request synchronously: selection validation → greedy sequencing (each
//! pairwise cost is a full path search, cached within the pass) → leg
//! assembly into projected polylines and walking metrics.  The planner is
//! immutable shared state; independent requests may share one instance
//! across threads.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on route output types.   |

pub mod assembler;
pub mod error;
pub mod location;
pub mod pathfinder;
pub mod planner;
pub mod sequencer;

#[cfg(test)]
mod tests;

pub use assembler::{Leg, Route, RouteAssembler, RouteMetrics};
pub use error::{PlanError, PlanResult};
pub use location::{Location, LocationSet};
pub use pathfinder::{CellPath, DijkstraPathFinder, PathFinder};
pub use planner::{TourPlanner, TourPlannerBuilder};
pub use sequencer::{NearestNextStrategy, PairCostFn, TourStrategy};
