//! The `TourPlanner` facade and its builder.
//!
//! A planner is the explicit, immutable per-session context: the sanitized
//! grid, the landmark set, and the pluggable algorithm parts.  Each
//! [`TourPlanner::plan`] call is an independent, stateless unit of work, so
//! one planner may serve concurrent requests with no coordination beyond
//! read-sharing.

use rustc_hash::FxHashMap;

use trail_core::{LocationId, WalkParams};
use trail_grid::CostGrid;

use crate::{
    DijkstraPathFinder, LocationSet, NearestNextStrategy, PathFinder, PlanError, PlanResult,
    Route, RouteAssembler, TourStrategy,
};

// ── TourPlanner ───────────────────────────────────────────────────────────────

/// Session context for route planning.
///
/// Construct with [`TourPlanner::new`] for the default algorithms, or via
/// [`TourPlannerBuilder`] to swap the path finder or sequencing strategy.
pub struct TourPlanner<F: PathFinder = DijkstraPathFinder, S: TourStrategy = NearestNextStrategy> {
    /// Sanitized copy of the session grid (fully defined, routable).
    grid: CostGrid,
    locations: LocationSet,
    finder: F,
    strategy: S,
    walk: WalkParams,
}

impl TourPlanner {
    /// Planner with the default Dijkstra search, greedy nearest-next
    /// sequencing, and default walking parameters.
    ///
    /// Sanitizes `grid` up front; fails with
    /// [`GridError::NoDefinedCells`](trail_grid::GridError::NoDefinedCells)
    /// when the raster holds no defined value.
    pub fn new(grid: &CostGrid, locations: LocationSet) -> PlanResult<Self> {
        TourPlannerBuilder::new(grid, locations).build()
    }
}

impl<F: PathFinder, S: TourStrategy> TourPlanner<F, S> {
    /// The sanitized grid this planner routes over.
    pub fn grid(&self) -> &CostGrid {
        &self.grid
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    pub fn walk_params(&self) -> WalkParams {
        self.walk
    }

    /// Compute the full route for a selection.
    ///
    /// `waypoints` is the set of chosen landmarks (it may include `start`;
    /// duplicates are ignored, first occurrence wins).  The whole pipeline
    /// runs synchronously: validation → sequencing → assembly.
    ///
    /// # Errors
    ///
    /// - [`PlanError::UnknownLocation`] — an id outside the location set.
    /// - [`PlanError::DegenerateSelection`] — fewer than two distinct sites.
    /// - [`PlanError::Unreachable`] — propagated from the path search.
    pub fn plan(&self, start: LocationId, waypoints: &[LocationId]) -> PlanResult<Route> {
        if self.locations.get(start).is_none() {
            return Err(PlanError::UnknownLocation(start));
        }
        for &w in waypoints {
            if self.locations.get(w).is_none() {
                return Err(PlanError::UnknownLocation(w));
            }
        }

        // Distinct waypoints besides the start, input order preserved.
        let mut others: Vec<LocationId> = Vec::with_capacity(waypoints.len());
        for &w in waypoints {
            if w != start && !others.contains(&w) {
                others.push(w);
            }
        }
        if others.is_empty() {
            return Err(PlanError::DegenerateSelection { sites: 1 });
        }

        // Pairwise cost oracle with a symmetric within-pass cache: the
        // greedy scan asks for O(n²) pairs but only O(n²)/2 are distinct.
        let mut cache: FxHashMap<(LocationId, LocationId), f64> = FxHashMap::default();
        let grid = &self.grid;
        let finder = &self.finder;
        let locations = &self.locations;
        let mut pair_cost = |a: LocationId, b: LocationId| -> PlanResult<f64> {
            let key = if a <= b { (a, b) } else { (b, a) };
            if let Some(&c) = cache.get(&key) {
                return Ok(c);
            }
            let from = locations.get(a).ok_or(PlanError::UnknownLocation(a))?.cell;
            let to = locations.get(b).ok_or(PlanError::UnknownLocation(b))?.cell;
            let c = finder.least_cost_path(grid, from, to)?.total_cost;
            cache.insert(key, c);
            Ok(c)
        };

        let order = self.strategy.order(start, &others, &mut pair_cost)?;
        RouteAssembler::new(self.walk).assemble(grid, finder, locations, &order)
    }
}

// ── TourPlannerBuilder ────────────────────────────────────────────────────────

/// Fluent builder for [`TourPlanner`].
///
/// # Example
///
/// ```rust,ignore
/// let planner = TourPlannerBuilder::new(&grid, locations)
///     .walk_params(WalkParams::new(4.0, 70.0))
///     .build()?;
/// let route = planner.plan(start, &selection)?;
/// ```
pub struct TourPlannerBuilder<F: PathFinder = DijkstraPathFinder, S: TourStrategy = NearestNextStrategy>
{
    grid: CostGrid,
    locations: LocationSet,
    finder: F,
    strategy: S,
    walk: WalkParams,
}

impl TourPlannerBuilder {
    /// Builder with the default algorithm parts.  `grid` is the raw session
    /// raster; sanitization happens in [`build`](Self::build).
    pub fn new(grid: &CostGrid, locations: LocationSet) -> Self {
        Self {
            grid: grid.clone(),
            locations,
            finder: DijkstraPathFinder,
            strategy: NearestNextStrategy,
            walk: WalkParams::default(),
        }
    }
}

impl<F: PathFinder, S: TourStrategy> TourPlannerBuilder<F, S> {
    /// Replace the path search implementation.
    pub fn finder<F2: PathFinder>(self, finder: F2) -> TourPlannerBuilder<F2, S> {
        TourPlannerBuilder {
            grid: self.grid,
            locations: self.locations,
            finder,
            strategy: self.strategy,
            walk: self.walk,
        }
    }

    /// Replace the sequencing strategy (e.g. an exact solver for small
    /// waypoint counts).
    pub fn strategy<S2: TourStrategy>(self, strategy: S2) -> TourPlannerBuilder<F, S2> {
        TourPlannerBuilder {
            grid: self.grid,
            locations: self.locations,
            finder: self.finder,
            strategy,
            walk: self.walk,
        }
    }

    /// Override the walking-model constants (defaults: 5 km/h, 60 kcal/km).
    pub fn walk_params(mut self, walk: WalkParams) -> Self {
        self.walk = walk;
        self
    }

    /// Sanitize the grid and produce a ready planner.
    pub fn build(self) -> PlanResult<TourPlanner<F, S>> {
        let grid = self.grid.sanitized()?;
        Ok(TourPlanner {
            grid,
            locations: self.locations,
            finder: self.finder,
            strategy: self.strategy,
            walk: self.walk,
        })
    }
}
