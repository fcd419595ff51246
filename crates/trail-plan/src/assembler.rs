//! Route assembly: ordered sequence → concrete legs, polylines, metrics.

use trail_core::{polyline_length_m, GeoPoint, LocationId, ProjPoint, WalkParams};
use trail_grid::{Cell, CostGrid};

use crate::{LocationSet, PathFinder, PlanError, PlanResult};

// ── Route output types ────────────────────────────────────────────────────────

/// One point-to-point segment of a multi-stop route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from: LocationId,
    pub to: LocationId,
    /// Grid cells traversed, endpoints inclusive.
    pub cells: Vec<Cell>,
    /// The cells mapped through the grid's forward transform (the raster's
    /// projected CRS). Geographic map displays want [`Leg::polyline_wgs84`].
    pub polyline: Vec<ProjPoint>,
    /// Accumulated traversal cost of this leg.
    pub cost: f64,
    /// Geometric polyline length in metres.
    pub length_m: f64,
}

impl Leg {
    /// The leg polyline in WGS-84 latitude/longitude, for geographic map
    /// displays. Assumes the grid CRS is Web Mercator, the planner's
    /// convention for WGS-84 inputs.
    pub fn polyline_wgs84(&self) -> Vec<GeoPoint> {
        self.polyline.iter().map(|p| p.to_wgs84()).collect()
    }
}

/// Route-level summary metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub time_h: f64,
    /// Number of sites visited, the start included.
    pub sites: usize,
    pub calories_kcal: f64,
}

impl RouteMetrics {
    /// Derive metrics from a total distance under the given walking model.
    pub fn from_distance(distance_km: f64, sites: usize, walk: WalkParams) -> Self {
        Self {
            distance_km,
            time_h: distance_km / walk.speed_kmh,
            sites,
            calories_kcal: distance_km * walk.kcal_per_km,
        }
    }
}

/// A fully materialized route: visiting order, per-leg geometry, metrics.
///
/// Derived data only — it references grid cells but holds no grid state,
/// and is recomputed in full whenever the selection changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Visiting order, starting with the chosen start landmark.
    pub order: Vec<LocationId>,
    /// One leg per consecutive pair in `order`.
    pub legs: Vec<Leg>,
    pub metrics: RouteMetrics,
}

impl Route {
    /// Sum of the legs' traversal costs.
    pub fn total_cost(&self) -> f64 {
        self.legs.iter().map(|l| l.cost).sum()
    }
}

// ── RouteAssembler ────────────────────────────────────────────────────────────

/// Materializes an ordered landmark sequence into a [`Route`].
///
/// Deterministic: the same ordered sequence over the same grid yields
/// identical polylines and metrics.
pub struct RouteAssembler {
    walk: WalkParams,
}

impl RouteAssembler {
    pub fn new(walk: WalkParams) -> Self {
        Self { walk }
    }

    /// Run the path finder on each consecutive pair of `order`, map the
    /// cell paths into projected polylines, and accumulate metrics.
    pub fn assemble(
        &self,
        grid: &CostGrid,
        finder: &dyn PathFinder,
        locations: &LocationSet,
        order: &[LocationId],
    ) -> PlanResult<Route> {
        let mut legs = Vec::with_capacity(order.len().saturating_sub(1));
        let mut total_m = 0.0;

        for pair in order.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let from_cell = locations.get(from).ok_or(PlanError::UnknownLocation(from))?.cell;
            let to_cell = locations.get(to).ok_or(PlanError::UnknownLocation(to))?.cell;

            let path = finder.least_cost_path(grid, from_cell, to_cell)?;
            let polyline: Vec<ProjPoint> = path.cells.iter().map(|&c| grid.proj(c)).collect();
            let length_m = polyline_length_m(&polyline);
            total_m += length_m;

            legs.push(Leg {
                from,
                to,
                cells: path.cells,
                polyline,
                cost: path.total_cost,
                length_m,
            });
        }

        Ok(Route {
            order: order.to_vec(),
            legs,
            metrics: RouteMetrics::from_distance(total_m / 1000.0, order.len(), self.walk),
        })
    }
}

impl Default for RouteAssembler {
    fn default() -> Self {
        Self::new(WalkParams::default())
    }
}
