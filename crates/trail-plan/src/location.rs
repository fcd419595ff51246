//! Landmarks resolved against the cost grid.
//!
//! A [`Location`] pairs the display coordinate (WGS-84) with the derived
//! grid cell used for routing.  Resolution happens once, when the user's
//! selection changes; a point outside the grid extent is rejected here,
//! before any pathfinding runs.
//!
//! [`LocationSet`] preserves insertion order — [`LocationId`]s are indices
//! into that order, and the greedy sequencer's tie-break depends on it —
//! and carries an R-tree so a free-form map point can be snapped to the
//! nearest landmark.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use trail_core::{GeoPoint, LocationId, ProjPoint};
use trail_grid::{Cell, CostGrid, GridResult};

// ── Location ──────────────────────────────────────────────────────────────────

/// A named landmark: geographic coordinate for display, grid cell for
/// routing.  Immutable once resolved.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub name: String,
    pub geo: GeoPoint,
    pub cell: Cell,
}

impl Location {
    /// Resolve a landmark whose projected coordinate is already known
    /// (i.e. supplied in the grid's CRS by the input loader).
    pub fn resolve(
        name: impl Into<String>,
        geo: GeoPoint,
        proj: ProjPoint,
        grid: &CostGrid,
    ) -> GridResult<Self> {
        let cell = grid.resolve(proj)?;
        Ok(Self { name: name.into(), geo, cell })
    }

    /// Resolve a WGS-84 landmark against a Web Mercator grid.
    pub fn resolve_wgs84(
        name: impl Into<String>,
        geo: GeoPoint,
        grid: &CostGrid,
    ) -> GridResult<Self> {
        Self::resolve(name, geo, geo.to_mercator(), grid)
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[lat, lon]` point with its `LocationId`.
#[derive(Clone)]
struct SiteEntry {
    point: [f64; 2],
    id: LocationId,
}

impl RTreeObject for SiteEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SiteEntry {
    /// Squared Euclidean distance in lat/lon space — sufficient for
    /// nearest-landmark queries within one walking region.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── LocationSet ───────────────────────────────────────────────────────────────

/// The landmarks available for selection, in input order.
///
/// `LocationId`s index this order; iteration and sequencing tie-breaks are
/// therefore reproducible for a given input file.
pub struct LocationSet {
    locations: Vec<Location>,
    spatial_idx: RTree<SiteEntry>,
}

impl LocationSet {
    /// Build a set from resolved locations, preserving their order.
    pub fn new(locations: Vec<Location>) -> Self {
        let entries: Vec<SiteEntry> = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| SiteEntry {
                point: [loc.geo.lat, loc.geo.lon],
                id: LocationId(i as u32),
            })
            .collect();
        Self {
            locations,
            spatial_idx: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i as u32), loc))
    }

    /// First landmark with the given name, if any.
    pub fn by_name(&self, name: &str) -> Option<LocationId> {
        self.iter().find(|(_, loc)| loc.name == name).map(|(id, _)| id)
    }

    /// Snap a free-form map point to the nearest landmark.
    ///
    /// Returns `None` only for an empty set.
    pub fn nearest(&self, point: GeoPoint) -> Option<LocationId> {
        self.spatial_idx
            .nearest_neighbor(&[point.lat, point.lon])
            .map(|e| e.id)
    }
}
