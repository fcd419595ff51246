//! Landmark loading from a GeoJSON FeatureCollection of Point features.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use trail_core::GeoPoint;
use trail_grid::CostGrid;
use trail_plan::{Location, LocationSet};

use crate::{LoadError, LoadResult};

/// Property key holding the landmark name unless the caller overrides it.
const DEFAULT_NAME_KEY: &str = "name";

/// A named landmark as read from disk: WGS-84 coordinate, not yet resolved
/// against any grid.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Site {
    pub name: String,
    pub geo: GeoPoint,
}

// ── GeoJSON wire structs ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct FeatureCollection {
    pub(crate) features: Vec<Feature>,
}

#[derive(Deserialize)]
pub(crate) struct Feature {
    #[serde(default)]
    properties: serde_json::Map<String, Value>,
    pub(crate) geometry: Geometry,
}

/// The geometry kinds the loaders accept.  Positions are `Vec<f64>` because
/// GeoJSON allows a third (elevation) ordinate, which is ignored.
#[derive(Deserialize)]
#[serde(tag = "type")]
pub(crate) enum Geometry {
    Point { coordinates: Vec<f64> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

/// GeoJSON positions are `[lon, lat, ...]`. `ring` and `position` locate
/// the position within its feature; a Point is its own ring 0, position 0.
pub(crate) fn position(
    pos: &[f64],
    feature: usize,
    ring: usize,
    position: usize,
) -> LoadResult<GeoPoint> {
    match pos {
        [lon, lat, ..] => Ok(GeoPoint::new(*lat, *lon)),
        _ => Err(LoadError::BadPosition { feature, ring, position }),
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

/// Load sites whose name lives under the `"name"` property.
pub fn load_sites(path: &Path) -> LoadResult<Vec<Site>> {
    load_sites_with_key(path, DEFAULT_NAME_KEY)
}

/// Load sites with a custom name property key (e.g. `"Landmark"` for layers
/// exported with a domain-specific schema).
///
/// Feature order in the file is preserved — it becomes the `LocationId`
/// order and thereby the sequencer's tie-break order.
pub fn load_sites_with_key(path: &Path, name_key: &str) -> LoadResult<Vec<Site>> {
    let collection: FeatureCollection = serde_json::from_str(&fs::read_to_string(path)?)?;

    let mut sites = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.iter().enumerate() {
        let Geometry::Point { coordinates } = &feature.geometry else {
            return Err(LoadError::NotAPoint { index });
        };
        let name = feature
            .properties
            .get(name_key)
            .and_then(Value::as_str)
            .ok_or_else(|| LoadError::MissingName { index, key: name_key.to_string() })?;
        sites.push(Site {
            name: name.to_string(),
            geo: position(coordinates, index, 0, 0)?,
        });
    }
    Ok(sites)
}

/// Resolve loaded sites against a Web Mercator grid into a [`LocationSet`],
/// preserving file order.
///
/// A site outside the grid extent fails the whole call (no partial set):
/// selection-time routing must never see an unresolvable landmark.
pub fn resolve_all(sites: &[Site], grid: &CostGrid) -> LoadResult<LocationSet> {
    let mut locations = Vec::with_capacity(sites.len());
    for site in sites {
        locations.push(Location::resolve_wgs84(&*site.name, site.geo, grid)?);
    }
    Ok(LocationSet::new(locations))
}
