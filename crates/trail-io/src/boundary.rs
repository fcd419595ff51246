//! Region boundary loading.
//!
//! The boundary is display-only: the presentation layer draws it around
//! the map, and routing never consults it.

use std::fs;
use std::path::Path;

use trail_core::GeoPoint;

use crate::sites::{position, FeatureCollection, Geometry};
use crate::{LoadError, LoadResult};

/// A region outline: one or more closed rings of WGS-84 points.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Boundary {
    pub rings: Vec<Vec<GeoPoint>>,
}

impl Boundary {
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// Load every Polygon/MultiPolygon ring from a GeoJSON FeatureCollection.
///
/// Point features in the file are skipped; a file with no polygonal
/// feature at all fails with [`LoadError::NoBoundaryPolygons`].
pub fn load_boundary(path: &Path) -> LoadResult<Boundary> {
    let collection: FeatureCollection = serde_json::from_str(&fs::read_to_string(path)?)?;

    let mut rings: Vec<Vec<GeoPoint>> = Vec::new();
    for (index, feature) in collection.features.iter().enumerate() {
        match &feature.geometry {
            Geometry::Polygon { coordinates } => {
                for (r, ring) in coordinates.iter().enumerate() {
                    rings.push(convert_ring(ring, index, r)?);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                // Ring index counts across the polygons of the feature.
                let mut r = 0;
                for polygon in coordinates {
                    for ring in polygon {
                        rings.push(convert_ring(ring, index, r)?);
                        r += 1;
                    }
                }
            }
            Geometry::Point { .. } => continue,
        }
    }

    if rings.is_empty() {
        return Err(LoadError::NoBoundaryPolygons);
    }
    Ok(Boundary { rings })
}

fn convert_ring(ring: &[Vec<f64>], feature: usize, ring_idx: usize) -> LoadResult<Vec<GeoPoint>> {
    ring.iter()
        .enumerate()
        .map(|(p, pos)| position(pos, feature, ring_idx, p))
        .collect()
}
