//! Coordinate types and the Web Mercator forward projection.
//!
//! Two coordinate spaces appear throughout the planner:
//!
//! - [`GeoPoint`] — WGS-84 latitude/longitude, used for display and as the
//!   input form of site coordinates.
//! - [`ProjPoint`] — a meters-based projected coordinate (the CRS of the
//!   cost raster, e.g. EPSG:3857), used for routing and length accumulation.
//!
//! Both use `f64`: Mercator ordinates reach ±2·10⁷ m and polyline lengths
//! are accumulated over thousands of cells, so single precision would lose
//! meters over a route.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// WGS-84 / Web Mercator sphere radius, metres (EPSG:3857).
const MERCATOR_R: f64 = 6_378_137.0;

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Forward Web Mercator (EPSG:3857) projection.
    ///
    /// Valid for |lat| < 85.06°; beyond that the projection diverges, which
    /// no walking region approaches.
    pub fn to_mercator(self) -> ProjPoint {
        let x = MERCATOR_R * self.lon.to_radians();
        let y = MERCATOR_R * (std::f64::consts::FRAC_PI_4 + self.lat.to_radians() * 0.5)
            .tan()
            .ln();
        ProjPoint { x, y }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// A point in the cost raster's projected coordinate system.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres (the CRS is length-preserving by
    /// contract, so no geodesic correction is applied).
    #[inline]
    pub fn distance_m(self, other: ProjPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Inverse Web Mercator (EPSG:3857) projection, the counterpart of
    /// [`GeoPoint::to_mercator`].  Used to hand polylines to geographic
    /// (lat/lon) map displays.
    pub fn to_wgs84(self) -> GeoPoint {
        let lon = (self.x / MERCATOR_R).to_degrees();
        let lat = (2.0 * (self.y / MERCATOR_R).exp().atan() - std::f64::consts::FRAC_PI_2)
            .to_degrees();
        GeoPoint { lat, lon }
    }
}

impl std::fmt::Display for ProjPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Total length of a polyline in metres; 0 for fewer than two points.
pub fn polyline_length_m(points: &[ProjPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| w[0].distance_m(w[1]))
        .sum()
}
