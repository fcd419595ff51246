//! Walking-model constants used when deriving route metrics.

/// Assumed walking speed and energy expenditure.
///
/// The defaults (5 km/h, 60 kcal/km) are the values route metrics are
/// defined against; change them only when compatibility with existing
/// metric output does not matter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkParams {
    /// Walking speed in km/h.
    pub speed_kmh: f64,
    /// Energy expenditure in kcal per walked km.
    pub kcal_per_km: f64,
}

impl WalkParams {
    pub fn new(speed_kmh: f64, kcal_per_km: f64) -> Self {
        Self { speed_kmh, kcal_per_km }
    }
}

impl Default for WalkParams {
    fn default() -> Self {
        Self { speed_kmh: 5.0, kcal_per_km: 60.0 }
    }
}
