//! `trail-core` — foundational types for the trail route planner.
//!
//! This crate is a dependency of every other `trail-*` crate.  It
//! intentionally has no `trail-*` dependencies and no mandatory external
//! ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `LocationId`                                           |
//! | [`geo`]    | `GeoPoint`, `ProjPoint`, Web Mercator projection       |
//! | [`params`] | `WalkParams` (speed and calorie constants)             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod geo;
pub mod ids;
pub mod params;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{polyline_length_m, GeoPoint, ProjPoint};
pub use ids::LocationId;
pub use params::WalkParams;
