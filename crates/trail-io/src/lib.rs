//! `trail-io` — file loaders for the planner's geospatial inputs.
//!
//! The routing core treats its inputs as injected dependencies; this crate
//! supplies the concrete loaders:
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`raster`]   | `load_cost_csv` — cost grid from headerless CSV         |
//! | [`sites`]    | `Site`, `load_sites`, `resolve_all` (GeoJSON points)    |
//! | [`boundary`] | `Boundary`, `load_boundary` (display-only polygon)      |
//! | [`error`]    | `LoadError`, `LoadResult<T>`                            |
//!
//! File discovery (globbing a working directory) is deliberately not here:
//! callers pass explicit paths.

pub mod boundary;
pub mod error;
pub mod raster;
pub mod sites;


pub use boundary::{load_boundary, Boundary};
pub use error::{LoadError, LoadResult};
pub use raster::load_cost_csv;
pub use sites::{load_sites, load_sites_with_key, resolve_all, Site};
