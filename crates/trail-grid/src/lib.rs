//! `trail-grid` — cost raster grid and georeferencing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`cell`]      | `Cell` (row, column) grid index                      |
//! | [`transform`] | `GridTransform` — affine (col, row) ↔ (x, y) mapping |
//! | [`grid`]      | `CostGrid`, undefined-cell sanitization              |
//! | [`error`]     | `GridError`, `GridResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod cell;
pub mod error;
pub mod grid;
pub mod transform;


pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use grid::{CostGrid, UNDEFINED_COST_FACTOR};
pub use transform::GridTransform;
