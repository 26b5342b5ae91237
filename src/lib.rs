//! Greedy rectangle cover of tile occupancy grids
//!
//! The system turns a grid of occupied and empty cells into a small set of
//! axis-aligned rectangles whose union is exactly the occupied cells (or a
//! superset of them when overlap is allowed), then hands those rectangles to
//! a host as box colliders.

#![forbid(unsafe_code)]

/// Rectangle cover solver and cover validation
pub mod algorithm;
/// Host capability interface and collider generation
pub mod host;
/// Input/output operations and error handling
pub mod io;
/// Occupancy grids, rectangles and coordinate mapping
pub mod spatial;

pub use algorithm::cover::{OverlapPolicy, RectangleCoverSolver, cover_source, solve};
pub use io::error::{CoverError, Result};
pub use spatial::{CellRect, CellState, GridBuilder, OccupancyGrid, OccupancySource};
