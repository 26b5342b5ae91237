//! Spatial data structures for occupancy grids
//!
//! This module contains spatial-related functionality including:
//! - Occupancy sources and grid construction
//! - Cell state management
//! - Rectangle and box shape types with coordinate mapping

/// Occupancy grid construction and cell state management
pub mod grid;
/// Rectangle types and grid-to-world coordinate mapping
pub mod rect;

pub use grid::{CellState, FlatOccupancy, GridBuilder, OccupancyGrid, OccupancySource};
pub use rect::{BoxShape, CellRect, RegionBounds};
