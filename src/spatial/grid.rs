//! Occupancy grid construction and cell state management
//!
//! Converts an occupancy source (anything that can answer "is there a tile at
//! this cell?") into a dense grid of cell states. The grid is the working
//! representation mutated by the cover solver: cells only ever move from
//! `Used` to `Covered`.

use std::fmt;
use std::ops::RangeInclusive;

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter, invalid_source};
use crate::spatial::rect::RegionBounds;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// No occupant
    #[default]
    Empty,
    /// Occupant present, not yet claimed by any rectangle
    Used,
    /// Claimed by an emitted rectangle
    Covered,
}

impl CellState {
    /// Single digit used when dumping a grid (`0` empty, `1` used, `2` covered)
    pub const fn digit(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Used => '1',
            Self::Covered => '2',
        }
    }
}

/// Read access to a rectangular region of occupied and empty cells
///
/// Coordinates are local to the region: `(0, 0)` is the minimum corner and
/// `y` grows upwards.
pub trait OccupancySource {
    /// Number of columns in the region
    fn width(&self) -> usize;

    /// Number of rows in the region
    fn height(&self) -> usize;

    /// Whether the cell at `(x, y)` holds an occupant
    ///
    /// Cells outside the region are reported as empty.
    fn is_occupied(&self, x: usize, y: usize) -> bool;

    /// Offset of the region's minimum corner in the caller's coordinate system
    fn origin(&self) -> [i32; 2] {
        [0, 0]
    }

    /// Region descriptor combining origin and dimensions
    fn bounds(&self) -> RegionBounds {
        let [x, y] = self.origin();
        RegionBounds::new(x, y, self.width(), self.height())
    }
}

/// Row-major occupancy data indexed `x + y * width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatOccupancy {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    origin: [i32; 2],
}

impl FlatOccupancy {
    /// Wrap a flat row-major cell buffer
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds the supported maximum or
    /// if the buffer length differs from `width * height`
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if cells.len() != expected {
            return Err(invalid_source(&format!(
                "region is {width}x{height} ({expected} cells) but {} cells were supplied",
                cells.len()
            )));
        }

        Ok(Self {
            width,
            height,
            cells,
            origin: [0, 0],
        })
    }

    /// Place the region's minimum corner at `origin`
    #[must_use]
    pub const fn with_origin(mut self, origin: [i32; 2]) -> Self {
        self.origin = origin;
        self
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }
}

impl OccupancySource for FlatOccupancy {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.width
            && y < self.height
            && self.cells.get(y * self.width + x).copied().unwrap_or(false)
    }

    fn origin(&self) -> [i32; 2] {
        self.origin
    }
}

/// Reject regions larger than [`MAX_GRID_DIMENSION`] along either axis
///
/// # Errors
///
/// Returns an error naming the offending dimension
pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "width",
            &width,
            &format!("exceeds the maximum grid dimension {MAX_GRID_DIMENSION}"),
        ));
    }
    if height > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "height",
            &height,
            &format!("exceeds the maximum grid dimension {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Dense grid of cell states indexed `[x, y]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<CellState>,
}

impl OccupancyGrid {
    /// Create a grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::default((width, height)),
        }
    }

    /// Build a grid directly from row-major occupancy flags
    ///
    /// # Errors
    ///
    /// Returns an error if `cells.len()` differs from `width * height`
    pub fn from_flat(width: usize, height: usize, cells: &[bool]) -> Result<Self> {
        let source = FlatOccupancy::new(width, height, cells.to_vec())?;
        Ok(GridBuilder::build(&source))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// State at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        self.cells.get([x, y]).copied()
    }

    /// Claim the cell at `(x, y)`
    ///
    /// Empty cells are never claimed; `Used` and `Covered` cells end up
    /// `Covered`. Returns whether the cell is now covered.
    pub fn mark_covered(&mut self, x: usize, y: usize) -> bool {
        match self.cells.get_mut([x, y]) {
            Some(cell) if *cell != CellState::Empty => {
                *cell = CellState::Covered;
                true
            }
            _ => false,
        }
    }

    /// Claim every cell of row `y` within `columns`
    pub fn cover_span(&mut self, y: usize, columns: RangeInclusive<usize>) {
        for x in columns {
            self.mark_covered(x, y);
        }
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Whether the grid has no columns or no rows
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for OccupancyGrid {
    // Top row first so the dump reads like the tilemap it came from
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let digit = self.get(x, y).unwrap_or_default().digit();
                write!(f, "{digit} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Converts occupancy sources into fresh grids
pub struct GridBuilder;

impl GridBuilder {
    /// Build a grid of identical dimensions: `Used` where occupied, else `Empty`
    pub fn build<S>(source: &S) -> OccupancyGrid
    where
        S: OccupancySource + ?Sized,
    {
        let cells = Array2::from_shape_fn((source.width(), source.height()), |(x, y)| {
            if source.is_occupied(x, y) {
                CellState::Used
            } else {
                CellState::Empty
            }
        });

        OccupancyGrid { cells }
    }
}
