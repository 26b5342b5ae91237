//! Rectangle types and the mapping from grid cells to world-space boxes

use std::fmt;

/// Axis-aligned rectangle in grid-local cell units
///
/// The origin is the inclusive minimum corner; width and height are at
/// least one cell for every rectangle the solver emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Minimum column (inclusive)
    pub x: usize,
    /// Minimum row (inclusive)
    pub y: usize,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl CellRect {
    /// Create a rectangle from its minimum corner and size
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of cells inside the rectangle
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// One past the last column
    pub const fn end_x(&self) -> usize {
        self.x + self.width
    }

    /// One past the last row
    pub const fn end_y(&self) -> usize {
        self.y + self.height
    }

    /// Whether the cell `(x, y)` lies inside the rectangle
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.end_x() && y >= self.y && y < self.end_y()
    }

    /// Whether the two rectangles share at least one cell
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.end_x()
            && other.x < self.end_x()
            && self.y < other.end_y()
            && other.y < self.end_y()
    }

    /// Every cell of the rectangle, column by column
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (self.x..self.end_x()).flat_map(move |x| (self.y..self.end_y()).map(move |y| (x, y)))
    }
}

impl fmt::Display for CellRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Region covered by an occupancy source in the caller's coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionBounds {
    /// Minimum corner x in caller coordinates
    pub x: i32,
    /// Minimum corner y in caller coordinates
    pub y: i32,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl RegionBounds {
    /// Create a region from its minimum corner and size
    pub const fn new(x: i32, y: i32, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region holds no cells at all
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of cells in the region
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Box collider shape in the caller's coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    /// Center of the box
    pub center: [f64; 2],
    /// Full extent of the box along each axis
    pub size: [f64; 2],
}

impl BoxShape {
    /// Translate a grid-local rectangle into a centered box
    ///
    /// The box is centered at `region origin + rect origin + size / 2`, so a
    /// one-cell rectangle at the region's minimum corner is centered half a
    /// cell inside it.
    pub fn from_cell_rect(rect: &CellRect, region: &RegionBounds) -> Self {
        let width = rect.width as f64;
        let height = rect.height as f64;

        Self {
            center: [
                f64::from(region.x) + rect.x as f64 + width / 2.0,
                f64::from(region.y) + rect.y as f64 + height / 2.0,
            ],
            size: [width, height],
        }
    }

    /// Minimum corner of the box
    pub fn min(&self) -> [f64; 2] {
        [
            self.center[0] - self.size[0] / 2.0,
            self.center[1] - self.size[1] / 2.0,
        ]
    }
}
