//! Cover validation against the occupancy a grid started from
//!
//! Checks that a rectangle list accounts for every occupied cell, never
//! claims an empty cell, and (when overlap is not allowed) never claims a
//! cell twice.

use bitvec::prelude::*;

use crate::algorithm::cover::OverlapPolicy;
use crate::spatial::grid::{CellState, OccupancyGrid};
use crate::spatial::rect::CellRect;

/// Per-cell coverage flags for a fixed-size grid
///
/// Cells are stored column-major (`x * height + y`) to match the solver's
/// scan order.
#[derive(Clone, Debug)]
pub struct CoverageMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CoverageMask {
    /// Create a mask with no cell covered
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    /// Mark a cell as covered
    ///
    /// Returns `true` if the cell was not covered before. Cells outside the
    /// mask are ignored and return `false`.
    pub fn insert(&mut self, x: usize, y: usize) -> bool {
        let Some(index) = self.index(x, y) else {
            return false;
        };
        !self.bits.replace(index, true)
    }

    /// Test cell coverage
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Count covered cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

/// Outcome of checking a cover against its source grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverReport {
    /// Policy the cover is judged against
    pub policy: OverlapPolicy,
    /// Number of rectangles checked
    pub rectangles: usize,
    /// Number of distinct cells covered by at least one rectangle
    pub covered_cells: usize,
    /// Occupied cells that no rectangle covers
    pub uncovered: Vec<(usize, usize)>,
    /// Empty cells that some rectangle covers
    pub spurious: Vec<(usize, usize)>,
    /// Cells covered by more than one rectangle
    pub overlapping: Vec<(usize, usize)>,
    /// Rectangles that are degenerate or reach outside the grid
    pub malformed: Vec<CellRect>,
}

impl CoverReport {
    /// Whether the cover satisfies every invariant of its policy
    ///
    /// Overlapping cells only invalidate a cover under
    /// [`OverlapPolicy::NotAllowed`].
    pub fn is_valid(&self) -> bool {
        self.uncovered.is_empty()
            && self.spurious.is_empty()
            && self.malformed.is_empty()
            && (self.policy == OverlapPolicy::Allowed || self.overlapping.is_empty())
    }
}

/// Check `rectangles` against `original`, the grid as it was before solving
///
/// `original` is expected to contain only `Empty` and `Used` cells; any
/// non-empty cell counts as occupied.
pub fn verify_cover(
    original: &OccupancyGrid,
    rectangles: &[CellRect],
    policy: OverlapPolicy,
) -> CoverReport {
    let (width, height) = (original.width(), original.height());
    let mut covered = CoverageMask::new(width, height);
    let mut overlapped = CoverageMask::new(width, height);

    let mut spurious = Vec::new();
    let mut overlapping = Vec::new();
    let mut malformed = Vec::new();

    for rect in rectangles {
        if rect.width == 0 || rect.height == 0 || rect.end_x() > width || rect.end_y() > height {
            malformed.push(*rect);
            continue;
        }

        for (x, y) in rect.cells() {
            if original.get(x, y) == Some(CellState::Empty) && !covered.contains(x, y) {
                spurious.push((x, y));
            }
            if !covered.insert(x, y) && overlapped.insert(x, y) {
                overlapping.push((x, y));
            }
        }
    }

    let mut uncovered = Vec::new();
    for x in 0..width {
        for y in 0..height {
            let occupied = original
                .get(x, y)
                .is_some_and(|state| state != CellState::Empty);
            if occupied && !covered.contains(x, y) {
                uncovered.push((x, y));
            }
        }
    }

    CoverReport {
        policy,
        rectangles: rectangles.len(),
        covered_cells: covered.count(),
        uncovered,
        spurious,
        overlapping,
        malformed,
    }
}
