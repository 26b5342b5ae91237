//! Greedy maximal-extent rectangle cover
//!
//! Scans the grid column by column (x ascending, then y ascending within each
//! column). Every `Used` cell seeds a rectangle: the seed row is grown left and
//! right as far as eligible cells allow, then whole rows with the same span are
//! added below and above. Claimed cells become `Covered`, so later seeds skip
//! them. The result is deterministic for a given grid and policy but not a
//! minimal cover.

use log::{debug, trace};

use crate::spatial::grid::{CellState, GridBuilder, OccupancyGrid, OccupancySource};
use crate::spatial::rect::CellRect;

/// Whether a new rectangle may reclaim cells already covered by an earlier one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlapPolicy {
    /// `Covered` cells stay eligible, only `Empty` cells stop expansion
    Allowed,
    /// Only `Used` cells are eligible; rectangles partition the occupied cells
    #[default]
    NotAllowed,
}

impl OverlapPolicy {
    /// Whether a cell in `state` may be claimed under this policy
    pub const fn accepts(self, state: CellState) -> bool {
        matches!(
            (self, state),
            (_, CellState::Used) | (Self::Allowed, CellState::Covered)
        )
    }
}

/// Rectangle cover solver with a fixed overlap policy
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleCoverSolver {
    policy: OverlapPolicy,
}

impl RectangleCoverSolver {
    /// Create a solver for one overlap policy
    pub const fn new(policy: OverlapPolicy) -> Self {
        Self { policy }
    }

    /// Overlap policy applied during expansion
    pub const fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Cover every `Used` cell of `grid`, returning rectangles in discovery order
    ///
    /// The grid is mutated in place: on return no cell is `Used`.
    pub fn solve(&self, grid: &mut OccupancyGrid) -> Vec<CellRect> {
        let mut rectangles = Vec::new();

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                if grid.get(x, y) == Some(CellState::Used) {
                    let rect = self.extend_from(grid, x, y);
                    trace!("seed ({x}, {y}) -> {rect}");
                    rectangles.push(rect);
                }
            }
        }

        debug!(
            "covered {}x{} grid with {} rectangles ({:?})",
            grid.width(),
            grid.height(),
            rectangles.len(),
            self.policy
        );
        trace!("grid after cover:\n{grid}");

        rectangles
    }

    // Grows the seed row sideways, then adds full rows below and above
    fn extend_from(&self, grid: &mut OccupancyGrid, x: usize, y: usize) -> CellRect {
        grid.mark_covered(x, y);

        let mut min_x = x;
        while min_x > 0 && self.is_eligible(grid, min_x - 1, y) {
            min_x -= 1;
            grid.mark_covered(min_x, y);
        }

        let mut max_x = x;
        while max_x + 1 < grid.width() && self.is_eligible(grid, max_x + 1, y) {
            max_x += 1;
            grid.mark_covered(max_x, y);
        }

        let mut min_y = y;
        while min_y > 0 && self.line_is_available(grid, min_y - 1, min_x, max_x) {
            min_y -= 1;
            grid.cover_span(min_y, min_x..=max_x);
        }

        let mut max_y = y;
        while max_y + 1 < grid.height() && self.line_is_available(grid, max_y + 1, min_x, max_x) {
            max_y += 1;
            grid.cover_span(max_y, min_x..=max_x);
        }

        CellRect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }

    fn is_eligible(&self, grid: &OccupancyGrid, x: usize, y: usize) -> bool {
        grid.get(x, y).is_some_and(|state| self.policy.accepts(state))
    }

    // A row joins the rectangle only if the whole span is eligible
    fn line_is_available(&self, grid: &OccupancyGrid, y: usize, min_x: usize, max_x: usize) -> bool {
        (min_x..=max_x).all(|x| self.is_eligible(grid, x, y))
    }
}

/// Cover a grid in place with the given policy
pub fn solve(grid: &mut OccupancyGrid, policy: OverlapPolicy) -> Vec<CellRect> {
    RectangleCoverSolver::new(policy).solve(grid)
}

/// Build a fresh grid from `source` and cover it
///
/// A source with no cells returns an empty list without building a grid.
pub fn cover_source<S>(source: &S, policy: OverlapPolicy) -> Vec<CellRect>
where
    S: OccupancySource + ?Sized,
{
    if source.width() == 0 || source.height() == 0 {
        return Vec::new();
    }

    let mut grid = GridBuilder::build(source);
    trace!("grid before cover:\n{grid}");
    solve(&mut grid, policy)
}
