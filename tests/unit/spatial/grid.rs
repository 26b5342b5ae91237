//! Tests for occupancy sources, grid construction and cell state transitions

#[cfg(test)]
mod tests {
    use tilerects::CoverError;
    use tilerects::spatial::{
        CellState, FlatOccupancy, GridBuilder, OccupancyGrid, OccupancySource, RegionBounds,
    };

    // Tests the builder maps occupancy to used and empty cells
    #[test]
    fn test_build_marks_used_and_empty() {
        // Row-major: row 0 is [true, false, true], row 1 is [false, true, false]
        let source = FlatOccupancy::new(3, 2, vec![true, false, true, false, true, false]).unwrap();
        let grid = GridBuilder::build(&source);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 0), Some(CellState::Used));
        assert_eq!(grid.get(1, 0), Some(CellState::Empty));
        assert_eq!(grid.get(2, 0), Some(CellState::Used));
        assert_eq!(grid.get(1, 1), Some(CellState::Used));
        assert_eq!(grid.count(CellState::Covered), 0);
        assert_eq!(grid.count(CellState::Used), source.occupied_count());
    }

    // Tests mismatched buffer lengths are rejected
    #[test]
    fn test_flat_occupancy_rejects_length_mismatch() {
        let result = FlatOccupancy::new(2, 2, vec![true; 3]);
        assert!(matches!(result, Err(CoverError::InvalidSourceData { .. })));

        let grid = OccupancyGrid::from_flat(2, 3, &[false; 5]);
        assert!(matches!(grid, Err(CoverError::InvalidSourceData { .. })));
    }

    // Tests oversized regions are rejected before allocation
    #[test]
    fn test_flat_occupancy_rejects_oversized_region() {
        let result = FlatOccupancy::new(10_001, 0, Vec::new());
        assert!(matches!(
            result,
            Err(CoverError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
    }

    // Tests queries outside the region report empty
    #[test]
    fn test_is_occupied_outside_region() {
        let source = FlatOccupancy::new(2, 2, vec![true; 4]).unwrap();
        assert!(source.is_occupied(1, 1));
        assert!(!source.is_occupied(2, 0));
        assert!(!source.is_occupied(0, 2));
        assert!(!source.is_occupied(0, usize::MAX));
        assert!(!source.is_occupied(usize::MAX, usize::MAX));
    }

    // Tests origin offsets flow into region bounds
    #[test]
    fn test_origin_and_bounds() {
        let source = FlatOccupancy::new(4, 1, vec![false; 4]).unwrap();
        assert_eq!(source.origin(), [0, 0]);

        let shifted = source.with_origin([-3, 7]);
        assert_eq!(shifted.bounds(), RegionBounds::new(-3, 7, 4, 1));
    }

    // Tests empty cells can never be claimed
    #[test]
    fn test_mark_covered_skips_empty_cells() {
        let mut grid = OccupancyGrid::from_flat(2, 1, &[true, false]).unwrap();

        assert!(grid.mark_covered(0, 0));
        assert_eq!(grid.get(0, 0), Some(CellState::Covered));

        assert!(!grid.mark_covered(1, 0));
        assert_eq!(grid.get(1, 0), Some(CellState::Empty));

        assert!(!grid.mark_covered(5, 5));
    }

    // Tests covered cells stay covered when claimed again
    #[test]
    fn test_mark_covered_is_monotonic() {
        let mut grid = OccupancyGrid::from_flat(1, 1, &[true]).unwrap();
        assert!(grid.mark_covered(0, 0));
        assert!(grid.mark_covered(0, 0));
        assert_eq!(grid.get(0, 0), Some(CellState::Covered));
    }

    // Tests span coverage claims only the requested columns
    #[test]
    fn test_cover_span() {
        let mut grid = OccupancyGrid::from_flat(4, 2, &[true; 8]).unwrap();
        grid.cover_span(1, 1..=2);

        assert_eq!(grid.get(0, 1), Some(CellState::Used));
        assert_eq!(grid.get(1, 1), Some(CellState::Covered));
        assert_eq!(grid.get(2, 1), Some(CellState::Covered));
        assert_eq!(grid.get(3, 1), Some(CellState::Used));
        assert_eq!(grid.count(CellState::Covered), 2);
    }

    // Tests display prints the top row first
    #[test]
    fn test_display_top_row_first() {
        let mut grid = OccupancyGrid::from_flat(2, 2, &[true, false, false, true]).unwrap();
        grid.mark_covered(1, 1);
        assert_eq!(grid.to_string(), "0 2 \n1 0 \n");
    }

    // Tests zero-sized grids are empty
    #[test]
    fn test_empty_grid() {
        let grid = OccupancyGrid::new(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.get(0, 0), None);
        assert!(!OccupancyGrid::new(1, 1).is_empty());
    }

    // Tests state digits used in grid dumps
    #[test]
    fn test_cell_state_digits() {
        assert_eq!(CellState::Empty.digit(), '0');
        assert_eq!(CellState::Used.digit(), '1');
        assert_eq!(CellState::Covered.digit(), '2');
        assert_eq!(CellState::default(), CellState::Empty);
    }
}
