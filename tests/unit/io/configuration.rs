//! Tests for naming constants and configuration defaults

#[cfg(test)]
mod tests {
    use tilerects::io::configuration::{
        COLLIDER_CHILD_NAME, DEFAULT_ALPHA_THRESHOLD, DEFAULT_SEED, MAX_GRID_DIMENSION,
        MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_SUFFIX, TEXT_EMPTY, TEXT_OCCUPIED,
        VISUALIZATION_CELL_SIZE,
    };

    // Tests the child container keeps its caller-visible name
    #[test]
    fn test_child_container_name() {
        assert_eq!(COLLIDER_CHILD_NAME, "ColliderContainer");
    }

    // Tests any visible pixel counts as a tile by default
    #[test]
    fn test_default_alpha_threshold() {
        assert_eq!(DEFAULT_ALPHA_THRESHOLD, 0);
    }

    // Tests text markers never classify a character both ways
    #[test]
    fn test_text_markers_disjoint() {
        for ch in TEXT_OCCUPIED {
            assert!(!TEXT_EMPTY.contains(&ch), "{ch:?} is both occupied and empty");
        }
    }

    // Tests maximum grid dimension value
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
    }

    // Tests progress bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // Tests default seed is fixed
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests filesystem safety of suffix
    #[test]
    fn test_output_suffix_format() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests rendered cell size
    #[test]
    fn test_visualization_cell_size() {
        assert_eq!(VISUALIZATION_CELL_SIZE, 8);
    }
}
