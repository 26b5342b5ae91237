//! Naming constants and runtime configuration defaults

/// Name given to the child container when colliders are not placed on the host object
pub const COLLIDER_CHILD_NAME: &str = "ColliderContainer";

// Pixels at or below this alpha count as empty cells
/// Default alpha threshold for PNG tilemaps
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 0;

/// Characters marking an occupied cell in text tilemaps
pub const TEXT_OCCUPIED: [char; 2] = ['#', 'X'];
/// Characters marking an empty cell in text tilemaps
pub const TEXT_EMPTY: [char; 2] = ['.', ' '];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible visualization colors
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_colliders";
/// Pixels per cell in rendered cover images
pub const VISUALIZATION_CELL_SIZE: u32 = 8;
