//! Board generation constants.

/// Smallest board edge, so a one-ring border still leaves a 1x1 interior
pub const BOARD_MIN_SIZE: usize = 3;
/// Board edge on level 1
pub const BOARD_BASE_SIZE: usize = 5;
/// Largest board edge
pub const BOARD_MAX_SIZE: usize = 32;
/// Impassable outer rings
pub const BOARD_BORDER_THICKNESS: usize = 1;
/// Ground tile variants to pick from
pub const GROUND_TILE_VARIANTS: usize = 8;
/// Border tile variants to pick from
pub const BORDER_TILE_VARIANTS: usize = 3;
