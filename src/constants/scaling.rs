//! Per-category count scaling.

/// Default food band
pub const FOOD_MIN: usize = 1;
pub const FOOD_MAX: usize = 3;
/// One extra food per this many cells
pub const FOOD_AREA_DIVISOR: usize = 30;
/// Food upper bound grows by one per this many cells above the base roll
pub const FOOD_CAP_AREA_DIVISOR: usize = 20;
pub const FOOD_VARIANTS: usize = 2;

/// Wall base roll, half-open
pub const WALL_BASE_MIN: usize = 6;
pub const WALL_BASE_MAX: usize = 10;
/// One extra wall per this many cells
pub const WALL_AREA_DIVISOR: usize = 50;
/// Wall ceiling is max(WALL_CAP_FLOOR, area / WALL_CAP_AREA_DIVISOR)
pub const WALL_CAP_FLOOR: usize = 10;
pub const WALL_CAP_AREA_DIVISOR: usize = 8;
pub const WALL_VARIANTS: usize = 8;

/// Cells per enemy in area-per-level mode; also the fallback for bad config
pub const ENEMY_CELLS_PER_ENEMY: f32 = 40.0;
pub const ENEMY_LEVEL_MULTIPLIER: f32 = 0.5;
pub const ENEMY_VARIANTS: usize = 2;

/// Legacy mode base roll, inclusive
pub const LEGACY_ENEMY_BASE_MIN: usize = 1;
pub const LEGACY_ENEMY_BASE_MAX: usize = 3;
pub const LEGACY_ENEMY_AREA_DIVISOR: usize = 80;
pub const LEGACY_ENEMY_CAP_AREA_DIVISOR: usize = 30;
