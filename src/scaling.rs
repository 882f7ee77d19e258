//! Count derivation for spawnable categories.
//!
//! Every function clamps its result to the number of free cells, and returns 0
//! on an empty pool without touching the random stream.

use crate::config::{EnemyMode, EnemyParams, FoodParams, LevelConfig};
use crate::constants::*;
use crate::spawning::Category;
use rand::Rng;
use tracing::warn;

/// Food: a roll in `[min, max]` plus one per `FOOD_AREA_DIVISOR` cells.
pub fn food_count(area: usize, params: &FoodParams, free: usize, rng: &mut impl Rng) -> usize {
    if free == 0 {
        return 0;
    }
    let (min, max) = if params.min <= params.max {
        (params.min, params.max)
    } else {
        (params.max, params.min)
    };

    let base = rng.gen_range(min..=max);
    let scaled = base + area / FOOD_AREA_DIVISOR;
    let ceiling = max.max(base + area / FOOD_CAP_AREA_DIVISOR);
    scaled.clamp(min, ceiling).min(free)
}

/// Walls: a roll in `[WALL_BASE_MIN, WALL_BASE_MAX)` plus one per `WALL_AREA_DIVISOR` cells.
pub fn wall_count(area: usize, free: usize, rng: &mut impl Rng) -> usize {
    if free == 0 {
        return 0;
    }
    let base = rng.gen_range(WALL_BASE_MIN..WALL_BASE_MAX);
    let scaled = base + area / WALL_AREA_DIVISOR;
    let ceiling = WALL_CAP_FLOOR.max(area / WALL_CAP_AREA_DIVISOR);
    scaled.min(ceiling).min(free)
}

/// Enemies, in whichever mode the params select.
pub fn enemy_count(
    area: usize,
    level: u32,
    params: &EnemyParams,
    free: usize,
    rng: &mut impl Rng,
) -> usize {
    if free == 0 {
        return 0;
    }
    match params.mode {
        EnemyMode::AreaPerLevel => area_per_level_enemies(area, level, params).min(free),
        EnemyMode::Legacy => legacy_enemies(area, rng).min(free),
    }
}

/// `base + (area / cells_per_enemy) * (multiplier * level)`, rounded per config
/// and capped at `max_enemies` when that is non-zero.
fn area_per_level_enemies(area: usize, level: u32, params: &EnemyParams) -> usize {
    let cells_per_enemy = if params.cells_per_enemy.is_finite() && params.cells_per_enemy > 0.0 {
        params.cells_per_enemy as f64
    } else {
        warn!(
            cells_per_enemy = params.cells_per_enemy,
            fallback = ENEMY_CELLS_PER_ENEMY,
            "invalid cells-per-enemy, using default"
        );
        ENEMY_CELLS_PER_ENEMY as f64
    };

    let from_area = area as f64 / cells_per_enemy;
    let scaled = from_area * (params.level_multiplier as f64 * level as f64);
    let raw = params.base_enemies as f64 + scaled;
    let rounded = if params.round_up { raw.ceil() } else { raw.floor() };

    let count = if rounded.is_finite() && rounded > 0.0 {
        rounded as usize
    } else {
        0
    };
    if params.max_enemies > 0 {
        count.min(params.max_enemies)
    } else {
        count
    }
}

fn legacy_enemies(area: usize, rng: &mut impl Rng) -> usize {
    let base = rng.gen_range(LEGACY_ENEMY_BASE_MIN..=LEGACY_ENEMY_BASE_MAX);
    let scaled = base + area / LEGACY_ENEMY_AREA_DIVISOR;
    scaled.min(1.max(area / LEGACY_ENEMY_CAP_AREA_DIVISOR))
}

/// Dispatch to the category's count function. Landmarks always count 0 here.
pub fn count_for(
    category: Category,
    area: usize,
    level: u32,
    config: &LevelConfig,
    free: usize,
    rng: &mut impl Rng,
) -> usize {
    match category {
        Category::Food => food_count(area, &config.food, free, rng),
        Category::Wall => wall_count(area, free, rng),
        Category::Enemy => enemy_count(area, level, &config.enemies, free, rng),
        Category::Entrance | Category::Exit => 0,
    }
}
