//! Level generation configuration.
//!
//! Everything is plain numbers; a JSON file may override any subset of the
//! defaults. Out-of-range values are corrected by [`LevelConfig::sanitized`]
//! rather than rejected. Only structural mistakes in the spawn order are errors.

use crate::constants::*;
use crate::spawning::Category;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("spawn order lists '{}', which is a landmark", .0.name())]
    LandmarkInSpawnOrder(Category),

    #[error("spawn order lists '{}' more than once", .0.name())]
    DuplicateInSpawnOrder(Category),
}

/// How enemy counts are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyMode {
    /// Area over cells-per-enemy, scaled by level
    #[default]
    AreaPerLevel,
    /// Small random base plus a flat area term
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodParams {
    pub min: usize,
    pub max: usize,
    pub variants: usize,
}

impl Default for FoodParams {
    fn default() -> Self {
        Self {
            min: FOOD_MIN,
            max: FOOD_MAX,
            variants: FOOD_VARIANTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallParams {
    pub variants: usize,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            variants: WALL_VARIANTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyParams {
    pub mode: EnemyMode,
    pub cells_per_enemy: f32,
    pub level_multiplier: f32,
    pub base_enemies: i32,
    pub round_up: bool,
    /// 0 means uncapped
    pub max_enemies: usize,
    pub variants: usize,
}

impl Default for EnemyParams {
    fn default() -> Self {
        Self {
            mode: EnemyMode::AreaPerLevel,
            cells_per_enemy: ENEMY_CELLS_PER_ENEMY,
            level_multiplier: ENEMY_LEVEL_MULTIPLIER,
            base_enemies: 0,
            round_up: false,
            max_enemies: 0,
            variants: ENEMY_VARIANTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileParams {
    pub ground_variants: usize,
    pub border_variants: usize,
}

impl Default for TileParams {
    fn default() -> Self {
        Self {
            ground_variants: GROUND_TILE_VARIANTS,
            border_variants: BORDER_TILE_VARIANTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodSupplyParams {
    pub start: i32,
    pub per_turn: i32,
    /// Food restored per food variant, indexed by variant
    pub points_per_variant: Vec<i32>,
}

impl Default for FoodSupplyParams {
    fn default() -> Self {
        Self {
            start: FOOD_SUPPLY_START,
            per_turn: FOOD_SUPPLY_PER_TURN,
            points_per_variant: FOOD_POINTS_PER_VARIANT.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Board edge on level 1
    pub base_size: usize,
    pub max_size: usize,
    pub border_thickness: usize,
    pub food: FoodParams,
    pub walls: WallParams,
    pub enemies: EnemyParams,
    pub tiles: TileParams,
    /// Categories spawned after the landmarks, in this order
    pub spawn_order: Vec<Category>,
    pub food_supply: FoodSupplyParams,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            base_size: BOARD_BASE_SIZE,
            max_size: BOARD_MAX_SIZE,
            border_thickness: BOARD_BORDER_THICKNESS,
            food: FoodParams::default(),
            walls: WallParams::default(),
            enemies: EnemyParams::default(),
            tiles: TileParams::default(),
            spawn_order: Category::SPAWNABLE.to_vec(),
            food_supply: FoodSupplyParams::default(),
        }
    }
}

impl LevelConfig {
    /// Read, validate and sanitize a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LevelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config.sanitized())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, &category) in self.spawn_order.iter().enumerate() {
            if category.is_landmark() {
                return Err(ConfigError::LandmarkInSpawnOrder(category));
            }
            if self.spawn_order[..i].contains(&category) {
                return Err(ConfigError::DuplicateInSpawnOrder(category));
            }
        }
        Ok(())
    }

    /// Correct values that would break generation, logging each correction
    pub fn sanitized(mut self) -> Self {
        if self.max_size < BOARD_MIN_SIZE {
            warn!(max_size = self.max_size, "max_size below minimum board size, raised");
            self.max_size = BOARD_MIN_SIZE;
        }
        if self.base_size < BOARD_MIN_SIZE || self.base_size > self.max_size {
            let clamped = self.base_size.clamp(BOARD_MIN_SIZE, self.max_size);
            warn!(base_size = self.base_size, clamped, "base_size out of range, clamped");
            self.base_size = clamped;
        }
        if self.food.min > self.food.max {
            warn!(min = self.food.min, max = self.food.max, "food band inverted, swapped");
            std::mem::swap(&mut self.food.min, &mut self.food.max);
        }
        if !(self.enemies.cells_per_enemy.is_finite() && self.enemies.cells_per_enemy > 0.0) {
            warn!(
                cells_per_enemy = self.enemies.cells_per_enemy,
                "cells_per_enemy must be positive, reset to default"
            );
            self.enemies.cells_per_enemy = ENEMY_CELLS_PER_ENEMY;
        }
        if !self.enemies.level_multiplier.is_finite() {
            warn!("level_multiplier is not finite, reset to default");
            self.enemies.level_multiplier = ENEMY_LEVEL_MULTIPLIER;
        }
        for variants in [
            &mut self.food.variants,
            &mut self.walls.variants,
            &mut self.enemies.variants,
            &mut self.tiles.ground_variants,
            &mut self.tiles.border_variants,
        ] {
            if *variants == 0 {
                warn!("variant count of 0 raised to 1");
                *variants = 1;
            }
        }
        if self.food_supply.per_turn < 0 {
            warn!(per_turn = self.food_supply.per_turn, "negative food cost per turn, using 0");
            self.food_supply.per_turn = 0;
        }
        let mut kept: Vec<Category> = Vec::with_capacity(self.spawn_order.len());
        for category in self.spawn_order.drain(..) {
            if category.is_landmark() {
                warn!(category = category.name(), "landmark in spawn order, dropped");
            } else if kept.contains(&category) {
                warn!(category = category.name(), "category repeated in spawn order, dropped");
            } else {
                kept.push(category);
            }
        }
        self.spawn_order = kept;
        self
    }

    /// Number of visual variants to choose among for a category
    pub fn variants_for(&self, category: Category) -> usize {
        match category {
            Category::Food => self.food.variants,
            Category::Wall => self.walls.variants,
            Category::Enemy => self.enemies.variants,
            Category::Entrance | Category::Exit => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LevelConfig::default();
        assert_eq!(config.base_size, 5);
        assert_eq!(config.border_thickness, 1);
        assert_eq!(config.spawn_order, vec![Category::Wall, Category::Food, Category::Enemy]);
        assert_eq!(config.enemies.mode, EnemyMode::AreaPerLevel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LevelConfig::from_json_str(
            r#"{ "base_size": 8, "enemies": { "mode": "legacy", "max_enemies": 6 } }"#,
        )
        .unwrap();
        assert_eq!(config.base_size, 8);
        assert_eq!(config.max_size, BOARD_MAX_SIZE);
        assert_eq!(config.enemies.mode, EnemyMode::Legacy);
        assert_eq!(config.enemies.max_enemies, 6);
        assert_eq!(config.enemies.cells_per_enemy, ENEMY_CELLS_PER_ENEMY);
        assert_eq!(config.food, FoodParams::default());
    }

    #[test]
    fn test_sanitize_corrects_bad_values() {
        let config = LevelConfig::from_json_str(
            r#"{
                "base_size": 1,
                "max_size": 2,
                "food": { "min": 5, "max": 2, "variants": 0 },
                "enemies": { "cells_per_enemy": -3.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.max_size, BOARD_MIN_SIZE);
        assert_eq!(config.base_size, BOARD_MIN_SIZE);
        assert_eq!((config.food.min, config.food.max), (2, 5));
        assert_eq!(config.food.variants, 1);
        assert_eq!(config.enemies.cells_per_enemy, ENEMY_CELLS_PER_ENEMY);
    }

    #[test]
    fn test_spawn_order_validation() {
        let err = LevelConfig::from_json_str(r#"{ "spawn_order": ["food", "exit"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::LandmarkInSpawnOrder(Category::Exit)));

        let err = LevelConfig::from_json_str(r#"{ "spawn_order": ["food", "wall", "food"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateInSpawnOrder(Category::Food)));

        let config = LevelConfig::from_json_str(r#"{ "spawn_order": ["enemy", "food"] }"#).unwrap();
        assert_eq!(config.spawn_order, vec![Category::Enemy, Category::Food]);
    }

    #[test]
    fn test_sanitize_drops_repeated_and_landmark_categories() {
        let config = LevelConfig {
            spawn_order: vec![
                Category::Food,
                Category::Exit,
                Category::Food,
                Category::Enemy,
                Category::Enemy,
            ],
            ..LevelConfig::default()
        }
        .sanitized();
        assert_eq!(config.spawn_order, vec![Category::Food, Category::Enemy]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = LevelConfig::from_json_str("{ base_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "border_thickness": 0 }}"#).unwrap();
        let config = LevelConfig::load(file.path()).unwrap();
        assert_eq!(config.border_thickness, 0);

        let err = LevelConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_variants_for_landmarks_is_one() {
        let config = LevelConfig::default();
        assert_eq!(config.variants_for(Category::Entrance), 1);
        assert_eq!(config.variants_for(Category::Wall), WALL_VARIANTS);
    }
}
