//! Category spawning.
//!
//! Each spawnable category (walls, food, enemies) gets a scaled count and then
//! draws that many cells from the board's free-cell pool, without replacement.
//! Categories run one after another in the configured order, so later ones
//! draw from a smaller pool.

use crate::board_gen::LevelContext;
use crate::config::LevelConfig;
use crate::grid::{Board, Coord, EntityHandle};
use crate::scaling;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Entrance,
    Exit,
    Wall,
    Food,
    Enemy,
}

impl Category {
    /// Categories placed by scaled random spawning, in default order
    pub const SPAWNABLE: [Category; 3] = [Category::Wall, Category::Food, Category::Enemy];

    /// Landmarks are single fixed-purpose cells placed before spawning
    pub fn is_landmark(self) -> bool {
        matches!(self, Category::Entrance | Category::Exit)
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Entrance => "entrance",
            Category::Exit => "exit",
            Category::Wall => "wall",
            Category::Food => "food",
            Category::Enemy => "enemy",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Category::Entrance => '@',
            Category::Exit => 'X',
            Category::Wall => 'w',
            Category::Food => 'f',
            Category::Enemy => 'E',
        }
    }
}

/// An entity the generator put on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedEntity {
    pub category: Category,
    pub coord: Coord,
    pub variant: usize,
    pub handle: EntityHandle,
}

/// Creates the engine-side entity for a placement
pub trait EntityFactory {
    fn create(&mut self, category: Category, variant: usize, coord: Coord) -> EntityHandle;
}

impl<F> EntityFactory for F
where
    F: FnMut(Category, usize, Coord) -> EntityHandle,
{
    fn create(&mut self, category: Category, variant: usize, coord: Coord) -> EntityHandle {
        self(category, variant, coord)
    }
}

/// Instantiate an entity on a cell that has already been claimed
pub(crate) fn instantiate_at(
    board: &mut Board,
    category: Category,
    variant: usize,
    coord: Coord,
    factory: &mut impl EntityFactory,
) -> PlacedEntity {
    let handle = factory.create(category, variant, coord);
    board.bind(coord, handle);
    PlacedEntity {
        category,
        coord,
        variant,
        handle,
    }
}

/// Place up to `count` entities of one category on random free cells.
/// Stops early if the pool runs dry.
pub fn spawn_category(
    board: &mut Board,
    category: Category,
    count: usize,
    variants: usize,
    rng: &mut impl Rng,
    factory: &mut impl EntityFactory,
) -> Vec<PlacedEntity> {
    puffin::profile_function!();
    let mut placed = Vec::with_capacity(count.min(board.free_count()));

    for _ in 0..count {
        let Some(coord) = board.take_free(category, rng) else {
            debug!(
                category = category.name(),
                placed = placed.len(),
                requested = count,
                "free-cell pool exhausted"
            );
            break;
        };

        // Only roll when there is an actual choice, so single-variant categories
        // don't shift the random stream.
        let variant = if variants > 1 {
            rng.gen_range(0..variants)
        } else {
            0
        };
        placed.push(instantiate_at(board, category, variant, coord, factory));
    }

    placed
}

/// Run every category in `config.spawn_order`, computing each count against the
/// pool as it stands when that category's turn comes up.
pub fn spawn_all(
    board: &mut Board,
    context: &LevelContext,
    config: &LevelConfig,
    rng: &mut impl Rng,
    factory: &mut impl EntityFactory,
) -> Vec<PlacedEntity> {
    puffin::profile_function!();
    let mut placed = Vec::new();
    let area = board.area();

    for &category in &config.spawn_order {
        if category.is_landmark() {
            continue;
        }
        let count = scaling::count_for(category, area, context.level, config, board.free_count(), rng);
        let spawned = spawn_category(board, category, count, config.variants_for(category), rng, factory);
        debug!(
            category = category.name(),
            count,
            spawned = spawned.len(),
            remaining = board.free_count(),
            "spawned category"
        );
        placed.extend(spawned);
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_gen::BoardGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn counting_factory() -> impl FnMut(Category, usize, Coord) -> EntityHandle {
        let mut next = 0;
        move |_, _, _| {
            next += 1;
            EntityHandle(next)
        }
    }

    #[test]
    fn test_spawn_category_places_requested_count() {
        let mut board = BoardGenerator::new(32).generate(8, 8, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let mut factory = counting_factory();
        let placed = spawn_category(&mut board, Category::Food, 5, 2, &mut rng, &mut factory);

        assert_eq!(placed.len(), 5);
        assert_eq!(board.free_count(), 36 - 5);
        for entity in &placed {
            let cell = board.get(entity.coord).unwrap();
            assert_eq!(cell.occupant.unwrap().handle, Some(entity.handle));
            assert!(entity.variant < 2);
        }
    }

    #[test]
    fn test_spawn_category_stops_when_pool_is_empty() {
        let mut board = BoardGenerator::new(32).generate(4, 4, 1);
        let mut rng = StdRng::seed_from_u64(2);
        let mut factory = counting_factory();
        let placed = spawn_category(&mut board, Category::Enemy, 10, 1, &mut rng, &mut factory);

        assert_eq!(placed.len(), 4);
        assert!(board.free_cells().is_empty());
        assert!(placed.iter().all(|p| p.variant == 0));
    }

    #[test]
    fn test_spawned_coords_are_unique_and_were_free() {
        let mut board = BoardGenerator::new(32).generate(10, 10, 1);
        let before: HashSet<Coord> = board.free_cells().iter().copied().collect();
        let mut rng = StdRng::seed_from_u64(3);
        let mut factory = counting_factory();

        let mut placed = spawn_category(&mut board, Category::Wall, 20, 8, &mut rng, &mut factory);
        placed.extend(spawn_category(&mut board, Category::Food, 20, 2, &mut rng, &mut factory));

        let coords: HashSet<Coord> = placed.iter().map(|p| p.coord).collect();
        assert_eq!(coords.len(), placed.len());
        assert!(coords.is_subset(&before));
        assert!(coords.iter().all(|c| !board.is_free(*c)));
    }

    #[test]
    fn test_spawn_all_respects_order_and_skips_landmarks() {
        let mut config = LevelConfig::default();
        config.spawn_order = vec![Category::Enemy, Category::Exit, Category::Food];
        let mut board = BoardGenerator::new(32).generate(12, 12, 1);
        let context = LevelContext::new(3, &config);
        let mut rng = StdRng::seed_from_u64(4);
        let mut factory = counting_factory();

        let placed = spawn_all(&mut board, &context, &config, &mut rng, &mut factory);

        assert!(placed.iter().all(|p| p.category != Category::Wall && !p.category.is_landmark()));
        let first_food = placed.iter().position(|p| p.category == Category::Food);
        let last_enemy = placed.iter().rposition(|p| p.category == Category::Enemy);
        if let (Some(food), Some(enemy)) = (first_food, last_enemy) {
            assert!(enemy < food);
        }
    }

    #[test]
    fn test_closures_act_as_factories() {
        let mut board = BoardGenerator::new(32).generate(5, 5, 1);
        board.occupy(Coord::new(2, 2), Category::Exit);
        let mut calls = Vec::new();
        let mut factory = |category: Category, variant: usize, coord: Coord| {
            calls.push((category, variant, coord));
            EntityHandle(99)
        };
        let placed = instantiate_at(&mut board, Category::Exit, 0, Coord::new(2, 2), &mut factory);
        assert_eq!(placed.handle, EntityHandle(99));
        assert_eq!(calls, vec![(Category::Exit, 0, Coord::new(2, 2))]);
    }
}
