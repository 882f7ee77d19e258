//! Level lifecycle: tearing down the previous board and generating the next.
//!
//! The director owns the current [`Level`] and the engine adapters. Every level
//! change goes through [`LevelDirector::start_level`], which clears the old
//! level before generating the new one, so two boards never coexist.

pub mod adapters;

pub use adapters::{CellGrid, EntityLifecycle, GridMapper, HecsLifecycle, TileCanvas, TileRenderer};

use crate::board_gen::{BoardGenerator, LevelContext};
use crate::config::LevelConfig;
use crate::events::{EventQueue, GameEvent};
use crate::grid::{Board, Coord, EntityHandle};
use crate::reservation::{self, Landmarks};
use crate::spawning::{self, Category, PlacedEntity};
use crate::tile::TileVariant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// A generated level
#[derive(Debug, Clone)]
pub struct Level {
    pub context: LevelContext,
    pub board: Board,
    pub landmarks: Landmarks,
    /// Landmarks first, then categories in spawn order
    pub placed: Vec<PlacedEntity>,
}

impl Level {
    pub fn number(&self) -> u32 {
        self.context.level
    }

    pub fn count(&self, category: Category) -> usize {
        self.placed.iter().filter(|p| p.category == category).count()
    }

    pub fn entity_at(&self, coord: Coord) -> Option<&PlacedEntity> {
        self.placed.iter().find(|p| p.coord == coord)
    }
}

/// Owns the current level and drives generation through the engine adapters
pub struct LevelDirector<L, T, M, R = StdRng> {
    config: LevelConfig,
    generator: BoardGenerator,
    lifecycle: L,
    tiles: T,
    mapper: M,
    rng: R,
    events: EventQueue,
    current: Option<Level>,
}

impl LevelDirector<HecsLifecycle, TileCanvas, CellGrid, StdRng> {
    /// Headless director with in-process adapters and a seeded RNG
    pub fn headless(config: LevelConfig, seed: u64) -> Self {
        Self::new(
            config,
            HecsLifecycle::new(),
            TileCanvas::new(),
            CellGrid::default(),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<L, T, M, R> LevelDirector<L, T, M, R>
where
    L: EntityLifecycle,
    T: TileRenderer,
    M: GridMapper,
    R: Rng,
{
    pub fn new(config: LevelConfig, lifecycle: L, tiles: T, mapper: M, rng: R) -> Self {
        let config = config.sanitized();
        Self {
            generator: BoardGenerator::new(config.max_size),
            config,
            lifecycle,
            tiles,
            mapper,
            rng,
            events: EventQueue::new(),
            current: None,
        }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&Level> {
        self.current.as_ref()
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    pub fn tiles(&self) -> &T {
        &self.tiles
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Clear whatever is loaded, then generate `level`
    pub fn start_level(&mut self, level: u32) -> &Level {
        puffin::profile_function!();
        self.clear();

        let context = LevelContext::new(level, &self.config);
        let size = context.board_size as i32;
        let mut board = self.generator.generate(size, size, self.config.border_thickness);
        self.paint(&board);

        let lifecycle = &mut self.lifecycle;
        let mapper = &self.mapper;
        let mut factory = |category: Category, variant: usize, coord: Coord| -> EntityHandle {
            let handle = lifecycle.instantiate(category, variant);
            lifecycle.place(handle, coord, mapper.world_position(coord));
            handle
        };

        let (landmarks, mut placed) = reservation::place_landmarks(&mut board, &mut factory);
        placed.extend(spawning::spawn_all(
            &mut board,
            &context,
            &self.config,
            &mut self.rng,
            &mut factory,
        ));

        info!(
            level = context.level,
            size = context.board_size,
            walls = placed.iter().filter(|p| p.category == Category::Wall).count(),
            food = placed.iter().filter(|p| p.category == Category::Food).count(),
            enemies = placed.iter().filter(|p| p.category == Category::Enemy).count(),
            free = board.free_count(),
            "level generated"
        );
        self.events.push(GameEvent::LevelStarted {
            level: context.level,
            board_size: context.board_size,
        });

        self.current.insert(Level {
            context,
            board,
            landmarks,
            placed,
        })
    }

    /// Move on to the level after the current one (level 1 if nothing is loaded)
    pub fn next_level(&mut self) -> &Level {
        let next = self.current.as_ref().map_or(1, |level| level.number() + 1);
        self.start_level(next)
    }

    /// Start over from level 1
    pub fn restart(&mut self) -> &Level {
        self.start_level(1)
    }

    /// Destroy the entity at `coord` and free its cell, e.g. food that was eaten
    pub fn remove_at(&mut self, coord: Coord) -> Option<PlacedEntity> {
        let level = self.current.as_mut()?;
        let idx = level.placed.iter().position(|p| p.coord == coord)?;
        let entity = level.placed.remove(idx);
        level.board.vacate(coord);
        self.lifecycle.destroy(entity.handle);
        debug!(category = entity.category.name(), ?coord, "entity removed");
        Some(entity)
    }

    /// Destroy every placed entity and clear every tile of the current level.
    /// Returns how many entities were destroyed.
    pub fn clear(&mut self) -> usize {
        let Some(mut level) = self.current.take() else {
            return 0;
        };

        let handles = level.board.release_all();
        for &handle in &handles {
            self.lifecycle.destroy(handle);
        }
        for coord in level.board.coords() {
            self.tiles.set_tile(coord, None);
        }

        debug!(level = level.number(), destroyed = handles.len(), "level cleared");
        self.events.push(GameEvent::LevelCleared {
            level: level.number(),
            destroyed: handles.len(),
        });
        handles.len()
    }

    fn paint(&mut self, board: &Board) {
        for coord in board.coords() {
            if let Some(cell) = board.get(coord) {
                let tile = TileVariant::pick(cell, &self.config.tiles, &mut self.rng);
                self.tiles.set_tile(coord, Some(tile));
            }
        }
    }
}
