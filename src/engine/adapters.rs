//! Boundary traits the generator drives, plus in-process implementations.
//!
//! A real engine binding implements [`GridMapper`], [`EntityLifecycle`] and
//! [`TileRenderer`] over its own scene graph. The implementations here back
//! them with a `hecs` world and an in-memory tile map so the whole level flow
//! runs headless.

use crate::components::{BlocksMovement, Placement, Position, VisualPosition};
use crate::grid::{Board, Coord, EntityHandle};
use crate::spawning::Category;
use crate::tile::TileVariant;
use glam::Vec2;
use hecs::{Entity, World};
use std::collections::HashMap;
use tracing::warn;

/// Converts grid coordinates to world positions
pub trait GridMapper {
    fn world_position(&self, coord: Coord) -> Vec2;
}

/// Creates, positions and destroys engine objects
pub trait EntityLifecycle {
    fn instantiate(&mut self, category: Category, variant: usize) -> EntityHandle;
    fn place(&mut self, handle: EntityHandle, coord: Coord, position: Vec2);
    fn destroy(&mut self, handle: EntityHandle);
}

/// Draws per-cell tile visuals; `None` clears the cell
pub trait TileRenderer {
    fn set_tile(&mut self, coord: Coord, tile: Option<TileVariant>);
}

/// Uniform grid: cell (x, y) sits at `origin + (x, y) * cell_size`
#[derive(Debug, Clone, Copy)]
pub struct CellGrid {
    pub cell_size: f32,
    pub origin: Vec2,
}

impl CellGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            origin: Vec2::ZERO,
        }
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl GridMapper for CellGrid {
    fn world_position(&self, coord: Coord) -> Vec2 {
        self.origin + Vec2::new(coord.x as f32, coord.y as f32) * self.cell_size
    }
}

/// `hecs`-backed object lifecycle
#[derive(Default)]
pub struct HecsLifecycle {
    pub world: World,
}

impl HecsLifecycle {
    pub fn new() -> Self {
        Self { world: World::new() }
    }

    pub fn entity(handle: EntityHandle) -> Option<Entity> {
        Entity::from_bits(handle.0)
    }

    pub fn live_count(&self) -> u32 {
        self.world.len()
    }
}

impl EntityLifecycle for HecsLifecycle {
    fn instantiate(&mut self, category: Category, variant: usize) -> EntityHandle {
        let placement = Placement { category, variant };
        let entity = match category {
            Category::Wall | Category::Enemy => self.world.spawn((placement, BlocksMovement)),
            _ => self.world.spawn((placement,)),
        };
        EntityHandle(entity.to_bits().get())
    }

    fn place(&mut self, handle: EntityHandle, coord: Coord, position: Vec2) {
        let placed = Self::entity(handle).is_some_and(|entity| {
            self.world
                .insert(entity, (Position::from(coord), VisualPosition(position)))
                .is_ok()
        });
        if !placed {
            warn!(?handle, "cannot place unknown entity");
        }
    }

    fn destroy(&mut self, handle: EntityHandle) {
        let despawned = Self::entity(handle).is_some_and(|entity| self.world.despawn(entity).is_ok());
        if !despawned {
            warn!(?handle, "destroy requested for unknown entity");
        }
    }
}

/// In-memory tile map, also able to print a board as text
#[derive(Debug, Default)]
pub struct TileCanvas {
    tiles: HashMap<Coord, TileVariant>,
    writes: usize,
}

impl TileCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile(&self, coord: Coord) -> Option<TileVariant> {
        self.tiles.get(&coord).copied()
    }

    pub fn painted(&self) -> usize {
        self.tiles.len()
    }

    /// Total `set_tile` calls, clears included
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// One line per row, top row last so y grows upward like world space.
    /// Occupants win over tiles; unpainted cells are blank.
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::with_capacity((board.width + 1) * board.height);
        for y in (0..board.height as i32).rev() {
            for x in 0..board.width as i32 {
                let coord = Coord::new(x, y);
                let occupant = board.get(coord).and_then(|cell| cell.occupant);
                let glyph = match (occupant, self.tile(coord)) {
                    (Some(occupant), _) => occupant.category.glyph(),
                    (None, Some(tile)) => tile.tile_type.glyph(),
                    (None, None) => ' ',
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl TileRenderer for TileCanvas {
    fn set_tile(&mut self, coord: Coord, tile: Option<TileVariant>) {
        self.writes += 1;
        match tile {
            Some(tile) => {
                self.tiles.insert(coord, tile);
            }
            None => {
                self.tiles.remove(&coord);
            }
        }
    }
}
