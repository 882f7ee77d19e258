use crate::spawning::Category;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grid coordinate of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Opaque handle returned by the object-lifecycle adapter for an instantiated entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u64);

/// Whatever holds a cell. The handle is bound once the entity has been instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub category: Category,
    pub handle: Option<EntityHandle>,
}

/// One grid cell: passability plus whatever occupies it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    passable: bool,
    pub occupant: Option<Occupant>,
}

impl Cell {
    fn new(passable: bool) -> Self {
        Self {
            passable,
            occupant: None,
        }
    }

    pub fn is_passable(&self) -> bool {
        self.passable
    }

    pub fn is_free(&self) -> bool {
        self.passable && self.occupant.is_none()
    }
}

/// Pool of passable, unoccupied coordinates.
///
/// Coordinates live in a dense vector so a uniform draw is a single index roll;
/// `slots` maps each coordinate back to its index so targeted removals stay O(1).
/// Removal swaps the last element into the hole, so iteration order is only
/// meaningful for a fixed sequence of operations (which a seeded RNG guarantees).
#[derive(Debug, Clone, Default)]
pub struct FreeCells {
    coords: Vec<Coord>,
    slots: HashMap<Coord, usize>,
}

impl FreeCells {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.slots.contains_key(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.coords.iter()
    }

    /// Add a coordinate. Returns false for duplicates.
    pub(crate) fn push(&mut self, coord: Coord) -> bool {
        if self.slots.contains_key(&coord) {
            return false;
        }
        self.slots.insert(coord, self.coords.len());
        self.coords.push(coord);
        true
    }

    /// Remove a specific coordinate. Returns false if it was not in the pool.
    pub(crate) fn remove(&mut self, coord: Coord) -> bool {
        let Some(idx) = self.slots.remove(&coord) else {
            return false;
        };
        self.coords.swap_remove(idx);
        if let Some(&moved) = self.coords.get(idx) {
            self.slots.insert(moved, idx);
        }
        true
    }

    /// Remove and return a uniformly chosen coordinate
    pub(crate) fn take_random(&mut self, rng: &mut impl Rng) -> Option<Coord> {
        if self.coords.is_empty() {
            return None;
        }
        let coord = self.coords[rng.gen_range(0..self.coords.len())];
        self.remove(coord);
        Some(coord)
    }

    pub(crate) fn clear(&mut self) {
        self.coords.clear();
        self.slots.clear();
    }
}

/// A generated level board: cell classification plus the free-cell pool.
///
/// Every coordinate in the pool is passable and unoccupied; every passable cell
/// outside the pool has an occupant. The only ways to change occupancy are
/// [`Board::occupy`], [`Board::take_free`] and [`Board::release_all`], which keep
/// both sides in step.
#[derive(Debug, Clone)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    border: usize,
    cells: Vec<Cell>,
    free: FreeCells,
}

impl Board {
    /// Build a board with the outer `border` rings impassable.
    /// Interior cells enter the pool in row-major order.
    pub(crate) fn with_border(width: usize, height: usize, border: usize) -> Self {
        let interior = width.saturating_sub(border * 2) * height.saturating_sub(border * 2);
        let mut cells = Vec::with_capacity(width * height);
        let mut free = FreeCells::with_capacity(interior);

        for y in 0..height {
            for x in 0..width {
                let passable =
                    x >= border && y >= border && x + border < width && y + border < height;
                cells.push(Cell::new(passable));
                if passable {
                    free.push(Coord::new(x as i32, y as i32));
                }
            }
        }

        Self {
            width,
            height,
            border,
            cells,
            free,
        }
    }

    pub fn border(&self) -> usize {
        self.border
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 || coord.x >= self.width as i32 || coord.y >= self.height as i32 {
            return None;
        }
        Some(coord.y as usize * self.width + coord.x as usize)
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|idx| &self.cells[idx])
    }

    fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let idx = self.index(coord)?;
        Some(&mut self.cells[idx])
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    pub fn free_cells(&self) -> &FreeCells {
        &self.free
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn is_free(&self, coord: Coord) -> bool {
        self.free.contains(coord)
    }

    pub fn border_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.passable).count()
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &Occupant)> {
        self.coords()
            .zip(self.cells.iter())
            .filter_map(|(coord, cell)| cell.occupant.as_ref().map(|o| (coord, o)))
    }

    /// Claim `coord` for `category` if it is still in the pool
    pub fn occupy(&mut self, coord: Coord, category: Category) -> bool {
        if !self.free.remove(coord) {
            return false;
        }
        match self.get_mut(coord) {
            Some(cell) => {
                cell.occupant = Some(Occupant {
                    category,
                    handle: None,
                });
                true
            }
            None => false,
        }
    }

    /// Draw a random free cell for `category`, removing it from the pool
    pub fn take_free(&mut self, category: Category, rng: &mut impl Rng) -> Option<Coord> {
        let coord = self.free.take_random(rng)?;
        if let Some(cell) = self.get_mut(coord) {
            cell.occupant = Some(Occupant {
                category,
                handle: None,
            });
        }
        Some(coord)
    }

    /// Attach an entity handle to an occupied cell
    pub fn bind(&mut self, coord: Coord, handle: EntityHandle) -> bool {
        match self.get_mut(coord).and_then(|cell| cell.occupant.as_mut()) {
            Some(occupant) => {
                occupant.handle = Some(handle);
                true
            }
            None => false,
        }
    }

    /// Empty one occupied cell and return it to the pool
    pub fn vacate(&mut self, coord: Coord) -> Option<Occupant> {
        let occupant = self.get_mut(coord)?.occupant.take()?;
        self.free.push(coord);
        Some(occupant)
    }

    /// Empty every cell and the pool, returning the handles that were bound
    pub fn release_all(&mut self) -> Vec<EntityHandle> {
        self.free.clear();
        self.cells
            .iter_mut()
            .filter_map(|cell| cell.occupant.take())
            .filter_map(|occupant| occupant.handle)
            .collect()
    }
}
