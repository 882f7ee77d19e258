//! Landmark reservation.
//!
//! Entrance and exit are claimed before any category spawns. A landmark whose
//! target cell is unavailable takes the nearest free cell instead; with no free
//! cell at all it is simply left out.

use crate::grid::{Board, Coord};
use crate::spawning::{instantiate_at, Category, EntityFactory, PlacedEntity};
use tracing::{debug, warn};

/// Claim `coord` if it is still in the free-cell pool.
/// Fails for occupied, border and out-of-range cells.
pub fn reserve_fixed(board: &mut Board, coord: Coord, category: Category) -> bool {
    board.occupy(coord, category)
}

/// Closest free cell to `target` by Manhattan distance, ties broken by row then column
pub fn nearest_free(board: &Board, target: Coord) -> Option<Coord> {
    board
        .free_cells()
        .iter()
        .copied()
        .min_by_key(|c| (c.manhattan(target), c.y, c.x))
}

/// Reserve `target`, or the nearest free cell if `target` is taken
pub fn reserve_or_nearest(board: &mut Board, target: Coord, category: Category) -> Option<Coord> {
    if reserve_fixed(board, target, category) {
        return Some(target);
    }
    let Some(fallback) = nearest_free(board, target) else {
        warn!(category = category.name(), ?target, "no free cell left, landmark omitted");
        return None;
    };
    debug!(category = category.name(), ?target, ?fallback, "landmark target unavailable, using fallback");
    reserve_fixed(board, fallback, category).then_some(fallback)
}

/// Near-origin interior corner
pub fn entrance_target(board: &Board) -> Coord {
    let border = board.border() as i32;
    Coord::new(border, border)
}

/// Interior corner opposite the entrance
pub fn exit_target(board: &Board) -> Coord {
    let border = board.border() as i32;
    Coord::new(
        board.width as i32 - 1 - border,
        board.height as i32 - 1 - border,
    )
}

/// Where the landmarks ended up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Landmarks {
    pub entrance: Option<Coord>,
    pub exit: Option<Coord>,
}

/// Reserve entrance then exit. The exit never lands on the entrance: when the
/// two targets coincide the exit takes the nearest remaining free cell.
pub fn reserve_landmarks(board: &mut Board) -> Landmarks {
    let entrance = reserve_or_nearest(board, entrance_target(board), Category::Entrance);

    let target = exit_target(board);
    if entrance == Some(target) {
        debug!(?target, "exit target coincides with entrance");
    }
    let exit = reserve_or_nearest(board, target, Category::Exit);

    Landmarks { entrance, exit }
}

/// Reserve both landmarks and instantiate an entity for each one placed
pub fn place_landmarks(
    board: &mut Board,
    factory: &mut impl EntityFactory,
) -> (Landmarks, Vec<PlacedEntity>) {
    let landmarks = reserve_landmarks(board);
    let mut placed = Vec::with_capacity(2);
    for (category, coord) in [
        (Category::Entrance, landmarks.entrance),
        (Category::Exit, landmarks.exit),
    ] {
        if let Some(coord) = coord {
            placed.push(instantiate_at(board, category, 0, coord, factory));
        }
    }
    (landmarks, placed)
}
