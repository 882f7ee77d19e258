use crate::config::LevelConfig;
use crate::constants::*;
use crate::grid::Board;
use tracing::{debug, warn};

/// Board edge for a level: grows by one per level past the first, clamped to
/// `[BOARD_MIN_SIZE, max_size]`.
pub fn board_size(level: u32, base_size: usize, max_size: usize) -> usize {
    let max_size = max_size.max(BOARD_MIN_SIZE);
    let growth = level.saturating_sub(1) as usize;
    base_size.saturating_add(growth).clamp(BOARD_MIN_SIZE, max_size)
}

/// Per-level inputs to generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelContext {
    /// 1-based level number
    pub level: u32,
    /// Edge length of the square board
    pub board_size: usize,
}

impl LevelContext {
    pub fn new(level: u32, config: &LevelConfig) -> Self {
        let level = level.max(1);
        Self {
            level,
            board_size: board_size(level, config.base_size, config.max_size),
        }
    }
}

/// Builds bordered boards.
///
/// Sizes are clamped rather than rejected, and a border that would swallow the
/// whole board is thinned until at least one interior cell remains.
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator {
    max_size: usize,
}

impl BoardGenerator {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size: max_size.max(BOARD_MIN_SIZE),
        }
    }

    fn clamp_size(&self, requested: i32) -> usize {
        let clamped = (requested.max(0) as usize).clamp(BOARD_MIN_SIZE, self.max_size);
        if clamped as i64 != requested as i64 {
            warn!(requested, clamped, "board dimension out of range, clamped");
        }
        clamped
    }

    /// Generate a `width` x `height` board whose outer `border` rings are impassable.
    /// A border of 0 leaves every cell passable.
    pub fn generate(&self, width: i32, height: i32, border: usize) -> Board {
        puffin::profile_function!();
        let width = self.clamp_size(width);
        let height = self.clamp_size(height);

        let max_border = (width.min(height) - 1) / 2;
        let border = if border > max_border {
            warn!(
                requested = border,
                clamped = max_border,
                width,
                height,
                "border would leave no interior, thinned"
            );
            max_border
        } else {
            border
        };

        let board = Board::with_border(width, height, border);
        debug!(
            width,
            height,
            border,
            free = board.free_count(),
            "generated board"
        );
        board
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new(BOARD_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;
    use std::collections::HashSet;

    #[test]
    fn test_board_dimensions() {
        let board = BoardGenerator::default().generate(7, 9, 1);
        assert_eq!(board.width, 7);
        assert_eq!(board.height, 9);
        assert_eq!(board.coords().count(), 63);
    }

    #[test]
    fn test_pool_size_matches_interior() {
        let generator = BoardGenerator::new(40);
        for (w, h, b) in [(3, 3, 1), (5, 8, 1), (10, 10, 2), (6, 4, 0), (20, 15, 3)] {
            let board = generator.generate(w, h, b);
            let expected = (w as usize - 2 * b) * (h as usize - 2 * b);
            assert_eq!(board.free_count(), expected, "{}x{} border {}", w, h, b);
            assert_eq!(board.free_count(), board.area() - board.border_cell_count());
        }
    }

    #[test]
    fn test_pool_has_no_duplicates_and_stays_in_range() {
        let board = BoardGenerator::default().generate(12, 9, 2);
        let unique: HashSet<Coord> = board.free_cells().iter().copied().collect();
        assert_eq!(unique.len(), board.free_count());
        for coord in unique {
            let cell = board.get(coord).unwrap();
            assert!(cell.is_free());
        }
    }

    #[test]
    fn test_border_cells_are_impassable() {
        let board = BoardGenerator::default().generate(6, 6, 1);
        for coord in board.coords() {
            let on_edge = coord.x == 0 || coord.y == 0 || coord.x == 5 || coord.y == 5;
            assert_eq!(board.get(coord).unwrap().is_passable(), !on_edge);
        }
    }

    #[test]
    fn test_sizes_are_clamped() {
        let generator = BoardGenerator::new(10);
        let tiny = generator.generate(-4, 0, 0);
        assert_eq!((tiny.width, tiny.height), (3, 3));
        let huge = generator.generate(500, 11, 0);
        assert_eq!((huge.width, huge.height), (10, 10));
    }

    #[test]
    fn test_thick_border_is_thinned_to_keep_interior() {
        let board = BoardGenerator::default().generate(3, 3, 2);
        assert_eq!(board.border(), 1);
        assert_eq!(board.free_count(), 1);
        assert!(board.is_free(Coord::new(1, 1)));

        let board = BoardGenerator::default().generate(4, 9, 5);
        assert_eq!(board.border(), 1);
        assert_eq!(board.free_count(), 2 * 7);
    }

    #[test]
    fn test_board_size_grows_then_clamps() {
        assert_eq!(board_size(1, 5, 8), 5);
        assert_eq!(board_size(2, 5, 8), 6);
        assert_eq!(board_size(4, 5, 8), 8);
        assert_eq!(board_size(40, 5, 8), 8);
        assert_eq!(board_size(0, 5, 8), 5);
        assert_eq!(board_size(1, 1, 8), 3);
        assert_eq!(board_size(1, 5, 2), 3);

        let mut previous = 0;
        for level in 1..50 {
            let size = board_size(level, 5, 20);
            assert!(size >= previous);
            previous = size;
        }
    }

    #[test]
    fn test_level_context_treats_zero_as_first_level() {
        let config = LevelConfig::default();
        let context = LevelContext::new(0, &config);
        assert_eq!(context.level, 1);
        assert_eq!(context.board_size, config.base_size);
    }
}
