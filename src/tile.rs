use crate::config::TileParams;
use crate::grid::Cell;
use rand::Rng;

/// Tile kinds a board cell can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Passable interior
    Ground,
    /// Impassable outer ring
    Border,
}

impl TileType {
    pub fn for_cell(cell: &Cell) -> Self {
        if cell.is_passable() {
            TileType::Ground
        } else {
            TileType::Border
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            TileType::Ground => '.',
            TileType::Border => '#',
        }
    }
}

/// A tile visual: the kind plus which of its sprite variants to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileVariant {
    pub tile_type: TileType,
    pub variant: usize,
}

impl TileVariant {
    pub fn new(tile_type: TileType, variant: usize) -> Self {
        Self { tile_type, variant }
    }

    /// Pick a random visual for a cell, ground or border depending on passability
    pub fn pick(cell: &Cell, params: &TileParams, rng: &mut impl Rng) -> Self {
        let tile_type = TileType::for_cell(cell);
        let variants = match tile_type {
            TileType::Ground => params.ground_variants,
            TileType::Border => params.border_variants,
        };
        let variant = if variants > 1 { rng.gen_range(0..variants) } else { 0 };
        Self::new(tile_type, variant)
    }
}
