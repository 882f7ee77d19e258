use crate::grid::Coord;
use crate::spawning::Category;
use glam::Vec2;

/// Position component - grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for Position {
    fn from(coord: Coord) -> Self {
        Self::new(coord.x, coord.y)
    }
}

/// World-space position the entity is drawn at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualPosition(pub Vec2);

/// What the generator placed and which prefab variant it picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub category: Category,
    pub variant: usize,
}

/// Marks entities that stop movement through their cell
#[derive(Debug, Clone, Copy)]
pub struct BlocksMovement;
