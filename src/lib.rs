//! Tile-board roguelike level generation.
//!
//! A level number becomes a bordered square board; entrance and exit are
//! reserved on opposite interior corners; walls, food and enemies are counted
//! from board area and level and dropped onto the remaining free cells.
//! [`engine::LevelDirector`] ties it together behind engine adapter traits.

pub mod board_gen;
pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod events;
pub mod grid;
pub mod reservation;
pub mod scaling;
pub mod spawning;
pub mod tile;
pub mod turns;

pub use board_gen::{board_size, BoardGenerator, LevelContext};
pub use config::{ConfigError, LevelConfig};
pub use engine::{Level, LevelDirector};
pub use grid::{Board, Cell, Coord, EntityHandle};
pub use spawning::{Category, PlacedEntity};
