//! Tuning constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Most of these are the defaults behind [`crate::config::LevelConfig`].

mod board;
mod camera;
mod gameplay;
mod scaling;

pub use board::*;
pub use camera::*;
pub use gameplay::*;
pub use scaling::*;
