//! Terrain system for Pizza Quest.
//!
//! The static tile grid with its walkability/flammability
//! classification, and level-data loading with fail-fast validation.

pub use pizzaquest_core as core;

pub mod error;
pub mod grid;
pub mod level;

// Re-export key types for convenience.
pub use error::LevelError;
pub use grid::{Grid, TerrainCode};
pub use level::{load_level, parse_level, LevelData, PlayerSpec, SpawnSpec};
