//! Level loading errors. All of these are fatal and checked before the
//! first tick runs.

use thiserror::Error;

use crate::grid::TerrainCode;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed level data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level must have at least one cell")]
    EmptyGrid,

    #[error("terrain array has {actual} cells, expected {expected} for the declared dimensions")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("terrain code {code} at index {index} has no sprite")]
    MissingSprite { code: TerrainCode, index: usize },

    #[error("burnt terrain code {code} has no sprite")]
    MissingBurntSprite { code: TerrainCode },

    #[error("{what} spawn at ({x}, {y}) is outside the level")]
    SpawnOutOfBounds { what: String, x: i32, y: i32 },
}
