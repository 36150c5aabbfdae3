//! Errors raised while populating the world. Both are fatal at setup;
//! during play every spawn site checks its target cell first.

use thiserror::Error;

use pizzaquest_core::types::GridPos;
use pizzaquest_terrain::LevelError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("cannot materialize at {0:?}: outside the level")]
    OutOfBounds(GridPos),

    #[error("cannot materialize at {0:?}: cell already holds a solid entity")]
    Occupied(GridPos),
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error("failed to place {what}: {source}")]
    Spawn {
        what: &'static str,
        #[source]
        source: SpawnError,
    },
}
