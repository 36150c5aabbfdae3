//! Simulation engine for Pizza Quest.
//!
//! Owns the hecs ECS world and the tick-ordered event queue, resolves
//! movement, projectiles, combat and AI, and produces a `SimSnapshot`
//! after every tick. Headless and deterministic for a given seed.

pub mod blueprint;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod store;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use pizzaquest_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::{SetupError, SpawnError};
