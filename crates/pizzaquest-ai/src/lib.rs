//! Character AI for Pizza Quest.
//!
//! Decides what llamas and rats want to do each time their event fires.
//! Pure functions over plain data with an injected RNG: the simulation
//! crate applies the resulting intents to the world.

pub mod brain;
pub mod profiles;

pub use pizzaquest_core as core;

#[cfg(test)]
mod tests;
