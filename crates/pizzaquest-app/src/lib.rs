//! Pizza Quest headless driver.
//!
//! Wires the simulation to its outer collaborators: a fixed-interval
//! loop on its own thread, line-based input from stdin, and a render
//! collaborator that logs what changed.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod state;

pub use pizzaquest_core as core;
