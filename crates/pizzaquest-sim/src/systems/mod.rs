//! Systems that resolve what happens when an event fires.
//!
//! Systems are free functions over `&mut WorldState`. They own no
//! state; everything lives in components, the grid or the queue.

pub mod combat;
pub mod critters;
pub mod llama_ai;
pub mod movement;
pub mod player;
pub mod projectile;
pub mod snapshot;
