//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick is 10 ms.
pub const TICK_RATE: u32 = 100;

// --- Scheduling ---

/// Ticks between input polls.
pub const INPUT_POLL_INTERVAL: u32 = 1;

/// Ticks between llama AI decisions.
pub const LLAMA_CADENCE: u32 = 100;

/// Ticks between rat fidgets.
pub const RAT_CADENCE: u32 = 10;

/// Ticks between vortex animation frames.
pub const VORTEX_CADENCE: u32 = 20;

/// Number of frames in the vortex swirl.
pub const VORTEX_FRAMES: u8 = 4;

// --- Terrain ---

/// Code written into a flammable cell after it burns.
pub const DEFAULT_BURNT_TERRAIN: u16 = 0;

/// Terrain code that needs no sprite (plain background).
pub const BACKGROUND_TERRAIN: u16 = 0;

// --- Llamas ---

/// Cells a spitball travels.
pub const LLAMA_SPIT_RANGE: u32 = 2;

/// Ticks between spitball advances.
pub const LLAMA_SPIT_SPEED: u32 = 15;

/// Spitball power (a hit removes `power + 1`).
pub const LLAMA_SPIT_POWER: i32 = 0;

/// Leash around the anchor for wandering llamas.
pub const LLAMA_WANDER_RADIUS: i32 = 7;

/// How close the player must be before an aggressive llama gives chase.
pub const LLAMA_PURSUIT_RADIUS: i32 = 7;

/// Added to the spit range to get the box in which a llama opens fire.
pub const SHOT_RANGE_MARGIN: i32 = 3;

// --- Rats ---

/// Default rat fidgetiness (moves 1 event in N).
pub const RAT_RESTLESSNESS: u32 = 5;

// --- Pizza rewards ---

pub const PIZZA_HEALTH_BONUS: i32 = 1;
pub const PIZZA_POWER_BONUS: i32 = 1;
pub const PIZZA_RANGE_BONUS: u32 = 2;
/// Reduction of the fireball advance delay.
pub const PIZZA_SPEED_BONUS: u32 = 3;
/// Fireballs never advance faster than one cell per tick.
pub const MIN_FIREBALL_SPEED: u32 = 1;

/// How far from the player the vortex may appear.
pub const VORTEX_SEARCH_RADIUS: i32 = 6;
