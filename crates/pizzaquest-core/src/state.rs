//! Snapshot of the observable state, produced after every tick.

use serde::{Deserialize, Serialize};

use crate::components::FireballStats;
use crate::enums::{Direction, Outcome};
use crate::events::RenderEvent;
use crate::types::{GridPos, SimTime};

/// Everything the outer driver and the collaborators need after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub outcome: Outcome,
    pub player: Option<PlayerView>,
    /// Number of materialized entities.
    pub entity_count: usize,
    /// Events pending in the scheduler after the tick.
    pub queued_events: usize,
    pub render_events: Vec<RenderEvent>,
}

/// The player's status panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: GridPos,
    pub facing: Direction,
    pub health: i32,
    pub max_health: i32,
    pub fireball: FireballStats,
    pub inventory: Vec<String>,
}
