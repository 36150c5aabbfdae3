//! Notifications emitted by the simulation for the rendering collaborator.
//!
//! The core never deals in pixels or draw order; it only says what
//! changed. Events are drained into each tick's snapshot.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Direction, Kind};
use crate::types::{EntityId, GridPos};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderEvent {
    /// An entity entered the world.
    Materialized {
        entity: EntityId,
        kind: Kind,
        position: GridPos,
        facing: Option<Direction>,
    },
    /// An entity left the world.
    Dematerialized { entity: EntityId },
    /// A non-player entity moved by `delta` cells.
    EntityMoved { entity: EntityId, delta: IVec2 },
    /// The viewport shifted; the player stays centred.
    CameraMoved { delta: IVec2 },
    /// A terrain cell changed code (fire burning it).
    TerrainChanged { position: GridPos, code: u16 },
    /// A directional entity turned in place.
    Turned { entity: EntityId, facing: Direction },
    /// An entity turned to ashes.
    Burnt { entity: EntityId },
    /// A looping animation advanced.
    FrameChanged { entity: EntityId, frame: u8 },
    /// Player health changed.
    HealthChanged { current: i32, max: i32 },
    /// The player picked something up.
    InventoryChanged { items: Vec<String> },
    /// Text for the message box.
    Message { text: String },
}
