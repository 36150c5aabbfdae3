//! ECS components for hecs entities.
//!
//! Components are plain data structs. The only behaviour kept here is
//! the capability transition, since it has to stay consistent
//! everywhere something catches fire.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, Intelligence};
use crate::types::GridPos;

/// Interaction affordances of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Other entities may share the cell.
    pub walkable: bool,
    /// The player can pick it up.
    pub takable: bool,
    /// A fireball will set it alight.
    pub flammable: bool,
    /// Already reduced to ashes.
    pub burnt: bool,
}

impl Capabilities {
    /// Solid, inert: the default for things and characters.
    pub const SOLID: Capabilities = Capabilities {
        walkable: false,
        takable: false,
        flammable: false,
        burnt: false,
    };

    /// Turn into a pile of ashes. One-way; returns `false` when the
    /// entity was already burnt and nothing changed.
    pub fn burn(&mut self) -> bool {
        if self.burnt {
            return false;
        }
        self.walkable = true;
        self.flammable = false;
        self.takable = false;
        self.burnt = true;
        true
    }
}

/// Display name and description shown on interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub description: String,
}

impl Label {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Rewrite the label for a burnt entity. Callers only invoke this
    /// when `Capabilities::burn` reported a change.
    pub fn reduce_to_ashes(&mut self) {
        self.name = format!("{}'s ashes", self.name);
        self.description = format!("what used to be {}", self.description);
    }
}

/// Current orientation of a directional entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facing(pub Direction);

/// Hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Ranged attack parameters of a shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireballStats {
    /// Cells a projectile may advance before stopping.
    pub range: u32,
    /// Ticks between projectile advances (lower is faster).
    pub speed: u32,
    /// Damage bonus; a hit removes `power + 1` health.
    pub power: i32,
}

/// Home cell and leash for wandering characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wander {
    pub anchor: GridPos,
    pub radius: i32,
}

/// Behaviour tier of an AI-driven llama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brain {
    pub intelligence: Intelligence,
}

/// Rat fidgetiness: moves with probability `1 / restlessness` per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restlessness(pub u32);

/// In-flight projectile state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectileState {
    /// Advances left before the projectile stops.
    pub remaining: u32,
    pub power: i32,
}

/// Ticks between an entity's self-scheduled events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence(pub u32);

/// Looping animation state (vortex swirl).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub frame: u8,
    pub frames: u8,
}

/// Names of items the player has picked up, in pickup order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<String>,
}
