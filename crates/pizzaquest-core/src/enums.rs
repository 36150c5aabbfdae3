//! Enumeration types used throughout the simulation.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the four axis-aligned directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

/// Direction <-> unit vector lookup. Screen coordinates: Up is -y.
pub const DIRECTION_TABLE: [(Direction, IVec2); 4] = [
    (Direction::Left, IVec2::new(-1, 0)),
    (Direction::Right, IVec2::new(1, 0)),
    (Direction::Up, IVec2::new(0, -1)),
    (Direction::Down, IVec2::new(0, 1)),
];

impl Direction {
    /// All four directions in table order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit vector for this direction.
    pub fn delta(self) -> IVec2 {
        DIRECTION_TABLE[self as usize].1
    }

    /// Inverse lookup: the direction whose unit vector is `delta`, if any.
    pub fn from_delta(delta: IVec2) -> Option<Direction> {
        DIRECTION_TABLE
            .iter()
            .find(|(_, v)| *v == delta)
            .map(|(d, _)| *d)
    }
}

/// Entity kind tag. Resolvers ask the predicates below rather than
/// matching on concrete variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    // --- Things ---
    Door,
    BarricadeDoor,
    Pizza,
    Vortex,
    /// Scenery or an NPC that only talks (e.g. Felix).
    Decoration,
    // --- Characters ---
    Player,
    Rat,
    Llama,
    // --- Projectiles ---
    Fireball,
    Spitball,
}

impl Kind {
    pub fn is_player(self) -> bool {
        matches!(self, Kind::Player)
    }

    pub fn is_llama(self) -> bool {
        matches!(self, Kind::Llama)
    }

    pub fn is_pizza(self) -> bool {
        matches!(self, Kind::Pizza)
    }

    pub fn is_vortex(self) -> bool {
        matches!(self, Kind::Vortex)
    }

    pub fn is_barricade_door(self) -> bool {
        matches!(self, Kind::BarricadeDoor)
    }

    pub fn is_character(self) -> bool {
        matches!(self, Kind::Player | Kind::Rat | Kind::Llama)
    }

    pub fn is_projectile(self) -> bool {
        self.projectile_element().is_some()
    }

    /// Element of a projectile kind; `None` for everything else.
    pub fn projectile_element(self) -> Option<Element> {
        match self {
            Kind::Fireball => Some(Element::Fire),
            Kind::Spitball => Some(Element::Spit),
            _ => None,
        }
    }
}

/// What a projectile is made of. Decides its stop rules and effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    /// Player fireballs: pass over flammables, ignite what they stop on.
    Fire,
    /// Llama spit: stopped by any unwalkable terrain, hurts the player.
    Spit,
}

/// Llama intelligence tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intelligence {
    /// Stands still, turns toward the player, spits when lined up.
    #[default]
    Passive,
    /// Wanders around its anchor, spits when the player is close.
    Wandering,
    /// Closes in on the player, spits when the player is close.
    Aggressive,
}

impl Intelligence {
    /// Adjective used in the llama's description.
    pub fn adjective(self) -> &'static str {
        match self {
            Intelligence::Passive => "dumb",
            Intelligence::Wandering => "average",
            Intelligence::Aggressive => "smart",
        }
    }
}

/// Session outcome observed by the outer driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    /// The player asked to leave.
    Quit,
    /// Player health reached zero.
    Lost,
    /// The player stepped through the vortex.
    LevelComplete,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}
