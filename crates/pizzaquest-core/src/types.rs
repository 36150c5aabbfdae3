//! Fundamental grid and simulation types.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// A cell position on the level grid.
/// x grows to the right (columns), y grows downward (rows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self.offset(direction.delta())
    }

    /// This position shifted by an arbitrary delta.
    pub fn offset(self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    /// Vector from `self` to `other`.
    pub fn delta_to(self, other: GridPos) -> IVec2 {
        IVec2::new(other.x - self.x, other.y - self.y)
    }

    /// Chebyshev distance: the larger of the two axis offsets.
    pub fn chebyshev_to(self, other: GridPos) -> i32 {
        let d = self.delta_to(other).abs();
        d.x.max(d.y)
    }
}

impl From<IVec2> for GridPos {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<GridPos> for IVec2 {
    fn from(p: GridPos) -> Self {
        IVec2::new(p.x, p.y)
    }
}

/// Stable entity identifier handed to external collaborators.
/// The simulation maps its internal handles onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Elapsed simulation time in milliseconds at the nominal tick rate.
    pub fn elapsed_millis(&self) -> u64 {
        self.tick * 1000 / crate::constants::TICK_RATE as u64
    }
}
