//! Player commands delivered by the input collaborator.
//!
//! At most one command is consumed per tick; the rest wait their turn.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputCommand {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Pick up the faced entity.
    Take,
    /// Talk to / use the faced entity.
    Interact,
    /// Throw a fireball along the facing direction.
    Shoot,
    /// Leave the game.
    Quit,
}

impl InputCommand {
    /// Direction for the movement commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputCommand::MoveLeft => Some(Direction::Left),
            InputCommand::MoveRight => Some(Direction::Right),
            InputCommand::MoveUp => Some(Direction::Up),
            InputCommand::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}
