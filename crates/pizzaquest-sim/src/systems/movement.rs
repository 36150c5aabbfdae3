//! Grid movement and collision.
//!
//! A directional entity that is told to move some other way only turns;
//! the step is spent. Blocking is checked against terrain and against
//! solid entities already in the target cell.

use hecs::Entity;

use pizzaquest_core::components::Facing;
use pizzaquest_core::enums::Direction;
use pizzaquest_core::events::RenderEvent;

use crate::world::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    OutOfBounds,
    /// Unwalkable terrain or a solid entity.
    Blocked,
    /// The entity is no longer materialized.
    Gone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Turned,
    Rejected(RejectReason),
    Moved,
}

/// Try to move `entity` one cell in `direction`.
pub fn step(world: &mut WorldState, entity: Entity, direction: Direction) -> MoveOutcome {
    let (Some(kind), Some(from)) = (world.store.kind(entity), world.store.position(entity)) else {
        return MoveOutcome::Rejected(RejectReason::Gone);
    };

    if let Some(Facing(facing)) = world.store.get::<Facing>(entity) {
        if facing != direction {
            turn(world, entity, direction);
            return MoveOutcome::Turned;
        }
    }

    let to = from.step(direction);
    if !world.grid.contains(to) {
        return MoveOutcome::Rejected(RejectReason::OutOfBounds);
    }
    if world.grid.blocks_walking(to) {
        return MoveOutcome::Rejected(RejectReason::Blocked);
    }
    if world.store.solid_occupant(to, Some(entity)).is_some() {
        return MoveOutcome::Rejected(RejectReason::Blocked);
    }

    world.store.relocate(entity, to);
    let delta = direction.delta();
    let event = if kind.is_player() {
        // The view stays centred on the player.
        RenderEvent::CameraMoved { delta: -delta }
    } else {
        RenderEvent::EntityMoved {
            entity: world.id(entity),
            delta,
        }
    };
    world.events.push(event);
    MoveOutcome::Moved
}

/// Face `direction` without moving. No-op if already facing it.
pub fn turn(world: &mut WorldState, entity: Entity, direction: Direction) -> bool {
    let changed = world
        .store
        .update::<Facing, _>(entity, |facing| {
            let changed = facing.0 != direction;
            facing.0 = direction;
            changed
        })
        .unwrap_or(false);
    if changed {
        world.events.push(RenderEvent::Turned {
            entity: world.id(entity),
            facing: direction,
        });
    }
    changed
}
