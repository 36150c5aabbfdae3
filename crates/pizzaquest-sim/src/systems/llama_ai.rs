//! Applies llama brain decisions to the world.

use hecs::Entity;

use pizzaquest_ai::brain::{decide, LlamaContext, LlamaIntent};
use pizzaquest_core::components::{Brain, Capabilities, Facing, FireballStats, Wander};
use pizzaquest_core::constants::{LLAMA_PURSUIT_RADIUS, LLAMA_WANDER_RADIUS};

use crate::blueprint::Blueprint;
use crate::systems::movement;
use crate::world::WorldState;

/// Run one llama event. Returns `false` when the llama should not be
/// rescheduled (it is gone or burnt).
pub fn act(world: &mut WorldState, entity: Entity) -> bool {
    let Some(caps) = world.store.get::<Capabilities>(entity) else {
        return false;
    };
    if caps.burnt {
        log::trace!("burnt llama {:?} stops acting", world.id(entity));
        return false;
    }
    let (Some(position), Some(Facing(facing)), Some(brain)) = (
        world.store.position(entity),
        world.store.get::<Facing>(entity),
        world.store.get::<Brain>(entity),
    ) else {
        return false;
    };
    let wander = world.store.get::<Wander>(entity).unwrap_or(Wander {
        anchor: position,
        radius: LLAMA_WANDER_RADIUS,
    });
    let spit = world.store.get::<FireballStats>(entity);

    let ctx = LlamaContext {
        intelligence: brain.intelligence,
        position,
        facing,
        anchor: wander.anchor,
        wander_radius: wander.radius,
        pursuit_radius: LLAMA_PURSUIT_RADIUS,
        player: world.player_position(),
        spit_range: spit.map_or(0, |s| s.range),
    };

    match decide(&ctx, &mut world.rng) {
        LlamaIntent::Idle => {}
        LlamaIntent::Face(direction) => {
            movement::turn(world, entity, direction);
        }
        LlamaIntent::Step(direction) => {
            movement::step(world, entity, direction);
        }
        LlamaIntent::Shoot => {
            if let Some(stats) = spit {
                spit_at_facing(world, entity, stats);
            }
        }
    }
    true
}

/// Spawn a spitball in the faced cell if it is clear. The player may
/// stand there; anything else solid blocks the shot.
fn spit_at_facing(world: &mut WorldState, entity: Entity, stats: FireballStats) -> bool {
    let (Some(position), Some(Facing(facing))) =
        (world.store.position(entity), world.store.get::<Facing>(entity))
    else {
        return false;
    };
    let target = position.step(facing);
    if !world.grid.contains(target) || world.grid.blocks_walking(target) {
        return false;
    }
    let obstructed = world.store.occupants(target).any(|other| {
        let solid = world.store.caps(other).is_some_and(|c| !c.walkable);
        let player = world.store.kind(other).is_some_and(|k| k.is_player());
        solid && !player
    });
    if obstructed {
        return false;
    }
    match world.materialize(Blueprint::spitball(facing, stats), target) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("spit failed: {err}");
            false
        }
    }
}
