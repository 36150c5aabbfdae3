//! Ambient actors: fidgeting rats and the swirling vortex.

use hecs::Entity;

use pizzaquest_ai::brain::rat_fidget;
use pizzaquest_core::components::{Animation, Capabilities, Restlessness};
use pizzaquest_core::constants::RAT_RESTLESSNESS;
use pizzaquest_core::events::RenderEvent;

use crate::systems::movement;
use crate::world::WorldState;

/// One rat event. A burnt rat stays put for good.
pub fn rat(world: &mut WorldState, entity: Entity) -> bool {
    let Some(caps) = world.store.get::<Capabilities>(entity) else {
        return false;
    };
    if caps.burnt {
        return false;
    }
    let restlessness = world
        .store
        .get::<Restlessness>(entity)
        .map_or(RAT_RESTLESSNESS, |r| r.0);
    if let Some(direction) = rat_fidget(restlessness, &mut world.rng) {
        movement::step(world, entity, direction);
    }
    true
}

/// Advance the vortex swirl by one frame.
pub fn vortex(world: &mut WorldState, entity: Entity) -> bool {
    let Some(frame) = world.store.update::<Animation, _>(entity, |anim| {
        anim.frame = (anim.frame + 1) % anim.frames.max(1);
        anim.frame
    }) else {
        return false;
    };
    world.events.push(RenderEvent::FrameChanged {
        entity: world.id(entity),
        frame,
    });
    true
}
