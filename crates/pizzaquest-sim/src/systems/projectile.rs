//! Projectile flight.
//!
//! Each event a projectile either advances one cell along its facing or
//! stops. Stop rules are checked in a fixed order and the first match
//! wins. A stopped projectile applies its effect once and is removed.

use hecs::Entity;

use pizzaquest_core::components::{Facing, ProjectileState};
use pizzaquest_core::enums::Element;
use pizzaquest_core::events::RenderEvent;
use pizzaquest_core::types::GridPos;

use crate::systems::combat;
use crate::world::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    RangeExhausted,
    OutOfBounds,
    /// Terrain ahead it cannot pass.
    Terrain,
    /// Fire standing on flammable ground.
    FlammableGround,
    /// A solid entity ahead.
    Blocked,
    /// Resting on its target (a llama for fire, the player for spit).
    OnTarget,
    /// Fire resting on something flammable.
    OnFlammable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStep {
    Advanced,
    Stopped(StopReason),
    /// Not a live projectile.
    Gone,
}

/// Handle one event for a projectile.
pub fn advance(world: &mut WorldState, entity: Entity) -> ProjectileStep {
    let Some(element) = world.store.kind(entity).and_then(|k| k.projectile_element()) else {
        return ProjectileStep::Gone;
    };
    let (Some(position), Some(Facing(facing)), Some(state)) = (
        world.store.position(entity),
        world.store.get::<Facing>(entity),
        world.store.get::<ProjectileState>(entity),
    ) else {
        return ProjectileStep::Gone;
    };

    let reason = if state.remaining == 0 {
        Some(StopReason::RangeExhausted)
    } else {
        world.store.set(
            entity,
            ProjectileState {
                remaining: state.remaining - 1,
                ..state
            },
        );
        stop_reason(world, entity, element, position, position.step(facing))
    };

    match reason {
        Some(reason) => {
            log::debug!("{element:?} projectile stopped at ({}, {}): {reason:?}", position.x, position.y);
            impact(world, entity, element, position, state.power);
            world.dematerialize(entity);
            ProjectileStep::Stopped(reason)
        }
        None => {
            world.store.relocate(entity, position.step(facing));
            world.events.push(RenderEvent::EntityMoved {
                entity: world.id(entity),
                delta: facing.delta(),
            });
            ProjectileStep::Advanced
        }
    }
}

/// Stop rules after the range check, in order.
fn stop_reason(
    world: &WorldState,
    entity: Entity,
    element: Element,
    here: GridPos,
    ahead: GridPos,
) -> Option<StopReason> {
    let grid = &world.grid;
    let store = &world.store;
    let is_fire = element == Element::Fire;

    let Some(ahead_code) = grid.tile_at(ahead) else {
        return Some(StopReason::OutOfBounds);
    };
    if grid.is_unwalkable(ahead_code) && (!is_fire || !grid.is_flammable(ahead_code)) {
        return Some(StopReason::Terrain);
    }
    if is_fire && grid.is_flammable_at(here) {
        return Some(StopReason::FlammableGround);
    }

    let blocks = store.occupants(ahead).any(|other| {
        let (Some(kind), Some(caps)) = (store.kind(other), store.caps(other)) else {
            return false;
        };
        let exempt = match element {
            Element::Fire => kind.is_llama(),
            Element::Spit => kind.is_player(),
        };
        !caps.walkable && !caps.flammable && !exempt
    });
    if blocks {
        return Some(StopReason::Blocked);
    }

    let on_target = store.occupants(here).filter(|e| *e != entity).any(|other| {
        let (Some(kind), Some(caps)) = (store.kind(other), store.caps(other)) else {
            return false;
        };
        match element {
            Element::Fire => kind.is_llama() && !caps.burnt,
            Element::Spit => kind.is_player(),
        }
    });
    if on_target {
        return Some(StopReason::OnTarget);
    }

    if is_fire
        && store
            .occupants(here)
            .filter(|e| *e != entity)
            .any(|other| store.caps(other).is_some_and(|c| c.flammable))
    {
        return Some(StopReason::OnFlammable);
    }
    None
}

/// Effect of a projectile coming to rest on `here`.
fn impact(world: &mut WorldState, entity: Entity, element: Element, here: GridPos, power: i32) {
    let others: Vec<Entity> = world.store.occupants(here).filter(|e| *e != entity).collect();
    match element {
        Element::Fire => {
            let flammable = others
                .iter()
                .copied()
                .find(|e| world.store.caps(*e).is_some_and(|c| c.flammable && !c.burnt));
            if let Some(target) = flammable {
                combat::burn(world, target);
                return;
            }
            let llama = others.iter().copied().find(|e| {
                world.store.kind(*e).is_some_and(|k| k.is_llama())
                    && world.store.caps(*e).is_some_and(|c| !c.burnt)
            });
            if let Some(target) = llama {
                combat::hit(world, target, power);
                return;
            }
            if let Some(code) = world.grid.burn_cell(here) {
                world.events.push(RenderEvent::TerrainChanged {
                    position: here,
                    code,
                });
            }
        }
        Element::Spit => {
            let player = others
                .iter()
                .copied()
                .find(|e| world.store.kind(*e).is_some_and(|k| k.is_player()));
            if let Some(target) = player {
                combat::hit(world, target, power);
            }
        }
    }
}
