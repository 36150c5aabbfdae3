//! Damage, death and burning.
//!
//! A hit removes `power + 1` health. Dead llamas burn and count toward
//! the barricade unlock; a dead player ends the session as `Lost`.

use hecs::Entity;

use pizzaquest_core::components::{Capabilities, Health, Label};
use pizzaquest_core::enums::{Kind, Outcome};
use pizzaquest_core::events::RenderEvent;

use crate::world::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Still standing.
    Damaged { remaining: i32 },
    /// A non-player died from this hit.
    Killed,
    /// The player died from this hit.
    Lost,
    /// Nothing to hurt: gone, burnt, or without health.
    Ignored,
}

/// Apply a hit of `power` to `entity`.
pub fn hit(world: &mut WorldState, entity: Entity, power: i32) -> HitOutcome {
    let (Some(kind), Some(caps)) = (world.store.kind(entity), world.store.caps(entity)) else {
        return HitOutcome::Ignored;
    };
    if caps.burnt {
        return HitOutcome::Ignored;
    }
    let Some(health) = world.store.update::<Health, _>(entity, |h| {
        h.current -= power + 1;
        *h
    }) else {
        return HitOutcome::Ignored;
    };
    log::debug!("{kind:?} hit for {}, health now {}", power + 1, health.current);

    if kind.is_player() {
        world.events.push(RenderEvent::HealthChanged {
            current: health.current,
            max: health.max,
        });
        // Later hits keep lowering health but the loss fires once.
        if health.current <= 0 && world.outcome == Outcome::Playing {
            world.finish(Outcome::Lost);
            return HitOutcome::Lost;
        }
        return HitOutcome::Damaged {
            remaining: health.current,
        };
    }

    if health.current > 0 {
        return HitOutcome::Damaged {
            remaining: health.current,
        };
    }

    if kind.is_llama() && world.roster.record_death(entity) {
        log::info!(
            "llama down ({} of {})",
            world.roster.dead_count(),
            world.roster.initial_count()
        );
        burn(world, entity);
        if world.roster.all_dead() {
            unlock_barricades(world);
        }
    } else {
        burn(world, entity);
    }
    HitOutcome::Killed
}

/// Reduce an entity to ashes. Returns `false` if it was already burnt.
pub fn burn(world: &mut WorldState, entity: Entity) -> bool {
    let changed = world
        .store
        .update::<Capabilities, _>(entity, Capabilities::burn)
        .unwrap_or(false);
    if !changed {
        return false;
    }
    world.store.update::<Label, _>(entity, Label::reduce_to_ashes);
    world.events.push(RenderEvent::Burnt {
        entity: world.id(entity),
    });
    true
}

/// Every starting llama is dead: barricades vanish.
fn unlock_barricades(world: &mut WorldState) {
    let barricades = world.store.entities_where(Kind::is_barricade_door);
    log::info!("all llamas dead, removing {} barricade(s)", barricades.len());
    for barricade in barricades {
        world.dematerialize(barricade);
    }
}
