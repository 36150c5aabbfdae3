//! Player actions, one per consumed input command.
//!
//! Everything here acts on the cell the player faces. Actions that do
//! not apply are silent no-ops reported as `ActionOutcome::Nothing`.

use glam::IVec2;
use hecs::Entity;

use pizzaquest_core::commands::InputCommand;
use pizzaquest_core::components::{Capabilities, Facing, FireballStats, Health, Inventory, Label};
use pizzaquest_core::constants::*;
use pizzaquest_core::enums::Outcome;
use pizzaquest_core::events::RenderEvent;
use pizzaquest_core::types::GridPos;

use crate::blueprint::Blueprint;
use crate::systems::movement::{self, MoveOutcome};
use crate::world::WorldState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Took { item: String },
    /// Read the faced entity's description.
    Examined,
    AtePizza,
    EnteredVortex,
    Shot,
    Quit,
    Nothing,
}

/// Apply one input command to the player.
pub fn handle(world: &mut WorldState, command: InputCommand) -> ActionOutcome {
    let Some(player) = world.player.filter(|p| world.store.contains(*p)) else {
        return ActionOutcome::Nothing;
    };
    if let Some(direction) = command.direction() {
        return ActionOutcome::Move(movement::step(world, player, direction));
    }
    match command {
        InputCommand::Take => take(world, player),
        InputCommand::Interact => interact(world, player),
        InputCommand::Shoot => shoot(world, player),
        InputCommand::Quit => {
            world.finish(Outcome::Quit);
            ActionOutcome::Quit
        }
        _ => ActionOutcome::Nothing,
    }
}

/// The cell in front of the player, if it is on the level.
fn faced_cell(world: &WorldState, player: Entity) -> Option<GridPos> {
    let position = world.store.position(player)?;
    let Facing(facing) = world.store.get::<Facing>(player)?;
    let cell = position.step(facing);
    world.grid.contains(cell).then_some(cell)
}

/// The entity the player is looking at, ignoring projectiles in flight.
/// Ashes only count when nothing else stands on them.
fn faced_entity(world: &WorldState, player: Entity) -> Option<Entity> {
    let cell = faced_cell(world, player)?;
    let mut candidates = world
        .store
        .occupants(cell)
        .filter(|e| world.store.kind(*e).is_some_and(|k| !k.is_projectile()));
    let first = candidates.next()?;
    let is_ashes = |e: Entity| world.store.caps(e).is_some_and(|c| c.burnt);
    if !is_ashes(first) {
        return Some(first);
    }
    candidates.find(|e| !is_ashes(*e)).or(Some(first))
}

pub fn take(world: &mut WorldState, player: Entity) -> ActionOutcome {
    let Some(thing) = faced_entity(world, player) else {
        return ActionOutcome::Nothing;
    };
    if !world.store.caps(thing).is_some_and(|c| c.takable) {
        return ActionOutcome::Nothing;
    }
    let Ok(item) = world.store.world().get::<&Label>(thing).map(|l| l.name.clone()) else {
        return ActionOutcome::Nothing;
    };
    world.dematerialize(thing);
    let Some(items) = world.store.update::<Inventory, _>(player, |inv| {
        inv.items.push(item.clone());
        inv.items.clone()
    }) else {
        return ActionOutcome::Nothing;
    };
    world.events.push(RenderEvent::InventoryChanged { items });
    ActionOutcome::Took { item }
}

pub fn interact(world: &mut WorldState, player: Entity) -> ActionOutcome {
    let Some(thing) = faced_entity(world, player) else {
        return ActionOutcome::Nothing;
    };
    let (Some(kind), Ok(description)) = (
        world.store.kind(thing),
        world.store.world().get::<&Label>(thing).map(|l| l.description.clone()),
    ) else {
        return ActionOutcome::Nothing;
    };
    say(world, description);

    if kind.is_pizza() {
        world.dematerialize(thing);
        eat_pizza(world, player);
        return ActionOutcome::AtePizza;
    }
    if kind.is_vortex() {
        say(world, "You feel the next slice of pizza calling to you through the vortex.");
        say(world, "You take a deep breath and step through.");
        world.finish(Outcome::LevelComplete);
        return ActionOutcome::EnteredVortex;
    }
    ActionOutcome::Examined
}

fn eat_pizza(world: &mut WorldState, player: Entity) {
    if let Some(health) = world.store.update::<Health, _>(player, |h| {
        h.max += PIZZA_HEALTH_BONUS;
        h.current = h.max;
        *h
    }) {
        world.events.push(RenderEvent::HealthChanged {
            current: health.current,
            max: health.max,
        });
        say(world, "Health goes up by 1!");
    }
    if world
        .store
        .update::<FireballStats, _>(player, |fb| {
            fb.power += PIZZA_POWER_BONUS;
            fb.range += PIZZA_RANGE_BONUS;
            fb.speed = fb
                .speed
                .saturating_sub(PIZZA_SPEED_BONUS)
                .max(MIN_FIREBALL_SPEED);
        })
        .is_some()
    {
        say(world, "Fireball power goes up by 1!");
        say(world, "Fireball range goes up by 2!");
        say(world, "Fireball speed goes up by 3!");
    }

    let Some(origin) = world.store.position(player) else {
        return;
    };
    match free_cell_near(world, origin) {
        Some(cell) => match world.materialize(Blueprint::vortex(), cell) {
            Ok(_) => say(
                world,
                "A swirling vortex appears nearby, and you can smell a hint of pepperoni...",
            ),
            Err(err) => log::warn!("vortex did not appear: {err}"),
        },
        None => log::warn!("no room for a vortex near ({}, {})", origin.x, origin.y),
    }
}

/// Nearest empty, walkable cell around `origin`, scanning rings outward
/// row by row.
fn free_cell_near(world: &WorldState, origin: GridPos) -> Option<GridPos> {
    (1..=VORTEX_SEARCH_RADIUS).find_map(|radius| {
        (-radius..=radius)
            .flat_map(|dy| (-radius..=radius).map(move |dx| origin.offset(IVec2::new(dx, dy))))
            .filter(|cell| origin.chebyshev_to(*cell) == radius)
            .find(|cell| {
                world.grid.contains(*cell)
                    && !world.grid.blocks_walking(*cell)
                    && world.store.occupants(*cell).next().is_none()
            })
    })
}

pub fn shoot(world: &mut WorldState, player: Entity) -> ActionOutcome {
    let (Some(cell), Some(Facing(facing)), Some(stats)) = (
        faced_cell(world, player),
        world.store.get::<Facing>(player),
        world.store.get::<FireballStats>(player),
    ) else {
        return ActionOutcome::Nothing;
    };
    if world.grid.blocks_walking(cell) && !world.grid.is_flammable_at(cell) {
        return ActionOutcome::Nothing;
    }
    let obstructed = world.store.occupants(cell).any(|other| {
        let caps = world.store.caps(other).unwrap_or(Capabilities::SOLID);
        let llama = world.store.kind(other).is_some_and(|k| k.is_llama());
        !caps.walkable && !caps.flammable && !llama
    });
    if obstructed {
        return ActionOutcome::Nothing;
    }
    match world.materialize(Blueprint::fireball(facing, stats), cell) {
        Ok(_) => ActionOutcome::Shot,
        Err(err) => {
            log::warn!("fireball failed: {err}");
            ActionOutcome::Nothing
        }
    }
}

fn say(world: &mut WorldState, text: impl Into<String>) {
    world.events.push(RenderEvent::Message { text: text.into() });
}
