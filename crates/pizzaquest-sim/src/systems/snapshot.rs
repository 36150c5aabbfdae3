//! Builds the per-tick snapshot handed to the outer driver.

use pizzaquest_core::components::{Facing, FireballStats, Health, Inventory};
use pizzaquest_core::state::{PlayerView, SimSnapshot};
use pizzaquest_core::types::SimTime;

use crate::world::WorldState;

/// Snapshot the world, draining its pending render notifications.
pub fn build_snapshot(world: &mut WorldState, time: SimTime) -> SimSnapshot {
    SimSnapshot {
        time,
        outcome: world.outcome,
        player: player_view(world),
        entity_count: world.store.len(),
        queued_events: world.queue.len(),
        render_events: world.take_events(),
    }
}

fn player_view(world: &WorldState) -> Option<PlayerView> {
    let player = world.player?;
    let store = &world.store;
    let health = store.get::<Health>(player)?;
    let inventory = store
        .world()
        .get::<&Inventory>(player)
        .map(|inv| inv.items.clone())
        .unwrap_or_default();
    Some(PlayerView {
        position: store.position(player)?,
        facing: store.get::<Facing>(player)?.0,
        health: health.current,
        max_health: health.max,
        fireball: store.get::<FireballStats>(player)?,
        inventory,
    })
}
