//! Mutable simulation state shared by every system.
//!
//! `WorldState` bundles the entity store, the terrain grid, the event
//! queue and the pending render notifications. Systems take it as
//! `&mut WorldState` and never hold references across calls.

use std::collections::HashSet;

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pizzaquest_core::enums::Outcome;
use pizzaquest_core::events::RenderEvent;
use pizzaquest_core::types::{EntityId, GridPos};
use pizzaquest_terrain::Grid;

use crate::blueprint::Blueprint;
use crate::error::SpawnError;
use crate::scheduler::{EventQueue, SimEvent};
use crate::store::{entity_id, EntityStore};

/// Level-scoped llama bookkeeping for the barricade unlock.
#[derive(Debug, Default)]
pub struct LlamaRoster {
    initial: HashSet<Entity>,
    dead: HashSet<Entity>,
}

impl LlamaRoster {
    /// Count a llama as part of the level's starting population.
    pub fn enlist(&mut self, llama: Entity) {
        self.initial.insert(llama);
    }

    /// Record a death. Returns `false` if it was already recorded.
    pub fn record_death(&mut self, llama: Entity) -> bool {
        self.dead.insert(llama)
    }

    /// True once every starting llama has died.
    pub fn all_dead(&self) -> bool {
        !self.initial.is_empty() && self.initial.is_subset(&self.dead)
    }

    pub fn initial_count(&self) -> usize {
        self.initial.len()
    }

    pub fn dead_count(&self) -> usize {
        self.dead.len()
    }
}

pub struct WorldState {
    pub store: EntityStore,
    pub grid: Grid,
    pub queue: EventQueue<SimEvent>,
    pub roster: LlamaRoster,
    pub outcome: Outcome,
    pub player: Option<Entity>,
    pub rng: ChaCha8Rng,
    /// Notifications waiting to be drained into the next snapshot.
    pub events: Vec<RenderEvent>,
}

impl WorldState {
    pub fn new(grid: Grid, seed: u64) -> Self {
        Self {
            store: EntityStore::new(),
            grid,
            queue: EventQueue::new(),
            roster: LlamaRoster::default(),
            outcome: Outcome::Playing,
            player: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Place a blueprint in the world. Entities with a cadence get their
    /// first event scheduled one cadence from now.
    pub fn materialize(&mut self, blueprint: Blueprint, position: GridPos) -> Result<Entity, SpawnError> {
        let kind = blueprint.kind;
        let facing = blueprint.facing;
        let cadence = blueprint.cadence;
        let walkable = blueprint.caps.walkable;

        let entity = self
            .store
            .spawn(&self.grid, position, walkable, blueprint.into_builder())?;
        if let Some(cadence) = cadence {
            self.queue.enqueue(cadence.0, SimEvent::Act(entity));
        }
        log::trace!("materialized {kind:?} at ({}, {})", position.x, position.y);
        self.events.push(RenderEvent::Materialized {
            entity: entity_id(entity),
            kind,
            position,
            facing,
        });
        Ok(entity)
    }

    /// Remove an entity. Its queued events become no-ops.
    pub fn dematerialize(&mut self, entity: Entity) -> bool {
        if !self.store.despawn(entity) {
            return false;
        }
        self.events.push(RenderEvent::Dematerialized {
            entity: entity_id(entity),
        });
        true
    }

    pub fn id(&self, entity: Entity) -> EntityId {
        entity_id(entity)
    }

    pub fn player_position(&self) -> Option<GridPos> {
        self.player.and_then(|p| self.store.position(p))
    }

    /// Drain pending notifications.
    pub fn take_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Record a terminal outcome unless one was already reached.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        log::info!("session over: {outcome:?}");
        self.outcome = outcome;
        true
    }
}
