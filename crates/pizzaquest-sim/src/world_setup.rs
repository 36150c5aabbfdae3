//! Populates a `WorldState` from level data.
//!
//! Level spawns are placed in file order, then the player, then the
//! first input poll is scheduled. Every llama placed here belongs to the
//! level's roster for the barricade unlock.

use hecs::Entity;

use pizzaquest_core::constants::INPUT_POLL_INTERVAL;
use pizzaquest_core::types::GridPos;
use pizzaquest_terrain::{LevelData, SpawnSpec};

use crate::blueprint::Blueprint;
use crate::error::SetupError;
use crate::scheduler::SimEvent;
use crate::world::WorldState;

/// Build the world for `level`, seeding its RNG with `seed`.
pub fn build_world(level: &LevelData, seed: u64) -> Result<WorldState, SetupError> {
    level.validate()?;
    let mut world = WorldState::new(level.grid()?, seed);

    for spawn in &level.spawns {
        spawn_entity(&mut world, spawn)?;
    }
    spawn_player(&mut world, level)?;
    world.queue.enqueue(INPUT_POLL_INTERVAL, SimEvent::PollInput);

    log::info!(
        "level {} ready: {}x{} grid, {} entities, {} llama(s)",
        level.id,
        world.grid.width(),
        world.grid.height(),
        world.store.len(),
        world.roster.initial_count()
    );
    Ok(world)
}

/// Place one level spawn.
pub fn spawn_entity(world: &mut WorldState, spawn: &SpawnSpec) -> Result<Entity, SetupError> {
    let position = spawn.position();
    let blueprint = match spawn {
        SpawnSpec::Door { description, .. } => Blueprint::door(description.as_str()),
        SpawnSpec::BarricadeDoor { description, .. } => {
            Blueprint::barricade_door(description.as_str())
        }
        SpawnSpec::Pizza { description, .. } => Blueprint::pizza(description.as_str()),
        SpawnSpec::Vortex { .. } => Blueprint::vortex(),
        SpawnSpec::Decoration {
            name, description, ..
        } => Blueprint::decoration(name.as_str(), description.as_str()),
        SpawnSpec::Rat {
            name, description, ..
        } => Blueprint::rat(
            name.as_str(),
            description.clone().unwrap_or_else(|| format!("a rat named {name}")),
        ),
        SpawnSpec::Llama {
            facing,
            intelligence,
            health,
            ..
        } => Blueprint::llama(*facing, *intelligence, *health, position),
    };
    let is_llama = blueprint.kind.is_llama();
    let entity = world
        .materialize(blueprint, position)
        .map_err(|source| SetupError::Spawn {
            what: spawn.what(),
            source,
        })?;
    if is_llama {
        world.roster.enlist(entity);
    }
    Ok(entity)
}

/// Place the player and remember its handle.
pub fn spawn_player(world: &mut WorldState, level: &LevelData) -> Result<Entity, SetupError> {
    let spec = &level.player;
    let blueprint = Blueprint::player(spec.name.as_str(), spec.facing, spec.health, spec.fireball);
    let position = GridPos::new(spec.x, spec.y);
    let player = world
        .materialize(blueprint, position)
        .map_err(|source| SetupError::Spawn {
            what: "player",
            source,
        })?;
    world.player = Some(player);
    Ok(player)
}
