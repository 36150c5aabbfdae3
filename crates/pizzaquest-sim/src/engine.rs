//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the world state, feeds queued player
//! commands to the input-poll event, dispatches every due event, and
//! produces a `SimSnapshot` per tick. Headless, so it can be driven
//! deterministically from tests.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use pizzaquest_core::commands::InputCommand;
use pizzaquest_core::components::Cadence;
use pizzaquest_core::constants::INPUT_POLL_INTERVAL;
use pizzaquest_core::enums::{Kind, Outcome};
use pizzaquest_core::state::SimSnapshot;
use pizzaquest_core::types::SimTime;
use pizzaquest_terrain::LevelData;

use crate::error::SetupError;
use crate::scheduler::SimEvent;
use crate::systems;
use crate::world::WorldState;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Wall-clock speed multiplier for the outer loop (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: WorldState,
    time: SimTime,
    time_scale: f64,
    command_queue: VecDeque<InputCommand>,
}

impl SimulationEngine {
    /// Build the level's world. Fails before the first tick if the level
    /// data is inconsistent.
    pub fn new(config: SimConfig, level: &LevelData) -> Result<Self, SetupError> {
        let world = world_setup::build_world(level, config.seed)?;
        Ok(Self::from_world(world, config.time_scale))
    }

    /// Wrap an already populated world.
    pub fn from_world(world: WorldState, time_scale: f64) -> Self {
        Self {
            world,
            time: SimTime::default(),
            time_scale: time_scale.clamp(0.1, 4.0),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command. The input poll consumes one per tick.
    pub fn queue_command(&mut self, command: InputCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Once the session has reached a terminal outcome, time stands still.
    pub fn tick(&mut self) -> SimSnapshot {
        if !self.world.outcome.is_terminal() {
            while let Some(event) = self.world.queue.pop_ready() {
                self.dispatch(event);
                if self.world.outcome.is_terminal() {
                    break;
                }
            }
            self.world.queue.finish_tick();
            self.time.advance();
        }
        systems::snapshot::build_snapshot(&mut self.world, self.time)
    }

    /// Run one due event.
    fn dispatch(&mut self, event: SimEvent) {
        match event {
            SimEvent::PollInput => {
                if let Some(command) = self.command_queue.pop_front() {
                    let outcome = systems::player::handle(&mut self.world, command);
                    log::trace!("{command:?} -> {outcome:?}");
                }
                self.world
                    .queue
                    .enqueue(INPUT_POLL_INTERVAL, SimEvent::PollInput);
            }
            SimEvent::Act(entity) => {
                let Some(kind) = self.world.store.kind(entity) else {
                    // Dematerialized since it was scheduled.
                    return;
                };
                let again = match kind {
                    Kind::Llama => systems::llama_ai::act(&mut self.world, entity),
                    Kind::Rat => systems::critters::rat(&mut self.world, entity),
                    Kind::Vortex => systems::critters::vortex(&mut self.world, entity),
                    k if k.is_projectile() => matches!(
                        systems::projectile::advance(&mut self.world, entity),
                        systems::projectile::ProjectileStep::Advanced
                    ),
                    _ => false,
                };
                if again {
                    if let Some(Cadence(delay)) = self.world.store.get::<Cadence>(entity) {
                        self.world.queue.enqueue(delay, SimEvent::Act(entity));
                    }
                }
            }
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.world.outcome
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Commands still waiting for an input poll.
    pub fn pending_commands(&self) -> usize {
        self.command_queue.len()
    }

    /// Get a read-only reference to the world state.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Mutable world access for tests that arrange scenes by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }
}
