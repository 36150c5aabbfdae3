//! Game loop thread: runs the simulation engine at the fixed tick rate.
//!
//! Commands arrive via `mpsc` channel. Each tick's render events go to the
//! log renderer and the snapshot is stored in shared state for the main
//! thread. The thread ends with the session's outcome.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use pizzaquest_core::constants::TICK_RATE;
use pizzaquest_core::enums::Outcome;
use pizzaquest_core::state::SimSnapshot;
use pizzaquest_sim::SimulationEngine;

use crate::render::LogRenderer;
use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the shared state for the main thread and a handle yielding the
/// final outcome.
pub fn spawn_game_loop(engine: SimulationEngine) -> (AppState, JoinHandle<Outcome>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let state = AppState::new(cmd_tx);
    let latest_snapshot = state.latest_snapshot.clone();

    let handle = std::thread::Builder::new()
        .name("pizzaquest-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &latest_snapshot))
        .expect("Failed to spawn game loop thread");

    (state, handle)
}

/// The game loop. Runs until the session ends, a Shutdown command, or
/// channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) -> Outcome {
    let mut renderer = LogRenderer::new();
    let mut next_tick_time = Instant::now();

    loop {
        if !drain_commands(&mut engine, &cmd_rx) {
            log::info!("game loop stopped at tick {}", engine.time().tick);
            return engine.outcome();
        }

        let snapshot = engine.tick();
        renderer.render(&snapshot);
        let outcome = snapshot.outcome;

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if outcome.is_terminal() {
            log::info!(
                "session ended: {outcome:?} after {} ticks, {} ms of game time ({} messages)",
                engine.time().tick,
                engine.time().elapsed_millis(),
                renderer.messages_shown
            );
            return outcome;
        }

        // Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Move every pending command into the engine. Returns false when the
/// loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Input(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
