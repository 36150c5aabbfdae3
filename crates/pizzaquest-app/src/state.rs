//! State shared between the main thread, the input reader and the game
//! loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use pizzaquest_core::commands::InputCommand;
use pizzaquest_core::state::SimSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Input(InputCommand),
    /// Stop the loop without a game outcome.
    Shutdown,
}

/// Handles the main thread keeps on a running session.
pub struct AppState {
    /// Forwards commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Most recent snapshot, updated after every tick.
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
}

impl AppState {
    pub fn new(command_tx: mpsc::Sender<GameLoopCommand>) -> Self {
        Self {
            command_tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}
