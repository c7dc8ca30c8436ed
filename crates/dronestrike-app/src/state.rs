//! Shared state between the driver and the game loop thread.

use std::fmt;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use serde::{Deserialize, Serialize};

use dronestrike_core::commands::PlayerCommand;
use dronestrike_core::enums::SimPhase;
use dronestrike_core::error::ConfigError;
use dronestrike_core::state::{GameStateSnapshot, StatsView};

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// What the loop reports when it exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub ticks: u64,
    pub phase: SimPhase,
    pub stats: StatsView,
}

/// Errors raised while setting up or talking to the game loop.
#[derive(Debug)]
pub enum LoopError {
    /// The simulation config was rejected.
    Config(ConfigError),
    /// Tick rate must be at least 1 Hz.
    InvalidTickRate(u32),
    /// The OS refused to start the loop thread.
    Spawn(std::io::Error),
    /// The loop thread is gone.
    Disconnected,
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid simulation config: {err}"),
            Self::InvalidTickRate(rate) => write!(f, "tick rate must be positive: got {rate}"),
            Self::Spawn(err) => write!(f, "failed to spawn game loop thread: {err}"),
            Self::Disconnected => write!(f, "game loop thread has stopped"),
        }
    }
}

impl std::error::Error for LoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for LoopError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Driver-side handle to a running game loop.
///
/// The sender lives behind a `Mutex` so the handle can be shared (`Sender`
/// is `Send` but not `Sync`); the latest snapshot is shared with the loop
/// thread through an `Arc<Mutex<...>>`.
pub struct LoopHandle {
    pub(crate) command_tx: Mutex<mpsc::Sender<GameLoopCommand>>,
    pub(crate) latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub(crate) thread: Option<JoinHandle<SessionSummary>>,
}

impl LoopHandle {
    /// Forward a player command to the loop.
    pub fn send(&self, command: PlayerCommand) -> Result<(), LoopError> {
        let tx = self.command_tx.lock().map_err(|_| LoopError::Disconnected)?;
        tx.send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| LoopError::Disconnected)
    }

    /// The most recent snapshot published by the loop, if any.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for its summary.
    pub fn shutdown(mut self) -> Result<SessionSummary, LoopError> {
        if let Ok(tx) = self.command_tx.lock() {
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        self.thread
            .take()
            .ok_or(LoopError::Disconnected)?
            .join()
            .map_err(|_| LoopError::Disconnected)
    }
}
