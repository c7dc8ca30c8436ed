//! Game loop thread: drives the simulation engine at a fixed rate and
//! publishes snapshots.
//!
//! The engine is built and validated on the caller's thread so configuration
//! errors surface at setup, then moved into the loop thread. Commands arrive
//! via `mpsc` channel; the latest snapshot is stored in shared state for
//! polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use dronestrike_core::state::GameStateSnapshot;
use dronestrike_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopError, LoopHandle, SessionSummary};

/// Nominal duration of one tick at `tick_rate` Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / tick_rate.max(1) as u64)
}

/// Spawns the game loop in a new thread and returns the driver handle.
pub fn spawn_game_loop(config: SimConfig, tick_rate: u32) -> Result<LoopHandle, LoopError> {
    if tick_rate == 0 {
        return Err(LoopError::InvalidTickRate(tick_rate));
    }
    let engine = SimulationEngine::new(config)?;

    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);
    let period = tick_duration(tick_rate);

    let thread = std::thread::Builder::new()
        .name("dronestrike-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &shared, period))
        .map_err(LoopError::Spawn)?;

    Ok(LoopHandle {
        command_tx: Mutex::new(cmd_tx),
        latest_snapshot,
        thread: Some(thread),
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    period: Duration,
) -> SessionSummary {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += period;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > period * 2 {
            // Too far behind, reset to avoid catch-up spiral
            log::debug!("game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }

    let summary = SessionSummary {
        ticks: engine.time().tick,
        phase: engine.phase(),
        stats: engine.stats().view(),
    };
    log::info!(
        "game loop stopped after {} ticks: score {}, accuracy {}%",
        summary.ticks,
        summary.stats.score,
        summary.stats.accuracy
    );
    summary
}

/// Queue everything waiting on the channel. Returns false when the loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronestrike_core::commands::PlayerCommand;
    use dronestrike_core::enums::SimPhase;
    use dronestrike_core::types::FieldSize;

    #[test]
    fn test_drain_commands_queues_until_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.tick().phase, SimPhase::Running);

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_rejects_bad_setup() {
        assert!(matches!(
            spawn_game_loop(SimConfig::default(), 0),
            Err(LoopError::InvalidTickRate(0))
        ));

        let config = SimConfig {
            field: FieldSize::new(800.0, 10.0),
            ..Default::default()
        };
        assert!(matches!(
            spawn_game_loop(config, 60),
            Err(LoopError::Config(_))
        ));
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let handle = spawn_game_loop(SimConfig::default(), 1000).unwrap();
        handle.send(PlayerCommand::Start).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut ticked = false;
        while Instant::now() < deadline {
            if let Some(snap) = handle.latest() {
                if snap.phase == SimPhase::Running && snap.time.tick > 3 {
                    ticked = true;
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(ticked, "loop should publish running snapshots");

        let summary = handle.shutdown().unwrap();
        assert_eq!(summary.phase, SimPhase::Running);
        assert!(summary.ticks > 3);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(tick_duration(60).as_nanos(), expected_nanos as u128);
    }
}
