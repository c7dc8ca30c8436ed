//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and all session state, applies
//! player commands, runs the systems in a fixed order each tick, and produces
//! `GameStateSnapshot`s. It has no notion of wall-clock time or frame
//! scheduling: an external driver calls `tick()` once per frame.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use dronestrike_core::commands::PlayerCommand;
use dronestrike_core::constants::FRAME_MS;
use dronestrike_core::enums::SimPhase;
use dronestrike_core::error::ConfigError;
use dronestrike_core::events::SimEvent;
use dronestrike_core::state::GameStateSnapshot;
use dronestrike_core::types::{FieldSize, Position, SimTime};

use crate::stats::SessionStats;
use crate::systems;
use crate::systems::collision::CollisionContext;
use crate::systems::snapshot::SessionView;
use crate::systems::spawner::SpawnTimer;

/// Configuration for a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same simulation.
    pub seed: u64,
    /// Initial play-field size.
    pub field: FieldSize,
    /// Clock advance per `tick()` in milliseconds.
    pub frame_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: FieldSize::default(),
            frame_ms: FRAME_MS,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        if !self.frame_ms.is_finite() || self.frame_ms <= 0.0 {
            return Err(ConfigError::InvalidFrameDuration {
                frame_ms: self.frame_ms,
            });
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    field: FieldSize,
    frame_ms: f64,
    rng: ChaCha8Rng,
    next_entity_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    spawn_timer: SpawnTimer,
    stats: SessionStats,
}

impl SimulationEngine {
    /// Create a new, idle simulation engine. Fails if the config is unusable.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "simulation configured: seed {}, field {}x{}, frame {:.3}ms",
            config.seed,
            config.field.width,
            config.field.height,
            config.frame_ms
        );

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            field: config.field,
            frame_ms: config.frame_ms,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            spawn_timer: SpawnTimer::default(),
            stats: SessionStats::default(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by the configured frame duration and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.tick_with_dt(self.frame_ms)
    }

    /// Advance by `dt_ms` milliseconds of simulation time.
    ///
    /// Queued commands are applied first. Systems only run while Running;
    /// Idle and Paused ticks just report state.
    pub fn tick_with_dt(&mut self, dt_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.time.advance(dt_ms.max(0.0));
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Current state without advancing or draining pending events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone())
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn field(&self) -> FieldSize {
        self.field
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.spawn_timer.interval_ms
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Apply a command immediately, outside the tick.
    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.phase == SimPhase::Idle {
                    self.spawn_timer.restart(self.time.elapsed_ms);
                    self.set_phase(SimPhase::Running);
                } else {
                    log::debug!("start ignored while {:?}", self.phase);
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                SimPhase::Running => self.set_phase(SimPhase::Paused),
                SimPhase::Paused => self.set_phase(SimPhase::Running),
                SimPhase::Idle => log::debug!("pause toggle ignored while Idle"),
            },
            PlayerCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.set_phase(SimPhase::Paused);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.set_phase(SimPhase::Running);
                }
            }
            PlayerCommand::Reset => self.reset(),
            PlayerCommand::Fire { x, y } => {
                if self.phase == SimPhase::Running {
                    let mut ctx = CollisionContext {
                        rng: &mut self.rng,
                        stats: &mut self.stats,
                        next_id: &mut self.next_entity_id,
                        events: &mut self.events,
                    };
                    systems::collision::resolve_fire(
                        &mut self.world,
                        &mut ctx,
                        &self.field,
                        Position::new(x, y),
                    );
                } else {
                    log::debug!("fire ignored while {:?}", self.phase);
                }
            }
            PlayerCommand::ResizeField { width, height } => {
                let field = FieldSize::new(width, height);
                match field.validate() {
                    Ok(()) => {
                        log::info!("field resized to {width}x{height}");
                        self.field = field;
                    }
                    Err(err) => log::warn!("field resize rejected: {err}"),
                }
            }
        }
    }

    /// Spawn a specific drone (for tests that need exact geometry).
    #[cfg(test)]
    pub fn spawn_test_drone(&mut self, drone: dronestrike_core::components::Drone) -> Entity {
        crate::world_setup::spawn_drone(&mut self.world, &mut self.next_entity_id, drone).0
    }

    /// Spawn a projectile from an arbitrary origin (bypasses the fire path).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        projectile: dronestrike_core::components::Projectile,
    ) -> Entity {
        let order = crate::world_setup::next_order(&mut self.next_entity_id);
        self.world.spawn((projectile, order))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn set_phase(&mut self, to: SimPhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("phase {from:?} -> {to:?} at tick {}", self.time.tick);
        self.phase = to;
        self.events.push(SimEvent::PhaseChanged { from, to });
    }

    /// End the session: clear every entity, counter and timer.
    fn reset(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.stats = SessionStats::default();
        self.spawn_timer = SpawnTimer::default();
        self.time = SimTime::default();
        self.next_entity_id = 0;
        self.set_phase(SimPhase::Idle);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            &self.field,
            &mut self.next_entity_id,
            &mut self.events,
            self.time.elapsed_ms,
        );
        // 2. Drones
        systems::movement::advance_drones(&mut self.world);
        systems::cleanup::prune_drones(
            &mut self.world,
            &self.field,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 3. Projectiles
        systems::movement::advance_projectiles(&mut self.world);
        systems::cleanup::prune_projectiles(&mut self.world, &self.field, &mut self.despawn_buffer);
        // 4. Proximity collisions
        let mut ctx = CollisionContext {
            rng: &mut self.rng,
            stats: &mut self.stats,
            next_id: &mut self.next_entity_id,
            events: &mut self.events,
        };
        systems::collision::run(&mut self.world, &mut ctx);
        // 5. Explosions
        systems::movement::advance_explosions(&mut self.world);
        systems::cleanup::prune_explosions(&mut self.world, &mut self.despawn_buffer);

        log::trace!(
            "tick {}: {} entities, score {}",
            self.time.tick,
            self.world.len(),
            self.stats.score
        );
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            SessionView {
                time: &self.time,
                phase: self.phase,
                field: &self.field,
                spawn_interval_ms: self.spawn_timer.interval_ms,
                stats: &self.stats,
            },
            events,
        )
    }
}
