//! Drone spawning system: time-gated spawns with a tightening interval.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use dronestrike_core::components::Drone;
use dronestrike_core::constants::*;
use dronestrike_core::events::SimEvent;
use dronestrike_core::types::FieldSize;

use crate::world_setup;

/// Spawn gate state for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    /// Clock reading (ms) of the last spawn, or of session start.
    pub last_spawn_ms: f64,
    /// Current gap between spawns (ms). Only ever shrinks, down to the floor.
    pub interval_ms: u32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            last_spawn_ms: 0.0,
            interval_ms: SPAWN_INTERVAL_START_MS,
        }
    }
}

impl SpawnTimer {
    /// Set the spawn baseline without touching the interval.
    pub fn restart(&mut self, now_ms: f64) {
        self.last_spawn_ms = now_ms;
    }

    /// Strictly more than one interval has passed since the last spawn.
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_spawn_ms > self.interval_ms as f64
    }

    fn mark_spawned(&mut self, now_ms: f64) {
        self.last_spawn_ms = now_ms;
        self.interval_ms = self
            .interval_ms
            .saturating_sub(SPAWN_INTERVAL_STEP_MS)
            .max(SPAWN_INTERVAL_FLOOR_MS);
    }
}

/// Spawn at most one drone if the gate is open. Returns true if one spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    field: &FieldSize,
    next_id: &mut u64,
    events: &mut Vec<SimEvent>,
    now_ms: f64,
) -> bool {
    if !timer.is_due(now_ms) {
        return false;
    }

    let y = world_setup::random_spawn_y(rng, field);
    let (_, order) = world_setup::spawn_drone(world, next_id, Drone::random(y, rng));
    timer.mark_spawned(now_ms);

    log::debug!(
        "drone {} spawned at y={y:.1}, next interval {}ms",
        order.0,
        timer.interval_ms
    );
    events.push(SimEvent::DroneSpawned { id: order.0, y });
    true
}
