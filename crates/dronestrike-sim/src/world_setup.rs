//! Entity spawn factories.
//!
//! Every entity gets a `SpawnOrder` from the engine's shared counter so
//! systems can recover creation order regardless of ECS storage layout.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dronestrike_core::components::*;
use dronestrike_core::constants::*;
use dronestrike_core::types::{FieldSize, Position};

/// Take the next creation sequence number.
pub fn next_order(next_id: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*next_id);
    *next_id += 1;
    order
}

/// Random y inside the spawn band: `50 + U[0,1) * (height - 150)`.
pub fn random_spawn_y(rng: &mut ChaCha8Rng, field: &FieldSize) -> f64 {
    DRONE_SPAWN_BAND_TOP + rng.gen::<f64>() * (field.height - DRONE_SPAWN_BAND_MARGIN)
}

pub fn spawn_drone(world: &mut World, next_id: &mut u64, drone: Drone) -> (Entity, SpawnOrder) {
    let order = next_order(next_id);
    (world.spawn((drone, order)), order)
}

/// Spawn a projectile leaving the turret toward `target`.
pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u64,
    field: &FieldSize,
    target: Position,
) -> (Entity, SpawnOrder) {
    let order = next_order(next_id);
    let projectile = Projectile::new(field.turret(), target);
    (world.spawn((projectile, order)), order)
}

/// Spawn an explosion burst at `origin`.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    origin: Position,
) -> (Entity, SpawnOrder) {
    let order = next_order(next_id);
    let explosion = Explosion::new(origin, rng);
    (world.spawn((explosion, order)), order)
}
