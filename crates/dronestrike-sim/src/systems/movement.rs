//! Kinematic integration systems, one per entity kind.
//!
//! Each pass only moves entities; removal is left to `cleanup` so the
//! tick order stays explicit in the engine.

use hecs::World;

use dronestrike_core::components::{Drone, Explosion, Projectile};

/// Drones drift right and spin their propellers.
pub fn advance_drones(world: &mut World) {
    for (_entity, drone) in world.query_mut::<&mut Drone>() {
        drone.advance();
    }
}

/// Projectiles fly straight and burn one tick of lifetime.
pub fn advance_projectiles(world: &mut World) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.advance();
    }
}

/// Explosion particles fall, shrink and fade.
pub fn advance_explosions(world: &mut World) {
    for (_entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.advance();
    }
}
