//! Cleanup systems: remove entities that left the field, burned out or finished.
//!
//! Each pass collects into a pre-allocated buffer first and despawns after
//! the query, so removal never disturbs iteration.

use hecs::{Entity, World};

use dronestrike_core::components::{Drone, Explosion, Projectile, SpawnOrder};
use dronestrike_core::events::SimEvent;
use dronestrike_core::types::FieldSize;

/// Remove drones that crossed the right edge. Escaped drones are not misses.
pub fn prune_drones(
    world: &mut World,
    field: &FieldSize,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    for (entity, (drone, order)) in world.query_mut::<(&Drone, &SpawnOrder)>() {
        if drone.is_off_field(field.width) {
            log::debug!("drone {} escaped", order.0);
            events.push(SimEvent::DroneEscaped { id: order.0 });
            despawn_buffer.push(entity);
        }
    }

    despawn_all(world, despawn_buffer);
}

/// Remove projectiles whose lifetime ran out or that left the field.
pub fn prune_projectiles(world: &mut World, field: &FieldSize, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.is_expired(field) {
            despawn_buffer.push(entity);
        }
    }

    despawn_all(world, despawn_buffer);
}

/// Remove explosions with no particles left.
pub fn prune_explosions(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if explosion.is_finished() {
            despawn_buffer.push(entity);
        }
    }

    despawn_all(world, despawn_buffer);
}

fn despawn_all(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
