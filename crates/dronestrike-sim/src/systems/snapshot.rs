//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use dronestrike_core::components::*;
use dronestrike_core::constants::{PARTICLE_LIFE, PROJECTILE_RADIUS};
use dronestrike_core::enums::SimPhase;
use dronestrike_core::events::SimEvent;
use dronestrike_core::state::*;
use dronestrike_core::types::{FieldSize, SimTime};

use crate::stats::SessionStats;

/// Session-level values that live outside the world.
pub struct SessionView<'a> {
    pub time: &'a SimTime,
    pub phase: SimPhase,
    pub field: &'a FieldSize,
    pub spawn_interval_ms: u32,
    pub stats: &'a SessionStats,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    session: SessionView<'_>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *session.time,
        phase: session.phase,
        field: *session.field,
        turret: session.field.turret(),
        spawn_interval_ms: session.spawn_interval_ms,
        drones: build_drones(world),
        projectiles: build_projectiles(world),
        explosions: build_explosions(world),
        stats: session.stats.view(),
        events,
    }
}

fn build_drones(world: &World) -> Vec<DroneView> {
    let mut drones: Vec<DroneView> = world
        .query::<(&Drone, &SpawnOrder)>()
        .iter()
        .map(|(_, (drone, order))| DroneView {
            id: order.0,
            position: drone.position,
            width: drone.width,
            height: drone.height,
            variant: drone.variant,
            rotation: drone.rotation,
            tilt: drone.tilt(),
        })
        .collect();

    drones.sort_by_key(|d| d.id);
    drones
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &SpawnOrder)>()
        .iter()
        .map(|(_, (projectile, order))| ProjectileView {
            id: order.0,
            position: projectile.position,
            velocity: (projectile.velocity.x, projectile.velocity.y),
            radius: PROJECTILE_RADIUS,
            lifetime: projectile.lifetime,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&Explosion, &SpawnOrder)>()
        .iter()
        .map(|(_, (explosion, order))| ExplosionView {
            id: order.0,
            origin: explosion.origin,
            particles: explosion
                .particles
                .iter()
                .map(|p| ParticleView {
                    position: p.position,
                    size: p.size,
                    alpha: p.life as f64 / PARTICLE_LIFE as f64,
                })
                .collect(),
        })
        .collect();

    explosions.sort_by_key(|e| e.id);
    explosions
}
