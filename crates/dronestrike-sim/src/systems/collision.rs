//! Collision resolution: direct fire hits and projectile proximity kills.
//!
//! Both paths share the same kill side effects: the drone is despawned, the
//! session is credited, and an explosion appears at the drone's center.
//! Scans only collect; despawns happen after the scan so nothing is skipped
//! or processed twice.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use dronestrike_core::components::{Drone, Projectile, SpawnOrder};
use dronestrike_core::constants::PROXIMITY_KILL_RADIUS;
use dronestrike_core::enums::KillCause;
use dronestrike_core::events::SimEvent;
use dronestrike_core::types::{FieldSize, Position};

use crate::stats::SessionStats;
use crate::world_setup;

/// Mutable session context shared by both hit paths.
pub struct CollisionContext<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub stats: &'a mut SessionStats,
    pub next_id: &'a mut u64,
    pub events: &'a mut Vec<SimEvent>,
}

/// A drone about to be destroyed.
#[derive(Debug, Clone, Copy)]
struct Victim {
    entity: Entity,
    order: SpawnOrder,
    center: Position,
}

/// Handle a fire command at `target`.
///
/// A projectile always leaves the turret. Every drone whose box contains the
/// point is destroyed on the spot; if none does, the shot counts as a miss.
/// Returns the number of drones destroyed.
pub fn resolve_fire(
    world: &mut World,
    ctx: &mut CollisionContext<'_>,
    field: &FieldSize,
    target: Position,
) -> u32 {
    let (_, shot) = world_setup::spawn_projectile(world, ctx.next_id, field, target);
    ctx.events.push(SimEvent::ShotFired {
        id: shot.0,
        target,
    });

    let mut victims: Vec<Victim> = world
        .query::<(&Drone, &SpawnOrder)>()
        .iter()
        .filter(|(_, (drone, _))| drone.contains_point(target.x, target.y))
        .map(|(entity, (drone, order))| Victim {
            entity,
            order: *order,
            center: drone.center(),
        })
        .collect();
    victims.sort_by_key(|v| v.order);

    if victims.is_empty() {
        ctx.stats.record_miss();
        ctx.events.push(SimEvent::ShotMissed { target });
        log::debug!("shot {} missed at ({:.1}, {:.1})", shot.0, target.x, target.y);
        return 0;
    }

    for victim in &victims {
        destroy_drone(world, ctx, victim, KillCause::DirectHit);
    }
    victims.len() as u32
}

/// Projectile-vs-drone proximity pass.
///
/// Projectiles are visited in creation order; each claims the first drone
/// (in creation order) whose center is closer than the kill radius and that
/// no earlier projectile claimed this tick. Returns the number of kills.
pub fn run(world: &mut World, ctx: &mut CollisionContext<'_>) -> u32 {
    let mut drones: Vec<Victim> = world
        .query::<(&Drone, &SpawnOrder)>()
        .iter()
        .map(|(entity, (drone, order))| Victim {
            entity,
            order: *order,
            center: drone.center(),
        })
        .collect();
    if drones.is_empty() {
        return 0;
    }
    drones.sort_by_key(|d| d.order);

    let mut projectiles: Vec<(SpawnOrder, Entity, Position)> = world
        .query::<(&Projectile, &SpawnOrder)>()
        .iter()
        .map(|(entity, (projectile, order))| (*order, entity, projectile.position))
        .collect();
    projectiles.sort_by_key(|(order, _, _)| *order);

    let mut claimed = vec![false; drones.len()];
    let mut pairs: Vec<(Entity, usize)> = Vec::new();

    for (_, projectile, position) in &projectiles {
        let hit = drones.iter().enumerate().position(|(i, drone)| {
            !claimed[i] && drone.center.distance_to(position) < PROXIMITY_KILL_RADIUS
        });
        if let Some(i) = hit {
            claimed[i] = true;
            pairs.push((*projectile, i));
        }
    }

    for &(projectile, i) in &pairs {
        let _ = world.despawn(projectile);
        destroy_drone(world, ctx, &drones[i], KillCause::Projectile);
    }
    pairs.len() as u32
}

fn destroy_drone(
    world: &mut World,
    ctx: &mut CollisionContext<'_>,
    victim: &Victim,
    cause: KillCause,
) {
    if world.despawn(victim.entity).is_err() {
        return;
    }
    ctx.stats.record_kill();
    world_setup::spawn_explosion(world, ctx.rng, ctx.next_id, victim.center);
    ctx.events.push(SimEvent::DroneDestroyed {
        id: victim.order.0,
        cause,
        at: victim.center,
    });
    log::debug!(
        "drone {} destroyed ({cause:?}), score {}",
        victim.order.0,
        ctx.stats.score
    );
}
