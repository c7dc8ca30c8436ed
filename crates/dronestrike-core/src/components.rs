//! ECS components for hecs entities.
//!
//! Each entity kind is a single self-contained component that owns its
//! kinematic or decay state and knows how to advance one tick. Orchestration
//! (ordering, pruning, scoring) lives in the simulation systems.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::DroneVariant;
use crate::types::{FieldSize, Position, Velocity};

/// Monotonic creation sequence number. Used wherever creation order matters,
/// since ECS queries do not iterate in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// A hostile drone crossing the field left to right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drone {
    /// Top-left corner of the bounding box.
    pub position: Position,
    pub width: f64,
    pub height: f64,
    /// Horizontal speed (units per tick).
    pub speed: f64,
    pub variant: DroneVariant,
    /// Rotation phase, drives propeller spin and body sway.
    pub rotation: f64,
}

impl Drone {
    /// A drone entering at the left edge at height `y`.
    pub fn new(y: f64, speed: f64, variant: DroneVariant) -> Self {
        Self {
            position: Position::new(DRONE_SPAWN_X, y),
            width: DRONE_WIDTH,
            height: DRONE_HEIGHT,
            speed,
            variant,
            rotation: 0.0,
        }
    }

    /// A drone at height `y` with random speed and variant.
    pub fn random(y: f64, rng: &mut impl Rng) -> Self {
        let speed = DRONE_SPEED_MIN + rng.gen::<f64>() * DRONE_SPEED_SPAN;
        let variant = DroneVariant::from_index(rng.gen_range(0..DRONE_VARIANT_COUNT));
        Self::new(y, speed, variant)
    }

    pub fn advance(&mut self) {
        self.position.x += self.speed;
        self.rotation += DRONE_ROTATION_STEP;
    }

    pub fn is_off_field(&self, field_width: f64) -> bool {
        self.position.x > field_width
    }

    /// Inclusive bounding box test.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.position.x
            && x <= self.position.x + self.width
            && y >= self.position.y
            && y <= self.position.y + self.height
    }

    pub fn center(&self) -> Position {
        Position::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Body sway angle in radians.
    pub fn tilt(&self) -> f64 {
        self.rotation.sin() * DRONE_TILT_AMPLITUDE
    }
}

/// A player-fired round travelling in a straight line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Position,
    pub velocity: Velocity,
    /// Remaining ticks before the round burns out.
    pub lifetime: u32,
    /// The commanded aim point.
    pub target: Position,
}

impl Projectile {
    /// Fire from `origin` toward `target`.
    pub fn new(origin: Position, target: Position) -> Self {
        let angle = origin.angle_to(&target);
        Self {
            position: origin,
            velocity: Velocity::from_angle(angle, PROJECTILE_SPEED),
            lifetime: PROJECTILE_LIFETIME,
            target,
        }
    }

    pub fn advance(&mut self) {
        self.position.offset(&self.velocity);
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    pub fn is_expired(&self, field: &FieldSize) -> bool {
        self.lifetime == 0 || !field.contains(&self.position)
    }
}

/// One spark of an explosion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub position: Position,
    pub velocity: Velocity,
    /// Remaining ticks.
    pub life: u32,
    /// Drawn radius.
    pub size: f64,
}

/// A burst of particles left behind by a destroyed drone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub origin: Position,
    pub particles: Vec<Particle>,
}

impl Explosion {
    /// Particles spread evenly around a full circle, each with its own
    /// outward speed and starting size.
    pub fn new(origin: Position, rng: &mut impl Rng) -> Self {
        let particles = (0..EXPLOSION_PARTICLE_COUNT)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / EXPLOSION_PARTICLE_COUNT as f64;
                let speed = PARTICLE_SPEED_MIN + rng.gen::<f64>() * PARTICLE_SPEED_SPAN;
                Particle {
                    position: origin,
                    velocity: Velocity::from_angle(angle, speed),
                    life: PARTICLE_LIFE,
                    size: PARTICLE_SIZE_MIN + rng.gen::<f64>() * PARTICLE_SIZE_SPAN,
                }
            })
            .collect();

        Self { origin, particles }
    }

    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.position.offset(&p.velocity);
            p.velocity.y += PARTICLE_GRAVITY;
            p.life = p.life.saturating_sub(1);
            p.size *= PARTICLE_SHRINK;
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}
