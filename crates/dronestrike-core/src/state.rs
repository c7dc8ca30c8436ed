//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{FieldSize, Position, SimTime};

/// Complete read-only game state produced after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub field: FieldSize,
    pub turret: Position,
    /// Current gap between automatic drone spawns (ms).
    pub spawn_interval_ms: u32,
    /// Drones in creation order.
    pub drones: Vec<DroneView>,
    /// Projectiles in creation order.
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub stats: StatsView,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// A drone as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub id: u64,
    /// Top-left corner.
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub variant: DroneVariant,
    /// Propeller phase (radians).
    pub rotation: f64,
    /// Body sway (radians).
    pub tilt: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Position,
    /// Per-tick displacement, used for the trail.
    pub velocity: (f64, f64),
    pub radius: f64,
    pub lifetime: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u64,
    pub origin: Position,
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub size: f64,
    /// Remaining life as a fraction of the starting life (drives fade-out).
    pub alpha: f64,
}

/// Running tally for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub score: u32,
    pub hits: u32,
    pub misses: u32,
    /// Whole-number percentage, 0 when nothing has been fired.
    pub accuracy: u32,
}
