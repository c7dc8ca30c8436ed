//! Events emitted by the simulation for HUD and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something noteworthy that happened during a tick or command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Session phase changed.
    PhaseChanged { from: SimPhase, to: SimPhase },
    /// A drone entered the field.
    DroneSpawned { id: u64, y: f64 },
    /// A drone crossed the right edge without being hit.
    DroneEscaped { id: u64 },
    /// A drone was destroyed and scored.
    DroneDestroyed {
        id: u64,
        cause: KillCause,
        at: Position,
    },
    /// The turret fired a projectile.
    ShotFired { id: u64, target: Position },
    /// A fire command did not land on any drone.
    ShotMissed { target: Position },
}
