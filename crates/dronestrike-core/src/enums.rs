//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Nothing advances. Initial state and the state after a reset.
    #[default]
    Idle,
    /// Ticks spawn, move and collide entities.
    Running,
    /// Ticks are suspended; entity state is frozen.
    Paused,
}

/// Cosmetic drone paint scheme. Has no effect on behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneVariant {
    #[default]
    Blue,
    Red,
    Green,
}

impl DroneVariant {
    /// Map a variant index (0..3) to a variant. Out-of-range indices wrap.
    pub fn from_index(index: u8) -> Self {
        match index % crate::constants::DRONE_VARIANT_COUNT {
            0 => DroneVariant::Blue,
            1 => DroneVariant::Red,
            _ => DroneVariant::Green,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            DroneVariant::Blue => 0,
            DroneVariant::Red => 1,
            DroneVariant::Green => 2,
        }
    }
}

/// How a drone was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    /// The fire point landed inside the drone's bounding box.
    DirectHit,
    /// A projectile came within the proximity radius of the drone's center.
    Projectile,
}
