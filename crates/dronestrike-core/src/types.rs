//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DRONE_SPAWN_BAND_MARGIN, TURRET_BOTTOM_OFFSET,
};
use crate::error::ConfigError;

/// 2D position in field space. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in field units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Play-field dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of running ticks since the session started.
    pub tick: u64,
    /// Elapsed running time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Angle to another position in radians (atan2 convention, 0 = +x).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn offset(&mut self, velocity: &Velocity) {
        self.x += velocity.x;
        self.y += velocity.y;
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` along `angle` (radians).
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        let v = DVec2::from_angle(angle) * speed;
        Self::new(v.x, v.y)
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        DVec2::new(self.x, self.y).length()
    }
}

impl FieldSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject sizes the simulation cannot run on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ConfigError::NonFiniteField {
                width: self.width,
                height: self.height,
            });
        }
        if self.width <= 0.0 {
            return Err(ConfigError::FieldTooNarrow { width: self.width });
        }
        if self.height <= DRONE_SPAWN_BAND_MARGIN {
            return Err(ConfigError::FieldTooShort {
                height: self.height,
                min: DRONE_SPAWN_BAND_MARGIN,
            });
        }
        Ok(())
    }

    /// True if the point lies inside [0, width] x [0, height].
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Fixed turret origin: horizontally centered, just above the bottom edge.
    pub fn turret(&self) -> Position {
        Position::new(self.width / 2.0, self.height - TURRET_BOTTOM_OFFSET)
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

impl SimTime {
    /// Advance by one tick of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}
