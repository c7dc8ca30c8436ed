//! Player commands sent from the frontend to the simulation.
//!
//! Commands are either queued for the next tick boundary or applied
//! immediately by the engine. Commands that make no sense in the current
//! phase are ignored.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Begin a session. Only valid while Idle.
    Start,
    /// Flip between Running and Paused. Ignored while Idle.
    TogglePause,
    /// Pause a running session.
    Pause,
    /// Resume a paused session.
    Resume,
    /// Clear everything and return to Idle. Valid in any phase.
    Reset,

    // --- Gameplay ---
    /// Fire at a point in field-local coordinates. Only valid while Running.
    Fire { x: f64, y: f64 },

    // --- Host ---
    /// The host viewport changed size.
    ResizeField { width: f64, height: f64 },
}
