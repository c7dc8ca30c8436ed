//! Simulation engine for DRONESTRIKE.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod stats;
pub mod systems;
pub mod world_setup;

pub use dronestrike_core as core;
pub use engine::{SimConfig, SimulationEngine};
