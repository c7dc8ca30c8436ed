//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: entity state lives in components, session state
//! in the engine.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
