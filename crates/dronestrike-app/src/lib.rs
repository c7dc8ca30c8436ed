//! DRONESTRIKE headless driver.
//!
//! This crate wires the simulation engine to a fixed-rate game loop thread
//! and exposes a handle for sending commands and polling snapshots.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use dronestrike_core as core;
