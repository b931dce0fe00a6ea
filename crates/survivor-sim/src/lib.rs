//! Simulation engine for the survivor arcade game.
//!
//! Owns the pooled entity world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod pool;
pub mod progression;
pub mod scheduler;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use survivor_core as core;

#[cfg(test)]
mod tests;
