//! Enemy behavior model for SHAPE SURVIVOR.
//!
//! Pure functions mapping an enemy's stored parameters and its time since
//! spawn to this frame's motion, plus the per-behavior parameter rolls made
//! when an enemy is activated. No pools, no world.

pub mod motion;
pub mod profiles;

pub use survivor_core as core;

#[cfg(test)]
mod tests;
