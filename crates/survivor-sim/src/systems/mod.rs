//! Systems that operate on the run state each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` when
//! read-only). They hold no state of their own.

pub mod behavior;
pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod weapon;
