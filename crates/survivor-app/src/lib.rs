//! Terminal front end for the survivor arcade game.
//!
//! Wires the headless simulation to a crossterm screen: a game-loop
//! thread ticks the engine, the main thread polls keys and draws.

pub mod controls;
pub mod game_loop;
pub mod render;
pub mod screen;
pub mod state;

pub use survivor_core as core;
