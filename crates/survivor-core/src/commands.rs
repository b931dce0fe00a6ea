//! Player commands sent from the front end to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Archetype;

/// Polled snapshot of the four held movement directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    /// Unnormalized direction. Left wins over right and up wins over down
    /// when both are held.
    pub fn axis(&self) -> DVec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        DVec2::new(x, y)
    }

    /// Unit direction, zero when nothing is held.
    pub fn direction(&self) -> DVec2 {
        self.axis().normalize_or_zero()
    }

    pub fn is_idle(&self) -> bool {
        self.axis() == DVec2::ZERO
    }
}

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh run with the chosen shape (from the selection screen).
    StartRun { archetype: Archetype },
    /// Replace the held movement input.
    SetMovement(MoveInput),
    /// Pick an offered upgrade by 0-based slot (pointer click or keys 1-4).
    SelectUpgrade { slot: usize },
    /// Fully reinitialize the run with the same shape (end screens only).
    Restart,
    /// Abandon the current run and go back to shape selection.
    ReturnToMenu,
}

impl PlayerCommand {
    /// Convenience for the 1-4 keyed shortcut.
    pub fn select_key(key: u8) -> Option<Self> {
        match key {
            1..=4 => Some(PlayerCommand::SelectUpgrade {
                slot: usize::from(key - 1),
            }),
            _ => None,
        }
    }

    pub fn start(archetype: Archetype) -> Self {
        PlayerCommand::StartRun { archetype }
    }
}
