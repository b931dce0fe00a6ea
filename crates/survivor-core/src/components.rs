//! Entity records.
//!
//! Plain data with no behavior attached; game logic lives in the
//! simulation systems and the behavior model, which match on these.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Archetype, Behavior, SineAxis};

/// Blink effect in progress after the player takes damage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blink {
    /// Identifies the deferred action that ends this blink.
    pub id: u32,
    /// Simulation time the blink started.
    pub started_at: f64,
}

/// The player-controlled shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec2,
    pub velocity: DVec2,
    pub health: u32,
    pub max_health: u32,
    /// Set on damage, cleared only when the blink effect completes.
    pub invincible: bool,
    pub blink: Option<Blink>,
    /// Movement speed (units/s).
    pub speed: f64,
    pub archetype: Archetype,
    pub projectile_count: u32,
    /// Minimum seconds between volleys.
    pub fire_cooldown: f64,
    /// Simulation time of the last volley; `None` until the first shot.
    pub last_fired: Option<f64>,
}

impl Player {
    /// Whether the weapon may fire at simulation time `now`.
    pub fn weapon_ready(&self, now: f64) -> bool {
        match self.last_fired {
            Some(last) => now - last >= self.fire_cooldown,
            None => true,
        }
    }

    /// Fraction of the cooldown elapsed, in [0, 1].
    pub fn cooldown_progress(&self, now: f64) -> f64 {
        match self.last_fired {
            Some(last) if self.fire_cooldown > 0.0 => {
                ((now - last) / self.fire_cooldown).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }
}

/// Per-behavior motion parameters, fixed at spawn except where noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionParams {
    Seeking {
        speed: f64,
        /// Oscillation phase offset (radians).
        phase: f64,
    },
    PredictiveStraight {
        speed: f64,
        /// Heading fixed at spawn (radians).
        heading: f64,
        origin: DVec2,
    },
    BouncingDiagonal {
        speed: f64,
        /// Per-axis sign, each +1 or -1. Flipped at the playfield edges.
        dir: DVec2,
    },
    Sinusoidal {
        axis: SineAxis,
        speed: f64,
        amplitude: f64,
        /// Angular frequency (rad/s).
        frequency: f64,
        /// +1 or -1 along the travel axis.
        travel_sign: f64,
        base: DVec2,
    },
}

impl MotionParams {
    pub fn behavior(&self) -> Behavior {
        match self {
            MotionParams::Seeking { .. } => Behavior::Seeking,
            MotionParams::PredictiveStraight { .. } => Behavior::PredictiveStraight,
            MotionParams::BouncingDiagonal { .. } => Behavior::BouncingDiagonal,
            MotionParams::Sinusoidal { .. } => Behavior::Sinusoidal,
        }
    }
}

/// A pooled enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub position: DVec2,
    pub velocity: DVec2,
    pub params: MotionParams,
    /// Simulation time the enemy was activated.
    pub spawned_at: f64,
}

impl Enemy {
    pub fn behavior(&self) -> Behavior {
        self.params.behavior()
    }
}

/// A pooled player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub position: DVec2,
    pub velocity: DVec2,
}

/// A pooled experience orb.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Orb {
    pub position: DVec2,
    /// Simulation time after which the orb self-deactivates.
    pub expires_at: f64,
}
