//! Events emitted by the simulation for presentation feedback.
//!
//! Drained into each tick's snapshot; the host decides how to show them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Behavior, UpgradeKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile destroyed an enemy; an orb may have dropped at `position`.
    EnemyDefeated { behavior: Behavior, position: DVec2 },
    /// The player lost one health and started blinking.
    PlayerDamaged { health: u32, blink_duration: f64 },
    /// The invincibility blink finished.
    InvincibilityEnded,
    OrbCollected { exp: u32 },
    /// An uncollected orb timed out.
    OrbExpired,
    LevelUp { level: u32 },
    UpgradeMenuOpened,
    UpgradeApplied { upgrade: UpgradeKind },
    ProjectilesFired { count: u32 },
    SpawnRateIncreased { interval: f64 },
    GameOver { survival_secs: f64, level: u32 },
    Won { survival_secs: f64, level: u32 },
}
