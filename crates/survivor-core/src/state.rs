//! Game state snapshot: the complete visible state handed to the front end
//! after each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Archetype, Behavior, GamePhase};
use crate::events::GameEvent;
use crate::types::{Playfield, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub playfield: Option<Playfield>,
    /// `None` on the shape-selection screen.
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<DVec2>,
    pub orbs: Vec<OrbView>,
    pub hud: HudView,
    /// Present while the upgrade menu is open.
    pub upgrade_menu: Option<UpgradeMenuView>,
    /// Present on GameOver and Won.
    pub end_screen: Option<EndScreenView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub archetype: Archetype,
    pub position: DVec2,
    pub velocity: DVec2,
    pub invincible: bool,
    /// Render opacity; dips toward the blink minimum while invincible.
    pub alpha: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub behavior: Behavior,
    pub position: DVec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbView {
    pub position: DVec2,
    /// Seconds until the orb disappears.
    pub ttl_remaining: f64,
}

/// Heads-up display values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub survival_secs: f64,
    /// `MM:SS`.
    pub clock: String,
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub exp: u32,
    pub exp_to_level: u32,
    /// Weapon recharge in [0, 1].
    pub cooldown_progress: f64,
    pub weapon_ready: bool,
    pub spawn_interval: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeMenuView {
    pub title: String,
    /// Labels in slot order; slot `i` is chosen with key `i + 1`.
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndScreenView {
    pub title: String,
    pub survival_secs: f64,
    pub clock: String,
    pub level: u32,
}
