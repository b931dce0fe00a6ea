//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The player's chosen shape. Determines base fire rate, projectile count
/// and firing pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    #[default]
    Circle,
    Triangle,
    Square,
}

impl Archetype {
    /// Selection-screen order.
    pub const ALL: [Archetype; 3] = [Archetype::Circle, Archetype::Triangle, Archetype::Square];

    pub fn label(self) -> &'static str {
        match self {
            Archetype::Circle => "Circle",
            Archetype::Triangle => "Triangle",
            Archetype::Square => "Square",
        }
    }
}

/// Enemy motion pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    /// Pursues the player every frame with a sinusoidal heading wobble.
    Seeking,
    /// Fixed heading toward where the player was predicted to be at spawn.
    PredictiveStraight,
    /// Constant-speed diagonal that bounces off the playfield edges.
    BouncingDiagonal,
    /// Travels along one axis while oscillating on the other.
    Sinusoidal,
}

impl Behavior {
    /// The archetype catalog random spawns are drawn from.
    pub const ALL: [Behavior; 4] = [
        Behavior::Seeking,
        Behavior::PredictiveStraight,
        Behavior::BouncingDiagonal,
        Behavior::Sinusoidal,
    ];
}

/// Dominant travel axis of a sinusoidal enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SineAxis {
    Horizontal,
    Vertical,
}

/// Screen edge an enemy enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Right,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
    ];
}

/// How a weapon volley is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirePattern {
    /// One projectile straight at the target.
    Single,
    /// `count` projectiles spread evenly across the fan angle.
    Fan,
    /// One projectile at the target and one at the opposite bearing.
    DualOpposed,
}

/// Level-up upgrade. The catalog is fixed and always offered in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    MaxHealth,
    Speed,
    Cooldown,
    Projectile,
}

impl UpgradeKind {
    pub const CATALOG: [UpgradeKind; 4] = [
        UpgradeKind::MaxHealth,
        UpgradeKind::Speed,
        UpgradeKind::Cooldown,
        UpgradeKind::Projectile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UpgradeKind::MaxHealth => "+1 Max Health",
            UpgradeKind::Speed => "+15% Speed",
            UpgradeKind::Cooldown => "-20% Cooldown",
            UpgradeKind::Projectile => "+1 Projectile",
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Shape-selection screen; no run exists yet.
    #[default]
    ShapeSelect,
    Playing,
    UpgradeMenuOpen,
    GameOver,
    Won,
}

impl GamePhase {
    /// GameOver and Won are sinks; only a restart leaves them.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}
