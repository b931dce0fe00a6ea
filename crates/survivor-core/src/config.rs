//! Tunable gameplay parameters.
//!
//! Every field defaults to the matching value in [`crate::constants`], and
//! a JSON tuning file only needs to name the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Archetype, FirePattern};
use crate::error::ConfigError;
use crate::types::Playfield;

/// Complete tuning set for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield: Playfield,
    pub cleanup_padding: f64,
    pub player: PlayerTuning,
    pub circle: ArchetypeTuning,
    pub triangle: ArchetypeTuning,
    pub square: ArchetypeTuning,
    pub weapon: WeaponTuning,
    pub enemies: EnemyTuning,
    pub spawning: SpawnTuning,
    pub progression: ProgressionTuning,
    pub blink: BlinkTuning,
    pub pools: PoolTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub radius: f64,
    pub base_speed: f64,
    pub base_health: u32,
}

/// Starting weapon loadout of one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeTuning {
    pub fire_cooldown: f64,
    pub projectile_count: u32,
    /// Forces the dual opposed pattern regardless of projectile count.
    #[serde(default)]
    pub dual_opposed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    pub projectile_speed: f64,
    pub projectile_radius: f64,
    pub fan_spread_deg: f64,
    pub cooldown_floor: f64,
}

/// Inclusive parameter range rolled at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub radius: f64,
    pub spawn_margin: f64,
    pub escape_margin: f64,
    pub seeking_speed: Range,
    pub seeking_wobble_deg: f64,
    pub seeking_wobble_frequency: f64,
    pub predictive_speed: Range,
    pub predictive_lead_secs: f64,
    pub bouncing_speed: Range,
    pub sine_speed: Range,
    pub sine_amplitude: Range,
    pub sine_frequency: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub initial_interval: f64,
    pub shrink_factor: f64,
    pub scale_window: f64,
    pub initial_wave: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionTuning {
    pub orb_radius: f64,
    pub orb_ttl: f64,
    pub level_threshold: u32,
    pub level_up_heal: u32,
    pub win_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkTuning {
    pub half_period: f64,
    pub repeats: u32,
    pub min_alpha: f64,
}

impl BlinkTuning {
    /// Length of the whole effect, and so of the invincibility window.
    pub fn total_duration(&self) -> f64 {
        self.half_period * 2.0 * f64::from(self.repeats + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolTuning {
    pub enemies: usize,
    pub projectiles: usize,
    pub orbs: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            cleanup_padding: CLEANUP_PADDING,
            player: PlayerTuning::default(),
            circle: ArchetypeTuning {
                fire_cooldown: CIRCLE_COOLDOWN,
                projectile_count: CIRCLE_PROJECTILES,
                dual_opposed: false,
            },
            triangle: ArchetypeTuning {
                fire_cooldown: TRIANGLE_COOLDOWN,
                projectile_count: TRIANGLE_PROJECTILES,
                dual_opposed: false,
            },
            square: ArchetypeTuning {
                fire_cooldown: SQUARE_COOLDOWN,
                projectile_count: SQUARE_PROJECTILES,
                dual_opposed: true,
            },
            weapon: WeaponTuning::default(),
            enemies: EnemyTuning::default(),
            spawning: SpawnTuning::default(),
            progression: ProgressionTuning::default(),
            blink: BlinkTuning::default(),
            pools: PoolTuning::default(),
        }
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            base_speed: PLAYER_BASE_SPEED,
            base_health: PLAYER_BASE_HEALTH,
        }
    }
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            fan_spread_deg: FAN_SPREAD_DEG,
            cooldown_floor: COOLDOWN_FLOOR,
        }
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            radius: ENEMY_RADIUS,
            spawn_margin: SPAWN_EDGE_MARGIN,
            escape_margin: ENEMY_ESCAPE_MARGIN,
            seeking_speed: Range::new(SEEKING_SPEED_MIN, SEEKING_SPEED_MAX),
            seeking_wobble_deg: SEEKING_WOBBLE_DEG,
            seeking_wobble_frequency: SEEKING_WOBBLE_FREQUENCY,
            predictive_speed: Range::new(PREDICTIVE_SPEED_MIN, PREDICTIVE_SPEED_MAX),
            predictive_lead_secs: PREDICTIVE_LEAD_SECS,
            bouncing_speed: Range::new(BOUNCING_SPEED_MIN, BOUNCING_SPEED_MAX),
            sine_speed: Range::new(SINE_SPEED_MIN, SINE_SPEED_MAX),
            sine_amplitude: Range::new(SINE_AMPLITUDE_MIN, SINE_AMPLITUDE_MAX),
            sine_frequency: Range::new(SINE_FREQUENCY_MIN, SINE_FREQUENCY_MAX),
        }
    }
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            initial_interval: SPAWN_INTERVAL_INITIAL,
            shrink_factor: SPAWN_SHRINK_FACTOR,
            scale_window: SPAWN_SCALE_WINDOW,
            initial_wave: INITIAL_WAVE,
        }
    }
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            orb_radius: ORB_RADIUS,
            orb_ttl: ORB_TTL,
            level_threshold: LEVEL_THRESHOLD,
            level_up_heal: LEVEL_UP_HEAL,
            win_time: WIN_TIME,
        }
    }
}

impl Default for BlinkTuning {
    fn default() -> Self {
        Self {
            half_period: BLINK_HALF_PERIOD,
            repeats: BLINK_REPEATS,
            min_alpha: BLINK_MIN_ALPHA,
        }
    }
}

impl Default for PoolTuning {
    fn default() -> Self {
        Self {
            enemies: ENEMY_POOL_CAPACITY,
            projectiles: PROJECTILE_POOL_CAPACITY,
            orbs: ORB_POOL_CAPACITY,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Starting loadout for a shape.
    pub fn archetype(&self, archetype: Archetype) -> &ArchetypeTuning {
        match archetype {
            Archetype::Circle => &self.circle,
            Archetype::Triangle => &self.triangle,
            Archetype::Square => &self.square,
        }
    }

    /// Volley layout for a shape at its current projectile count.
    pub fn fire_pattern(&self, archetype: Archetype, projectile_count: u32) -> FirePattern {
        if archetype == Archetype::Triangle || projectile_count > 1 {
            if self.archetype(archetype).dual_opposed {
                FirePattern::DualOpposed
            } else {
                FirePattern::Fan
            }
        } else {
            FirePattern::Single
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("playfield.width", self.playfield.width)?;
        positive("playfield.height", self.playfield.height)?;
        non_negative("cleanup_padding", self.cleanup_padding)?;
        positive("player.radius", self.player.radius)?;
        positive("player.base_speed", self.player.base_speed)?;
        if self.player.base_health == 0 {
            return Err(invalid("player.base_health", "must be at least 1"));
        }
        positive("weapon.projectile_speed", self.weapon.projectile_speed)?;
        positive("weapon.projectile_radius", self.weapon.projectile_radius)?;
        non_negative("weapon.fan_spread_deg", self.weapon.fan_spread_deg)?;
        positive("weapon.cooldown_floor", self.weapon.cooldown_floor)?;
        for (field, shape) in [
            ("circle", &self.circle),
            ("triangle", &self.triangle),
            ("square", &self.square),
        ] {
            if shape.projectile_count == 0 {
                return Err(invalid(field, "projectile_count must be at least 1"));
            }
            if shape.fire_cooldown < self.weapon.cooldown_floor {
                return Err(invalid(field, "fire_cooldown is below weapon.cooldown_floor"));
            }
        }
        positive("enemies.radius", self.enemies.radius)?;
        non_negative("enemies.spawn_margin", self.enemies.spawn_margin)?;
        non_negative("enemies.escape_margin", self.enemies.escape_margin)?;
        for (field, range) in [
            ("enemies.seeking_speed", self.enemies.seeking_speed),
            ("enemies.predictive_speed", self.enemies.predictive_speed),
            ("enemies.bouncing_speed", self.enemies.bouncing_speed),
            ("enemies.sine_speed", self.enemies.sine_speed),
            ("enemies.sine_amplitude", self.enemies.sine_amplitude),
            ("enemies.sine_frequency", self.enemies.sine_frequency),
        ] {
            if !(range.min > 0.0 && range.min <= range.max) {
                return Err(invalid(field, "expected 0 < min <= max"));
            }
        }
        positive("spawning.initial_interval", self.spawning.initial_interval)?;
        if !(self.spawning.shrink_factor > 0.0 && self.spawning.shrink_factor < 1.0) {
            return Err(invalid("spawning.shrink_factor", "must lie in (0, 1)"));
        }
        positive("spawning.scale_window", self.spawning.scale_window)?;
        positive("progression.orb_radius", self.progression.orb_radius)?;
        positive("progression.orb_ttl", self.progression.orb_ttl)?;
        if self.progression.level_threshold == 0 {
            return Err(invalid("progression.level_threshold", "must be at least 1"));
        }
        positive("progression.win_time", self.progression.win_time)?;
        positive("blink.half_period", self.blink.half_period)?;
        if !(0.0..=1.0).contains(&self.blink.min_alpha) {
            return Err(invalid("blink.min_alpha", "must lie in [0, 1]"));
        }
        for (field, capacity) in [
            ("pools.enemies", self.pools.enemies),
            ("pools.projectiles", self.pools.projectiles),
            ("pools.orbs", self.pools.orbs),
        ] {
            if capacity == 0 {
                return Err(invalid(field, "capacity must be at least 1"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &format!("expected a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &format!("expected a non-negative number, got {value}")))
    }
}
