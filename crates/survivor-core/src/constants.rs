//! Simulation constants and default tuning parameters.
//!
//! `config::Tuning::default()` is built from these values.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

pub const PLAYFIELD_WIDTH: f64 = 800.0;
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

/// Projectiles and orbs beyond the playfield plus this margin are recycled.
pub const CLEANUP_PADDING: f64 = 200.0;

/// Enemies beyond the playfield plus this margin are recycled.
pub const ENEMY_ESCAPE_MARGIN: f64 = 400.0;

// --- Player ---

pub const PLAYER_RADIUS: f64 = 16.0;
pub const PLAYER_BASE_SPEED: f64 = 400.0;
pub const PLAYER_BASE_HEALTH: u32 = 4;

// --- Archetypes: (cooldown secs, projectile count) ---

pub const CIRCLE_COOLDOWN: f64 = 4.0;
pub const CIRCLE_PROJECTILES: u32 = 6;
pub const TRIANGLE_COOLDOWN: f64 = 2.0;
pub const TRIANGLE_PROJECTILES: u32 = 3;
pub const SQUARE_COOLDOWN: f64 = 3.0;
pub const SQUARE_PROJECTILES: u32 = 4;

// --- Weapon ---

pub const PROJECTILE_SPEED: f64 = 500.0;
pub const PROJECTILE_RADIUS: f64 = 5.0;
/// Total fan spread (degrees).
pub const FAN_SPREAD_DEG: f64 = 30.0;
/// The cooldown upgrade never goes below this (seconds).
pub const COOLDOWN_FLOOR: f64 = 0.2;

// --- Enemies ---

pub const ENEMY_RADIUS: f64 = 15.0;
/// Enemies appear this far outside a screen edge.
pub const SPAWN_EDGE_MARGIN: f64 = 50.0;

pub const SEEKING_SPEED_MIN: f64 = 30.0;
pub const SEEKING_SPEED_MAX: f64 = 120.0;
/// Heading wobble amplitude (degrees).
pub const SEEKING_WOBBLE_DEG: f64 = 30.0;
/// Heading wobble angular frequency (rad/s).
pub const SEEKING_WOBBLE_FREQUENCY: f64 = 2.0;

pub const PREDICTIVE_SPEED_MIN: f64 = 80.0;
pub const PREDICTIVE_SPEED_MAX: f64 = 200.0;
/// How far ahead the player's position is extrapolated (seconds).
pub const PREDICTIVE_LEAD_SECS: f64 = 0.6;

pub const BOUNCING_SPEED_MIN: f64 = 60.0;
pub const BOUNCING_SPEED_MAX: f64 = 250.0;

pub const SINE_SPEED_MIN: f64 = 50.0;
pub const SINE_SPEED_MAX: f64 = 200.0;
pub const SINE_AMPLITUDE_MIN: f64 = 50.0;
pub const SINE_AMPLITUDE_MAX: f64 = 150.0;
pub const SINE_FREQUENCY_MIN: f64 = 2.0;
pub const SINE_FREQUENCY_MAX: f64 = 6.0;

// --- Spawning ---

pub const SPAWN_INTERVAL_INITIAL: f64 = 0.150;
pub const SPAWN_SHRINK_FACTOR: f64 = 0.80;
/// Survival-time window between spawn interval reductions (seconds).
pub const SPAWN_SCALE_WINDOW: f64 = 10.0;
/// Seeking enemies placed at run start.
pub const INITIAL_WAVE: u32 = 9;

// --- Orbs & progression ---

pub const ORB_RADIUS: f64 = 12.0;
pub const ORB_TTL: f64 = 5.0;
pub const LEVEL_THRESHOLD: u32 = 10;
/// Health restored on level-up (capped at max).
pub const LEVEL_UP_HEAL: u32 = 1;
/// Survival time that wins the run (seconds).
pub const WIN_TIME: f64 = 200.0;

// --- Upgrades ---

pub const SPEED_UPGRADE_FACTOR: f64 = 1.15;
pub const COOLDOWN_UPGRADE_FACTOR: f64 = 0.8;

// --- Invincibility blink ---

/// One fade (1.0 -> BLINK_MIN_ALPHA) takes this long; each blink fades out and back.
pub const BLINK_HALF_PERIOD: f64 = 0.150;
/// Extra blinks after the first.
pub const BLINK_REPEATS: u32 = 4;
pub const BLINK_MIN_ALPHA: f64 = 0.5;

// --- Pools ---

pub const ENEMY_POOL_CAPACITY: usize = 256;
pub const PROJECTILE_POOL_CAPACITY: usize = 512;
pub const ORB_POOL_CAPACITY: usize = 128;
