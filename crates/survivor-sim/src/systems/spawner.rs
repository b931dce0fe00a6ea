//! Enemy spawning: the repeating trigger, difficulty scaling and the
//! seeker floor.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_core::components::Enemy;
use survivor_core::config::Tuning;
use survivor_core::enums::Behavior;
use survivor_core::events::GameEvent;

use survivor_behavior::motion::initial_velocity;
use survivor_behavior::profiles::{roll_params, roll_spawn_point, SpawnContext};

use crate::pool::Handle;
use crate::world::World;

/// Repeating trigger whose interval can be replaced mid-run.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f64,
    elapsed: f64,
    paused: bool,
}

impl SpawnTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            paused: false,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance by `dt` and return how many times the trigger fired.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if self.paused || self.interval <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Replace the interval and restart the phase.
    pub fn reinstall(&mut self, interval: f64) {
        self.interval = interval;
        self.elapsed = 0.0;
    }
}

/// Spawner state carried across ticks.
#[derive(Debug, Clone)]
pub struct SpawnState {
    pub timer: SpawnTimer,
    /// Index of the last scaling window applied.
    pub window: u64,
}

impl SpawnState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: SpawnTimer::new(tuning.spawning.initial_interval),
            window: 0,
        }
    }

    pub fn interval(&self) -> f64 {
        self.timer.interval()
    }
}

/// Shrink the spawn interval once a new survival window has begun.
///
/// Several windows crossed in one check still shrink only once.
pub fn apply_scaling(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let window = (world.survival_secs / tuning.spawning.scale_window).floor() as u64;
    if window <= world.spawner.window {
        return;
    }
    world.spawner.window = window;
    let interval = world.spawner.interval() * tuning.spawning.shrink_factor;
    world.spawner.timer.reinstall(interval);
    tracing::debug!(window, interval, "spawn interval shrunk");
    events.push(GameEvent::SpawnRateIncreased { interval });
}

/// Activate one enemy just outside a random edge.
///
/// `force` picks the behavior; otherwise it is drawn uniformly. Returns
/// `None` when the enemy pool is exhausted.
pub fn spawn_enemy(
    world: &mut World,
    tuning: &Tuning,
    rng: &mut ChaCha8Rng,
    force: Option<Behavior>,
) -> Option<Handle> {
    if world.enemies.is_full() {
        tracing::trace!("enemy pool exhausted, spawn skipped");
        return None;
    }
    let behavior =
        force.unwrap_or_else(|| Behavior::ALL[rng.gen_range(0..Behavior::ALL.len())]);
    let (_edge, origin) = roll_spawn_point(rng, &tuning.playfield, tuning.enemies.spawn_margin);
    let ctx = SpawnContext {
        origin,
        player_position: world.player.position,
        player_velocity: world.player.velocity,
        playfield: tuning.playfield,
    };
    let params = roll_params(behavior, &ctx, &tuning.enemies, rng);
    world.enemies.acquire(Enemy {
        position: origin,
        velocity: initial_velocity(&params),
        params,
        spawned_at: world.now(),
    })
}

/// Fire the repeating trigger, then top up the seeker floor.
pub fn run(world: &mut World, tuning: &Tuning, rng: &mut ChaCha8Rng, dt: f64) {
    let triggers = world.spawner.timer.advance(dt);
    for _ in 0..triggers {
        spawn_enemy(world, tuning, rng, None);
    }
    ensure_seeker(world, tuning, rng);
}

/// Force a seeking enemy in if none are active.
///
/// With the pool full of other behaviors, the oldest enemy is recycled to
/// make room.
pub fn ensure_seeker(world: &mut World, tuning: &Tuning, rng: &mut ChaCha8Rng) {
    if world.count_behavior(Behavior::Seeking) > 0 {
        return;
    }
    if world.enemies.is_full() {
        let oldest = world
            .enemies
            .iter()
            .min_by(|(_, a), (_, b)| a.spawned_at.total_cmp(&b.spawned_at))
            .map(|(handle, _)| handle);
        if let Some(handle) = oldest {
            world.enemies.release(handle);
        }
    }
    spawn_enemy(world, tuning, rng, Some(Behavior::Seeking));
}
