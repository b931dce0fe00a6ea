//! Run setup: builds a fresh world for the chosen shape and places the
//! opening wave.

use glam::DVec2;
use rand_chacha::ChaCha8Rng;

use survivor_core::commands::MoveInput;
use survivor_core::components::Player;
use survivor_core::config::Tuning;
use survivor_core::enums::{Archetype, Behavior, GamePhase};
use survivor_core::types::SimTime;

use crate::pool::Pool;
use crate::scheduler::Scheduler;
use crate::systems::spawner::{self, SpawnState};
use crate::world::{Progress, World};

/// Player at the center of the field with the shape's starting loadout.
pub fn new_player(tuning: &Tuning, archetype: Archetype) -> Player {
    let loadout = tuning.archetype(archetype);
    Player {
        position: tuning.playfield.center(),
        velocity: DVec2::ZERO,
        health: tuning.player.base_health,
        max_health: tuning.player.base_health,
        invincible: false,
        blink: None,
        speed: tuning.player.base_speed,
        archetype,
        projectile_count: loadout.projectile_count,
        fire_cooldown: loadout.fire_cooldown,
        last_fired: None,
    }
}

/// Empty world in the `Playing` phase.
pub fn new_world(tuning: &Tuning, archetype: Archetype) -> World {
    World {
        phase: GamePhase::Playing,
        clock: SimTime::default(),
        survival_secs: 0.0,
        player: new_player(tuning, archetype),
        enemies: Pool::with_capacity(tuning.pools.enemies),
        projectiles: Pool::with_capacity(tuning.pools.projectiles),
        orbs: Pool::with_capacity(tuning.pools.orbs),
        scheduler: Scheduler::default(),
        spawner: SpawnState::new(tuning),
        progress: Progress::default(),
        input: MoveInput::default(),
        next_blink_id: 0,
    }
}

/// Fresh world with the opening wave of seekers already placed.
pub fn start_run(tuning: &Tuning, archetype: Archetype, rng: &mut ChaCha8Rng) -> World {
    let mut world = new_world(tuning, archetype);
    for _ in 0..tuning.spawning.initial_wave {
        spawner::spawn_enemy(&mut world, tuning, rng, Some(Behavior::Seeking));
    }
    world
}
