//! Snapshot system: reads the run state and builds a GameStateSnapshot.
//!
//! Read-only; never modifies the world.

use survivor_core::components::Player;
use survivor_core::config::{BlinkTuning, Tuning};
use survivor_core::enums::GamePhase;
use survivor_core::events::GameEvent;
use survivor_core::state::*;
use survivor_core::types::format_clock;

use crate::world::World;

pub const UPGRADE_MENU_TITLE: &str = "Level Up! Choose an Upgrade:";
pub const GAME_OVER_TITLE: &str = "GAME OVER";
pub const WIN_TITLE: &str = "YOU WIN!";

/// Snapshot for the shape-selection screen, before any run exists.
pub fn build_idle_snapshot(events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        phase: GamePhase::ShapeSelect,
        events,
        ..Default::default()
    }
}

/// Build a complete snapshot of a run.
pub fn build_snapshot(world: &World, tuning: &Tuning, events: Vec<GameEvent>) -> GameStateSnapshot {
    let now = world.now();
    GameStateSnapshot {
        time: world.clock,
        phase: world.phase,
        playfield: Some(tuning.playfield),
        player: Some(build_player(&world.player, &tuning.blink, now)),
        enemies: world
            .enemies
            .iter()
            .map(|(_, e)| EnemyView {
                behavior: e.behavior(),
                position: e.position,
            })
            .collect(),
        projectiles: world.projectiles.iter().map(|(_, p)| p.position).collect(),
        orbs: world
            .orbs
            .iter()
            .map(|(_, o)| OrbView {
                position: o.position,
                ttl_remaining: (o.expires_at - now).max(0.0),
            })
            .collect(),
        hud: build_hud(world, tuning),
        upgrade_menu: world.progress.menu.as_ref().map(|options| UpgradeMenuView {
            title: UPGRADE_MENU_TITLE.to_string(),
            options: options.iter().map(|u| u.label().to_string()).collect(),
        }),
        end_screen: build_end_screen(world),
        events,
    }
}

fn build_player(player: &Player, blink: &BlinkTuning, now: f64) -> PlayerView {
    let alpha = match player.blink {
        Some(b) if player.invincible => blink_alpha(now - b.started_at, blink),
        _ => 1.0,
    };
    PlayerView {
        archetype: player.archetype,
        position: player.position,
        velocity: player.velocity,
        invincible: player.invincible,
        alpha,
    }
}

/// Triangle wave from 1.0 down to `min_alpha` and back, once per two half-periods.
pub fn blink_alpha(elapsed: f64, blink: &BlinkTuning) -> f64 {
    if blink.half_period <= 0.0 {
        return 1.0;
    }
    let cycle = (elapsed.max(0.0) / blink.half_period) % 2.0;
    let depth = if cycle < 1.0 { cycle } else { 2.0 - cycle };
    1.0 - (1.0 - blink.min_alpha) * depth
}

fn build_hud(world: &World, tuning: &Tuning) -> HudView {
    let now = world.now();
    let player = &world.player;
    HudView {
        survival_secs: world.survival_secs,
        clock: format_clock(world.survival_secs),
        health: player.health,
        max_health: player.max_health,
        level: world.progress.level,
        exp: world.progress.exp,
        exp_to_level: tuning.progression.level_threshold,
        cooldown_progress: player.cooldown_progress(now),
        weapon_ready: player.weapon_ready(now),
        spawn_interval: world.spawner.interval(),
    }
}

fn build_end_screen(world: &World) -> Option<EndScreenView> {
    let title = match world.phase {
        GamePhase::GameOver => GAME_OVER_TITLE,
        GamePhase::Won => WIN_TITLE,
        _ => return None,
    };
    Some(EndScreenView {
        title: title.to_string(),
        survival_secs: world.survival_secs,
        clock: format_clock(world.survival_secs),
        level: world.progress.level,
    })
}
