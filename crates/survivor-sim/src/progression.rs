//! Level-up gate and the upgrade menu lifecycle.
//!
//! The menu is the only thing that moves a run between `Playing` and
//! `UpgradeMenuOpen`. Both transitions are guarded and silently ignore
//! calls made in the wrong phase.

use glam::DVec2;

use survivor_core::commands::MoveInput;
use survivor_core::components::Player;
use survivor_core::config::Tuning;
use survivor_core::constants::{COOLDOWN_UPGRADE_FACTOR, SPEED_UPGRADE_FACTOR};
use survivor_core::enums::{GamePhase, UpgradeKind};
use survivor_core::events::GameEvent;

use crate::world::World;

/// Reset experience, raise the level, heal, and offer upgrades.
pub fn level_up(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    world.progress.exp = 0;
    world.progress.level += 1;
    let player = &mut world.player;
    player.health = (player.health + tuning.progression.level_up_heal).min(player.max_health);
    tracing::info!(level = world.progress.level, "level up");
    events.push(GameEvent::LevelUp {
        level: world.progress.level,
    });
    open_upgrade_menu(world, events);
}

/// Pause the run behind the upgrade menu. Returns whether it opened.
pub fn open_upgrade_menu(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    if world.phase != GamePhase::Playing || world.progress.menu.is_some() {
        return false;
    }
    world.phase = GamePhase::UpgradeMenuOpen;
    world.spawner.timer.pause();
    world.player.velocity = DVec2::ZERO;
    world.input = MoveInput::default();
    world.progress.menu = Some(UpgradeKind::CATALOG.to_vec());
    events.push(GameEvent::UpgradeMenuOpened);
    true
}

/// Apply the option at `slot` and resume play. Returns whether it applied.
pub fn select_upgrade(
    world: &mut World,
    tuning: &Tuning,
    slot: usize,
    events: &mut Vec<GameEvent>,
) -> bool {
    if world.phase != GamePhase::UpgradeMenuOpen {
        return false;
    }
    let Some(upgrade) = world
        .progress
        .menu
        .as_ref()
        .and_then(|options| options.get(slot).copied())
    else {
        return false;
    };

    apply_upgrade(&mut world.player, upgrade, tuning);
    world.progress.menu = None;
    world.phase = GamePhase::Playing;
    world.spawner.timer.resume();
    world.player.velocity = DVec2::ZERO;
    tracing::info!(?upgrade, level = world.progress.level, "upgrade applied");
    events.push(GameEvent::UpgradeApplied { upgrade });
    true
}

/// Mutate player stats for one upgrade.
pub fn apply_upgrade(player: &mut Player, upgrade: UpgradeKind, tuning: &Tuning) {
    match upgrade {
        UpgradeKind::MaxHealth => {
            player.max_health += 1;
            if player.health < player.max_health {
                player.health += 1;
            }
        }
        UpgradeKind::Speed => {
            player.speed = (player.speed * SPEED_UPGRADE_FACTOR).round();
        }
        UpgradeKind::Cooldown => {
            let millis = (player.fire_cooldown * 1000.0 * COOLDOWN_UPGRADE_FACTOR).round();
            player.fire_cooldown = (millis / 1000.0).max(tuning.weapon.cooldown_floor);
        }
        UpgradeKind::Projectile => {
            player.projectile_count += 1;
        }
    }
}
