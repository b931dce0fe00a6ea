//! Combat resolution: what each contact does to the run, plus the
//! deferred actions combat schedules.

use glam::DVec2;

use survivor_core::components::{Blink, Orb};
use survivor_core::config::Tuning;
use survivor_core::enums::GamePhase;
use survivor_core::events::GameEvent;

use crate::pool::Handle;
use crate::progression;
use crate::scheduler::ScheduledAction;
use crate::systems::collision::Contact;
use crate::world::World;

/// Resolve one contact. Contacts whose entities are already gone do nothing.
pub fn resolve(world: &mut World, tuning: &Tuning, contact: Contact, events: &mut Vec<GameEvent>) {
    match contact {
        Contact::ProjectileEnemy { projectile, enemy } => {
            projectile_hits_enemy(world, tuning, projectile, enemy, events)
        }
        Contact::PlayerEnemy { enemy } => enemy_hits_player(world, tuning, enemy, events),
        Contact::PlayerOrb { orb } => collect_orb(world, tuning, orb, events),
    }
}

fn projectile_hits_enemy(
    world: &mut World,
    tuning: &Tuning,
    projectile: Handle,
    enemy: Handle,
    events: &mut Vec<GameEvent>,
) {
    if !world.projectiles.is_live(projectile) || !world.enemies.is_live(enemy) {
        return;
    }
    world.projectiles.release(projectile);
    let Some(defeated) = world.enemies.release(enemy) else {
        return;
    };
    drop_orb(world, tuning, defeated.position);
    events.push(GameEvent::EnemyDefeated {
        behavior: defeated.behavior(),
        position: defeated.position,
    });
}

fn drop_orb(world: &mut World, tuning: &Tuning, position: DVec2) {
    let expires_at = world.now() + tuning.progression.orb_ttl;
    match world.orbs.acquire(Orb {
        position,
        expires_at,
    }) {
        Some(handle) => world
            .scheduler
            .schedule(expires_at, ScheduledAction::ExpireOrb(handle)),
        None => tracing::trace!("orb pool exhausted, drop skipped"),
    }
}

/// Damage the player unless invincible. The enemy is consumed either way
/// the hit lands.
pub fn enemy_hits_player(
    world: &mut World,
    tuning: &Tuning,
    enemy: Handle,
    events: &mut Vec<GameEvent>,
) {
    if world.player.invincible || !world.enemies.is_live(enemy) {
        return;
    }
    world.enemies.release(enemy);
    let now = world.now();
    let player = &mut world.player;
    player.health = player.health.saturating_sub(1);

    if player.health == 0 {
        player.velocity = DVec2::ZERO;
        world.phase = GamePhase::GameOver;
        tracing::info!(
            survival_secs = world.survival_secs,
            level = world.progress.level,
            "game over"
        );
        events.push(GameEvent::GameOver {
            survival_secs: world.survival_secs,
            level: world.progress.level,
        });
        return;
    }

    let blink_id = world.next_blink_id;
    world.next_blink_id = world.next_blink_id.wrapping_add(1);
    player.invincible = true;
    player.blink = Some(Blink {
        id: blink_id,
        started_at: now,
    });
    let blink_duration = tuning.blink.total_duration();
    world.scheduler.schedule(
        now + blink_duration,
        ScheduledAction::EndInvincibility { blink_id },
    );
    events.push(GameEvent::PlayerDamaged {
        health: player.health,
        blink_duration,
    });
}

fn collect_orb(world: &mut World, tuning: &Tuning, orb: Handle, events: &mut Vec<GameEvent>) {
    if world.orbs.release(orb).is_none() {
        return;
    }
    world.progress.exp += 1;
    events.push(GameEvent::OrbCollected {
        exp: world.progress.exp,
    });
    if world.progress.exp >= tuning.progression.level_threshold {
        progression::level_up(world, tuning, events);
    }
}

/// Run every deferred action that has come due.
pub fn run_deferred(world: &mut World, events: &mut Vec<GameEvent>) {
    for action in world.scheduler.drain_due(world.clock.elapsed_secs) {
        match action {
            ScheduledAction::ExpireOrb(handle) => {
                if world.orbs.release(handle).is_some() {
                    events.push(GameEvent::OrbExpired);
                }
            }
            ScheduledAction::EndInvincibility { blink_id } => {
                let player = &mut world.player;
                if player.blink.map(|b| b.id) == Some(blink_id) {
                    player.blink = None;
                    player.invincible = false;
                    events.push(GameEvent::InvincibilityEnded);
                }
            }
        }
    }
}
