//! Tests for pools, scheduling, spawning, weapons, combat and progression.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use survivor_core::components::{Enemy, MotionParams, Orb, Projectile};
use survivor_core::config::Tuning;
use survivor_core::enums::*;
use survivor_core::events::GameEvent;

use crate::pool::Pool;
use crate::progression;
use crate::scheduler::{ScheduledAction, Scheduler};
use crate::systems::collision::{self, Contact};
use crate::systems::spawner::{self, SpawnTimer};
use crate::systems::{cleanup, combat, snapshot, weapon};
use crate::world::World;
use crate::world_setup;

fn empty_world(archetype: Archetype) -> World {
    world_setup::new_world(&Tuning::default(), archetype)
}

fn seeker_at(position: DVec2) -> Enemy {
    Enemy {
        position,
        velocity: DVec2::ZERO,
        params: MotionParams::Seeking {
            speed: 50.0,
            phase: 0.0,
        },
        spawned_at: 0.0,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ---- Pool ----

#[test]
fn test_pool_hands_out_low_slots_first_and_respects_capacity() {
    let mut pool: Pool<u32> = Pool::with_capacity(2);
    let a = pool.acquire(10).unwrap();
    let b = pool.acquire(20).unwrap();
    assert_eq!(a.index, 0);
    assert_eq!(b.index, 1);
    assert!(pool.is_full());
    assert!(pool.acquire(30).is_none(), "exhausted pool must refuse");
    assert_eq!(pool.active_count(), 2);
}

#[test]
fn test_pool_stale_handle_after_reuse() {
    let mut pool: Pool<&str> = Pool::with_capacity(1);
    let first = pool.acquire("first").unwrap();
    assert_eq!(pool.release(first), Some("first"));
    let second = pool.acquire("second").unwrap();

    assert_eq!(first.index, second.index);
    assert_ne!(first, second);
    assert!(pool.get(first).is_none());
    assert!(pool.release(first).is_none(), "stale release is a no-op");
    assert_eq!(pool.get(second), Some(&"second"));
}

#[test]
fn test_pool_iter_and_clear() {
    let mut pool: Pool<u32> = Pool::with_capacity(4);
    let handles: Vec<_> = (0..4).map(|i| pool.acquire(i).unwrap()).collect();
    pool.release(handles[1]);
    let values: Vec<u32> = pool.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![0, 2, 3]);

    for (_, v) in pool.iter_mut() {
        *v += 100;
    }
    assert_eq!(pool.get(handles[3]), Some(&103));

    pool.clear();
    assert_eq!(pool.active_count(), 0);
    assert!(handles.iter().all(|h| !pool.is_live(*h)));
}

// ---- Scheduler ----

#[test]
fn test_scheduler_drains_in_time_order_with_stable_ties() {
    let mut scheduler = Scheduler::default();
    scheduler.schedule(2.0, ScheduledAction::EndInvincibility { blink_id: 1 });
    scheduler.schedule(1.0, ScheduledAction::EndInvincibility { blink_id: 2 });
    scheduler.schedule(1.0, ScheduledAction::EndInvincibility { blink_id: 3 });

    assert!(scheduler.drain_due(0.5).is_empty());
    assert_eq!(
        scheduler.drain_due(1.0),
        vec![
            ScheduledAction::EndInvincibility { blink_id: 2 },
            ScheduledAction::EndInvincibility { blink_id: 3 },
        ]
    );
    assert_eq!(scheduler.len(), 1);
    assert_eq!(
        scheduler.drain_due(10.0),
        vec![ScheduledAction::EndInvincibility { blink_id: 1 }]
    );
    assert!(scheduler.is_empty());
}

// ---- Spawn timer and scaling ----

#[test]
fn test_spawn_timer_counts_triggers() {
    let mut timer = SpawnTimer::new(0.15);
    assert_eq!(timer.advance(0.1), 0);
    assert_eq!(timer.advance(0.1), 1);
    assert_eq!(timer.advance(0.5), 3);

    timer.pause();
    assert_eq!(timer.advance(1.0), 0);
    timer.resume();

    timer.reinstall(0.5);
    assert_eq!(timer.advance(0.3), 0);
    assert_eq!(timer.advance(0.3), 1);
}

#[test]
fn test_scaling_shrinks_once_per_window() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    let mut events = Vec::new();

    world.survival_secs = 9.99;
    spawner::apply_scaling(&mut world, &tuning, &mut events);
    assert!(approx(world.spawner.interval(), 0.15));

    world.survival_secs = 10.0;
    spawner::apply_scaling(&mut world, &tuning, &mut events);
    assert!(approx(world.spawner.interval(), 0.12));
    spawner::apply_scaling(&mut world, &tuning, &mut events);
    assert!(approx(world.spawner.interval(), 0.12), "same window shrinks once");

    // Two windows skipped still shrink a single time.
    world.survival_secs = 35.0;
    spawner::apply_scaling(&mut world, &tuning, &mut events);
    assert!(approx(world.spawner.interval(), 0.096));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::SpawnRateIncreased { .. }))
            .count(),
        2
    );
}

#[test]
fn test_floor_forces_a_seeker() {
    let tuning = Tuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut world = empty_world(Archetype::Circle);
    world.spawner.timer.pause();

    spawner::run(&mut world, &tuning, &mut rng, 1.0);
    assert_eq!(world.count_behavior(Behavior::Seeking), 1);

    spawner::run(&mut world, &tuning, &mut rng, 1.0);
    assert_eq!(world.enemies.active_count(), 1, "floor already satisfied");
}

#[test]
fn test_floor_recycles_when_pool_full() {
    let mut tuning = Tuning::default();
    tuning.pools.enemies = 2;
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut world = world_setup::new_world(&tuning, Archetype::Circle);
    for i in 0..2 {
        world.enemies.acquire(Enemy {
            position: DVec2::new(-20.0, 100.0),
            velocity: DVec2::ZERO,
            params: MotionParams::BouncingDiagonal {
                speed: 100.0,
                dir: DVec2::ONE,
            },
            spawned_at: f64::from(i),
        });
    }

    spawner::ensure_seeker(&mut world, &tuning, &mut rng);
    assert_eq!(world.enemies.active_count(), 2);
    assert_eq!(world.count_behavior(Behavior::Seeking), 1);
}

#[test]
fn test_spawn_into_full_pool_is_a_no_op() {
    let mut tuning = Tuning::default();
    tuning.pools.enemies = 1;
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut world = world_setup::new_world(&tuning, Archetype::Circle);

    let first = spawner::spawn_enemy(&mut world, &tuning, &mut rng, None).unwrap();
    let before = world.enemies.get(first).cloned().unwrap();

    assert!(spawner::spawn_enemy(&mut world, &tuning, &mut rng, None).is_none());
    assert!(spawner::spawn_enemy(&mut world, &tuning, &mut rng, Some(Behavior::Seeking)).is_none());
    assert_eq!(world.enemies.active_count(), 1);
    let after = world.enemies.get(first).unwrap();
    assert_eq!(after.position, before.position);
    assert_eq!(after.params, before.params);
    assert_eq!(after.spawned_at, before.spawned_at);
}

#[test]
fn test_spawner_run_with_full_pool_of_seekers_changes_nothing() {
    let mut tuning = Tuning::default();
    tuning.pools.enemies = 2;
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let mut world = world_setup::new_world(&tuning, Archetype::Triangle);
    let handles: Vec<_> = (0..2)
        .map(|_| spawner::spawn_enemy(&mut world, &tuning, &mut rng, Some(Behavior::Seeking)).unwrap())
        .collect();
    let before: Vec<_> = handles
        .iter()
        .map(|h| world.enemies.get(*h).cloned().unwrap())
        .collect();

    // Several trigger periods in one step.
    spawner::run(&mut world, &tuning, &mut rng, 1.0);

    assert_eq!(world.enemies.active_count(), 2);
    for (handle, old) in handles.iter().zip(&before) {
        let enemy = world.enemies.get(*handle).expect("seeker was recycled");
        assert_eq!(enemy.position, old.position);
        assert_eq!(enemy.params, old.params);
    }
}

#[test]
fn test_initial_wave_is_all_seekers_outside_the_field() {
    let tuning = Tuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let world = world_setup::start_run(&tuning, Archetype::Square, &mut rng);
    assert_eq!(world.enemies.active_count(), 9);
    assert_eq!(world.count_behavior(Behavior::Seeking), 9);
    for (_, enemy) in world.enemies.iter() {
        assert!(!tuning.playfield.contains_padded(enemy.position, 49.0));
    }
    assert_eq!(world.player.projectile_count, 4);
    assert!(approx(world.player.fire_cooldown, 3.0));
}

// ---- Weapon ----

#[test]
fn test_volley_angles() {
    let fan = weapon::volley_angles(FirePattern::Fan, 0.0, 3, 30.0);
    assert_eq!(fan.len(), 3);
    assert!(approx(fan[0], -15f64.to_radians()));
    assert!(approx(fan[1], 0.0));
    assert!(approx(fan[2], 15f64.to_radians()));

    let four = weapon::volley_angles(FirePattern::Fan, 1.0, 4, 30.0);
    assert!(approx(four[1] - four[0], 10f64.to_radians()));
    assert!(approx(four[0] + four[3], 2.0));

    assert_eq!(weapon::volley_angles(FirePattern::Fan, 0.5, 1, 30.0), vec![0.5]);
    assert_eq!(weapon::volley_angles(FirePattern::Single, 0.5, 1, 30.0), vec![0.5]);
    assert_eq!(
        weapon::volley_angles(FirePattern::DualOpposed, 0.5, 4, 30.0),
        vec![0.5, 0.5 + PI]
    );
}

#[test]
fn test_nearest_enemy_ties_go_to_first_slot() {
    let mut world = empty_world(Archetype::Circle);
    let center = world.player.position;
    let first = world
        .enemies
        .acquire(seeker_at(center + DVec2::new(100.0, 0.0)))
        .unwrap();
    world.enemies.acquire(seeker_at(center - DVec2::new(100.0, 0.0)));
    let (target, _) = weapon::nearest_enemy(&world, center).unwrap();
    assert_eq!(target, first);
}

#[test]
fn test_weapon_waits_for_target_without_consuming_cooldown() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    let mut events = Vec::new();
    weapon::run(&mut world, &tuning, &mut events);
    assert!(world.player.last_fired.is_none());
    assert_eq!(world.projectiles.active_count(), 0);
    assert!(events.is_empty());
}

#[test]
fn test_weapon_fires_circle_fan_and_respects_cooldown() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    let target = world.player.position + DVec2::new(0.0, -200.0);
    world.enemies.acquire(seeker_at(target));
    let mut events = Vec::new();

    weapon::run(&mut world, &tuning, &mut events);
    assert_eq!(world.projectiles.active_count(), 6);
    assert_eq!(world.player.last_fired, Some(0.0));
    assert_eq!(events, vec![GameEvent::ProjectilesFired { count: 6 }]);

    world.clock.elapsed_secs = 3.9;
    weapon::run(&mut world, &tuning, &mut events);
    assert_eq!(world.projectiles.active_count(), 6, "still cooling down");

    world.clock.elapsed_secs = 4.0;
    weapon::run(&mut world, &tuning, &mut events);
    assert_eq!(world.projectiles.active_count(), 12);
}

#[test]
fn test_square_fires_dual_opposed() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Square);
    world
        .enemies
        .acquire(seeker_at(world.player.position + DVec2::new(100.0, 0.0)));
    weapon::run(&mut world, &tuning, &mut Vec::new());

    let velocities: Vec<DVec2> = world.projectiles.iter().map(|(_, p)| p.velocity).collect();
    assert_eq!(velocities.len(), 2);
    assert!((velocities[0] - DVec2::new(500.0, 0.0)).length() < 1e-9);
    assert!((velocities[1] - DVec2::new(-500.0, 0.0)).length() < 1e-9);
}

#[test]
fn test_weapon_pool_exhaustion_keeps_cooldown_ready() {
    let mut tuning = Tuning::default();
    tuning.pools.projectiles = 1;
    let mut world = world_setup::new_world(&tuning, Archetype::Circle);
    world.projectiles.acquire(Projectile {
        position: DVec2::ZERO,
        velocity: DVec2::ZERO,
    });
    world
        .enemies
        .acquire(seeker_at(world.player.position + DVec2::new(50.0, 0.0)));

    weapon::run(&mut world, &tuning, &mut Vec::new());
    assert!(world.player.last_fired.is_none());
    assert!(world.player.weapon_ready(world.now()));
}

// ---- Collision and combat ----

#[test]
fn test_collision_groups_in_order() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    let player = world.player.position;
    let enemy = world
        .enemies
        .acquire(seeker_at(player + DVec2::new(200.0, 0.0)))
        .unwrap();
    let projectile = world
        .projectiles
        .acquire(Projectile {
            position: player + DVec2::new(190.0, 0.0),
            velocity: DVec2::ZERO,
        })
        .unwrap();
    let orb = world
        .orbs
        .acquire(Orb {
            position: player + DVec2::new(20.0, 0.0),
            expires_at: 5.0,
        })
        .unwrap();

    let contacts = collision::detect(&world, &tuning);
    assert_eq!(
        contacts,
        vec![
            Contact::ProjectileEnemy { projectile, enemy },
            Contact::PlayerOrb { orb },
        ]
    );
}

#[test]
fn test_projectile_kill_drops_orb_once() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    let at = DVec2::new(100.0, 100.0);
    let enemy = world.enemies.acquire(seeker_at(at)).unwrap();
    let projectile = world
        .projectiles
        .acquire(Projectile {
            position: at,
            velocity: DVec2::ZERO,
        })
        .unwrap();
    let contact = Contact::ProjectileEnemy { projectile, enemy };
    let mut events = Vec::new();

    combat::resolve(&mut world, &tuning, contact, &mut events);
    assert_eq!(world.enemies.active_count(), 0);
    assert_eq!(world.projectiles.active_count(), 0);
    assert_eq!(world.orbs.active_count(), 1);
    let (_, orb) = world.orbs.iter().next().unwrap();
    assert_eq!(orb.position, at);
    assert!(approx(orb.expires_at, 5.0));
    assert_eq!(world.scheduler.len(), 1);

    // A second report of the same contact finds both entities gone.
    combat::resolve(&mut world, &tuning, contact, &mut events);
    assert_eq!(world.orbs.active_count(), 1);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_damage_starts_blink_and_invincibility_blocks_hits() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    let p = world.player.position;
    let first = world.enemies.acquire(seeker_at(p)).unwrap();
    let second = world.enemies.acquire(seeker_at(p)).unwrap();
    let mut events = Vec::new();

    combat::enemy_hits_player(&mut world, &tuning, first, &mut events);
    assert_eq!(world.player.health, 3);
    assert!(world.player.invincible);
    assert!(!world.enemies.is_live(first));

    combat::enemy_hits_player(&mut world, &tuning, second, &mut events);
    assert_eq!(world.player.health, 3, "invincible player takes no damage");
    assert!(world.enemies.is_live(second), "enemy survives an ignored contact");

    world.clock.elapsed_secs = 1.49;
    combat::run_deferred(&mut world, &mut events);
    assert!(world.player.invincible);

    world.clock.elapsed_secs = 1.5;
    combat::run_deferred(&mut world, &mut events);
    assert!(!world.player.invincible);
    assert!(world.player.blink.is_none());
    assert_eq!(events.last(), Some(&GameEvent::InvincibilityEnded));
}

#[test]
fn test_last_health_ends_the_run() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    world.player.health = 1;
    let enemy = world.enemies.acquire(seeker_at(world.player.position)).unwrap();
    let mut events = Vec::new();

    combat::enemy_hits_player(&mut world, &tuning, enemy, &mut events);
    assert_eq!(world.player.health, 0);
    assert_eq!(world.phase, GamePhase::GameOver);
    assert!(matches!(events[..], [GameEvent::GameOver { level: 1, .. }]));
    assert!(world.scheduler.is_empty(), "no blink on the killing hit");
}

#[test]
fn test_orb_expiry_ignores_reused_slot() {
    let mut world = empty_world(Archetype::Circle);
    let mut events = Vec::new();
    let stale = world
        .orbs
        .acquire(Orb {
            position: DVec2::ZERO,
            expires_at: 5.0,
        })
        .unwrap();
    world
        .scheduler
        .schedule(5.0, ScheduledAction::ExpireOrb(stale));
    world.orbs.release(stale);
    let fresh = world
        .orbs
        .acquire(Orb {
            position: DVec2::ONE,
            expires_at: 9.0,
        })
        .unwrap();

    world.clock.elapsed_secs = 5.0;
    combat::run_deferred(&mut world, &mut events);
    assert!(world.orbs.is_live(fresh));
    assert!(events.is_empty());
}

#[test]
fn test_uncollected_orb_expires() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    let at = DVec2::new(50.0, 50.0);
    let enemy = world.enemies.acquire(seeker_at(at)).unwrap();
    let projectile = world
        .projectiles
        .acquire(Projectile {
            position: at,
            velocity: DVec2::ZERO,
        })
        .unwrap();
    let mut events = Vec::new();
    combat::resolve(
        &mut world,
        &tuning,
        Contact::ProjectileEnemy { projectile, enemy },
        &mut events,
    );

    world.clock.elapsed_secs = 5.0;
    combat::run_deferred(&mut world, &mut events);
    assert_eq!(world.orbs.active_count(), 0);
    assert_eq!(events.last(), Some(&GameEvent::OrbExpired));
}

// ---- Cleanup ----

#[test]
fn test_cleanup_is_idempotent() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    world.projectiles.acquire(Projectile {
        position: DVec2::new(1200.0, 300.0),
        velocity: DVec2::ZERO,
    });
    let kept = world
        .projectiles
        .acquire(Projectile {
            position: DVec2::new(900.0, 300.0),
            velocity: DVec2::ZERO,
        })
        .unwrap();
    let near = world.enemies.acquire(seeker_at(DVec2::new(-300.0, 0.0))).unwrap();
    world.enemies.acquire(seeker_at(DVec2::new(-500.0, 0.0)));

    cleanup::run(&mut world, &tuning);
    assert_eq!(world.projectiles.handles(), vec![kept]);
    assert_eq!(world.enemies.handles(), vec![near]);

    cleanup::run(&mut world, &tuning);
    assert_eq!(world.projectiles.handles(), vec![kept]);
    assert_eq!(world.enemies.handles(), vec![near]);
}

// ---- Progression ----

#[test]
fn test_upgrade_effects() {
    let tuning = Tuning::default();
    let mut player = world_setup::new_player(&tuning, Archetype::Circle);

    progression::apply_upgrade(&mut player, UpgradeKind::Speed, &tuning);
    assert!(approx(player.speed, 460.0));

    progression::apply_upgrade(&mut player, UpgradeKind::Cooldown, &tuning);
    assert!(approx(player.fire_cooldown, 3.2));

    player.fire_cooldown = 0.24;
    progression::apply_upgrade(&mut player, UpgradeKind::Cooldown, &tuning);
    assert!(approx(player.fire_cooldown, 0.2), "clamped to the floor");

    progression::apply_upgrade(&mut player, UpgradeKind::Projectile, &tuning);
    assert_eq!(player.projectile_count, 7);
}

#[test]
fn test_max_health_upgrade() {
    let tuning = Tuning::default();
    let mut player = world_setup::new_player(&tuning, Archetype::Triangle);

    progression::apply_upgrade(&mut player, UpgradeKind::MaxHealth, &tuning);
    assert_eq!((player.health, player.max_health), (5, 5));

    player.health = 2;
    progression::apply_upgrade(&mut player, UpgradeKind::MaxHealth, &tuning);
    assert_eq!((player.health, player.max_health), (3, 6));
}

#[test]
fn test_menu_lifecycle() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    world.player.velocity = DVec2::new(100.0, 0.0);
    world.input.right = true;
    let mut events = Vec::new();

    assert!(!progression::select_upgrade(&mut world, &tuning, 0, &mut events));

    assert!(progression::open_upgrade_menu(&mut world, &mut events));
    assert_eq!(world.phase, GamePhase::UpgradeMenuOpen);
    assert!(world.spawner.timer.is_paused());
    assert_eq!(world.player.velocity, DVec2::ZERO);
    assert!(world.input.is_idle());
    assert!(!progression::open_upgrade_menu(&mut world, &mut events));
    assert_eq!(world.progress.menu.as_deref(), Some(&UpgradeKind::CATALOG[..]));

    assert!(!progression::select_upgrade(&mut world, &tuning, 4, &mut events));
    assert_eq!(world.phase, GamePhase::UpgradeMenuOpen);

    assert!(progression::select_upgrade(&mut world, &tuning, 3, &mut events));
    assert_eq!(world.phase, GamePhase::Playing);
    assert!(!world.spawner.timer.is_paused());
    assert!(world.progress.menu.is_none());
    assert_eq!(world.player.projectile_count, 7);
    assert_eq!(
        events,
        vec![
            GameEvent::UpgradeMenuOpened,
            GameEvent::UpgradeApplied {
                upgrade: UpgradeKind::Projectile
            },
        ]
    );
}

#[test]
fn test_menu_does_not_open_after_game_over() {
    let mut world = empty_world(Archetype::Circle);
    world.phase = GamePhase::GameOver;
    assert!(!progression::open_upgrade_menu(&mut world, &mut Vec::new()));
    assert_eq!(world.phase, GamePhase::GameOver);
}

#[test]
fn test_level_up_heals_one() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Circle);
    world.player.health = 2;
    world.progress.exp = 10;
    progression::level_up(&mut world, &tuning, &mut Vec::new());
    assert_eq!(world.player.health, 3);
    assert_eq!(world.progress.level, 2);
    assert_eq!(world.progress.exp, 0);
    assert_eq!(world.phase, GamePhase::UpgradeMenuOpen);
}

// ---- Snapshot ----

#[test]
fn test_blink_alpha_wave() {
    let blink = Tuning::default().blink;
    assert!(approx(snapshot::blink_alpha(0.0, &blink), 1.0));
    assert!(approx(snapshot::blink_alpha(0.075, &blink), 0.75));
    assert!(approx(snapshot::blink_alpha(0.15, &blink), 0.5));
    assert!(approx(snapshot::blink_alpha(0.3, &blink), 1.0));
}

#[test]
fn test_snapshot_views() {
    let tuning = Tuning::default();
    let mut world = empty_world(Archetype::Triangle);
    world.enemies.acquire(seeker_at(DVec2::new(10.0, 10.0)));
    world.orbs.acquire(Orb {
        position: DVec2::new(20.0, 20.0),
        expires_at: 3.0,
    });
    world.clock.elapsed_secs = 1.0;
    world.survival_secs = 65.0;

    let snap = snapshot::build_snapshot(&world, &tuning, Vec::new());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.enemies.len(), 1);
    assert_eq!(snap.enemies[0].behavior, Behavior::Seeking);
    assert!(approx(snap.orbs[0].ttl_remaining, 2.0));
    assert_eq!(snap.hud.clock, "01:05");
    assert_eq!(snap.hud.exp_to_level, 10);
    assert!(snap.hud.weapon_ready);
    assert!(snap.upgrade_menu.is_none());
    assert!(snap.end_screen.is_none());
    let player = snap.player.unwrap();
    assert_eq!(player.archetype, Archetype::Triangle);
    assert!(approx(player.alpha, 1.0));

    world.phase = GamePhase::Won;
    let snap = snapshot::build_snapshot(&world, &tuning, Vec::new());
    let end = snap.end_screen.unwrap();
    assert_eq!(end.title, snapshot::WIN_TITLE);
    assert_eq!(end.level, 1);
}

#[test]
fn test_north_is_negative_half_pi() {
    let world = empty_world(Archetype::Circle);
    let above = world.player.position + DVec2::new(0.0, -10.0);
    assert!(approx(
        survivor_core::types::bearing(world.player.position, above),
        -FRAC_PI_2
    ));
}
