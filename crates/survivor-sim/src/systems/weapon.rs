//! Weapon system: auto-targets the nearest enemy and fires a volley.

use std::f64::consts::PI;

use glam::DVec2;

use survivor_core::components::Projectile;
use survivor_core::config::Tuning;
use survivor_core::enums::FirePattern;
use survivor_core::events::GameEvent;
use survivor_core::types::{bearing, velocity_from_angle};

use crate::pool::Handle;
use crate::world::World;

/// Nearest active enemy to `from`. Ties go to the lowest slot.
pub fn nearest_enemy(world: &World, from: DVec2) -> Option<(Handle, DVec2)> {
    let mut best: Option<(Handle, DVec2, f64)> = None;
    for (handle, enemy) in world.enemies.iter() {
        let d2 = enemy.position.distance_squared(from);
        if best.map_or(true, |(_, _, best_d2)| d2 < best_d2) {
            best = Some((handle, enemy.position, d2));
        }
    }
    best.map(|(handle, position, _)| (handle, position))
}

/// Launch angles for one volley centered on `aim`.
pub fn volley_angles(pattern: FirePattern, aim: f64, count: u32, spread_deg: f64) -> Vec<f64> {
    match pattern {
        FirePattern::Single => vec![aim],
        FirePattern::DualOpposed => vec![aim, aim + PI],
        FirePattern::Fan => {
            let spread = spread_deg.to_radians();
            let gaps = f64::from(count.saturating_sub(1).max(1));
            let center = f64::from(count.saturating_sub(1)) / 2.0;
            (0..count)
                .map(|i| aim + spread * (f64::from(i) - center) / gaps)
                .collect()
        }
    }
}

/// Fire if the cooldown has elapsed and a target exists.
///
/// The cooldown restarts only when at least one projectile launched; a
/// volley lost to pool exhaustion retries next tick.
pub fn run(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let now = world.now();
    if !world.player.weapon_ready(now) {
        return;
    }
    let origin = world.player.position;
    let Some((_target, target_position)) = nearest_enemy(world, origin) else {
        return;
    };

    let player = &world.player;
    let pattern = tuning.fire_pattern(player.archetype, player.projectile_count);
    let angles = volley_angles(
        pattern,
        bearing(origin, target_position),
        player.projectile_count,
        tuning.weapon.fan_spread_deg,
    );

    let mut launched = 0u32;
    for angle in angles {
        let projectile = Projectile {
            position: origin,
            velocity: velocity_from_angle(angle, tuning.weapon.projectile_speed),
        };
        if world.projectiles.acquire(projectile).is_some() {
            launched += 1;
        } else {
            tracing::trace!("projectile pool exhausted");
        }
    }

    if launched > 0 {
        world.player.last_fired = Some(now);
        events.push(GameEvent::ProjectilesFired { count: launched });
    }
}
