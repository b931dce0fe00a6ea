//! Circle-overlap collision detection.
//!
//! Reports contacts only; the combat resolver decides what they mean.

use glam::DVec2;

use survivor_core::config::Tuning;

use crate::pool::Handle;
use crate::world::World;

/// A pair of overlapping bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    ProjectileEnemy { projectile: Handle, enemy: Handle },
    PlayerEnemy { enemy: Handle },
    PlayerOrb { orb: Handle },
}

fn overlaps(a: DVec2, ra: f64, b: DVec2, rb: f64) -> bool {
    let r = ra + rb;
    a.distance_squared(b) <= r * r
}

/// All contacts this tick, grouped by kind and in slot order within each group.
pub fn detect(world: &World, tuning: &Tuning) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let enemy_radius = tuning.enemies.radius;

    for (projectile, p) in world.projectiles.iter() {
        for (enemy, e) in world.enemies.iter() {
            if overlaps(p.position, tuning.weapon.projectile_radius, e.position, enemy_radius) {
                contacts.push(Contact::ProjectileEnemy { projectile, enemy });
            }
        }
    }

    let player = world.player.position;
    let player_radius = tuning.player.radius;
    for (enemy, e) in world.enemies.iter() {
        if overlaps(player, player_radius, e.position, enemy_radius) {
            contacts.push(Contact::PlayerEnemy { enemy });
        }
    }
    for (orb, o) in world.orbs.iter() {
        if overlaps(player, player_radius, o.position, tuning.progression.orb_radius) {
            contacts.push(Contact::PlayerOrb { orb });
        }
    }
    contacts
}
