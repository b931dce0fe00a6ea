//! Movement: input sampling and the physics integration step.

use survivor_core::config::Tuning;

use crate::world::World;

/// Turn the held directions into a player velocity.
pub fn apply_input(world: &mut World) {
    world.player.velocity = world.input.direction() * world.player.speed;
}

/// Integrate velocities over `dt`.
///
/// Position-driven enemies carry a zero velocity and stay where the
/// behavior system placed them. The player is kept inside the field.
pub fn integrate(world: &mut World, tuning: &Tuning, dt: f64) {
    let player = &mut world.player;
    player.position = tuning
        .playfield
        .clamp_body(player.position + player.velocity * dt, tuning.player.radius);

    for (_handle, projectile) in world.projectiles.iter_mut() {
        projectile.position += projectile.velocity * dt;
    }
    for (_handle, enemy) in world.enemies.iter_mut() {
        enemy.position += enemy.velocity * dt;
    }
}
