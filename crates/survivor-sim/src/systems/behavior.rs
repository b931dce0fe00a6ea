//! Enemy behavior system: runs the motion model for every active enemy.

use glam::DVec2;

use survivor_core::config::Tuning;

use survivor_behavior::motion::{self, Motion, MotionContext};

use crate::world::World;

/// Recompute velocity or position for all active enemies.
pub fn run(world: &mut World, tuning: &Tuning) {
    let now = world.now();
    let player_position = world.player.position;
    let wobble_amplitude = tuning.enemies.seeking_wobble_deg.to_radians();
    for (_handle, enemy) in world.enemies.iter_mut() {
        let ctx = MotionContext {
            params: enemy.params,
            position: enemy.position,
            elapsed_secs: now - enemy.spawned_at,
            player_position,
            playfield: tuning.playfield,
            wobble_amplitude,
            wobble_frequency: tuning.enemies.seeking_wobble_frequency,
        };
        let update = motion::evaluate(&ctx);
        enemy.params = update.params;
        match update.motion {
            Motion::Velocity(velocity) => enemy.velocity = velocity,
            Motion::Position(position) => {
                enemy.velocity = DVec2::ZERO;
                enemy.position = position;
            }
        }
    }
}
