//! Cleanup system: recycles entities that have left the playfield.

use survivor_core::config::Tuning;

use crate::pool::{Handle, Pool};
use crate::world::World;

/// Release projectiles and orbs past the cleanup padding, and enemies past
/// the escape margin. Running it twice in a row changes nothing the
/// second time.
pub fn run(world: &mut World, tuning: &Tuning) {
    let field = tuning.playfield;
    release_where(&mut world.projectiles, |p| {
        !field.contains_padded(p.position, tuning.cleanup_padding)
    });
    release_where(&mut world.orbs, |o| {
        !field.contains_padded(o.position, tuning.cleanup_padding)
    });
    release_where(&mut world.enemies, |e| {
        !field.contains_padded(e.position, tuning.enemies.escape_margin)
    });
}

fn release_where<T>(pool: &mut Pool<T>, mut out_of_bounds: impl FnMut(&T) -> bool) {
    let stale: Vec<Handle> = pool
        .iter()
        .filter(|(_, value)| out_of_bounds(value))
        .map(|(handle, _)| handle)
        .collect();
    for handle in stale {
        pool.release(handle);
    }
}
