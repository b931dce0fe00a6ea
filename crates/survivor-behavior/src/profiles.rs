//! Spawn-time parameter rolls for each behavior.

use glam::DVec2;
use rand::Rng;

use survivor_core::components::MotionParams;
use survivor_core::config::{EnemyTuning, Range};
use survivor_core::enums::{Behavior, SineAxis, SpawnEdge};
use survivor_core::types::{bearing, Playfield};

/// What the spawner knows at the moment an enemy is activated.
pub struct SpawnContext {
    pub origin: DVec2,
    pub player_position: DVec2,
    pub player_velocity: DVec2,
    pub playfield: Playfield,
}

/// Pick an edge uniformly and a point just outside it.
pub fn roll_spawn_point<R: Rng + ?Sized>(
    rng: &mut R,
    playfield: &Playfield,
    margin: f64,
) -> (SpawnEdge, DVec2) {
    let edge = SpawnEdge::ALL[rng.gen_range(0..SpawnEdge::ALL.len())];
    let along_x = rng.gen_range(-margin..=playfield.width + margin);
    let along_y = rng.gen_range(-margin..=playfield.height + margin);
    let point = match edge {
        SpawnEdge::Top => DVec2::new(along_x, -margin),
        SpawnEdge::Right => DVec2::new(playfield.width + margin, along_y),
        SpawnEdge::Bottom => DVec2::new(along_x, playfield.height + margin),
        SpawnEdge::Left => DVec2::new(-margin, along_y),
    };
    (edge, point)
}

/// Roll the per-enemy parameters for `behavior`.
pub fn roll_params<R: Rng + ?Sized>(
    behavior: Behavior,
    ctx: &SpawnContext,
    tuning: &EnemyTuning,
    rng: &mut R,
) -> MotionParams {
    match behavior {
        Behavior::Seeking => MotionParams::Seeking {
            speed: roll_whole(rng, tuning.seeking_speed),
            phase: rng.gen_range(0.0..std::f64::consts::TAU),
        },
        Behavior::PredictiveStraight => {
            let predicted = ctx.player_position + ctx.player_velocity * tuning.predictive_lead_secs;
            MotionParams::PredictiveStraight {
                speed: roll_whole(rng, tuning.predictive_speed),
                heading: bearing(ctx.origin, predicted),
                origin: ctx.origin,
            }
        }
        Behavior::BouncingDiagonal => {
            let dx = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let dy = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            MotionParams::BouncingDiagonal {
                speed: roll_whole(rng, tuning.bouncing_speed),
                dir: DVec2::new(dx, dy),
            }
        }
        Behavior::Sinusoidal => {
            let axis = if rng.gen_bool(0.5) {
                SineAxis::Horizontal
            } else {
                SineAxis::Vertical
            };
            let amplitude = roll_whole(rng, tuning.sine_amplitude);
            let frequency = roll(rng, tuning.sine_frequency);
            let speed = roll_whole(rng, tuning.sine_speed);
            MotionParams::Sinusoidal {
                axis,
                speed,
                amplitude,
                frequency,
                travel_sign: inward_sign(axis, ctx.origin, &ctx.playfield),
                base: ctx.origin,
            }
        }
    }
}

/// Travel direction along `axis` that heads toward the playfield center.
fn inward_sign(axis: SineAxis, origin: DVec2, playfield: &Playfield) -> f64 {
    let center = playfield.center();
    let beyond = match axis {
        SineAxis::Horizontal => origin.x > center.x,
        SineAxis::Vertical => origin.y > center.y,
    };
    if beyond {
        -1.0
    } else {
        1.0
    }
}

/// Whole-number draw from `range`, both ends inclusive.
fn roll_whole<R: Rng + ?Sized>(rng: &mut R, range: Range) -> f64 {
    let lo = range.min.ceil() as i64;
    let hi = range.max.floor() as i64;
    if hi > lo {
        rng.gen_range(lo..=hi) as f64
    } else {
        lo as f64
    }
}

fn roll<R: Rng + ?Sized>(rng: &mut R, range: Range) -> f64 {
    if range.max > range.min {
        rng.gen_range(range.min..=range.max)
    } else {
        range.min
    }
}
