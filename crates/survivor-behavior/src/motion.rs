//! Per-frame motion evaluation.
//!
//! `evaluate` is called once per active enemy per frame. Given the same
//! context it returns the same update: nothing accumulates outside the
//! enemy's stored parameters.

use glam::DVec2;

use survivor_core::components::MotionParams;
use survivor_core::enums::SineAxis;
use survivor_core::types::{bearing, velocity_from_angle, Playfield};

/// Input to the behavior model for a single enemy.
pub struct MotionContext {
    pub params: MotionParams,
    pub position: DVec2,
    /// Seconds since the enemy was activated.
    pub elapsed_secs: f64,
    pub player_position: DVec2,
    pub playfield: Playfield,
    /// Heading wobble amplitude for seeking enemies (radians).
    pub wobble_amplitude: f64,
    /// Heading wobble angular frequency for seeking enemies (rad/s).
    pub wobble_frequency: f64,
}

/// How the enemy moves this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Integrate this velocity during the physics step.
    Velocity(DVec2),
    /// Place the enemy here directly; velocity is not integrated.
    Position(DVec2),
}

/// Output of the behavior model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionUpdate {
    pub motion: Motion,
    /// Parameters after this frame (only bouncing enemies change theirs).
    pub params: MotionParams,
}

/// Evaluate the behavior model for one enemy.
pub fn evaluate(ctx: &MotionContext) -> MotionUpdate {
    let t = ctx.elapsed_secs.max(0.0);
    match ctx.params {
        MotionParams::Seeking { speed, phase } => {
            let base = bearing(ctx.position, ctx.player_position);
            let wobble = (t * ctx.wobble_frequency + phase).sin() * ctx.wobble_amplitude;
            MotionUpdate {
                motion: Motion::Velocity(velocity_from_angle(base + wobble, speed)),
                params: ctx.params,
            }
        }
        MotionParams::PredictiveStraight {
            speed,
            heading,
            origin,
        } => MotionUpdate {
            // Recomputed from the origin so integration error never builds up.
            motion: Motion::Position(origin + velocity_from_angle(heading, speed * t)),
            params: ctx.params,
        },
        MotionParams::BouncingDiagonal { speed, dir } => {
            let dir = bounce(ctx.position, dir, &ctx.playfield);
            MotionUpdate {
                motion: Motion::Velocity(dir * speed),
                params: MotionParams::BouncingDiagonal { speed, dir },
            }
        }
        MotionParams::Sinusoidal {
            axis,
            speed,
            amplitude,
            frequency,
            travel_sign,
            base,
        } => {
            let travel = travel_sign * speed * t;
            let sway = amplitude * (frequency * t).sin();
            let position = match axis {
                SineAxis::Horizontal => DVec2::new(base.x + travel, base.y + sway),
                SineAxis::Vertical => DVec2::new(base.x + sway, base.y + travel),
            };
            MotionUpdate {
                motion: Motion::Position(position),
                params: ctx.params,
            }
        }
    }
}

/// Point each axis sign back inward once the enemy is past that edge.
///
/// Only outward-moving components flip, so an enemy that starts outside the
/// field (every spawn does) heads in instead of jittering on the edge.
pub fn bounce(position: DVec2, dir: DVec2, playfield: &Playfield) -> DVec2 {
    let mut dir = dir;
    if (position.x < 0.0 && dir.x < 0.0) || (position.x > playfield.width && dir.x > 0.0) {
        dir.x = -dir.x;
    }
    if (position.y < 0.0 && dir.y < 0.0) || (position.y > playfield.height && dir.y > 0.0) {
        dir.y = -dir.y;
    }
    dir
}

/// Velocity shown for an enemy right after activation, before the first
/// evaluation. Position-driven behaviors report their nominal travel.
pub fn initial_velocity(params: &MotionParams) -> DVec2 {
    match *params {
        MotionParams::Seeking { .. } => DVec2::ZERO,
        MotionParams::PredictiveStraight { speed, heading, .. } => {
            velocity_from_angle(heading, speed)
        }
        MotionParams::BouncingDiagonal { speed, dir } => dir * speed,
        MotionParams::Sinusoidal { .. } => DVec2::ZERO,
    }
}
