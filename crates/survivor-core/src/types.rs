//! Fundamental geometric and simulation types.
//!
//! Coordinates are screen space: x grows to the right, y grows downward,
//! and angles are measured from +x toward +y (so "north" is -PI/2).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rectangular playfield anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `point` lies inside the playfield grown by `padding` on every side.
    pub fn contains_padded(&self, point: DVec2, padding: f64) -> bool {
        point.x >= -padding
            && point.x <= self.width + padding
            && point.y >= -padding
            && point.y <= self.height + padding
    }

    /// Clamp a body of the given radius so it stays fully inside the playfield.
    pub fn clamp_body(&self, point: DVec2, radius: f64) -> DVec2 {
        DVec2::new(
            point.x.clamp(radius, (self.width - radius).max(radius)),
            point.y.clamp(radius, (self.height - radius).max(radius)),
        )
    }
}

/// Simulation clock.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks the clock has advanced.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Angle from `from` to `to` in radians.
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Velocity of magnitude `speed` along `angle`.
pub fn velocity_from_angle(angle: f64, speed: f64) -> DVec2 {
    DVec2::from_angle(angle) * speed
}

/// Format seconds as a zero-padded `MM:SS` clock.
pub fn format_clock(secs: f64) -> String {
    let whole = secs.max(0.0).floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}
