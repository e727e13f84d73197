//! Decorative particles drifting through the tube.
//!
//! Positions are a pure function of elapsed time and do not depend on the
//! regulation value. The wobble amplitude is kept inside the narrowest lumen
//! so particles never cross a wall.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use std::f64::consts::TAU;

use crate::consts::{TUBE_CENTER_Y, TUBE_END_X, TUBE_START_X};
use crate::geometry::Point;

/// Peak vertical deviation from the centreline.
pub const WOBBLE_AMPLITUDE: f64 = 3.0;

/// Static parameters of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSeed {
    /// Starting offset along the tube as a fraction of its length.
    pub phase: f64,
    /// Horizontal speed in logical units per second.
    pub speed: f64,
    /// Wobble phase offset, in turns.
    pub wobble: f64,
    /// Drawn radius.
    pub radius: f64,
}

/// The particle set rendered by the illustration.
pub const SEEDS: [ParticleSeed; 6] = [
    ParticleSeed { phase: 0.00, speed: 42.0, wobble: 0.00, radius: 2.5 },
    ParticleSeed { phase: 0.17, speed: 55.0, wobble: 0.35, radius: 2.0 },
    ParticleSeed { phase: 0.33, speed: 38.0, wobble: 0.60, radius: 2.8 },
    ParticleSeed { phase: 0.50, speed: 61.0, wobble: 0.15, radius: 1.8 },
    ParticleSeed { phase: 0.68, speed: 47.0, wobble: 0.80, radius: 2.2 },
    ParticleSeed { phase: 0.84, speed: 52.0, wobble: 0.45, radius: 2.6 },
];

/// A particle placed at a moment in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub center: Point,
    pub radius: f64,
}

/// Position of `seed` after `elapsed_ms`.
#[must_use]
pub fn particle_at(seed: &ParticleSeed, elapsed_ms: f64) -> Particle {
    let length = TUBE_END_X - TUBE_START_X;
    let elapsed_s = if elapsed_ms.is_finite() { elapsed_ms / 1000.0 } else { 0.0 };
    let travelled = ((elapsed_s * seed.speed) + (seed.phase * length)).rem_euclid(length);
    let progress = travelled / length;
    let y = TUBE_CENTER_Y + (WOBBLE_AMPLITUDE * (TAU * ((progress * 2.0) + seed.wobble)).sin());
    Particle { center: Point::new(TUBE_START_X + travelled, y), radius: seed.radius }
}

/// All particles after `elapsed_ms`.
#[must_use]
pub fn particles_at(elapsed_ms: f64) -> Vec<Particle> {
    SEEDS.iter().map(|seed| particle_at(seed, elapsed_ms)).collect()
}
