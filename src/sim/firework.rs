//! Rocket entities
//!
//! A firework climbs from its launch point toward a fixed target. Arrival is
//! tested against the projected next position, so the burst fires one tick
//! before the rocket visually reaches the target; from then on only its
//! sparks animate, until the last one is spent.

use glam::DVec2;
use rand::Rng;

use super::particle::Particle;
use crate::consts::*;
use crate::{distance, random_in_range};

/// A launched rocket: in flight, then bursting
#[derive(Debug, Clone)]
pub struct Firework {
    /// Burst sparks, anchored at the target until arrival
    pub particles: Vec<Particle>,
    pub starting_point: DVec2,
    pub ending_point: DVec2,
    pub current_point: DVec2,
    pub distance_to_target: f64,
    /// Non-decreasing while in flight, measured one step ahead of the
    /// committed position
    pub distance_traveled: f64,
    /// Trail history, newest first
    pub trail: Vec<DVec2>,
    /// Launch heading in radians, fixed at creation
    pub angle: f64,
    pub speed: f64,
    pub acceleration: f64,
    /// HSL lightness (display only)
    pub brightness: f64,
}

impl Firework {
    pub fn new<R: Rng>(start: DVec2, end: DVec2, hue: f64, rng: &mut R) -> Self {
        let particles = (0..PARTICLES_PER_BURST)
            .map(|_| Particle::new(end, hue, rng))
            .collect();

        Self {
            particles,
            starting_point: start,
            ending_point: end,
            current_point: start,
            distance_to_target: distance(start, end),
            distance_traveled: 0.0,
            trail: vec![start; FIREWORK_TRAIL_LENGTH],
            angle: (end.y - start.y).atan2(end.x - start.x),
            speed: LAUNCH_SPEED,
            acceleration: LAUNCH_ACCELERATION,
            brightness: random_in_range(rng, FIREWORK_BRIGHTNESS_MIN, FIREWORK_BRIGHTNESS_MAX),
        }
    }

    /// Whether the rocket has reached its target and switched to bursting.
    /// The transition is permanent; there is no reverse edge.
    #[inline]
    pub fn has_burst(&self) -> bool {
        self.distance_traveled >= self.distance_to_target
    }

    /// Advance one tick. Returns false once the firework has burned out and
    /// should be dropped from the show.
    pub fn advance(&mut self) -> bool {
        if self.has_burst() {
            return self.advance_particles();
        }

        self.trail.pop();
        self.trail.insert(0, self.current_point);
        self.speed *= self.acceleration;

        let velocity = DVec2::new(self.angle.cos(), self.angle.sin()) * self.speed;

        // Arrival is tested one step ahead of the committed position
        self.distance_traveled = distance(self.starting_point, self.current_point + velocity);

        if self.has_burst() {
            // Burst this tick; the pending move is never committed
            return self.advance_particles();
        }

        self.current_point += velocity;
        true
    }

    /// Age every spark and drop the spent ones. Returns false once none are
    /// left alive.
    fn advance_particles(&mut self) -> bool {
        for particle in &mut self.particles {
            particle.advance();
        }
        self.particles.retain(|p| !p.is_spent());
        !self.particles.is_empty()
    }

    /// Oldest recorded trail point, the far end of the drawn streak
    #[inline]
    pub fn trail_tail(&self) -> DVec2 {
        *self.trail.last().unwrap_or(&self.current_point)
    }
}
