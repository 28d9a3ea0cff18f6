//! Burst sparks
//!
//! A particle is a single spark emitted when a rocket bursts. It drifts on a
//! fixed heading while friction bleeds off its speed and gravity pulls it
//! down, fading until it is spent.

use glam::DVec2;
use rand::Rng;

use crate::consts::*;
use crate::random_in_range;

/// A single decaying spark, owned exclusively by its parent firework
#[derive(Debug, Clone)]
pub struct Particle {
    /// Live position
    pub current_point: DVec2,
    /// Trail history, newest first
    pub trail: Vec<DVec2>,
    /// Heading in radians, fixed at creation
    pub angle: f64,
    pub speed: f64,
    /// Per-tick speed multiplier, constant per spark
    pub friction: f64,
    pub gravity: f64,
    /// Color hue offset around the burst hue (display only)
    pub hue: f64,
    /// HSL lightness (display only)
    pub brightness: f64,
    /// Opacity in [0, 1], reduced by `decay` each tick
    pub alpha: f64,
    pub decay: f64,
}

impl Particle {
    /// Spawn a spark at `origin`, scattered uniformly around the circle
    pub fn new<R: Rng>(origin: DVec2, hue: f64, rng: &mut R) -> Self {
        Self {
            current_point: origin,
            trail: vec![origin; PARTICLE_TRAIL_LENGTH],
            angle: random_in_range(rng, 0.0, std::f64::consts::TAU),
            speed: random_in_range(rng, PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX),
            friction: PARTICLE_FRICTION,
            gravity: PARTICLE_GRAVITY,
            hue: random_in_range(rng, hue - PARTICLE_HUE_SPREAD, hue + PARTICLE_HUE_SPREAD),
            brightness: random_in_range(rng, PARTICLE_BRIGHTNESS_MIN, PARTICLE_BRIGHTNESS_MAX),
            alpha: 1.0,
            decay: random_in_range(rng, PARTICLE_DECAY_MIN, PARTICLE_DECAY_MAX),
        }
    }

    /// Advance one tick: slide the trail, apply friction and gravity, fade
    pub fn advance(&mut self) {
        self.trail.pop();
        self.trail.insert(0, self.current_point);
        self.speed *= self.friction;
        self.current_point.x += self.angle.cos() * self.speed;
        self.current_point.y += self.angle.sin() * self.speed + self.gravity;
        self.alpha -= self.decay;
    }

    /// Spent once another decay step would push alpha non-positive, one tick
    /// before alpha itself reaches zero
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.alpha <= self.decay
    }

    /// Oldest recorded trail point, the far end of the drawn streak
    #[inline]
    pub fn trail_tail(&self) -> DVec2 {
        *self.trail.last().unwrap_or(&self.current_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_particle() -> Particle {
        let mut rng = Pcg32::seed_from_u64(42);
        Particle::new(DVec2::new(120.0, 80.0), 120.0, &mut rng)
    }

    #[test]
    fn new_spark_fields_in_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let p = Particle::new(DVec2::ZERO, 200.0, &mut rng);
            assert!((0.0..std::f64::consts::TAU).contains(&p.angle));
            assert!((PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX).contains(&p.speed));
            assert!((150.0..250.0).contains(&p.hue));
            assert!((PARTICLE_BRIGHTNESS_MIN..PARTICLE_BRIGHTNESS_MAX).contains(&p.brightness));
            assert!((PARTICLE_DECAY_MIN..PARTICLE_DECAY_MAX).contains(&p.decay));
            assert_eq!(p.alpha, 1.0);
            assert_eq!(p.trail.len(), PARTICLE_TRAIL_LENGTH);
            assert!(p.trail.iter().all(|&c| c == DVec2::ZERO));
        }
    }

    #[test]
    fn advance_applies_friction_before_the_move() {
        // One step from the origin on a flat heading: friction bleeds the
        // speed to 9.5 before the move, gravity adds 1 vertically
        let mut p = test_particle();
        p.current_point = DVec2::ZERO;
        p.trail = vec![DVec2::ZERO; PARTICLE_TRAIL_LENGTH];
        p.angle = 0.0;
        p.speed = 10.0;
        p.friction = 0.95;
        p.gravity = 1.0;

        p.advance();

        assert!((p.speed - 9.5).abs() < 1e-12);
        assert!((p.current_point.x - 9.5).abs() < 1e-12);
        assert!((p.current_point.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn trail_slides_newest_first() {
        let mut p = test_particle();
        let start = p.current_point;

        p.advance();
        assert_eq!(p.trail.len(), PARTICLE_TRAIL_LENGTH);
        assert_eq!(p.trail[0], start);

        let second = p.current_point;
        p.advance();
        assert_eq!(p.trail[0], second);
        assert_eq!(p.trail[1], start);
    }

    #[test]
    fn alpha_strictly_decreases_until_spent() {
        let mut p = test_particle();
        let mut prev = p.alpha;
        while !p.is_spent() {
            p.advance();
            assert!(p.alpha < prev);
            prev = p.alpha;
        }
    }

    #[test]
    fn spent_one_tick_before_alpha_reaches_zero() {
        // A decay of 1/64 is exact in binary, so the boundary lands exactly:
        // alpha meets decay on advance 63, one tick short of reaching zero
        let mut p = test_particle();
        p.alpha = 1.0;
        p.decay = 0.015625;

        for tick in 1..=62 {
            p.advance();
            assert!(!p.is_spent(), "spent early at tick {tick}");
        }

        p.advance();
        assert!(p.is_spent());
        assert_eq!(p.alpha, p.decay);
    }
}
