//! Skyburst - an animated fireworks display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rockets, burst particles, per-tick update)
//! - `renderer`: Canvas-2D rendering (wasm32 only)
//!
//! Rockets climb from the bottom-center of the surface toward randomized
//! targets, then burst into decaying particle sprays. The simulation is pure
//! and seeded; platform plumbing lives in `main.rs`.

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

use glam::DVec2;
use rand::Rng;

/// Display tuning constants
pub mod consts {
    /// Rockets launched when the show starts
    pub const INITIAL_FIREWORK_COUNT: usize = 10;
    /// Hue the show opens on, before the per-tick reroll takes over
    pub const INITIAL_HUE: f64 = 120.0;

    /// Sparks spawned per burst
    pub const PARTICLES_PER_BURST: usize = 100;
    /// Trail history length for a rocket in flight
    pub const FIREWORK_TRAIL_LENGTH: usize = 3;
    /// Trail history length for a burst spark
    pub const PARTICLE_TRAIL_LENGTH: usize = 5;

    /// Launch speed in pixels per tick
    pub const LAUNCH_SPEED: f64 = 2.0;
    /// Per-tick speed multiplier while in flight (> 1, exponential ramp)
    pub const LAUNCH_ACCELERATION: f64 = 1.05;

    /// Per-tick spark speed multiplier, in (0, 1)
    pub const PARTICLE_FRICTION: f64 = 0.95;
    /// Downward pull added to spark vertical velocity each tick
    pub const PARTICLE_GRAVITY: f64 = 1.0;
    /// Spark launch speed range
    pub const PARTICLE_SPEED_MIN: f64 = 1.0;
    pub const PARTICLE_SPEED_MAX: f64 = 10.0;
    /// Spread of spark hues around the burst hue
    pub const PARTICLE_HUE_SPREAD: f64 = 50.0;
    /// Per-tick alpha reduction range
    pub const PARTICLE_DECAY_MIN: f64 = 0.015;
    pub const PARTICLE_DECAY_MAX: f64 = 0.03;

    /// Rocket brightness (HSL lightness) range
    pub const FIREWORK_BRIGHTNESS_MIN: f64 = 50.0;
    pub const FIREWORK_BRIGHTNESS_MAX: f64 = 70.0;
    /// Spark brightness range
    pub const PARTICLE_BRIGHTNESS_MIN: f64 = 50.0;
    pub const PARTICLE_BRIGHTNESS_MAX: f64 = 80.0;

    /// Stroke width for trail segments
    pub const TRAIL_STROKE_WIDTH: f64 = 2.0;
    /// Opacity of the per-frame fade clear (soft streaks instead of a hard wipe)
    pub const FADE_CLEAR_ALPHA: f64 = 0.5;
}

/// Uniform sample over `[min, max)`. Caller guarantees `min <= max`.
#[inline]
pub fn random_in_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.random::<f64>()
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = DVec2::new(3.0, 4.0);
        let b = DVec2::new(-1.0, 7.5);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
        assert_eq!(distance(DVec2::ZERO, a), 5.0);
    }

    #[test]
    fn random_in_range_stays_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..10_000 {
            let v = random_in_range(&mut rng, 1.0, 10.0);
            assert!((1.0..10.0).contains(&v), "{v} outside [1, 10)");
        }
    }

    #[test]
    fn random_in_range_covers_both_halves() {
        let mut rng = Pcg32::seed_from_u64(7);
        let (mut low, mut high) = (0u32, 0u32);
        for _ in 0..10_000 {
            if random_in_range(&mut rng, 0.0, 1.0) < 0.5 {
                low += 1;
            } else {
                high += 1;
            }
        }
        assert!(low > 4_000 && high > 4_000, "skewed split: {low}/{high}");
    }

    proptest! {
        #[test]
        fn random_in_range_never_escapes(
            seed: u64,
            min in -1000.0..1000.0f64,
            span in 0.001..1000.0f64,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let max = min + span;
            for _ in 0..100 {
                let v = random_in_range(&mut rng, min, max);
                prop_assert!(v >= min && v < max);
            }
        }

        #[test]
        fn distance_symmetry(
            ax in -1e6..1e6f64,
            ay in -1e6..1e6f64,
            bx in -1e6..1e6f64,
            by in -1e6..1e6f64,
        ) {
            let a = DVec2::new(ax, ay);
            let b = DVec2::new(bx, by);
            prop_assert_eq!(distance(a, b), distance(b, a));
        }
    }
}
