//! Show state and the startup spawn policy

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::firework::Firework;
use crate::consts::*;
use crate::random_in_range;

/// Complete state of the fireworks show.
///
/// Owned by the frame driver and handed to the renderer and [`tick`] each
/// frame; nothing lives in globals.
///
/// [`tick`]: super::tick::tick
#[derive(Debug, Clone)]
pub struct ShowState {
    /// Seed the show was started with, for reproducing a run
    pub seed: u64,
    /// RNG behind every randomized value in the show
    pub rng: Pcg32,
    /// Surface size in pixels, updated on resize
    pub width: f64,
    pub height: f64,
    /// Hue shared by everything drawn this tick, rerolled every tick
    pub hue: f64,
    /// Active rockets, pruned as they burn out
    pub fireworks: Vec<Firework>,
}

impl ShowState {
    /// Start a show: every rocket launches from the bottom-center of the
    /// surface toward its own randomized target in the upper half.
    pub fn new(seed: u64, width: f64, height: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let launch_point = DVec2::new(width / 2.0, height);

        let fireworks = (0..INITIAL_FIREWORK_COUNT)
            .map(|_| {
                let target = DVec2::new(
                    random_in_range(&mut rng, 0.0, width),
                    random_in_range(&mut rng, 0.0, height / 2.0),
                );
                Firework::new(launch_point, target, INITIAL_HUE, &mut rng)
            })
            .collect();

        Self {
            seed,
            rng,
            width,
            height,
            hue: INITIAL_HUE,
            fireworks,
        }
    }

    /// Adopt new surface dimensions. In-flight rockets are not resampled.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// True once every rocket has burst and burned out
    pub fn is_finished(&self) -> bool {
        self.fireworks.is_empty()
    }
}
