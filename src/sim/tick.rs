//! Per-frame simulation update
//!
//! The frame driver draws the current state first and calls [`tick`] after,
//! so every frame shows pre-update positions.

use super::state::ShowState;
use crate::random_in_range;

/// Advance the show by one tick: reroll the shared hue, then advance every
/// firework and drop the ones that have burned out.
pub fn tick(state: &mut ShowState) {
    state.hue = random_in_range(&mut state.rng, 0.0, 360.0);

    // retain_mut rebuilds the list in place, so a removal can never skip a
    // not-yet-visited firework
    state.fireworks.retain_mut(|firework| firework.advance());
}
