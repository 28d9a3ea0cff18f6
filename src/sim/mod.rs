//! Deterministic fireworks simulation
//!
//! All show logic lives here. This module must stay pure and deterministic:
//! - One tick per frame, driven externally
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod firework;
pub mod particle;
pub mod state;
pub mod tick;

pub use firework::Firework;
pub use particle::Particle;
pub use state::ShowState;
pub use tick::tick;
