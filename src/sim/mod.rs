//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Equal sub-steps only
//! - No randomness
//! - Stable iteration order (by creation order)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod integrator;
pub mod limiter;
pub mod resolve;
pub mod state;
pub mod step;

pub use boundary::{BoundaryContact, constrain};
pub use collision::{PassStats, detect_and_resolve, discrete_test, sweep_hits, swept_test};
pub use integrator::integrate;
pub use limiter::VelocityLimiter;
pub use resolve::{Resolution, Resolver};
pub use state::{Particle, ParticleStore};
pub use step::{Simulation, SpawnRequest, StepStats};
