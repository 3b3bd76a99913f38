//! Circle Sandbox - a 2D circle-physics playground
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, step loop)
//! - `config`: Process-start physics configuration
//! - `snapshot`: Read-only per-frame views for an external renderer
//! - `error`: Crate error type

pub mod config;
pub mod error;
pub mod sim;
pub mod snapshot;

pub use config::{ConfigPreset, SimConfig};
pub use error::{Error, Result};
pub use sim::{Simulation, StepStats};
pub use snapshot::{CircleInstance, CircleSnapshot};

/// Simulation constants
pub mod consts {
    /// Half extent of the square domain [-1, 1] x [-1, 1]
    pub const DOMAIN_HALF_EXTENT: f32 = 1.0;

    /// Standard gravity, scaled by `SimConfig::gravity_scale`
    pub const STANDARD_GRAVITY: f32 = 9.8;
    pub const GRAVITY_SCALE: f32 = 0.01;

    /// Fixed per-frame delta (seconds)
    pub const FRAME_DT: f32 = 0.016;
    /// Sub-steps per frame
    pub const SUBSTEPS: u32 = 8;

    /// Fraction of normal velocity kept after a bounce
    pub const RESTITUTION: f32 = 0.7;
    /// Over-correction applied when pushing overlapping disks apart
    pub const PUSH_FACTOR: f32 = 1.01;

    /// Velocity components below this snap to zero.
    /// Must stay below gravity * (FRAME_DT / SUBSTEPS) or resting-free disks never fall.
    pub const MIN_VELOCITY: f32 = 1.0e-5;
    pub const MAX_VELOCITY: f32 = 2.0;

    /// Separation applied along x when two centres coincide
    pub const COINCIDENT_NUDGE: f32 = 1.0e-3;

    /// Radius of disks spawned by a pointer click
    pub const SPAWN_RADIUS: f32 = 0.1;
}
