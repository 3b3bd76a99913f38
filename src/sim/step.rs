//! Sub-stepped simulation loop
//!
//! One `advance` call runs every sub-step to completion before returning.
//! Spawns requested between frames are applied at the start of the next
//! `advance`, never in the middle of a sub-step.

use glam::Vec2;

use super::boundary;
use super::collision::{PassStats, detect_and_resolve};
use super::integrator::integrate;
use super::limiter::VelocityLimiter;
use super::resolve::Resolver;
use super::state::{Particle, ParticleStore};
use crate::config::SimConfig;
use crate::error::Result;
use crate::snapshot::{CircleInstance, CircleSnapshot};

/// A queued spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub pos: Vec2,
    pub radius: f32,
}

/// What happened during one `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub substeps: u32,
    pub spawned: usize,
    pub boundary_contacts: u64,
    pub pair_tests: u64,
    pub swept_hits: u64,
    pub discrete_hits: u64,
    pub impulses: u64,
    pub nudges: u64,
}

impl StepStats {
    fn absorb(&mut self, pass: PassStats) {
        self.pair_tests += pass.pair_tests;
        self.swept_hits += pass.swept_hits;
        self.discrete_hits += pass.discrete_hits;
        self.impulses += pass.impulses;
        self.nudges += pass.nudges;
    }
}

/// Owned simulation: particle store, config and spawn queue
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    limiter: VelocityLimiter,
    resolver: Resolver,
    store: ParticleStore,
    pending: Vec<SpawnRequest>,
    frame: u64,
}

impl Simulation {
    /// Build an empty simulation after validating `config`
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let limiter = VelocityLimiter::new(config.min_velocity, config.max_velocity);
        let resolver = Resolver::new(config.restitution, config.push_factor, limiter);
        log::info!(
            "Simulation created: {} substeps, restitution {}, gravity {:?}",
            config.substeps,
            config.restitution,
            config.gravity()
        );
        Ok(Self {
            config,
            limiter,
            resolver,
            store: ParticleStore::new(),
            pending: Vec::new(),
            frame: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn pending_spawns(&self) -> usize {
        self.pending.len()
    }

    /// Read-only view of live particle state
    pub fn particles(&self) -> &[Particle] {
        self.store.as_slice()
    }

    /// Queue a disk at rest. Applied at the start of the next `advance`.
    ///
    /// `radius` must be > 0; that is the caller's responsibility.
    pub fn spawn(&mut self, pos: Vec2, radius: f32) {
        debug_assert!(radius > 0.0, "spawn radius must be > 0, got {radius}");
        self.pending.push(SpawnRequest { pos, radius });
    }

    /// Advance by the configured fixed frame delta
    pub fn step_frame(&mut self) -> StepStats {
        self.advance(self.config.frame_dt)
    }

    /// Advance by `frame_dt` seconds split into K equal sub-steps
    pub fn advance(&mut self, frame_dt: f32) -> StepStats {
        debug_assert!(frame_dt > 0.0, "frame delta must be positive, got {frame_dt}");
        let mut stats = StepStats::default();

        let gravity = self.config.gravity();
        stats.spawned = self.pending.len();
        for req in self.pending.drain(..) {
            let id = self.store.push(req.pos, req.radius, gravity);
            log::debug!("Spawned particle {id} at {:?} (r={})", req.pos, req.radius);
        }

        let dt = self.config.substep_dt(frame_dt);
        for _ in 0..self.config.substeps {
            self.substep(dt, &mut stats);
            stats.substeps += 1;
        }

        self.frame += 1;
        log::debug!(
            "Frame {}: {} particles, {} boundary contacts, {} swept / {} discrete hits, {} impulses",
            self.frame,
            self.store.len(),
            stats.boundary_contacts,
            stats.swept_hits,
            stats.discrete_hits,
            stats.impulses
        );
        stats
    }

    fn substep(&mut self, dt: f32, stats: &mut StepStats) {
        for particle in self.store.iter_mut() {
            integrate(particle, dt);
            particle.vel = self.limiter.clamp(particle.vel);
            if boundary::constrain(particle, self.config.restitution, &self.limiter).any() {
                stats.boundary_contacts += 1;
            }
        }
        stats.absorb(detect_and_resolve(&mut self.store, &self.resolver));
    }

    /// Positions and radii in creation order (owned copy)
    pub fn snapshot(&self) -> Vec<CircleSnapshot> {
        self.store.iter().map(CircleSnapshot::from).collect()
    }

    /// Snapshot packed for GPU upload
    pub fn snapshot_instances(&self) -> Vec<CircleInstance> {
        self.snapshot().iter().map(CircleInstance::from).collect()
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        log::debug!(
            "Simulation dropped after {} frames with {} particles",
            self.frame,
            self.store.len()
        );
    }
}
