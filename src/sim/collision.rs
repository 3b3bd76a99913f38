//! Pairwise collision detection between disks
//!
//! Two tests per pair: a discrete overlap check on current positions, and a
//! continuous sweep of each particle's sub-step displacement against the
//! other's disk. The sweep catches fast disks that would otherwise tunnel
//! straight through a neighbour between two samples.
//!
//! Both tests only read `(prev_pos, pos, radius)`, so they are pure and can be
//! exercised without a running simulation.

use glam::Vec2;

use super::resolve::{Resolution, Resolver};
use super::state::{Particle, ParticleStore};

/// Counters from one detection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub pair_tests: u64,
    pub swept_hits: u64,
    pub discrete_hits: u64,
    pub impulses: u64,
    pub nudges: u64,
}

impl PassStats {
    fn record(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Resolved { .. } => self.impulses += 1,
            Resolution::Nudged => self.nudges += 1,
            Resolution::Separating => {}
        }
    }
}

/// Does the segment `from -> to` enter a circle of `radius` around `center`?
///
/// Standard line-circle quadratic; a hit is a real root with t in [0, 1].
/// A zero-length segment never hits.
pub fn sweep_hits(from: Vec2, to: Vec2, center: Vec2, radius: f32) -> bool {
    let d = to - from;
    let a = d.length_squared();
    if a == 0.0 {
        return false;
    }

    let f = from - center;
    let b = 2.0 * f.dot(d);
    let c = f.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// Current-position overlap
#[inline]
pub fn discrete_test(a: &Particle, b: &Particle) -> bool {
    a.pos.distance(b.pos) < a.radius() + b.radius()
}

/// Either particle's sub-step sweep crosses the other's (radius-summed) disk
#[inline]
pub fn swept_test(a: &Particle, b: &Particle) -> bool {
    let combined = a.radius() + b.radius();
    sweep_hits(a.prev_pos, a.pos, b.pos, combined) || sweep_hits(b.prev_pos, b.pos, a.pos, combined)
}

/// Test and resolve every pair (i, j), i < j, in ascending order.
///
/// Later pairs see the state left by earlier resolutions. A pair can be
/// resolved twice: once for the sweep, then again if it still overlaps.
///
/// `prev_pos` in the store is the sub-step's start-of-step snapshot: the
/// integrator writes it and resolution never touches it. A sweep segment
/// therefore runs from that snapshot to the *current* position, including
/// any correction applied by an earlier pair in this pass.
pub fn detect_and_resolve(store: &mut ParticleStore, resolver: &Resolver) -> PassStats {
    let mut stats = PassStats::default();
    let n = store.len();

    for i in 0..n {
        for j in (i + 1)..n {
            stats.pair_tests += 1;
            let (a, b) = store.pair_mut(i, j);

            if swept_test(a, b) {
                stats.swept_hits += 1;
                stats.record(resolver.resolve(a, b));
            }
            if discrete_test(a, b) {
                stats.discrete_hits += 1;
                stats.record(resolver.resolve(a, b));
            }
        }
    }

    stats
}
