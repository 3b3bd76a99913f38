//! Impulse response and de-penetration for a colliding pair
//!
//! Equal masses, no rotation. Resolution is a no-op once the pair is
//! separating along the contact normal, so resolving the same pair twice in a
//! sub-step is safe.

use super::limiter::VelocityLimiter;
use super::state::Particle;
use crate::consts::COINCIDENT_NUDGE;

/// Outcome of a single `resolve` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Centres coincided; particles were pushed apart along x
    Nudged,
    /// Relative normal velocity >= 0; nothing changed
    Separating,
    /// Impulse applied, plus positional correction per particle (0 if no overlap)
    Resolved { impulse: f32, correction: f32 },
}

/// Pair resolver built from the simulation config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolver {
    pub restitution: f32,
    pub push_factor: f32,
    pub limiter: VelocityLimiter,
}

impl Resolver {
    pub fn new(restitution: f32, push_factor: f32, limiter: VelocityLimiter) -> Self {
        Self {
            restitution,
            push_factor,
            limiter,
        }
    }

    pub fn resolve(&self, a: &mut Particle, b: &mut Particle) -> Resolution {
        let delta = b.pos - a.pos;
        let distance = delta.length();

        if distance == 0.0 {
            a.pos.x -= COINCIDENT_NUDGE;
            b.pos.x += COINCIDENT_NUDGE;
            log::trace!("Nudged coincident particles {} and {}", a.id, b.id);
            return Resolution::Nudged;
        }

        let normal = delta / distance;
        let vel_along_normal = (b.vel - a.vel).dot(normal);
        if vel_along_normal >= 0.0 {
            return Resolution::Separating;
        }

        let impulse = -(1.0 + self.restitution) * vel_along_normal * 0.5;
        b.vel = self.limiter.clamp(b.vel + normal * impulse);
        a.vel = self.limiter.clamp(a.vel - normal * impulse);

        let overlap = a.radius() + b.radius() - distance;
        let correction = if overlap > 0.0 {
            let push = overlap * 0.5 * self.push_factor;
            a.pos -= normal * push;
            b.pos += normal * push;
            push
        } else {
            0.0
        };

        a.vel = self.limiter.snap_small(a.vel);
        b.vel = self.limiter.snap_small(b.vel);

        log::trace!(
            "Resolved {} <-> {}: impulse={impulse:.5}, correction={correction:.5}",
            a.id,
            b.id
        );
        Resolution::Resolved {
            impulse,
            correction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn resolver() -> Resolver {
        Resolver::new(0.7, 1.01, VelocityLimiter::new(1.0e-5, 2.0))
    }

    /// Centre distance minus the sum of radii (negative when overlapping)
    fn gap(a: &Particle, b: &Particle) -> f32 {
        (b.pos - a.pos).length() - (a.radius() + b.radius())
    }

    /// Total linear momentum of a pair (equal unit masses)
    fn pair_momentum(a: &Particle, b: &Particle) -> Vec2 {
        a.vel + b.vel
    }

    fn disk(id: u32, x: f32, y: f32, r: f32) -> Particle {
        Particle::new(id, Vec2::new(x, y), r, Vec2::ZERO)
    }

    #[test]
    fn test_resting_pair_with_clearance_is_untouched() {
        let mut a = disk(0, -0.2, 0.0, 0.15);
        let mut b = disk(1, 0.2, 0.0, 0.15);
        let result = resolver().resolve(&mut a, &mut b);
        assert_eq!(result, Resolution::Separating);
        assert!(gap(&a, &b) >= -1e-5);
        assert_eq!(a.vel.x.abs(), b.vel.x.abs());
        assert_eq!(a.vel.x, -b.vel.x);
    }

    #[test]
    fn test_approaching_overlap_separates_with_opposite_velocities() {
        let mut a = disk(0, -0.1, 0.0, 0.15);
        let mut b = disk(1, 0.1, 0.0, 0.15);
        a.vel = Vec2::new(0.5, 0.0);
        b.vel = Vec2::new(-0.5, 0.0);

        let result = resolver().resolve(&mut a, &mut b);
        let Resolution::Resolved { impulse, correction } = result else {
            panic!("expected a resolution, got {result:?}");
        };
        // vn = -1.0 -> impulse = 1.7 * 1.0 * 0.5
        assert!((impulse - 0.85).abs() < 1e-5);
        assert!(correction > 0.0);
        assert!(gap(&a, &b) >= -1e-5);
        assert!((a.vel.x + b.vel.x).abs() < 1e-6);
        assert!(a.vel.x < 0.0 && b.vel.x > 0.0);
        assert!((b.vel.x - 0.35).abs() < 1e-5);
    }

    #[test]
    fn test_momentum_conserved_without_clamping() {
        let mut a = disk(0, 0.0, 0.0, 0.1);
        let mut b = disk(1, 0.12, 0.1, 0.1);
        a.vel = Vec2::new(0.3, 0.2);
        b.vel = Vec2::new(-0.4, 0.1);
        let before = pair_momentum(&a, &b);
        resolver().resolve(&mut a, &mut b);
        assert!((pair_momentum(&a, &b) - before).length() < 1e-5);
    }

    #[test]
    fn test_second_resolve_is_noop() {
        let mut a = disk(0, -0.1, 0.0, 0.15);
        let mut b = disk(1, 0.1, 0.0, 0.15);
        a.vel = Vec2::new(0.5, 0.1);
        b.vel = Vec2::new(-0.5, 0.0);
        let r = resolver();

        let (mut a1, mut b1) = (a.clone(), b.clone());
        r.resolve(&mut a1, &mut b1);

        let (mut a2, mut b2) = (a, b);
        r.resolve(&mut a2, &mut b2);
        assert_eq!(r.resolve(&mut a2, &mut b2), Resolution::Separating);

        assert_eq!((a1, b1), (a2, b2));
    }

    #[test]
    fn test_coincident_centres_nudged() {
        let mut a = disk(0, 0.3, 0.3, 0.1);
        let mut b = disk(1, 0.3, 0.3, 0.1);
        assert_eq!(resolver().resolve(&mut a, &mut b), Resolution::Nudged);
        assert!(a.pos.x < b.pos.x);
        assert_eq!(a.pos.y, b.pos.y);
        assert_eq!(a.vel, Vec2::ZERO);
    }

    #[test]
    fn test_post_impulse_velocity_clamped() {
        let mut a = disk(0, -0.05, 0.0, 0.1);
        let mut b = disk(1, 0.05, 0.0, 0.1);
        a.vel = Vec2::new(2.0, 0.0);
        b.vel = Vec2::new(-2.0, 0.0);
        resolver().resolve(&mut a, &mut b);
        assert!(a.vel.length() <= 2.0 + 1e-5);
        assert!(b.vel.length() <= 2.0 + 1e-5);
    }
}
