//! Fixed square domain walls

use super::limiter::VelocityLimiter;
use super::state::Particle;
use crate::consts::DOMAIN_HALF_EXTENT;

/// Which walls a particle was pushed back from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryContact {
    pub left: bool,
    pub right: bool,
    pub floor: bool,
    pub ceiling: bool,
}

impl BoundaryContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.floor || self.ceiling
    }
}

/// Keep the disk inside [-1, 1]^2, reflecting the velocity component of each wall hit.
///
/// Each edge is handled on its own, so a corner contact corrects both axes.
pub fn constrain(
    particle: &mut Particle,
    restitution: f32,
    limiter: &VelocityLimiter,
) -> BoundaryContact {
    let r = particle.radius();
    let lo = -DOMAIN_HALF_EXTENT + r;
    let hi = DOMAIN_HALF_EXTENT - r;
    let mut contact = BoundaryContact::default();

    if particle.pos.x < lo {
        particle.pos.x = lo;
        particle.vel.x = limiter.snap_component(-particle.vel.x * restitution);
        contact.left = true;
    } else if particle.pos.x > hi {
        particle.pos.x = hi;
        particle.vel.x = limiter.snap_component(-particle.vel.x * restitution);
        contact.right = true;
    }

    if particle.pos.y < lo {
        particle.pos.y = lo;
        particle.vel.y = limiter.snap_component(-particle.vel.y * restitution);
        contact.floor = true;
    } else if particle.pos.y > hi {
        particle.pos.y = hi;
        particle.vel.y = limiter.snap_component(-particle.vel.y * restitution);
        contact.ceiling = true;
    }

    contact
}
