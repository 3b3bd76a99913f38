//! Constant-acceleration integration over one sub-step

use super::state::Particle;

/// Advance one particle by `dt` (> 0).
///
/// Records `prev_pos` first so that `prev_pos -> pos` is this sub-step's sweep.
#[inline]
pub fn integrate(particle: &mut Particle, dt: f32) {
    debug_assert!(dt > 0.0, "sub-step must be positive, got {dt}");
    particle.prev_pos = particle.pos;
    particle.vel += particle.acc * dt;
    particle.pos += particle.vel * dt + particle.acc * (0.5 * dt * dt);
}
