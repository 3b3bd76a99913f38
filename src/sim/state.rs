//! Particle state and the store that owns it

use glam::Vec2;

/// A disk in the sandbox
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    /// Position at the start of the most recent sub-step
    pub prev_pos: Vec2,
    pub vel: Vec2,
    /// Constant acceleration (gravity)
    pub acc: Vec2,
    radius: f32,
}

impl Particle {
    /// New particle at rest. `radius` must be > 0.
    pub fn new(id: u32, pos: Vec2, radius: f32, acc: Vec2) -> Self {
        debug_assert!(radius > 0.0, "particle radius must be > 0, got {radius}");
        Self {
            id,
            pos,
            prev_pos: pos,
            vel: Vec2::ZERO,
            acc,
            radius,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Ordered particle collection (creation order == id order)
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    next_id: u32,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a particle at rest, returning its id
    pub fn push(&mut self, pos: Vec2, radius: f32, acc: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.particles.push(Particle::new(id, pos, radius, acc));
        id
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    /// Mutable access to two distinct particles, `i < j`
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Particle, &mut Particle) {
        debug_assert!(i < j, "pair_mut expects i < j, got {i} and {j}");
        let (head, tail) = self.particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }
}
