//! Velocity clamping

use glam::Vec2;

/// Speed cap plus per-axis dead zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityLimiter {
    pub min_velocity: f32,
    pub max_velocity: f32,
}

impl VelocityLimiter {
    pub fn new(min_velocity: f32, max_velocity: f32) -> Self {
        Self {
            min_velocity,
            max_velocity,
        }
    }

    /// Rescale to `max_velocity` if faster, then zero-snap tiny components
    pub fn clamp(&self, velocity: Vec2) -> Vec2 {
        let max_sq = self.max_velocity * self.max_velocity;
        let capped = if velocity.length_squared() > max_sq {
            velocity * (self.max_velocity / velocity.length())
        } else {
            velocity
        };
        self.snap_small(capped)
    }

    /// Zero any component whose magnitude is below `min_velocity`
    #[inline]
    pub fn snap_small(&self, velocity: Vec2) -> Vec2 {
        Vec2::new(
            self.snap_component(velocity.x),
            self.snap_component(velocity.y),
        )
    }

    #[inline]
    pub fn snap_component(&self, c: f32) -> f32 {
        if c.abs() < self.min_velocity { 0.0 } else { c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter() -> VelocityLimiter {
        VelocityLimiter::new(1.0e-5, 2.0)
    }

    #[test]
    fn test_clamps_to_max_preserving_direction() {
        let l = limiter();
        let dir = Vec2::new(3.0, -4.0).normalize();
        let out = l.clamp(dir * 6.0);
        assert!((out.length() - 2.0).abs() < 1e-5);
        assert!((out.normalize() - dir).length() < 1e-5);
    }

    #[test]
    fn test_below_max_unchanged() {
        let l = limiter();
        let v = Vec2::new(0.5, -1.2);
        assert_eq!(l.clamp(v), v);
    }

    #[test]
    fn test_snaps_tiny_components() {
        let l = limiter();
        let out = l.clamp(Vec2::new(5.0e-6, -0.3));
        assert_eq!(out.x, 0.0);
        assert_eq!(out.y, -0.3);
        assert_eq!(l.snap_component(-9.9e-6), 0.0);
        assert_eq!(l.snap_component(1.0e-5), 1.0e-5);
    }
}
