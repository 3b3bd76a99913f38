//! Read-only per-frame views handed to the renderer
//!
//! Snapshots are owned copies; nothing here borrows simulation state.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::state::Particle;

/// One disk as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSnapshot {
    pub position: Vec2,
    pub radius: f32,
}

impl From<&Particle> for CircleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.pos,
            radius: p.radius(),
        }
    }
}

/// GPU instance record for a disk (16 bytes, tightly packed)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
}

impl CircleInstance {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: [x, y],
            radius,
            _pad: 0.0,
        }
    }
}

impl From<&CircleSnapshot> for CircleInstance {
    fn from(s: &CircleSnapshot) -> Self {
        Self::new(s.position.x, s.position.y, s.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 16);
        let instances = [CircleInstance::new(0.5, -0.25, 0.1); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 48);
    }

    #[test]
    fn test_snapshot_from_particle() {
        let p = Particle::new(0, Vec2::new(0.2, 0.3), 0.1, Vec2::ZERO);
        let snap = CircleSnapshot::from(&p);
        assert_eq!(snap.position, Vec2::new(0.2, 0.3));
        assert_eq!(snap.radius, 0.1);
        let inst = CircleInstance::from(&snap);
        assert_eq!(inst.center, [0.2, 0.3]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = CircleSnapshot {
            position: Vec2::new(0.0, -0.9),
            radius: 0.1,
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: CircleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
