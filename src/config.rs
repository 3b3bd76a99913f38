//! Physics configuration
//!
//! Fixed at process start. Stored as JSON when a caller wants to keep a tuning
//! around; the simulation itself never touches the filesystem.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConfigPreset {
    #[default]
    Default,
    Bouncy,
    Precise,
}

impl ConfigPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigPreset::Default => "Default",
            ConfigPreset::Bouncy => "Bouncy",
            ConfigPreset::Precise => "Precise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(ConfigPreset::Default),
            "bouncy" => Some(ConfigPreset::Bouncy),
            "precise" => Some(ConfigPreset::Precise),
            _ => None,
        }
    }
}

/// Simulation configuration (immutable once a `Simulation` is built)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Multiplier on standard gravity (9.8)
    pub gravity_scale: f32,
    /// Restitution coefficient for wall and pair contacts (0..=1)
    pub restitution: f32,
    /// Sub-steps per frame (K)
    pub substeps: u32,
    /// Positional over-correction multiplier (>= 1)
    pub push_factor: f32,
    /// Per-axis velocity components below this snap to zero
    pub min_velocity: f32,
    /// Speed cap
    pub max_velocity: f32,
    /// Fixed per-frame delta used by `Simulation::step_frame`
    pub frame_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_scale: GRAVITY_SCALE,
            restitution: RESTITUTION,
            substeps: SUBSTEPS,
            push_factor: PUSH_FACTOR,
            min_velocity: MIN_VELOCITY,
            max_velocity: MAX_VELOCITY,
            frame_dt: FRAME_DT,
        }
    }
}

impl SimConfig {
    /// Create a config from a preset (applies preset overrides to the defaults)
    pub fn from_preset(preset: ConfigPreset) -> Self {
        let mut config = Self::default();
        match preset {
            ConfigPreset::Default => {}
            ConfigPreset::Bouncy => {
                config.restitution = 0.9;
                config.push_factor = 1.05;
            }
            ConfigPreset::Precise => {
                config.substeps = 16;
            }
        }
        config
    }

    /// Constant acceleration given to every new particle
    #[inline]
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, -STANDARD_GRAVITY * self.gravity_scale)
    }

    /// Length of one sub-step for a frame of `frame_dt` seconds
    #[inline]
    pub fn substep_dt(&self, frame_dt: f32) -> f32 {
        frame_dt / self.substeps as f32
    }

    /// Check every value is finite and in range
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("gravity_scale", self.gravity_scale),
            ("restitution", self.restitution),
            ("push_factor", self.push_factor),
            ("min_velocity", self.min_velocity),
            ("max_velocity", self.max_velocity),
            ("frame_dt", self.frame_dt),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(Error::InvalidConfig(format!(
                "restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }
        if self.substeps == 0 {
            return Err(Error::InvalidConfig("substeps must be >= 1".into()));
        }
        if self.push_factor < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "push_factor must be >= 1, got {}",
                self.push_factor
            )));
        }
        if self.min_velocity < 0.0 || self.min_velocity >= self.max_velocity {
            return Err(Error::InvalidConfig(format!(
                "need 0 <= min_velocity < max_velocity, got {} and {}",
                self.min_velocity, self.max_velocity
            )));
        }
        if self.frame_dt <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "frame_dt must be > 0, got {}",
                self.frame_dt
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded config: {config:?}");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
