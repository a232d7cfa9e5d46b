//! Wheel and spin configuration parsing from environment variables.
//!
//! This module handles the geometry knobs (wedge count, radius, margin) and
//! the deceleration tuning (decay factor, velocity floor, impulse range).

use anyhow::{Context, Result};
use std::env;

/// Wheel environment configuration
#[derive(Debug, Clone)]
pub struct WheelEnvConfig {
    // Geometry
    pub wedge_count: usize,
    pub radius_px: f32,
    pub margin_px: f32,

    // Deceleration
    pub decay: f32,
    pub floor_rad: f32,

    // Spin impulse, in degrees per frame (converted to radians at spin time)
    pub impulse_base_deg: f32,
    pub impulse_range_deg: f32,
}

impl WheelEnvConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            wedge_count: Self::parse_usize("WHEEL_WEDGES", 8)?,
            radius_px: Self::parse_f32("WHEEL_RADIUS_PX", 260.0)?,
            margin_px: Self::parse_f32("WHEEL_MARGIN_PX", 24.0)?,
            decay: Self::parse_f32("SPIN_DECAY", 0.99)?,
            floor_rad: Self::parse_f32("SPIN_FLOOR_RAD", 0.005)?,
            impulse_base_deg: Self::parse_f32("SPIN_BASE_DEG", 10.0)?,
            impulse_range_deg: Self::parse_f32("SPIN_RANGE_DEG", 10.0)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Range-checks the tuning knobs at startup.
    ///
    /// A decay outside (0, 1) or a non-positive floor would produce a spin
    /// that never settles, and a negative impulse band would panic at the
    /// first spin, so bad values fail here instead. The negated comparisons
    /// also reject NaN.
    fn validate(&self) -> Result<()> {
        if !(self.decay > 0.0 && self.decay < 1.0) {
            anyhow::bail!(
                "SPIN_DECAY must be strictly between 0 and 1, got {}",
                self.decay
            );
        }
        if !(self.floor_rad > 0.0) {
            anyhow::bail!("SPIN_FLOOR_RAD must be positive, got {}", self.floor_rad);
        }
        if !(self.impulse_base_deg >= 0.0) {
            anyhow::bail!(
                "SPIN_BASE_DEG must not be negative, got {}",
                self.impulse_base_deg
            );
        }
        if !(self.impulse_range_deg >= 0.0) {
            anyhow::bail!(
                "SPIN_RANGE_DEG must not be negative, got {}",
                self.impulse_range_deg
            );
        }
        Ok(())
    }

    fn parse_usize(key: &str, default: usize) -> Result<usize> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<usize>()
            .context(format!("Failed to parse {}", key))
    }

    fn parse_f32(key: &str, default: f32) -> Result<f32> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<f32>()
            .context(format!("Failed to parse {}", key))
    }
}
