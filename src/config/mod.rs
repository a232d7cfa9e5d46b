//! Configuration module for Dinnerwheel.
//!
//! This module provides structured configuration loading from environment
//! variables, organized by concern: Wheel geometry/physics and Storage.

mod storage_env_config;
mod wheel_env_config;

pub use storage_env_config::StorageEnvConfig;
pub use wheel_env_config::WheelEnvConfig;

use crate::domain::wheel::{SpinTuning, WedgeRing};
use anyhow::{Context, Result};

/// Main application configuration.
///
/// This struct aggregates all configuration from sub-modules and provides
/// flat field access for the rest of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // Wheel (from WheelEnvConfig)
    pub wedge_count: usize,
    pub radius_px: f32,
    pub margin_px: f32,
    pub decay: f32,
    pub floor_rad: f32,
    pub impulse_base_deg: f32,
    pub impulse_range_deg: f32,

    // Storage (from StorageEnvConfig)
    pub storage_dir_override: Option<String>,
    pub autosave: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let wheel = WheelEnvConfig::from_env().context("Failed to load wheel config")?;
        let storage = StorageEnvConfig::from_env();

        Ok(Self {
            wedge_count: wheel.wedge_count,
            radius_px: wheel.radius_px,
            margin_px: wheel.margin_px,
            decay: wheel.decay,
            floor_rad: wheel.floor_rad,
            impulse_base_deg: wheel.impulse_base_deg,
            impulse_range_deg: wheel.impulse_range_deg,

            storage_dir_override: storage.dir_override,
            autosave: storage.autosave,
        })
    }

    /// Create the wedge ring domain value object from this Config.
    ///
    /// Wedge-count validation (at least 2, within the color palette)
    /// happens here, so a bad `WHEEL_WEDGES` fails at startup rather than
    /// at first draw.
    pub fn to_wedge_ring(&self) -> Result<WedgeRing> {
        WedgeRing::new(self.wedge_count)
            .map_err(|e| anyhow::anyhow!("Invalid wheel config: {}", e))
    }

    pub fn to_spin_tuning(&self) -> SpinTuning {
        SpinTuning {
            decay: self.decay,
            floor: self.floor_rad,
        }
    }
}
