//! Simulation configuration
//!
//! Every physics constant lives here. All values are per tick, calibrated to
//! `tick_rate_hz`; change them together if the cadence changes.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};
use crate::sim::Viewport;

/// Physics constants for a [`Simulator`](crate::Simulator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Ball radius (the bounding box is `2 * radius` on each side)
    pub radius: f64,
    /// Vertical acceleration per tick
    pub gravity: f64,

    // === Damping ===
    /// Enable drag and bounce damping
    pub damping: bool,
    /// Per-tick velocity multiplier
    pub drag: f64,
    /// Velocity multiplier applied on each bounce
    pub bounce_damping: f64,

    // === Launch ===
    /// Slowest launch speed
    pub launch_speed_min: f64,
    /// Fastest launch speed
    pub launch_speed_max: f64,

    // === Initial state ===
    pub initial_position: DVec2,
    pub initial_velocity: DVec2,
    pub viewport: Viewport,

    /// Cadence the constants above are calibrated for
    pub tick_rate_hz: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            gravity: GRAVITY,

            damping: false,
            drag: DRAG,
            bounce_damping: BOUNCE_DAMPING,

            launch_speed_min: LAUNCH_SPEED_MIN,
            launch_speed_max: LAUNCH_SPEED_MAX,

            initial_position: DVec2::new(750.0, 300.0),
            initial_velocity: DVec2::new(20.0, 10.0),
            viewport: Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),

            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl SimConfig {
    /// Default constants with damping switched on
    pub fn damped() -> Self {
        Self {
            damping: true,
            ..Self::default()
        }
    }

    /// Check every constant, returning the first violation
    pub fn validate(&self) -> ConfigResult<()> {
        let finite = [
            ("radius", self.radius),
            ("gravity", self.gravity),
            ("drag", self.drag),
            ("bounce_damping", self.bounce_damping),
            ("launch_speed_min", self.launch_speed_min),
            ("launch_speed_max", self.launch_speed_max),
            ("initial_position.x", self.initial_position.x),
            ("initial_position.y", self.initial_position.y),
            ("initial_velocity.x", self.initial_velocity.x),
            ("initial_velocity.y", self.initial_velocity.y),
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
            ("tick_rate_hz", self.tick_rate_hz),
        ];
        if let Some(&(field, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }

        if self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        for (field, value) in [("drag", self.drag), ("bounce_damping", self.bounce_damping)] {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::InvalidDamping { field, value });
            }
        }
        if self.launch_speed_min < 0.0 || self.launch_speed_max < self.launch_speed_min {
            return Err(ConfigError::InvalidLaunchRange {
                min: self.launch_speed_min,
                max: self.launch_speed_max,
            });
        }
        self.viewport.check_fits(self.radius)?;
        // Slower cadences never accumulate a whole tick within one clamped frame
        if self.tick_rate_hz < MIN_TICK_RATE_HZ {
            return Err(ConfigError::InvalidTickRate(self.tick_rate_hz));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::IoRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
