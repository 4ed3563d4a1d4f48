//! Error types for loading and validating simulation configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a [`SimConfig`](crate::SimConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Ball radius is zero or negative.
    #[error("Invalid ball radius: {0} (must be > 0)")]
    InvalidRadius(f64),

    /// A damping factor lies outside (0, 1].
    #[error("Invalid {field}: {value} (must be in (0, 1])")]
    InvalidDamping {
        /// Name of the damping factor.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Launch speed range is negative or inverted.
    #[error("Invalid launch speed range: {min}..{max}")]
    InvalidLaunchRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// The ball does not fit inside the viewport.
    #[error("Viewport {width}x{height} too small for a ball of diameter {diameter}")]
    ViewportTooSmall {
        /// Viewport width.
        width: f64,
        /// Viewport height.
        height: f64,
        /// Ball diameter.
        diameter: f64,
    },

    /// Tick rate is below `MIN_TICK_RATE_HZ`.
    #[error("Invalid tick rate: {0} Hz (must be >= 10)")]
    InvalidTickRate(f64),

    /// Malformed JSON.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error while reading a config file.
    #[error("Failed to read {path}: {source}")]
    IoRead {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidRadius(-5.0);
        assert_eq!(format!("{err}"), "Invalid ball radius: -5 (must be > 0)");

        let err = ConfigError::InvalidDamping {
            field: "drag",
            value: 1.5,
        };
        assert!(format!("{err}").contains("drag"));
        assert!(format!("{err}").contains("1.5"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = ConfigError::IoRead {
            path: PathBuf::from("/nope/config.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(format!("{err}").contains("/nope/config.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
