//! Ping Ball - a single ball bouncing inside a rectangular viewport
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall bounces, launch)
//! - `clock`: Fixed-rate accumulator that turns host frame time into ticks
//! - `config`: Physics constants, loadable from JSON
//! - `error`: Configuration errors

pub mod clock;
pub mod config;
pub mod error;
pub mod sim;

pub use clock::{FixedClock, FrameSummary};
pub use config::SimConfig;
pub use error::{ConfigError, ConfigResult};
pub use sim::{SharedSimulator, Simulator, StepReport, VerticalMotion, Viewport, Wall};

/// Simulation configuration constants
pub mod consts {
    /// Tick rate the default physics constants are calibrated for
    pub const TICK_RATE_HZ: f64 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f64 = 1.0 / TICK_RATE_HZ;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest host frame the clock will account for (seconds)
    pub const MAX_FRAME_TIME: f64 = 0.1;
    /// Slowest cadence that still fits a tick into one clamped frame
    pub const MIN_TICK_RATE_HZ: f64 = 1.0 / MAX_FRAME_TIME;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 50.0;
    /// Vertical acceleration per tick (negative pulls toward y = 0)
    pub const GRAVITY: f64 = -2.0;

    /// Per-tick velocity decay when damping is enabled
    pub const DRAG: f64 = 0.995;
    /// Velocity decay applied on each wall bounce when damping is enabled
    pub const BOUNCE_DAMPING: f64 = 0.9;

    /// Launch speed range (units per tick)
    pub const LAUNCH_SPEED_MIN: f64 = 40.0;
    pub const LAUNCH_SPEED_MAX: f64 = 70.0;

    /// Default surface size
    pub const VIEWPORT_WIDTH: f64 = 800.0;
    pub const VIEWPORT_HEIGHT: f64 = 600.0;
}
