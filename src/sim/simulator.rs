//! The ball simulator
//!
//! Owns the whole simulation state. Mutated only through [`Simulator::step`],
//! [`Simulator::launch`] and [`Simulator::set_viewport`].

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Color, Snapshot, Viewport};
use crate::config::SimConfig;
use crate::error::ConfigResult;

/// A single ball bouncing inside a viewport
#[derive(Debug, Clone)]
pub struct Simulator<R = Pcg32> {
    pub(super) config: SimConfig,
    pub(super) position: DVec2,
    pub(super) velocity: DVec2,
    pub(super) viewport: Viewport,
    /// Gravity switched off after a degenerate bounce, until the next launch
    pub(super) resting: bool,
    pub(super) color: Color,
    pub(super) tick: u64,
    pub(super) rng: R,
}

impl Simulator<Pcg32> {
    /// Create a simulator with a seeded PCG generator
    pub fn new(config: SimConfig, seed: u64) -> ConfigResult<Self> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator drawing launch velocities and colors from `rng`
    pub fn with_rng(config: SimConfig, mut rng: R) -> ConfigResult<Self> {
        config.validate()?;
        let color = Color::random(&mut rng);
        Ok(Self {
            position: config.initial_position,
            velocity: config.initial_velocity,
            viewport: config.viewport,
            resting: false,
            color,
            tick: 0,
            rng,
            config,
        })
    }

    /// Fire the ball in a random direction at a random speed
    ///
    /// Also restores gravity if a degenerate bounce had switched it off.
    pub fn launch(&mut self) {
        let min = self.config.launch_speed_min;
        let max = self.config.launch_speed_max;
        let speed = min + (max - min) * self.rng.random::<f64>();
        let angle = self.rng.random::<f64>() * std::f64::consts::TAU;

        self.velocity = DVec2::new(speed * angle.sin(), speed * angle.cos());
        self.resting = false;

        log::info!(
            "Launch at tick {}: speed {:.2}, angle {:.3} rad",
            self.tick,
            speed,
            angle
        );
    }

    /// Replace the viewport (surface resize), pulling the ball back inside
    ///
    /// A viewport no larger than the ball is rejected and the old one kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ConfigResult<()> {
        viewport.check_fits(self.config.radius)?;
        self.viewport = viewport;
        let clamped = viewport.clamp(self.position, self.config.radius);
        if clamped != self.position {
            log::debug!("Resize moved ball from {} to {}", self.position, clamped);
            self.position = clamped;
        }
        Ok(())
    }

    /// Re-randomize the fill color (called on every bounce)
    pub(super) fn recolor(&mut self) {
        self.color = Color::random(&mut self.rng);
    }
}

impl<R> Simulator<R> {
    /// Top-left corner of the ball's bounding box
    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Effective gravity: the configured constant, or 0 while resting
    pub fn gravity(&self) -> f64 {
        if self.resting { 0.0 } else { self.config.gravity }
    }

    /// Whether a degenerate bounce has parked the ball on a wall
    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Current speed in units per tick
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Render-facing copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            position: self.position,
            velocity: self.velocity,
            gravity: self.gravity(),
            resting: self.resting,
            radius: self.config.radius,
            color: self.color,
        }
    }
}
