//! Fixed-rate tick clock
//!
//! Hosts deliver frames at whatever rate they like; the physics constants are
//! calibrated per tick, so frame time is accumulated and spent in whole ticks.

use rand::Rng;

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};
use crate::sim::Simulator;

/// What one host frame did to the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Ticks run this frame
    pub ticks: u32,
    /// Ticks that hit a wall
    pub bounces: u32,
}

/// Accumulator that converts elapsed seconds into fixed ticks
#[derive(Debug, Clone)]
pub struct FixedClock {
    tick_dt: f64,
    accumulator: f64,
}

impl FixedClock {
    /// `tick_rate_hz` should be at least `MIN_TICK_RATE_HZ` (as
    /// `SimConfig::validate` enforces); slower rates cannot complete a tick
    /// within one clamped frame.
    pub fn new(tick_rate_hz: f64) -> Self {
        Self {
            tick_dt: 1.0 / tick_rate_hz,
            accumulator: 0.0,
        }
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f64 {
        self.tick_dt
    }

    /// Unspent time carried into the next frame
    pub fn pending(&self) -> f64 {
        self.accumulator
    }

    /// Account for `elapsed` seconds and return how many ticks are due
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        let elapsed = elapsed.clamp(0.0, MAX_FRAME_TIME);
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick_dt && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.tick_dt;
            ticks += 1;
        }
        ticks
    }

    /// Advance the clock and step the simulator for every tick that is due
    pub fn drive<R: Rng>(&mut self, sim: &mut Simulator<R>, elapsed: f64) -> FrameSummary {
        let ticks = self.advance(elapsed);
        let mut summary = FrameSummary { ticks, bounces: 0 };
        for _ in 0..ticks {
            if sim.step().bounced() {
                summary.bounces += 1;
            }
        }
        summary
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(crate::consts::TICK_RATE_HZ)
    }
}
