//! Fixed timestep simulation step
//!
//! One call advances the ball by exactly one tick. Velocities are per tick and
//! gravity is per tick squared, so the closed-form one-tick move is
//! `s = u + a/2` and the velocity change is `a`.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounce::{VerticalResolution, Wall, fold_into, resolve_vertical};
use super::simulator::Simulator;

/// What happened to the vertical axis during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalMotion {
    /// Ordinary ballistic move
    NormalMove,
    /// Bounced off y = 0
    BouncedAtFloor,
    /// Bounced off y = height - 2r
    BouncedAtCeiling,
    /// Parked on a wall with gravity off (either just now or already)
    Resting,
}

impl VerticalMotion {
    pub fn bounced(self) -> bool {
        matches!(self, VerticalMotion::BouncedAtFloor | VerticalMotion::BouncedAtCeiling)
    }
}

/// Per-tick events for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Wall hit by the horizontal move, if any
    pub horizontal: Option<Wall>,
    pub vertical: VerticalMotion,
    /// The degenerate-bounce guard fired this tick
    pub came_to_rest: bool,
}

impl StepReport {
    /// Any wall contact this tick (the ball changed color)
    pub fn bounced(&self) -> bool {
        self.horizontal.is_some() || self.vertical.bounced() || self.came_to_rest
    }
}

impl<R: Rng> Simulator<R> {
    /// Advance the simulation by one tick
    pub fn step(&mut self) -> StepReport {
        let damping = self.config.damping;

        // Drag acts before any movement
        if damping {
            self.velocity *= self.config.drag;
        }

        let limits = self.viewport.limits(self.config.radius);

        // Horizontal: no acceleration, so overshoot reflects directly
        self.position.x += self.velocity.x;
        let horizontal = Wall::crossed_horizontal(self.position.x, limits.x);
        if let Some(wall) = horizontal {
            let (x, vx, reflections) = fold_into(self.position.x, self.velocity.x, limits.x);
            self.position.x = x;
            self.velocity.x = self.bounce_damped(vx, reflections);
            log::debug!("Tick {}: {:?} wall bounce, vx {:.3}", self.tick, wall, self.velocity.x);
        }

        let (vertical, came_to_rest) = self.step_vertical(limits);

        let report = StepReport {
            horizontal,
            vertical,
            came_to_rest,
        };
        if report.bounced() {
            self.recolor();
        }
        self.tick += 1;
        report
    }

    /// Vertical half of a step. Returns the motion and whether the rest guard fired.
    fn step_vertical(&mut self, limits: DVec2) -> (VerticalMotion, bool) {
        if self.resting {
            return (VerticalMotion::Resting, false);
        }

        let a = self.config.gravity;
        let y_pre = self.position.y;
        let u = self.velocity.y;
        let tentative = y_pre + u + a / 2.0;

        let Some(wall) = Wall::crossed_vertical(tentative, limits.y) else {
            self.position.y = tentative;
            self.velocity.y += a;
            return (VerticalMotion::NormalMove, false);
        };

        let boundary = wall.boundary(limits);
        match resolve_vertical(y_pre, u, a, wall, boundary) {
            VerticalResolution::Bounced { y, vy } => {
                // A short viewport can carry the rebound past the opposite wall
                let (y, vy, extra) = fold_into(y, vy, limits.y);
                self.position.y = y;
                self.velocity.y = self.bounce_damped(vy, 1 + extra);
                log::debug!("Tick {}: {:?} bounce, vy {:.3}", self.tick, wall, self.velocity.y);
                let motion = match wall {
                    Wall::Ceiling => VerticalMotion::BouncedAtCeiling,
                    _ => VerticalMotion::BouncedAtFloor,
                };
                (motion, false)
            }
            VerticalResolution::Degenerate => {
                self.resting = true;
                self.velocity.y = 0.0;
                self.position.y = boundary;
                log::info!("Tick {}: ball came to rest at {:?} (y = {})", self.tick, wall, boundary);
                (VerticalMotion::Resting, true)
            }
        }
    }

    /// Apply bounce damping once per wall contact
    fn bounce_damped(&self, vel: f64, contacts: u32) -> f64 {
        if self.config.damping {
            vel * self.config.bounce_damping.powi(contacts as i32)
        } else {
            vel
        }
    }
}
