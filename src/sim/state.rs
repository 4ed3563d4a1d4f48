//! Simulation data types
//!
//! Plain data shared between the simulator and whatever renders it.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Size of the surface the ball bounces inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest legal top-left corner for a ball of the given radius.
    ///
    /// The ball's position is the corner of its bounding box, so the far
    /// walls sit one diameter in from the edges.
    #[inline]
    pub fn limits(&self, radius: f64) -> DVec2 {
        DVec2::new(self.width - 2.0 * radius, self.height - 2.0 * radius)
    }

    /// The ball needs room to move on both axes
    pub fn check_fits(&self, radius: f64) -> ConfigResult<()> {
        let diameter = 2.0 * radius;
        if self.width <= diameter || self.height <= diameter {
            return Err(ConfigError::ViewportTooSmall {
                width: self.width,
                height: self.height,
                diameter,
            });
        }
        Ok(())
    }

    /// Clamp a position into `[0, limits]` on both axes
    pub fn clamp(&self, pos: DVec2, radius: f64) -> DVec2 {
        pos.clamp(DVec2::ZERO, self.limits(radius).max(DVec2::ZERO))
    }

    /// Whether `pos` is a legal position for a ball of the given radius
    pub fn contains(&self, pos: DVec2, radius: f64) -> bool {
        let limits = self.limits(radius);
        (0.0..=limits.x).contains(&pos.x) && (0.0..=limits.y).contains(&pos.y)
    }
}

/// Ball fill color, reassigned on every bounce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random opaque color
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// RGBA with full alpha, as a renderer expects it
    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Render-facing copy of the simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Completed ticks
    pub tick: u64,
    pub position: DVec2,
    pub velocity: DVec2,
    /// Effective gravity (0 while resting)
    pub gravity: f64,
    pub resting: bool,
    pub radius: f64,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_viewport_limits() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.limits(50.0), DVec2::new(700.0, 500.0));
    }

    #[test]
    fn test_viewport_contains_edges() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(viewport.contains(DVec2::ZERO, 50.0));
        assert!(viewport.contains(DVec2::new(700.0, 500.0), 50.0));
        assert!(!viewport.contains(DVec2::new(700.1, 0.0), 50.0));
        assert!(!viewport.contains(DVec2::new(0.0, -0.1), 50.0));
    }

    #[test]
    fn test_viewport_fits() {
        assert!(Viewport::new(800.0, 600.0).check_fits(50.0).is_ok());
        assert!(matches!(
            Viewport::new(100.0, 600.0).check_fits(50.0),
            Err(ConfigError::ViewportTooSmall { .. })
        ));
        assert!(Viewport::new(800.0, 99.0).check_fits(50.0).is_err());
    }

    #[test]
    fn test_viewport_clamp() {
        let viewport = Viewport::new(400.0, 300.0);
        let clamped = viewport.clamp(DVec2::new(750.0, -20.0), 50.0);
        assert_eq!(clamped, DVec2::new(300.0, 0.0));
    }

    #[test]
    fn test_random_color_in_unit_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let c = Color::random(&mut rng);
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&channel));
            }
            assert_eq!(c.to_rgba()[3], 1.0);
        }
    }
}
