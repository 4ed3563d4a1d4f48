//! Wall collision response
//!
//! Horizontal motion has no acceleration, so a bounce is a plain reflection of
//! the overshoot, repeated if the move spans the whole viewport. Vertical
//! motion is under constant gravity, so the tick is split at the instant the
//! ball reaches the wall: the first part runs with the incoming velocity, the
//! second with the reflected one, and gravity acts across both.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Overshoot past a wall small enough to count as floating-point noise
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// One of the four viewport walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    /// x = 0
    Left,
    /// x = width - 2r
    Right,
    /// y = 0
    Floor,
    /// y = height - 2r
    Ceiling,
}

impl Wall {
    /// Position coordinate of this wall, given the viewport limits
    #[inline]
    pub fn boundary(self, limits: DVec2) -> f64 {
        match self {
            Wall::Left | Wall::Floor => 0.0,
            Wall::Right => limits.x,
            Wall::Ceiling => limits.y,
        }
    }

    /// Sign of a velocity heading into this wall
    #[inline]
    pub fn approach_sign(self) -> f64 {
        match self {
            Wall::Left | Wall::Floor => -1.0,
            Wall::Right | Wall::Ceiling => 1.0,
        }
    }

    /// How far `coord` lies past this wall (positive = outside)
    #[inline]
    pub fn overshoot(self, coord: f64, boundary: f64) -> f64 {
        (coord - boundary) * self.approach_sign()
    }

    /// Which horizontal wall, if any, `x` has crossed
    pub fn crossed_horizontal(x: f64, limit: f64) -> Option<Wall> {
        if x < 0.0 {
            Some(Wall::Left)
        } else if x > limit {
            Some(Wall::Right)
        } else {
            None
        }
    }

    /// Which vertical wall, if any, `y` has crossed
    pub fn crossed_vertical(y: f64, limit: f64) -> Option<Wall> {
        if y < 0.0 {
            Some(Wall::Floor)
        } else if y > limit {
            Some(Wall::Ceiling)
        } else {
            None
        }
    }
}

/// Fold a coordinate that left `[0, limit]` back inside
///
/// Reflects off both walls as often as the overshoot requires, so a move
/// longer than the free span still ends inside. A single reflection off the
/// far wall is exactly `2 * limit - coord`, off the near wall `-coord`.
/// Returns the folded coordinate, the velocity (negated for an odd number of
/// reflections) and the number of reflections.
pub fn fold_into(coord: f64, vel: f64, limit: f64) -> (f64, f64, u32) {
    if (0.0..=limit).contains(&coord) {
        return (coord, vel, 0);
    }
    if limit <= 0.0 {
        return (0.0, -vel, 1);
    }

    let k = (coord / limit).floor();
    let (folded, vel) = if k.rem_euclid(2.0) == 0.0 {
        (coord - k * limit, vel)
    } else {
        ((k + 1.0) * limit - coord, -vel)
    };
    (folded.clamp(0.0, limit), vel, k.abs() as u32)
}

/// Outcome of an analytic vertical bounce
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalResolution {
    /// Bounce resolved; position and velocity at the end of the tick
    Bounced { y: f64, vy: f64 },
    /// The single-crossing model cannot describe this bounce
    Degenerate,
}

/// Resolve a vertical bounce within one tick
///
/// `y_pre` and `u` are position and velocity at the start of the tick, `a` is
/// gravity. The caller has already established that a full tick's move
/// crosses `wall`, which sits at `boundary`.
///
/// The crossing speed comes from `v² = u² + 2as` with `s = boundary - y_pre`.
/// A negative discriminant means the ball turns around before reaching the
/// wall; a reflected path that ends beyond the wall means it came back through
/// within the same tick. Both are reported as [`VerticalResolution::Degenerate`].
pub fn resolve_vertical(y_pre: f64, u: f64, a: f64, wall: Wall, boundary: f64) -> VerticalResolution {
    if a == 0.0 {
        // Uniform motion: the a -> 0 limit is a plain reflection
        return VerticalResolution::Bounced {
            y: 2.0 * boundary - (y_pre + u),
            vy: -u,
        };
    }

    let s = boundary - y_pre;
    let discriminant = u * u + 2.0 * a * s;
    if discriminant < 0.0 {
        return VerticalResolution::Degenerate;
    }

    let v_bounce = wall.approach_sign() * discriminant.sqrt();
    let t_cross = (v_bounce - u) / a;
    let t_rest = 1.0 - t_cross;
    let v_post = -v_bounce + a * t_rest;
    let y = boundary + (v_post * v_post - v_bounce * v_bounce) / (2.0 * a);

    let overshoot = wall.overshoot(y, boundary);
    if overshoot > BOUNDARY_EPSILON {
        return VerticalResolution::Degenerate;
    }
    let y = if overshoot > 0.0 { boundary } else { y };

    VerticalResolution::Bounced { y, vy: v_post }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn bounced(res: VerticalResolution) -> (f64, f64) {
        match res {
            VerticalResolution::Bounced { y, vy } => (y, vy),
            VerticalResolution::Degenerate => panic!("expected a bounce, got {res:?}"),
        }
    }

    #[test]
    fn test_fold_right_wall() {
        // Moved to 720 past a wall at 700
        let (x, vx, n) = fold_into(720.0, 20.0, 700.0);
        assert_eq!(x, 2.0 * 700.0 - 720.0);
        assert_eq!(vx, -20.0);
        assert_eq!(n, 1);
    }

    #[test]
    fn test_fold_left_wall() {
        let (x, vx, n) = fold_into(-15.0, -25.0, 700.0);
        assert_eq!(x, 15.0);
        assert_eq!(vx, 25.0);
        assert_eq!(n, 1);
    }

    #[test]
    fn test_fold_inside_is_untouched() {
        assert_eq!(fold_into(350.0, 4.0, 700.0), (350.0, 4.0, 0));
        assert_eq!(fold_into(0.0, -4.0, 700.0), (0.0, -4.0, 0));
        assert_eq!(fold_into(700.0, 4.0, 700.0), (700.0, 4.0, 0));
    }

    #[test]
    fn test_fold_move_longer_than_span() {
        // Span of 20, unfolded position 60 is three spans out: ends on the far
        // wall heading back
        let (x, vx, n) = fold_into(60.0, 50.0, 20.0);
        assert!((0.0..=20.0).contains(&x));
        assert_eq!(x, 20.0);
        assert_eq!(vx, -50.0);
        assert_eq!(n, 3);

        // 45 in a span of 20: far wall at 20, near wall at 0, lands at 5 heading +
        let (x, vx, n) = fold_into(45.0, 40.0, 20.0);
        assert!((x - 5.0).abs() < EPS);
        assert_eq!(vx, 40.0);
        assert_eq!(n, 2);

        // Same thing through the near wall
        let (x, vx, n) = fold_into(-45.0, -40.0, 20.0);
        assert!((x - 5.0).abs() < EPS);
        assert_eq!(vx, 40.0);
        assert_eq!(n, 3);
    }

    #[test]
    fn test_crossed_walls() {
        assert_eq!(Wall::crossed_horizontal(-1.0, 700.0), Some(Wall::Left));
        assert_eq!(Wall::crossed_horizontal(701.0, 700.0), Some(Wall::Right));
        assert_eq!(Wall::crossed_horizontal(700.0, 700.0), None);
        assert_eq!(Wall::crossed_vertical(-0.5, 500.0), Some(Wall::Floor));
        assert_eq!(Wall::crossed_vertical(500.5, 500.0), Some(Wall::Ceiling));
        assert_eq!(Wall::crossed_vertical(0.0, 500.0), None);
    }

    #[test]
    fn test_floor_bounce_hand_computed() {
        // y=0.5, u=-0.5, a=-2: crosses at v=-1.5 halfway through the tick
        let (y, vy) = bounced(resolve_vertical(0.5, -0.5, -2.0, Wall::Floor, 0.0));
        assert!((vy - 0.5).abs() < EPS);
        assert!((y - 0.5).abs() < EPS);
    }

    #[test]
    fn test_floor_bounce_conserves_energy() {
        let (y_pre, u, a) = (10.0, -20.0, -2.0);
        let (y, vy) = bounced(resolve_vertical(y_pre, u, a, Wall::Floor, 0.0));
        assert!(vy > 0.0);
        assert!(y >= 0.0);
        let before = u * u - 2.0 * a * y_pre;
        let after = vy * vy - 2.0 * a * y;
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_ceiling_bounce_conserves_energy() {
        let (y_pre, u, a) = (490.0, 15.0, -2.0);
        let (y, vy) = bounced(resolve_vertical(y_pre, u, a, Wall::Ceiling, 500.0));
        assert!(vy < 0.0);
        assert!(y <= 500.0);
        let before = u * u - 2.0 * a * y_pre;
        let after = vy * vy - 2.0 * a * y;
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_crossing_velocity_matches_incoming_direction() {
        // Falling: crossing velocity is negative, reflected is positive
        let (_, vy) = bounced(resolve_vertical(3.0, -10.0, -2.0, Wall::Floor, 0.0));
        assert!(vy > 0.0);
        // Rising into the ceiling: reflected velocity points down
        let (_, vy) = bounced(resolve_vertical(495.0, 10.0, -2.0, Wall::Ceiling, 500.0));
        assert!(vy < 0.0);
    }

    #[test]
    fn test_tiny_bounce_is_degenerate() {
        // Sitting on the floor barely moving: the reflected arc re-enters the
        // floor before the tick ends
        let res = resolve_vertical(0.0, -0.1, -2.0, Wall::Floor, 0.0);
        assert_eq!(res, VerticalResolution::Degenerate);
    }

    #[test]
    fn test_negative_discriminant_is_degenerate() {
        // Rising at 1 unit/tick under -2 gravity peaks 0.25 above the start,
        // far short of a ceiling 10 away
        let res = resolve_vertical(490.0, 1.0, -2.0, Wall::Ceiling, 500.0);
        assert_eq!(res, VerticalResolution::Degenerate);
    }

    #[test]
    fn test_zero_gravity_reflects() {
        let (y, vy) = bounced(resolve_vertical(495.0, 10.0, 0.0, Wall::Ceiling, 500.0));
        assert_eq!(y, 495.0);
        assert_eq!(vy, -10.0);
        assert!(y.is_finite() && vy.is_finite());
    }

    #[test]
    fn test_wall_boundaries() {
        let limits = DVec2::new(700.0, 500.0);
        assert_eq!(Wall::Left.boundary(limits), 0.0);
        assert_eq!(Wall::Right.boundary(limits), 700.0);
        assert_eq!(Wall::Floor.boundary(limits), 0.0);
        assert_eq!(Wall::Ceiling.boundary(limits), 500.0);
    }
}
