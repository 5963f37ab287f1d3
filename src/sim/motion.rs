//! Ball motion integrator
//!
//! Each tick the displacement is computed once from the heading. Reflections
//! never recompute it: they flip the sign of the affected component before it
//! is added to the original centre, and the heading is mirrored to match.

use glam::DVec2;

use super::collision::Reflection;
use super::state::{Arena, Ball};

/// Ball centre after one tick if nothing is hit
#[inline]
pub fn tentative_step(ball: &Ball) -> DVec2 {
    ball.center + ball.heading.displacement(ball.speed())
}

/// Axis reversals caused by the arena walls (strict: touching is not a hit)
pub fn wall_reflection(next: DVec2, radius: f64, arena: &Arena) -> Reflection {
    Reflection {
        x_reversed: next.x - radius < 0.0 || next.x + radius > arena.width,
        y_reversed: next.y - radius < 0.0 || next.y + radius > arena.height,
    }
}

/// Move the ball to `next`, mirroring the displacement and heading on each
/// reversed axis.
pub fn commit(ball: &mut Ball, next: DVec2, reflection: Reflection) {
    let origin = ball.center;

    let x = if reflection.x_reversed {
        origin.x - (next.x - origin.x)
    } else {
        next.x
    };
    let y = if reflection.y_reversed {
        origin.y - (next.y - origin.y)
    } else {
        next.y
    };
    ball.center = DVec2::new(x, y);

    if reflection.x_reversed {
        ball.heading = ball.heading.reflect_x();
    }
    if reflection.y_reversed {
        ball.heading = ball.heading.reflect_y();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::heading::Heading;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn ball_at(x: f64, y: f64, heading: f64) -> Ball {
        Ball::new(DVec2::new(x, y), 3.0, Heading::new(heading), 5.0)
    }

    #[test]
    fn test_tentative_step() {
        let ball = ball_at(120.0, 180.0, FRAC_PI_4);
        let next = tentative_step(&ball);
        let d = 5.0 * FRAC_PI_4.sin();
        assert!((next.x - (120.0 + d)).abs() < 1e-9);
        assert!((next.y - (180.0 - d)).abs() < 1e-9);
    }

    #[test]
    fn test_straight_wall_bounce() {
        let arena = Arena::new(240.0, 360.0);
        let mut ball = ball_at(120.0, 3.0, 0.0);
        let next = tentative_step(&ball);
        assert!(next.y < 0.0);

        let reflection = wall_reflection(next, ball.radius(), &arena);
        assert!(reflection.y_reversed);
        assert!(!reflection.x_reversed);

        commit(&mut ball, next, reflection);
        assert_eq!(ball.heading.radians(), PI - 0.0);
        assert!(ball.center.y >= 0.0);
        assert!((ball.center.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_reflection_resolves_boundary() {
        let arena = Arena::new(240.0, 360.0);
        let mut ball = ball_at(236.0, 180.0, FRAC_PI_2);
        let next = tentative_step(&ball);
        let reflection = wall_reflection(next, ball.radius(), &arena);
        assert!(reflection.x_reversed);

        // With the mirrored heading the same tentative step no longer leaves the arena
        ball.heading = ball.heading.reflect_x();
        let retry = tentative_step(&ball);
        assert!(!wall_reflection(retry, ball.radius(), &arena).x_reversed);
    }

    #[test]
    fn test_commit_without_reflection_lands_on_next() {
        let mut ball = ball_at(50.0, 50.0, 1.0);
        let next = tentative_step(&ball);
        commit(&mut ball, next, Reflection::NONE);
        assert_eq!(ball.center, next);
        assert_eq!(ball.heading.radians(), 1.0);
    }

    #[test]
    fn test_corner_commit_reverses_displacement() {
        let mut ball = ball_at(100.0, 100.0, FRAC_PI_4);
        let next = tentative_step(&ball);
        let step = next - ball.center;
        commit(
            &mut ball,
            next,
            Reflection {
                x_reversed: true,
                y_reversed: true,
            },
        );
        assert!((ball.center - (DVec2::new(100.0, 100.0) - step)).length() < 1e-9);
        // The new heading carries the ball along the reversed displacement next tick
        let following = ball.heading.displacement(ball.speed());
        assert!((following + step).length() < 1e-9);
    }

    #[test]
    fn test_speed_is_constant() {
        let arena = Arena::new(240.0, 360.0);
        let mut ball = ball_at(10.0, 10.0, 5.5);
        for _ in 0..500 {
            let next = tentative_step(&ball);
            let reflection = wall_reflection(next, ball.radius(), &arena);
            commit(&mut ball, next, reflection);
        }
        assert_eq!(ball.speed(), 5.0);
        assert!((ball.heading.displacement(ball.speed()).length() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_wall_reflection() {
        let arena = Arena::new(240.0, 360.0);
        assert_eq!(
            wall_reflection(DVec2::new(120.0, 180.0), 3.0, &arena),
            Reflection::NONE
        );
        let r = wall_reflection(DVec2::new(238.0, 180.0), 3.0, &arena);
        assert!(r.x_reversed && !r.y_reversed);
        let r = wall_reflection(DVec2::new(1.0, -1.0), 3.0, &arena);
        assert!(r.x_reversed && r.y_reversed);
        // Touching exactly does not reverse
        let r = wall_reflection(DVec2::new(3.0, 357.0), 3.0, &arena);
        assert_eq!(r, Reflection::NONE);
    }
}
