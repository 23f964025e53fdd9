//! Ball motion
//!
//! One tick moves the ball by exactly its velocity. No delta time, no easing:
//! the tick period and the step are coupled constants.

use super::state::Ball;

/// Move the ball one tick along its velocity
#[inline]
pub fn advance_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_STEP;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_three_ticks_from_origin() {
        let mut ball = Ball::new(Vec2::ZERO);
        for _ in 0..3 {
            advance_ball(&mut ball);
        }
        assert_eq!(ball.pos, Vec2::new(9.0, 9.0));
    }

    proptest! {
        #[test]
        fn displacement_is_n_steps(
            x in -500i32..500,
            y in -500i32..500,
            flip_x: bool,
            flip_y: bool,
            n in 0u32..200,
        ) {
            let mut ball = Ball::new(Vec2::new(x as f32, y as f32));
            if flip_x { ball.vel.x = -ball.vel.x; }
            if flip_y { ball.vel.y = -ball.vel.y; }
            let start = ball.pos;
            let vel = ball.vel;

            for _ in 0..n {
                advance_ball(&mut ball);
            }

            prop_assert_eq!(ball.vel, vel);
            prop_assert_eq!(ball.vel.x.abs(), BALL_STEP);
            prop_assert_eq!(ball.vel.y.abs(), BALL_STEP);
            prop_assert_eq!(ball.pos, start + vel * n as f32);
        }
    }
}
