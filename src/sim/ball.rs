//! The ball: integration, wall reflection, paddle contact, goal detection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::glow::{GlowEffect, WALL_GLOW};
use super::paddle::{Paddle, Side};
use super::state::RngState;
use crate::consts::*;
use crate::renderer::{Rgba, Surface};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(rng: &mut RngState) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.reset(rng);
        ball
    }

    /// Re-center with base speed, random horizontal direction, moving down
    pub fn reset(&mut self, rng: &mut RngState) {
        self.pos = Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0);
        self.radius = BALL_RADIUS;
        let vx = if rng.coin_flip() {
            BALL_BASE_SPEED
        } else {
            -BALL_BASE_SPEED
        };
        self.vel = Vec2::new(vx, BALL_BASE_SPEED);
    }

    /// One Euler step. Reflects off the top/bottom edges without pushing the
    /// ball back inside, and returns the bounce glow if it reflected.
    pub fn move_step(&mut self) -> Option<GlowEffect> {
        self.pos += self.vel;

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= BOARD_HEIGHT {
            self.vel.y = -self.vel.y;
            return Some(GlowEffect::new(self.pos, WALL_GLOW));
        }
        None
    }

    /// Whether the ball currently touches the paddle. Horizontal extent uses
    /// the full radius; vertical test uses only the ball center.
    pub fn touches(&self, paddle: &Paddle) -> bool {
        self.pos.x - self.radius < paddle.right()
            && self.pos.x + self.radius > paddle.left()
            && self.pos.y > paddle.top()
            && self.pos.y < paddle.bottom()
    }

    /// Bounce off a paddle: reverse and boost horizontal speed, flash the
    /// paddle, and return the contact glow in the paddle's team color
    pub fn check_collision(&mut self, paddle: &mut Paddle, now_ms: f64) -> Option<GlowEffect> {
        if !self.touches(paddle) {
            return None;
        }
        self.vel.x *= -PADDLE_BOOST;
        paddle.flash(now_ms);
        log::debug!(
            "{:?} paddle hit, ball speed x = {:.3}",
            paddle.side,
            self.vel.x.abs()
        );
        Some(GlowEffect::new(self.pos, paddle.side.contact_glow()))
    }

    /// If the ball reached a side edge, reset it and return the side that
    /// scores
    pub fn check_out_of_bounds(&mut self, rng: &mut RngState) -> Option<Side> {
        let scorer = if self.pos.x - self.radius <= 0.0 {
            Side::Right
        } else if self.pos.x + self.radius >= BOARD_WIDTH {
            Side::Left
        } else {
            return None;
        };
        self.reset(rng);
        Some(scorer)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(Rgba::WHITE);
        surface.fill_circle(self.pos, self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: BALL_RADIUS,
        }
    }

    #[test]
    fn test_reset_centers_ball() {
        let mut rng = RngState::new(7);
        let mut ball = ball_at(3.0, 3.0, 9.0, -9.0);
        ball.reset(&mut rng);

        assert_eq!(ball.pos, Vec2::new(800.0, 425.0));
        assert_eq!(ball.vel.x.abs(), BALL_BASE_SPEED);
        assert_eq!(ball.vel.y, BALL_BASE_SPEED);
    }

    #[test]
    fn test_reset_direction_varies() {
        let mut rng = RngState::new(42);
        let mut ball = Ball::new(&mut rng);
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..64 {
            ball.reset(&mut rng);
            if ball.vel.x > 0.0 {
                saw_right = true;
            } else {
                saw_left = true;
            }
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn test_bottom_wall_reflects() {
        let mut ball = ball_at(400.0, 843.0, 2.0, 2.0);
        let glow = ball.move_step().expect("wall glow");

        assert_eq!(ball.vel.y, -2.0);
        // No positional correction
        assert_eq!(ball.pos, Vec2::new(402.0, 845.0));
        assert_eq!(glow.pos, ball.pos);
        assert_eq!(glow.rgb, WALL_GLOW);
    }

    #[test]
    fn test_top_wall_reflects() {
        let mut ball = ball_at(400.0, 9.0, -2.0, -2.0);
        let glow = ball.move_step().expect("wall glow");

        assert_eq!(ball.vel, Vec2::new(-2.0, 2.0));
        assert_eq!(ball.pos, Vec2::new(398.0, 7.0));
        assert_eq!(glow.pos, ball.pos);
        assert_eq!(glow.rgb, WALL_GLOW);

        // Next step heads back into the board without a second bounce
        assert!(ball.move_step().is_none());
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_free_flight_has_no_glow() {
        let mut ball = ball_at(400.0, 400.0, 2.0, 2.0);
        assert!(ball.move_step().is_none());
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_paddle_hit_boosts_and_flashes() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.y = 400.0;
        paddle.color = Rgba::WHITE;
        let mut ball = ball_at(25.0, 430.0, -2.0, 2.0);

        let glow = ball.check_collision(&mut paddle, 0.0).expect("contact");
        assert!((ball.vel.x - 2.2).abs() < 1e-6);
        assert_eq!(glow.rgb, [135, 206, 235]);
        assert_eq!(paddle.color, Rgba::SKY_BLUE);
        assert!(paddle.flash_revert.is_pending());
    }

    #[test]
    fn test_contact_glow_uses_side_color() {
        let mut paddle = Paddle::new(Side::Right);
        paddle.y = 400.0;
        let mut ball = ball_at(1575.0, 420.0, 2.0, 2.0);

        let glow = ball.check_collision(&mut paddle, 0.0).expect("contact");
        assert_eq!(glow.rgb, [240, 128, 128]);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_vertical_test_uses_center_only() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.y = 400.0;
        // Ball edge overlaps the paddle top but its center is above it
        let mut ball = ball_at(25.0, 395.0, -2.0, 2.0);
        assert!(ball.check_collision(&mut paddle, 0.0).is_none());
        assert_eq!(ball.vel.x, -2.0);
    }

    #[test]
    fn test_left_goal_scores_for_right() {
        let mut rng = RngState::new(1);
        let mut ball = ball_at(5.0, 400.0, -2.0, 2.0);

        assert_eq!(ball.check_out_of_bounds(&mut rng), Some(Side::Right));
        assert_eq!(ball.pos, Vec2::new(800.0, 425.0));
        assert_eq!(ball.vel.x.abs(), BALL_BASE_SPEED);
    }

    #[test]
    fn test_right_goal_scores_for_left() {
        let mut rng = RngState::new(1);
        let mut ball = ball_at(1595.0, 400.0, 2.0, 2.0);
        assert_eq!(ball.check_out_of_bounds(&mut rng), Some(Side::Left));
    }

    #[test]
    fn test_in_bounds_no_score() {
        let mut rng = RngState::new(1);
        let mut ball = ball_at(800.0, 400.0, 2.0, 2.0);
        assert_eq!(ball.check_out_of_bounds(&mut rng), None);
        assert_eq!(ball.pos, Vec2::new(800.0, 400.0));
    }

    proptest! {
        #[test]
        fn prop_speed_grows_per_hit(hits in 0u32..12) {
            let mut paddle = Paddle::new(Side::Left);
            paddle.y = 400.0;
            let mut ball = ball_at(25.0, 430.0, -BALL_BASE_SPEED, 0.0);
            for _ in 0..hits {
                ball.check_collision(&mut paddle, 0.0);
            }
            let expected = BALL_BASE_SPEED * PADDLE_BOOST.powi(hits as i32);
            prop_assert!((ball.vel.x.abs() - expected).abs() < 1e-3 * expected);
        }

        #[test]
        fn prop_reflection_keeps_ball_near_board(
            y in 10.0f32..840.0,
            vy in prop::sample::select(vec![-2.0f32, 2.0]),
            frames in 1usize..2000,
        ) {
            let mut ball = ball_at(800.0, y, 0.0, vy);
            for _ in 0..frames {
                ball.move_step();
                prop_assert!(ball.pos.y - ball.radius >= -BALL_BASE_SPEED);
                prop_assert!(ball.pos.y + ball.radius <= BOARD_HEIGHT + BALL_BASE_SPEED);
            }
        }
    }
}
