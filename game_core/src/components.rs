use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng};

/// Which edge of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of travel toward this side's edge
    pub fn heading(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// A physical paddle move. Screen Y grows downward, so up shrinks `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Paddle component - a rectangle pinned to one side of the arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge, clamped to arena
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Shift by one tick of paddle speed, clamped inside the arena
    pub fn step(&mut self, dir: Direction, config: &Config) {
        let delta = dir.sign() as f32 * config.paddle_speed;
        self.y = config.clamp_paddle_y(self.y + delta);
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Paddle the ball is currently overlapping after a registered hit
    pub contact: Option<Side>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            contact: None,
        }
    }

    /// Re-centre the ball and serve it toward `toward` at base speed
    pub fn serve(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();
        self.contact = None;

        let angle = if config.max_serve_angle > 0.0 {
            use rand::Rng;
            rng.0
                .gen_range(-config.max_serve_angle..=config.max_serve_angle)
        } else {
            0.0
        };

        self.vel = Vec2::new(toward.heading() * angle.cos(), angle.sin()) * config.ball_speed;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Movement intent for a paddle this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: Option<Direction>,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_step_clamps_at_top() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, 2.0);
        paddle.step(Direction::Up, &config);
        assert_eq!(paddle.y, 0.0);
        paddle.step(Direction::Up, &config);
        assert_eq!(paddle.y, 0.0, "Repeated moves stay clamped");
    }

    #[test]
    fn test_paddle_step_clamps_at_bottom() {
        let config = Config::new();
        let floor = config.arena_height - config.paddle_height;
        let mut paddle = Paddle::new(Side::Right, floor - 1.0);
        paddle.step(Direction::Down, &config);
        assert_eq!(paddle.y, floor);
    }

    #[test]
    fn test_paddle_step_moves_by_speed() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, 200.0);
        paddle.step(Direction::Down, &config);
        assert_eq!(paddle.y, 204.0);
        paddle.step(Direction::Up, &config);
        paddle.step(Direction::Up, &config);
        assert_eq!(paddle.y, 196.0);
    }

    #[test]
    fn test_flat_serve_heads_toward_side() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        ball.serve(Side::Left, &config, &mut rng);
        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel, Vec2::new(-config.ball_speed, 0.0));

        ball.serve(Side::Right, &config, &mut rng);
        assert_eq!(ball.vel, Vec2::new(config.ball_speed, 0.0));
    }

    #[test]
    fn test_angled_serve_keeps_base_speed() {
        let config = Config {
            max_serve_angle: 0.6,
            ..Config::default()
        };
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        for _ in 0..20 {
            ball.serve(Side::Right, &config, &mut rng);
            assert!((ball.speed() - config.ball_speed).abs() < 1e-4);
            assert!(ball.vel.x > 0.0, "Serve must travel toward the right");
            assert!(ball.vel.y.abs() <= config.ball_speed * 0.6_f32.sin() + 1e-4);
        }
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }
}
