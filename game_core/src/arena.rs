//! One match between two paddles: owns the world and every per-match resource.

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Direction, Events, GameRng, Hits,
    InputQueue, Paddle, Score, Side,
};

/// Everything an outside observer may read after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchInfo {
    pub tick: u64,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    pub left_hits: u32,
    pub right_hits: u32,
    pub events: Events,
}

/// A single simulated match. Built fresh for every pairing and never reused.
pub struct Match {
    world: World,
    config: Config,
    score: Score,
    hits: Hits,
    events: Events,
    queue: InputQueue,
    rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
    tick: u64,
}

impl Match {
    /// Centre both paddles and serve toward the right paddle.
    /// Fails if `config` does not validate.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(&mut world, Side::Left, config.paddle_spawn_y());
        let right = create_paddle(&mut world, Side::Right, config.paddle_spawn_y());

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(Side::Right, &config, &mut rng);
        let ball = create_ball(&mut world, ball.pos, ball.vel);

        Ok(Self {
            world,
            config,
            score: Score::new(),
            hits: Hits::new(),
            events: Events::new(),
            queue: InputQueue::new(),
            rng,
            left,
            right,
            ball,
            tick: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn hits(&self) -> Hits {
        self.hits
    }

    /// Apply at most one move per side and advance physics one tick
    pub fn step(&mut self, left: Option<Direction>, right: Option<Direction>) -> MatchInfo {
        if let Some(dir) = left {
            self.queue.push_input(Side::Left, dir);
        }
        if let Some(dir) = right {
            self.queue.push_input(Side::Right, dir);
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.hits,
            &mut self.events,
            &mut self.queue,
            &mut self.rng,
        );
        self.tick += 1;

        self.info()
    }

    pub fn info(&self) -> MatchInfo {
        MatchInfo {
            tick: self.tick,
            left_paddle: self.paddle(Side::Left),
            right_paddle: self.paddle(Side::Right),
            ball: self.ball(),
            left_score: self.score.left,
            right_score: self.score.right,
            left_hits: self.hits.left,
            right_hits: self.hits.right,
            events: self.events,
        }
    }

    /// Sensor reading for one side: (own paddle y, ball y, |own paddle x - ball x|)
    pub fn observe(&self, side: Side) -> (f32, f32, f32) {
        let paddle = self.paddle(side);
        let ball = self.ball();
        let distance = (self.config.paddle_x(side) - ball.pos.x).abs();
        (paddle.y, ball.pos.y, distance)
    }

    /// Re-centre the ball and serve it toward `toward`
    pub fn serve(&mut self, toward: Side) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.serve(toward, &self.config, &mut self.rng);
        }
    }

    /// Stage the ball at an arbitrary position and velocity.
    /// The contact latch is left alone so a staged ball cannot fake a fresh hit.
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Stage a paddle; the position is clamped like any other move
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let entity = self.paddle_entity(side);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.y = self.config.clamp_paddle_y(y);
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn paddle(&self, side: Side) -> Paddle {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .map(|p| *p)
            .unwrap_or_else(|_| Paddle::new(side, self.config.paddle_spawn_y()))
    }

    fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|b| *b)
            .unwrap_or_else(|_| Ball::new(self.config.ball_spawn(), Vec2::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_is_centred() {
        let game = Match::new(Config::new(), 1).unwrap();
        let info = game.info();

        assert_eq!(info.tick, 0);
        assert_eq!(info.left_paddle.y, 200.0);
        assert_eq!(info.right_paddle.y, 200.0);
        assert_eq!(info.ball.pos, Vec2::new(350.0, 250.0));
        assert_eq!(info.ball.vel, Vec2::new(5.0, 0.0), "Opening serve goes right");
        assert_eq!((info.left_score, info.right_score), (0, 0));
        assert_eq!((info.left_hits, info.right_hits), (0, 0));
    }

    #[test]
    fn test_step_advances_one_tick() {
        let mut game = Match::new(Config::new(), 1).unwrap();
        let info = game.step(Some(Direction::Up), Some(Direction::Down));

        assert_eq!(info.tick, 1);
        assert_eq!(info.left_paddle.y, 196.0);
        assert_eq!(info.right_paddle.y, 204.0);
        assert_eq!(info.ball.pos, Vec2::new(355.0, 250.0));
    }

    #[test]
    fn test_no_action_leaves_paddles() {
        let mut game = Match::new(Config::new(), 1).unwrap();
        let info = game.step(None, None);
        assert_eq!(info.left_paddle.y, 200.0);
        assert_eq!(info.right_paddle.y, 200.0);
    }

    #[test]
    fn test_observe_reports_sensor_triple() {
        let game = Match::new(Config::new(), 1).unwrap();
        assert_eq!(game.observe(Side::Left), (200.0, 250.0, 340.0));
        assert_eq!(game.observe(Side::Right), (200.0, 250.0, 320.0));
    }

    #[test]
    fn test_place_paddle_clamps() {
        let mut game = Match::new(Config::new(), 1).unwrap();
        game.place_paddle(Side::Left, -50.0);
        game.place_paddle(Side::Right, 900.0);
        let info = game.info();
        assert_eq!(info.left_paddle.y, 0.0);
        assert_eq!(info.right_paddle.y, 400.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            paddle_height: 600.0,
            ..Config::default()
        };
        assert!(matches!(
            Match::new(config, 1),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_serve_recentres_ball() {
        let mut game = Match::new(Config::new(), 1).unwrap();
        game.place_ball(Vec2::new(100.0, 30.0), Vec2::new(-5.0, -5.0));
        game.serve(Side::Left);
        let ball = game.info().ball;
        assert_eq!(ball.pos, Vec2::new(350.0, 250.0));
        assert_eq!(ball.vel, Vec2::new(-5.0, 0.0));
    }
}
