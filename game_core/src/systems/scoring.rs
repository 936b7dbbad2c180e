use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Award a point when the ball leaves the arena past a paddle
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let conceded = if ball.pos.x < 0.0 {
            Side::Left
        } else if ball.pos.x > config.arena_width {
            Side::Right
        } else {
            continue;
        };

        let scorer = conceded.opponent();
        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::trace!(
            "{:?} scores ({}-{}), serving toward {:?}",
            scorer,
            score.left,
            score.right,
            conceded
        );

        ball.serve(conceded, config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Score, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    fn only_ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .map(|(_e, ball)| *ball)
            .next()
            .unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 250.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.arena_width + 0.1, 250.0),
            Vec2::new(5.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_reserved_toward_conceding_side() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 40.0), Vec2::new(-5.0, 3.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let ball = only_ball(&world);
        assert_eq!(ball.pos, config.ball_spawn(), "Ball should reset to center");
        assert!(ball.vel.x < 0.0, "Serve heads toward the side that conceded");
        assert!((ball.speed() - config.ball_speed).abs() < 1e-6);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 250.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "On the boundary is still in bounds");
        assert_eq!(events.scored(), None);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(
            &mut world,
            Vec2::new(config.arena_width + 1.0, 250.0),
            Vec2::new(5.0, 0.0),
        );
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
        events.clear();

        world.get::<&mut Ball>(entity).unwrap().pos.x = config.arena_width + 1.0;
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
