use crate::{Ball, Config, Events, Hits, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top/bottom walls, then off the paddles
pub fn check_collisions(world: &mut World, config: &Config, hits: &mut Hits, events: &mut Events) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, config, events);

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                hits.increment(paddle.side);
                match paddle.side {
                    Side::Left => events.left_hit = true,
                    Side::Right => events.right_hit = true,
                }
                log::trace!("{:?} paddle hit, ball vel now {}", paddle.side, ball.vel);
            }
        }
    }
}

fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let floor = config.arena_height - radius;

    if ball.pos.y <= radius && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    } else if ball.pos.y >= floor && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }

    // Keep the whole circle inside the arena
    ball.pos.y = ball.pos.y.clamp(radius, floor);
}

/// Returns true when this tick registers a new hit against `paddle`
fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let radius = config.ball_radius;
    let left = config.paddle_x(paddle.side);
    let right = left + config.paddle_width;
    let top = paddle.y;
    let bottom = paddle.y + config.paddle_height;

    let overlaps = ball.pos.x + radius >= left
        && ball.pos.x - radius <= right
        && ball.pos.y + radius >= top
        && ball.pos.y - radius <= bottom;

    if !overlaps {
        // Separated: the next contact with this paddle counts again
        if ball.contact == Some(paddle.side) {
            ball.contact = None;
        }
        return false;
    }

    // Only a ball travelling into the paddle bounces, and only once per contact
    let approaching = ball.vel.x * paddle.side.heading() > 0.0;
    if !approaching || ball.contact == Some(paddle.side) {
        return false;
    }

    // Relative contact point: -1 at the top edge, 0 at the centre, 1 at the bottom edge
    let half_height = config.paddle_height / 2.0;
    let offset = ((ball.pos.y - paddle.center_y(config)) / half_height).clamp(-1.0, 1.0);

    ball.vel.x = -ball.vel.x;
    ball.vel.y = offset * config.ball_speed;

    // Push the ball back onto the paddle face
    ball.pos.x = match paddle.side {
        Side::Left => right + radius,
        Side::Right => left - radius,
    };
    ball.contact = Some(paddle.side);

    true
}
