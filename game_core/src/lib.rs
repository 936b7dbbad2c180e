//! Deterministic two-paddle ball simulation.
//!
//! Physics advances in whole ticks with velocities in pixels per tick; nothing
//! here knows about frame rates or displays. The only randomness is the serve
//! angle, drawn from a seeded RNG.

pub mod arena;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    hits: &mut Hits,
    events: &mut Events,
    queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, queue);

    // 2. Move paddles based on intents
    move_paddles(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then paddles)
    check_collisions(world, config, hits, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
