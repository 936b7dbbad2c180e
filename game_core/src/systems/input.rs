use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn queued moves into this tick's paddle intents
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        // Intents last one tick; the latest queued move for a side wins
        intent.dir = queue
            .inputs
            .iter()
            .rev()
            .find(|(side, _)| *side == paddle.side)
            .map(|(_, dir)| *dir);
    }

    queue.clear();
}
