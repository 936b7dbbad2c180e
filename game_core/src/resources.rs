use crate::{Direction, Side};

/// Points won by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// First side (left checked first) whose score has reached `cap`
    pub fn reached(&self, cap: u32) -> Option<Side> {
        if self.left >= cap {
            Some(Side::Left)
        } else if self.right >= cap {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Paddle contacts registered by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hits {
    pub left: u32,
    pub right: u32,
}

impl Hits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// First side (left checked first) whose hit count has reached `cap`
    pub fn reached(&self, cap: u32) -> Option<Side> {
        if self.left >= cap {
            Some(Side::Left)
        } else if self.right >= cap {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator, used only when serving
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::Params::DEFAULT_SEED)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub left_hit: bool,
    pub right_hit: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Paddle moves queued for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, Direction)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, dir: Direction) {
        self.inputs.push((side, dir));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_reached() {
        let mut score = Score::new();
        assert_eq!(score.reached(1), None);
        score.increment(Side::Right);
        assert_eq!(score.reached(1), Some(Side::Right));
        assert_eq!(score.reached(2), None, "No side below threshold");
    }

    #[test]
    fn test_hits_reached_prefers_left() {
        let hits = Hits { left: 5, right: 5 };
        assert_eq!(hits.reached(5), Some(Side::Left));
        assert_eq!(hits.get(Side::Right), 5);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: false,
            left_hit: true,
            right_hit: true,
            ball_hit_wall: true,
        };
        assert_eq!(events.scored(), Some(Side::Left));

        events.clear();

        assert_eq!(events, Events::default());
        assert_eq!(events.scored(), None);
    }

    #[test]
    fn test_input_queue_push_and_clear() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, Direction::Up);
        queue.push_input(Side::Right, Direction::Down);

        assert_eq!(queue.inputs.len(), 2);
        assert_eq!(queue.inputs[1], (Side::Right, Direction::Down));

        queue.clear();
        assert!(queue.inputs.is_empty());
    }
}
