//! Decision providers
//!
//! The harness only ever talks to [`Agent`]; it never asks what kind of agent
//! it is driving.

use proto::{Decision, DecisionError, Observation};

/// Anything that turns a per-tick observation into one of three decisions
pub trait Agent {
    /// Decide what to do this tick
    fn decide(&mut self, observation: &Observation) -> Result<Decision, DecisionError>;

    /// Clear per-match state. Called before every match.
    fn reset(&mut self) {}

    /// Name for logs
    fn name(&self) -> &str {
        "agent"
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn decide(&mut self, observation: &Observation) -> Result<Decision, DecisionError> {
        (**self).decide(observation)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Never moves
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Agent for Idle {
    fn decide(&mut self, _observation: &Observation) -> Result<Decision, DecisionError> {
        Ok(Decision::Stay)
    }

    fn name(&self) -> &str {
        "idle"
    }
}

/// Gives the same answer every tick
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub Decision);

impl Agent for Constant {
    fn decide(&mut self, _observation: &Observation) -> Result<Decision, DecisionError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "constant"
    }
}

/// Chases the ball with the paddle centre
#[derive(Debug, Clone, Copy)]
pub struct Tracker {
    pub paddle_height: f32,
    /// No move while the ball is within this distance of the paddle centre
    pub dead_zone: f32,
}

impl Tracker {
    pub fn new(paddle_height: f32) -> Self {
        Self {
            paddle_height,
            dead_zone: 4.0,
        }
    }
}

impl Agent for Tracker {
    fn decide(&mut self, observation: &Observation) -> Result<Decision, DecisionError> {
        let centre = observation.own_y + self.paddle_height / 2.0;
        let gap = observation.ball_y - centre;
        Ok(if gap < -self.dead_zone {
            Decision::Up
        } else if gap > self.dead_zone {
            Decision::Down
        } else {
            Decision::Stay
        })
    }

    fn name(&self) -> &str {
        "tracker"
    }
}

/// Plays back raw decision codes, looping when it runs out
#[derive(Debug, Clone, Default)]
pub struct Replay {
    codes: Vec<u8>,
    cursor: usize,
}

impl Replay {
    pub fn new(codes: Vec<u8>) -> Self {
        Self { codes, cursor: 0 }
    }
}

impl Agent for Replay {
    fn decide(&mut self, _observation: &Observation) -> Result<Decision, DecisionError> {
        let Some(&code) = self.codes.get(self.cursor) else {
            return Ok(Decision::Stay);
        };
        self.cursor = (self.cursor + 1) % self.codes.len();
        Decision::from_code(code)
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn name(&self) -> &str {
        "replay"
    }
}
