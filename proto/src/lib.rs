//! Boundary types shared with external collaborators
//!
//! Decision providers read [`Observation`]s and answer with a [`Decision`];
//! renderers receive [`Frame`]s, encoded with postcard.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Decisions
// ============================================================================

/// What a decision provider sees each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Own paddle's top edge
    pub own_y: f32,
    /// Ball centre
    pub ball_y: f32,
    /// Horizontal distance between own paddle and ball
    pub distance: f32,
}

impl Observation {
    pub fn new(own_y: f32, ball_y: f32, distance: f32) -> Self {
        Self {
            own_y,
            ball_y,
            distance,
        }
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.own_y, self.ball_y, self.distance]
    }
}

/// One of the three per-tick decision codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Code 0
    Stay,
    /// Code 1
    Up,
    /// Code 2
    Down,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecisionError {
    #[error("decision code {0} is not one of 0, 1, 2")]
    UnknownCode(u8),

    #[error("expected 3 decision outputs, got {0}")]
    Arity(usize),

    #[error("decision output {index} is not a number")]
    NotANumber { index: usize },

    #[error("no clear maximum: outputs {first} and {second} tie at {value}")]
    Tie {
        first: usize,
        second: usize,
        value: f32,
    },
}

impl Decision {
    pub const ALL: [Decision; 3] = [Decision::Stay, Decision::Up, Decision::Down];

    pub fn code(self) -> u8 {
        match self {
            Decision::Stay => 0,
            Decision::Up => 1,
            Decision::Down => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, DecisionError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(DecisionError::UnknownCode(code))
    }

    /// Pick the decision whose output is strictly largest.
    /// Ties and NaNs are rejected instead of guessed at.
    pub fn from_outputs(outputs: &[f32]) -> Result<Self, DecisionError> {
        if outputs.len() != Self::ALL.len() {
            return Err(DecisionError::Arity(outputs.len()));
        }
        if let Some(index) = outputs.iter().position(|v| v.is_nan()) {
            return Err(DecisionError::NotANumber { index });
        }

        let mut best = 0;
        for index in 1..outputs.len() {
            if outputs[index] > outputs[best] {
                best = index;
            }
        }
        if let Some(second) = (0..outputs.len()).find(|&i| i != best && outputs[i] == outputs[best])
        {
            return Err(DecisionError::Tie {
                first: best.min(second),
                second: best.max(second),
                value: outputs[best],
            });
        }

        Ok(Self::ALL[best])
    }
}

// ============================================================================
// Renderer frames
// ============================================================================

/// Observable match state for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub score_left: u32,
    pub score_right: u32,
    pub hits_left: u32,
    pub hits_right: u32,
}

/// Stream sent to a renderer while a roster is evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Frame {
    /// A new pairing begins; indices are roster positions
    MatchStart { left: usize, right: usize },

    /// State after one tick
    Tick(Snapshot),

    /// Terminal state of the pairing
    MatchOver(Snapshot),
}

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
