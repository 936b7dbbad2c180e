//! Evaluation policy: how decisions become moves and when a match ends

use game_core::{Direction, MatchInfo, Side};
use proto::Decision;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0} must be at least 1")]
    ZeroCap(&'static str),

    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the three decision codes map onto paddle moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionMapping {
    /// Both `Up` and `Down` move the paddle up, as the training loop this
    /// harness reproduces always did
    #[default]
    Literal,
    /// `Down` moves the paddle down
    Corrected,
}

impl ActionMapping {
    pub fn direction(self, decision: Decision) -> Option<Direction> {
        match (self, decision) {
            (_, Decision::Stay) => None,
            (_, Decision::Up) => Some(Direction::Up),
            (ActionMapping::Literal, Decision::Down) => Some(Direction::Up),
            (ActionMapping::Corrected, Decision::Down) => Some(Direction::Down),
        }
    }
}

/// Why a match stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// A side reached the score cap
    Score(Side),
    /// A side reached the hit cap
    HitCap(Side),
}

/// When to stop a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalPolicy {
    pub score_cap: u32,
    /// Bounds rallies where neither side can score
    pub hit_cap: u32,
}

impl Default for TerminalPolicy {
    fn default() -> Self {
        Self {
            score_cap: 1,
            hit_cap: 50,
        }
    }
}

impl TerminalPolicy {
    pub fn verdict(&self, info: &MatchInfo) -> Option<Ending> {
        let score = game_core::Score {
            left: info.left_score,
            right: info.right_score,
        };
        let hits = game_core::Hits {
            left: info.left_hits,
            right: info.right_hits,
        };
        score
            .reached(self.score_cap)
            .map(Ending::Score)
            .or_else(|| hits.reached(self.hit_cap).map(Ending::HitCap))
    }

    pub fn is_terminal(&self, info: &MatchInfo) -> bool {
        self.verdict(info).is_some()
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.score_cap == 0 {
            return Err(SettingsError::ZeroCap("score_cap"));
        }
        if self.hit_cap == 0 {
            return Err(SettingsError::ZeroCap("hit_cap"));
        }
        Ok(())
    }
}

/// Everything about an evaluation pass that is not arena physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalSettings {
    pub terminal: TerminalPolicy,
    pub mapping: ActionMapping,
    /// Base seed; every pairing derives its own from it
    pub seed: u64,
}

impl EvalSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.terminal.validate()
    }

    /// Seed for pairing `(left, right)`
    pub fn pair_seed(&self, left: usize, right: usize) -> u64 {
        self.seed ^ (((left as u64) << 32) | right as u64)
    }
}
