use game_core::ConfigError;
use proto::DecisionError;
use thiserror::Error;

use crate::policy::SettingsError;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("entrant {entrant} failed to decide: {source}")]
    Decision {
        entrant: usize,
        #[source]
        source: DecisionError,
    },

    #[error("evaluation interrupted in match {left} vs {right} at tick {tick}")]
    Interrupted { left: usize, right: usize, tick: u64 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
