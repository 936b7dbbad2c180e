//! Fitness evaluation for paddle controllers.
//!
//! A [`Tournament`] pairs every entrant of a roster against every other one,
//! plays each pairing as a fresh [`game_core::Match`], and writes each
//! entrant's accumulated paddle hits back as its fitness.

pub mod agent;
pub mod error;
pub mod harness;
pub mod network;
pub mod persistence;
pub mod policy;

pub use agent::*;
pub use error::EvalError;
pub use harness::*;
pub use network::{Layer, Network, ShapeError};
pub use persistence::{load_champion, save_champion, Checkpoint, PersistenceError};
pub use policy::*;
