//! Champion checkpoints: a versioned JSON document holding one network.

use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::{Network, ShapeError};

pub const CHECKPOINT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("checkpoint I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("checkpoint is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("checkpoint version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("checkpoint network has the wrong shape: {0}")]
    Shape(#[from] ShapeError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub version: u32,
    /// Fitness the champion earned in the pass it won
    pub fitness: f64,
    pub network: Network,
}

impl Checkpoint {
    pub fn new(network: Network, fitness: f64) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            fitness,
            network,
        }
    }
}

/// Write the champion. The file is replaced atomically.
pub fn save_champion(path: &Path, network: &Network, fitness: f64) -> Result<(), PersistenceError> {
    network.validate()?;
    let checkpoint = Checkpoint::new(network.clone(), fitness);
    let json = serde_json::to_vec_pretty(&checkpoint)?;

    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&json)?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;

    log::info!(
        "Saved champion (fitness {}) to {}",
        fitness,
        path.display()
    );
    Ok(())
}

pub fn load_champion(path: &Path) -> Result<Checkpoint, PersistenceError> {
    let mut json = String::new();
    File::open(path)?.read_to_string(&mut json)?;

    let checkpoint: Checkpoint = serde_json::from_str(&json)?;
    if checkpoint.version != CHECKPOINT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: checkpoint.version,
            expected: CHECKPOINT_VERSION,
        });
    }
    checkpoint.network.validate()?;

    log::info!(
        "Loaded champion (fitness {}) from {}",
        checkpoint.fitness,
        path.display()
    );
    Ok(checkpoint)
}
