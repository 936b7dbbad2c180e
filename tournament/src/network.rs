//! Small feed-forward network used as a paddle controller.
//!
//! Three observation inputs feed one sigmoid hidden layer, which feeds three
//! linear outputs; the strictly largest output is the decision.

use proto::{Decision, DecisionError, Observation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Agent;

pub const INPUTS: usize = 3;
pub const OUTPUTS: usize = 3;

/// Range fresh weights and biases are drawn from
const INIT_RANGE: std::ops::Range<f32> = -0.05..0.05;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("network takes {found} inputs, expected {INPUTS}")]
    Inputs { found: usize },

    #[error("network produces {found} outputs, expected {OUTPUTS}")]
    Outputs { found: usize },

    #[error("{layer} layer has {rows} weight rows but {biases} biases")]
    Biases {
        layer: &'static str,
        rows: usize,
        biases: usize,
    },

    #[error("{layer} layer row {row} has {found} weights, expected {expected}")]
    Row {
        layer: &'static str,
        row: usize,
        found: usize,
        expected: usize,
    },
}

pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Fully connected layer; `weights[out][in]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub weights: Vec<Vec<f32>>,
    pub biases: Vec<f32>,
}

impl Layer {
    pub fn random<R: Rng + ?Sized>(inputs: usize, outputs: usize, rng: &mut R) -> Self {
        let weights = (0..outputs)
            .map(|_| (0..inputs).map(|_| rng.gen_range(INIT_RANGE)).collect())
            .collect();
        let biases = (0..outputs).map(|_| rng.gen_range(INIT_RANGE)).collect();
        Self { weights, biases }
    }

    pub fn forward(&self, input: &[f32]) -> Vec<f32> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + bias)
            .collect()
    }

    fn check(&self, layer: &'static str, expected: usize) -> Result<(), ShapeError> {
        if self.weights.len() != self.biases.len() {
            return Err(ShapeError::Biases {
                layer,
                rows: self.weights.len(),
                biases: self.biases.len(),
            });
        }
        for (row, weights) in self.weights.iter().enumerate() {
            if weights.len() != expected {
                return Err(ShapeError::Row {
                    layer,
                    row,
                    found: weights.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub hidden: Layer,
    pub output: Layer,
}

impl Network {
    pub fn random<R: Rng + ?Sized>(hidden: usize, rng: &mut R) -> Self {
        Self {
            hidden: Layer::random(INPUTS, hidden, rng),
            output: Layer::random(hidden, OUTPUTS, rng),
        }
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden.biases.len()
    }

    /// Networks loaded from disk are checked before use
    pub fn validate(&self) -> Result<(), ShapeError> {
        if let Some(found) = self.hidden.weights.first().map(Vec::len) {
            if found != INPUTS {
                return Err(ShapeError::Inputs { found });
            }
        }
        self.hidden.check("hidden", INPUTS)?;
        if self.output.biases.len() != OUTPUTS {
            return Err(ShapeError::Outputs {
                found: self.output.biases.len(),
            });
        }
        self.output.check("output", self.hidden_size())
    }

    pub fn activate(&self, input: &[f32; INPUTS]) -> Vec<f32> {
        let hidden: Vec<f32> = self.hidden.forward(input).into_iter().map(sigmoid).collect();
        self.output.forward(&hidden)
    }
}

impl Agent for Network {
    fn decide(&mut self, observation: &Observation) -> Result<Decision, DecisionError> {
        Decision::from_outputs(&self.activate(&observation.as_array()))
    }

    fn name(&self) -> &str {
        "network"
    }
}
