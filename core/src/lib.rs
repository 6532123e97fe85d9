#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use board::*;
pub use error::*;
pub use generator::*;
pub use rules::*;
pub use silhouette::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod board;
mod error;
mod generator;
mod rules;
mod silhouette;
mod tile;
mod types;

/// Tuning for hard puzzle generation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Random playouts per candidate.
    pub trials: u32,
    /// Minimum share of lost playouts for a candidate to be accepted.
    pub threshold: f64,
    /// Candidates to try before giving up, `None` keeps going forever.
    pub max_attempts: Option<u32>,
    /// Dead-end restarts allowed while carving a single candidate.
    pub max_fill_retries: Option<u32>,
}

impl GeneratorConfig {
    pub const DEFAULT_TRIALS: u32 = 30;
    pub const DEFAULT_THRESHOLD: f64 = 1.0;

    pub fn new(trials: u32, threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            Self::DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            trials: trials.max(1),
            threshold,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            trials: Self::DEFAULT_TRIALS,
            threshold: Self::DEFAULT_THRESHOLD,
            max_attempts: Some(100_000),
            max_fill_retries: Some(10_000),
        }
    }
}
