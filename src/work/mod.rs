// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/work/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the useful-work side of the miner.
// It defines the capability the coordinator drives once per iteration and the
// error it reports when a unit cannot be produced.
//
// Tree Location:
// - src/work/mod.rs (work module entry point)
// - Submodules: trainer

pub mod trainer;

use async_trait::async_trait;
use thiserror::Error;

pub use trainer::ModelTrainer;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    #[error("Work unit could not allocate resources: {reason}")]
    ResourceExhausted { reason: String },

    #[error("Training diverged (loss = {loss})")]
    Diverged { loss: f64 },

    #[error("Work unit task failed: {reason}")]
    TaskFailed { reason: String },

    #[error("Work unit did not finish within {millis}ms")]
    Timeout { millis: u128 },
}

/// Performs one unit of work and reports its quality score (lower is better).
#[async_trait]
pub trait WorkUnitProvider: Send + Sync {
    async fn perform_step(&self) -> Result<f64, ComputeError>;
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial work module.
//   - WorkUnitProvider async trait and ComputeError.
