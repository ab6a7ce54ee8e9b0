// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
//
// Errors raised while turning command-line options into a mining policy.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Submission threshold must be a finite positive number, got {value}")]
    InvalidThreshold { value: f64 },

    #[error("Reward per submission must be finite and non-negative, got {value}")]
    InvalidReward { value: f64 },

    #[error("Initial balance must be finite and non-negative, got {value}")]
    InvalidBalance { value: f64 },

    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },

    #[error("Artifact reference must not be empty")]
    EmptyArtifact,

    #[error("Ledger {field} must not be empty")]
    EmptyLedgerField { field: &'static str },
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial configuration errors.
//   - ConfigError for threshold, reward, balance, intervals and ledger fields.
