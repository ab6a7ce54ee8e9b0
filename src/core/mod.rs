// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the core functionality of the Helios
// miner: command-line types, policy configuration and configuration errors.

pub mod config;
pub mod error;
pub mod types;

// Re-export the most commonly used items
pub use config::{LedgerSettings, MiningPolicy};
pub use error::ConfigError;
pub use types::{Args, ClaimOutcome, ControlMessage, MiningSnapshot, NodeInfo};

// Changelog:
// - v2.0.0 (2026-09-28): Core module for the Helios node.
//   - Declares config, error and types and re-exports their main items.
