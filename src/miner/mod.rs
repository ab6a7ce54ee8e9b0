// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the mining functionality. It
// declares submodules and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: coordinator, state, stats

pub mod coordinator;
pub mod state;
pub mod stats;

// Re-export key types for convenience
pub use coordinator::{IterationOutcome, MiningCoordinator};
pub use state::MiningState;
pub use stats::MinerStats;

// Changelog:
// - v2.0.0 (2026-09-28): Miner module for the Helios node.
//   - Declares coordinator, state and stats.
