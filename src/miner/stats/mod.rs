// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 2.0.0
//
// Module declaration for miner statistics.

pub mod miner_stats;

// Re-export key types for convenience
pub use miner_stats::{ActivityEntry, MinerStats, StatsReport};

// Changelog:
// - v2.0.0 (2026-09-28): Stats module reduced to miner-wide statistics.
//   - Re-exports MinerStats, StatsReport and ActivityEntry.
