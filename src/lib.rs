// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 2.0.0
//
// This file serves as the main library entry point for the Helios miner,
// located at the root of the source tree. It exports all public modules
// and types that the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, work, ledger, web_server, shutdown, utils

pub mod core;
pub mod ledger;
pub mod miner;
pub mod shutdown;
pub mod utils;
pub mod web_server;
pub mod work;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{Args, LedgerSettings, MiningPolicy, MiningSnapshot};
pub use crate::ledger::{LedgerClient, LedgerError, SimulatedLedger, SubmissionReceipt};
pub use crate::miner::{IterationOutcome, MinerStats, MiningCoordinator};
pub use crate::shutdown::ShutdownCoordinator;
pub use crate::work::{ComputeError, ModelTrainer, WorkUnitProvider};

// Changelog:
// - v2.0.0 (2026-09-28): Library root for the Helios miner.
//   - Exports core, ledger, miner, shutdown, utils, web_server and work.
