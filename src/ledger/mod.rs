// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/ledger/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for ledger communication. It defines
// the submission capability the coordinator calls for qualifying work units,
// the receipt it gets back, and the connectivity errors it may see.
//
// Tree Location:
// - src/ledger/mod.rs (ledger module entry point)
// - Submodules: simulated

pub mod simulated;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use simulated::SimulatedLedger;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Ledger node {url} unreachable: {reason}")]
    Network { url: String, reason: String },

    #[error("Handshake with {url} failed: {reason}")]
    Handshake { url: String, reason: String },

    #[error("Submission not confirmed within {millis}ms")]
    Timeout { millis: u128 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReceiptStatus {
    Confirmed,
    Rejected,
}

/// Identifies a ledger transaction. Only logged, never stored in mining state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub tx_id: String,
    pub status: ReceiptStatus,
    pub block: u64,
}

/// Submits qualifying results to the ledger. Implementations connect on
/// first use when they are not connected yet.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn submit(
        &self,
        epoch: u64,
        quality_score: f64,
        artifact_ref: &str,
    ) -> Result<SubmissionReceipt, LedgerError>;
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial ledger module.
//   - LedgerClient async trait, SubmissionReceipt and LedgerError.
