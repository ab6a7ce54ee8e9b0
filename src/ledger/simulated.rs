// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/ledger/simulated.rs
// Version: 1.0.0
//
// This file implements a ledger client that performs the connect/handshake and
// transaction broadcast sequence against a simulated node. It builds the same
// contract call a real node would receive, including the integer loss score
// and the weights digest, and confirms it after a fixed broadcast latency.
//
// Tree Location:
// - src/ledger/simulated.rs (default ledger client)
// - Depends on: tokio, sha3, hex, rand, serde_json

use super::{LedgerClient, LedgerError, ReceiptStatus, SubmissionReceipt};
use crate::core::config::LedgerSettings;
use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use sha3::{Digest, Sha3_256};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

const LOG_TARGET: &str = "helios::ledger::simulated";

pub const GENESIS_BLOCK: u64 = 982_142;
pub const DEFAULT_CONNECT_LATENCY: Duration = Duration::from_millis(500);
pub const DEFAULT_BROADCAST_LATENCY: Duration = Duration::from_millis(200);
/// Fixed-point scale used by the contract for loss scores.
pub const LOSS_SCALE: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingResultInputs {
    pub loss_score: u64,
    pub epoch: u64,
    pub weights_hash: String,
}

/// Transaction payload for the contract's `submitTrainingResult` entry point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractCall {
    pub contract: String,
    pub function: String,
    pub inputs: TrainingResultInputs,
}

impl ContractCall {
    pub fn submit_training_result(
        contract_id: &str,
        epoch: u64,
        quality_score: f64,
        artifact_ref: &str,
    ) -> Self {
        Self {
            contract: contract_id.to_string(),
            function: "submitTrainingResult".to_string(),
            inputs: TrainingResultInputs {
                loss_score: scale_loss(quality_score),
                epoch,
                weights_hash: weights_hash(artifact_ref, epoch, quality_score),
            },
        }
    }
}

/// Loss as the contract's fixed-point integer; negative or NaN scores clamp to 0.
pub fn scale_loss(quality_score: f64) -> u64 {
    (quality_score * LOSS_SCALE).floor().max(0.0) as u64
}

pub fn weights_hash(artifact_ref: &str, epoch: u64, quality_score: f64) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(artifact_ref.as_bytes());
    hasher.update(epoch.to_le_bytes());
    hasher.update(quality_score.to_le_bytes());
    format!("0x{}", hex::encode(hasher.finalize()))
}

pub struct SimulatedLedger {
    settings: LedgerSettings,
    connected: AtomicBool,
    next_block: AtomicU64,
    connect_latency: Duration,
    broadcast_latency: Duration,
    // Serialises handshakes so concurrent submitters connect once
    connect_lock: Mutex<()>,
}

impl SimulatedLedger {
    pub fn new(settings: LedgerSettings) -> Self {
        Self {
            settings,
            connected: AtomicBool::new(false),
            next_block: AtomicU64::new(GENESIS_BLOCK),
            connect_latency: DEFAULT_CONNECT_LATENCY,
            broadcast_latency: DEFAULT_BROADCAST_LATENCY,
            connect_lock: Mutex::new(()),
        }
    }

    pub fn with_latency(mut self, connect: Duration, broadcast: Duration) -> Self {
        self.connect_latency = connect;
        self.broadcast_latency = broadcast;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn disconnect(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            info!(target: LOG_TARGET, "Disconnected from {}", self.settings.node_url);
        }
    }

    pub async fn connect(&self) -> Result<(), LedgerError> {
        let _guard = self.connect_lock.lock().await;
        if self.is_connected() {
            return Ok(());
        }

        info!(target: LOG_TARGET, "Connecting to node {}...", self.settings.node_url);
        if !self.settings.node_url.starts_with("http://") && !self.settings.node_url.starts_with("https://") {
            return Err(LedgerError::Handshake {
                url: self.settings.node_url.clone(),
                reason: "unsupported scheme".to_string(),
            });
        }

        tokio::time::sleep(self.connect_latency).await;
        self.connected.store(true, Ordering::SeqCst);
        info!(target: LOG_TARGET, "Connection established, handshake OK");
        Ok(())
    }

    fn random_tx_id() -> String {
        format!("0x{:016x}", rand::random::<u64>())
    }
}

#[async_trait]
impl LedgerClient for SimulatedLedger {
    async fn submit(
        &self,
        epoch: u64,
        quality_score: f64,
        artifact_ref: &str,
    ) -> Result<SubmissionReceipt, LedgerError> {
        if !self.is_connected() {
            self.connect().await?;
        }

        let call = ContractCall::submit_training_result(
            &self.settings.contract_id,
            epoch,
            quality_score,
            artifact_ref,
        );
        match serde_json::to_string(&call) {
            Ok(payload) => info!(target: LOG_TARGET, "Broadcasting transaction: {}", payload),
            Err(e) => debug!(target: LOG_TARGET, "Payload not printable: {}", e),
        }

        tokio::time::sleep(self.broadcast_latency).await;

        let receipt = SubmissionReceipt {
            tx_id: Self::random_tx_id(),
            status: ReceiptStatus::Confirmed,
            block: self.next_block.fetch_add(1, Ordering::SeqCst),
        };
        debug!(target: LOG_TARGET, "Receipt {} in block {}", receipt.tx_id, receipt.block);
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_ledger(settings: LedgerSettings) -> SimulatedLedger {
        SimulatedLedger::new(settings).with_latency(Duration::ZERO, Duration::ZERO)
    }

    #[test]
    fn test_scale_loss() {
        assert_eq!(scale_loss(0.2), 2000);
        assert_eq!(scale_loss(0.12345), 1234);
        assert_eq!(scale_loss(-1.0), 0);
    }

    #[test]
    fn test_contract_call_payload() {
        let call = ContractCall::submit_training_result("HELIOS_AI_V1", 4, 0.25, "weights.pt");
        assert_eq!(call.function, "submitTrainingResult");
        assert_eq!(call.inputs.loss_score, 2500);
        assert_eq!(call.inputs.epoch, 4);
        assert_eq!(call.inputs.weights_hash.len(), 2 + 64);
        assert_eq!(call.inputs.weights_hash, weights_hash("weights.pt", 4, 0.25));
        assert_ne!(call.inputs.weights_hash, weights_hash("weights.pt", 5, 0.25));
    }

    #[tokio::test]
    async fn test_submit_connects_implicitly() {
        let ledger = instant_ledger(LedgerSettings::default());
        assert!(!ledger.is_connected());

        let receipt = ledger.submit(1, 0.2, "weights.pt").await.unwrap();
        assert!(ledger.is_connected());
        assert_eq!(receipt.status, ReceiptStatus::Confirmed);
        assert_eq!(receipt.block, GENESIS_BLOCK);
        assert!(receipt.tx_id.starts_with("0x"));
        assert_eq!(receipt.tx_id.len(), 18);

        let next = ledger.submit(2, 0.1, "weights.pt").await.unwrap();
        assert_eq!(next.block, GENESIS_BLOCK + 1);
    }

    #[tokio::test]
    async fn test_reconnects_after_disconnect() {
        let ledger = instant_ledger(LedgerSettings::default());
        ledger.connect().await.unwrap();
        ledger.disconnect();
        assert!(!ledger.is_connected());
        ledger.submit(1, 0.3, "weights.pt").await.unwrap();
        assert!(ledger.is_connected());
    }

    #[tokio::test]
    async fn test_handshake_failure() {
        let ledger = instant_ledger(LedgerSettings {
            node_url: "ftp://rpc.example".to_string(),
            ..LedgerSettings::default()
        });
        let err = ledger.submit(1, 0.3, "weights.pt").await.unwrap_err();
        assert!(matches!(err, LedgerError::Handshake { .. }));
        assert!(!ledger.is_connected());
    }
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial simulated ledger.
//   - One-time handshake with implicit connect on first submission.
//   - submitTrainingResult payload with scaled loss and SHA3-256 weights hash.
//   - Block height advances by one per confirmed submission.
