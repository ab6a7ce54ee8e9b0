// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/common/mod.rs
// Version: 1.0.0
//
// Deterministic test doubles for the coordinator's collaborators: a provider
// that replays scripted scores and a ledger that records every submission.

#![allow(dead_code)]

use async_trait::async_trait;
use helios_miner::core::config::MiningPolicy;
use helios_miner::ledger::{LedgerClient, LedgerError, ReceiptStatus, SubmissionReceipt};
use helios_miner::miner::MiningCoordinator;
use helios_miner::work::{ComputeError, WorkUnitProvider};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Replays queued results, then keeps returning `fallback`.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<f64, ComputeError>>>,
    fallback: f64,
    delay: Duration,
    calls: AtomicU64,
}

impl ScriptedProvider {
    pub fn new(fallback: f64) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            delay: Duration::ZERO,
            calls: AtomicU64::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn push_score(&self, score: f64) {
        self.script.lock().unwrap().push_back(Ok(score));
    }

    pub fn push_failure(&self, error: ComputeError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkUnitProvider for ScriptedProvider {
    async fn perform_step(&self) -> Result<f64, ComputeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or(Ok(self.fallback))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSubmission {
    pub epoch: u64,
    pub quality: f64,
    pub artifact_ref: String,
}

/// Records submissions; can fail, reject, stall or hold until released.
pub struct RecordingLedger {
    submissions: Mutex<Vec<RecordedSubmission>>,
    fail: AtomicBool,
    reject: AtomicBool,
    delay: Duration,
    hold: Option<Arc<Notify>>,
    entered: Arc<Notify>,
    next_block: AtomicU64,
}

impl RecordingLedger {
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
            reject: AtomicBool::new(false),
            delay: Duration::ZERO,
            hold: None,
            entered: Arc::new(Notify::new()),
            next_block: AtomicU64::new(1),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Every submission waits for a `notify_one` on the returned handle.
    pub fn held(mut self) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        self.hold = Some(Arc::clone(&release));
        (self, release)
    }

    /// Notified each time a submission starts.
    pub fn entered(&self) -> Arc<Notify> {
        Arc::clone(&self.entered)
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_rejecting(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerClient for RecordingLedger {
    async fn submit(
        &self,
        epoch: u64,
        quality_score: f64,
        artifact_ref: &str,
    ) -> Result<SubmissionReceipt, LedgerError> {
        self.submissions.lock().unwrap().push(RecordedSubmission {
            epoch,
            quality: quality_score,
            artifact_ref: artifact_ref.to_string(),
        });
        self.entered.notify_one();

        if let Some(release) = &self.hold {
            release.notified().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(LedgerError::Network {
                url: "test://ledger".to_string(),
                reason: "connection refused".to_string(),
            });
        }

        let status = if self.reject.load(Ordering::SeqCst) {
            ReceiptStatus::Rejected
        } else {
            ReceiptStatus::Confirmed
        };
        Ok(SubmissionReceipt {
            tx_id: format!("0x{:016x}", epoch),
            status,
            block: self.next_block.fetch_add(1, Ordering::SeqCst),
        })
    }
}

/// Reference policy with millisecond pacing so loop tests finish quickly
pub fn fast_policy() -> MiningPolicy {
    MiningPolicy {
        poll_interval: Duration::from_millis(1),
        iteration_delay: Duration::from_millis(1),
        ..MiningPolicy::default()
    }
}

pub fn coordinator_with(
    policy: MiningPolicy,
    provider: Arc<ScriptedProvider>,
    ledger: Arc<RecordingLedger>,
) -> Arc<MiningCoordinator> {
    MiningCoordinator::new(policy, provider, ledger).into_arc()
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial test doubles.
//   - ScriptedProvider and RecordingLedger with hold, delay and failure modes.
