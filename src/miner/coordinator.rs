// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/coordinator.rs
// Version: 1.0.0
//
// This file implements the mining coordinator: it owns the mining state, runs
// the background loop (work unit -> commit -> eligibility -> submission ->
// accrual -> pacing delay) and serves start/stop/status/claim to any number of
// concurrent callers.
//
// Tree Location:
// - src/miner/coordinator.rs (mining control loop)
// - Depends on: miner/state, miner/stats, work, ledger, tokio, tokio-util

use crate::core::config::MiningPolicy;
use crate::core::types::{ClaimOutcome, MiningSnapshot};
use crate::ledger::{LedgerClient, LedgerError, ReceiptStatus, SubmissionReceipt};
use crate::miner::state::MiningState;
use crate::miner::stats::MinerStats;
use crate::work::{ComputeError, WorkUnitProvider};
use log::{debug, info, warn};
use rand::Rng;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const LOG_TARGET: &str = "helios::miner::coordinator";

/// Bounds of the display-only activity figure reported while running
pub const ACTIVITY_METRIC_RANGE: std::ops::RangeInclusive<u32> = 440..=460;

/// What one pass of the control loop did
#[derive(Debug, Clone, PartialEq)]
pub enum IterationOutcome {
    /// Not running; no unit was started.
    Idle,
    /// The provider failed; nothing was committed.
    ComputeFailed(ComputeError),
    /// Unit committed, score not below the threshold, nothing submitted.
    Ineligible { epoch: u64, quality: f64 },
    /// Unit committed, submitted, and the reward accrued.
    Accrued {
        epoch: u64,
        quality: f64,
        receipt: SubmissionReceipt,
    },
    /// Unit committed but the submission failed; nothing accrued.
    SubmissionFailed {
        epoch: u64,
        quality: f64,
        error: LedgerError,
    },
}

pub struct MiningCoordinator {
    state: Mutex<MiningState>,
    policy: MiningPolicy,
    provider: Arc<dyn WorkUnitProvider>,
    ledger: Arc<dyn LedgerClient>,
    stats: Arc<MinerStats>,
}

impl MiningCoordinator {
    pub fn new(
        policy: MiningPolicy,
        provider: Arc<dyn WorkUnitProvider>,
        ledger: Arc<dyn LedgerClient>,
    ) -> Self {
        Self {
            state: Mutex::new(MiningState::new(policy.initial_balance)),
            policy,
            provider,
            ledger,
            stats: Arc::new(MinerStats::new()),
        }
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn policy(&self) -> &MiningPolicy {
        &self.policy
    }

    pub fn get_stats(&self) -> Arc<MinerStats> {
        Arc::clone(&self.stats)
    }

    // State mutations are single statements on plain values, so a poisoned
    // lock still guards a consistent state.
    fn lock_state(&self) -> MutexGuard<'_, MiningState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self) {
        let changed = self.lock_state().set_running(true);
        if changed {
            info!(target: LOG_TARGET, "⛏️ Mining started");
            self.stats.add_activity("Mining started".to_string());
        }
    }

    /// Cooperative: a unit or submission already in flight completes.
    pub fn stop(&self) {
        let changed = self.lock_state().set_running(false);
        if changed {
            info!(target: LOG_TARGET, "🛑 Mining stopped");
            self.stats.add_activity("Mining stopped".to_string());
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock_state().running()
    }

    pub fn status(&self) -> MiningSnapshot {
        let mut snapshot = {
            let state = self.lock_state();
            MiningSnapshot {
                running: state.running(),
                epoch: state.epoch(),
                quality: state.current_quality(),
                balance: state.balance(),
                pending: state.pending_rewards(),
                activity_metric: 0,
            }
        };
        if snapshot.running {
            snapshot.activity_metric = rand::thread_rng().gen_range(ACTIVITY_METRIC_RANGE);
        }
        snapshot
    }

    pub fn claim(&self) -> ClaimOutcome {
        let amount = self.lock_state().claim();
        if amount > 0.0 {
            self.stats.record_claim(amount);
            info!(target: LOG_TARGET, "💰 Claimed {:.4} into wallet balance", amount);
            self.stats.add_activity(format!("Claimed {:.4}", amount));
            ClaimOutcome::claimed(amount)
        } else {
            debug!(target: LOG_TARGET, "Claim requested with nothing pending");
            ClaimOutcome::nothing()
        }
    }

    fn commit_unit(&self, quality: f64) -> u64 {
        self.lock_state().record_unit(quality)
    }

    fn accrue_reward(&self) {
        self.lock_state().accrue(self.policy.reward_per_submission);
    }

    async fn compute(&self) -> Result<f64, ComputeError> {
        match self.policy.compute_timeout {
            Some(limit) => tokio::time::timeout(limit, self.provider.perform_step())
                .await
                .map_err(|_| ComputeError::Timeout {
                    millis: limit.as_millis(),
                })?,
            None => self.provider.perform_step().await,
        }
    }

    async fn submit(&self, epoch: u64, quality: f64) -> Result<SubmissionReceipt, LedgerError> {
        let call = self.ledger.submit(epoch, quality, &self.policy.artifact_ref);
        match self.policy.submit_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| LedgerError::Timeout {
                    millis: limit.as_millis(),
                })?,
            None => call.await,
        }
    }

    /// One pass of the control loop, without the pacing delay.
    ///
    /// The epoch/quality commit always lands before the eligibility check and
    /// is never rolled back, whatever the submission does afterwards.
    pub async fn run_iteration(&self) -> IterationOutcome {
        if !self.is_running() {
            return IterationOutcome::Idle;
        }

        let quality = match self.compute().await {
            Ok(quality) => quality,
            Err(e) => {
                self.stats.compute_failures.fetch_add(1, Ordering::Relaxed);
                warn!(target: LOG_TARGET, "⚠️ Work unit failed: {}", e);
                self.stats.add_activity(format!("Work unit failed: {}", e));
                return IterationOutcome::ComputeFailed(e);
            }
        };

        let epoch = self.commit_unit(quality);
        self.stats.units_completed.fetch_add(1, Ordering::Relaxed);
        debug!(target: LOG_TARGET, "Epoch {} | Loss {:.6}", epoch, quality);

        // NaN never qualifies
        let eligible = quality < self.policy.threshold;
        if !eligible {
            return IterationOutcome::Ineligible { epoch, quality };
        }

        self.stats.submissions_attempted.fetch_add(1, Ordering::Relaxed);
        match self.submit(epoch, quality).await {
            Ok(receipt) => {
                self.accrue_reward();
                match receipt.status {
                    ReceiptStatus::Confirmed => {
                        self.stats.submissions_confirmed.fetch_add(1, Ordering::Relaxed);
                    }
                    ReceiptStatus::Rejected => {
                        self.stats.submissions_rejected.fetch_add(1, Ordering::Relaxed);
                    }
                }
                info!(
                    target: LOG_TARGET,
                    "⛓️ [CHAIN] Block #{} | tx {} | Epoch {} | Loss {:.4} | Reward Triggered",
                    receipt.block,
                    receipt.tx_id,
                    epoch,
                    quality
                );
                self.stats.add_activity(format!(
                    "Epoch {}: Loss {:.4} submitted in block #{}",
                    epoch, quality, receipt.block
                ));
                IterationOutcome::Accrued {
                    epoch,
                    quality,
                    receipt,
                }
            }
            Err(error) => {
                self.stats.submissions_failed.fetch_add(1, Ordering::Relaxed);
                warn!(target: LOG_TARGET, "⚠️ Submission for epoch {} failed: {}", epoch, error);
                self.stats
                    .add_activity(format!("Epoch {}: submission failed ({})", epoch, error));
                IterationOutcome::SubmissionFailed {
                    epoch,
                    quality,
                    error,
                }
            }
        }
    }

    /// The always-on control loop. Returns once `shutdown` is cancelled; the
    /// token is only observed at suspension points between iterations.
    pub async fn run(self: Arc<Self>, shutdown: CancellationToken) {
        info!(target: LOG_TARGET, "🔁 Mining loop online");

        while !shutdown.is_cancelled() {
            let pause = match self.run_iteration().await {
                IterationOutcome::Idle => self.policy.poll_interval,
                _ => self.policy.iteration_delay,
            };

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(pause) => {}
            }
        }

        info!(target: LOG_TARGET, "🔁 Mining loop exited");
    }

    pub fn spawn(self: &Arc<Self>, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(Arc::clone(self).run(shutdown))
    }

    /// Logs the dashboard every `interval` until shutdown.
    pub fn start_stats_printer(
        self: &Arc<Self>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> JoinHandle<()> {
        let coordinator = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = ticker.tick() => {
                        coordinator.stats.display_dashboard(&coordinator.status());
                    }
                }
            }
        })
    }
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial mining coordinator.
//   - start/stop/status/claim on a single state lock.
//   - run_iteration commits before eligibility and never rolls back.
//   - Background loop with idle poll, pacing delay and optional timeouts.
