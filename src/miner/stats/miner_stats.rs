// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/miner_stats.rs
// Version: 2.0.0
//
// This file implements miner-wide statistics tracking: work units, compute
// failures, ledger submissions by outcome, claims, and a rolling log of recent
// activity for the dashboard. None of it feeds back into mining decisions.
//
// Tree Location:
// - src/miner/stats/miner_stats.rs (miner-wide statistics logic)
// - Depends on: std, serde, utils/format

use crate::core::types::MiningSnapshot;
use crate::utils::format::FormatUtils;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

const LOG_TARGET: &str = "helios::miner::stats";

pub const MAX_ACTIVITY_ENTRIES: usize = 50;

/// Serializable counters served by `GET /stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub uptime_secs: u64,
    pub units_completed: u64,
    pub compute_failures: u64,
    pub submissions_attempted: u64,
    pub submissions_confirmed: u64,
    pub submissions_rejected: u64,
    pub submissions_failed: u64,
    pub claims: u64,
    pub total_claimed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub age_secs: u64,
    pub message: String,
}

pub struct MinerStats {
    pub units_completed: AtomicU64,
    pub compute_failures: AtomicU64,
    pub submissions_attempted: AtomicU64,
    pub submissions_confirmed: AtomicU64,
    pub submissions_rejected: AtomicU64,
    pub submissions_failed: AtomicU64,
    pub claims: AtomicU64,
    total_claimed: Mutex<f64>,
    start_time: Instant,
    recent_activity: Mutex<VecDeque<(Instant, String)>>,
}

fn recover<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MinerStats {
    pub fn new() -> Self {
        Self {
            units_completed: AtomicU64::new(0),
            compute_failures: AtomicU64::new(0),
            submissions_attempted: AtomicU64::new(0),
            submissions_confirmed: AtomicU64::new(0),
            submissions_rejected: AtomicU64::new(0),
            submissions_failed: AtomicU64::new(0),
            claims: AtomicU64::new(0),
            total_claimed: Mutex::new(0.0),
            start_time: Instant::now(),
            recent_activity: Mutex::new(VecDeque::with_capacity(MAX_ACTIVITY_ENTRIES)),
        }
    }

    pub fn add_activity(&self, message: String) {
        let mut activity = recover(&self.recent_activity);
        activity.push_back((Instant::now(), message));
        if activity.len() > MAX_ACTIVITY_ENTRIES {
            activity.pop_front();
        }
    }

    pub fn record_claim(&self, amount: f64) {
        self.claims.fetch_add(1, Ordering::Relaxed);
        *recover(&self.total_claimed) += amount;
    }

    /// Newest first
    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        let now = Instant::now();
        recover(&self.recent_activity)
            .iter()
            .rev()
            .map(|(time, message)| ActivityEntry {
                age_secs: now.duration_since(*time).as_secs(),
                message: message.clone(),
            })
            .collect()
    }

    pub fn to_report(&self) -> StatsReport {
        StatsReport {
            uptime_secs: self.start_time.elapsed().as_secs(),
            units_completed: self.units_completed.load(Ordering::Relaxed),
            compute_failures: self.compute_failures.load(Ordering::Relaxed),
            submissions_attempted: self.submissions_attempted.load(Ordering::Relaxed),
            submissions_confirmed: self.submissions_confirmed.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            submissions_failed: self.submissions_failed.load(Ordering::Relaxed),
            claims: self.claims.load(Ordering::Relaxed),
            total_claimed: *recover(&self.total_claimed),
        }
    }

    /// Log a text dashboard of the current session
    pub fn display_dashboard(&self, snapshot: &MiningSnapshot) {
        let report = self.to_report();

        info!(target: LOG_TARGET, "📊 HELIOS DASHBOARD");
        info!(target: LOG_TARGET, "├─ State: {}", if snapshot.running { "MINING" } else { "IDLE" });
        info!(target: LOG_TARGET, "├─ Epoch: {}", FormatUtils::format_number(snapshot.epoch));
        info!(target: LOG_TARGET, "├─ Last Loss: {:.6}", snapshot.quality);
        info!(target: LOG_TARGET, "├─ Units: {} ({} compute failures)", report.units_completed, report.compute_failures);
        info!(
            target: LOG_TARGET,
            "├─ Submissions: {}/{} confirmed ({}), {} rejected, {} failed",
            report.submissions_confirmed,
            report.submissions_attempted,
            FormatUtils::format_ratio(report.submissions_confirmed, report.submissions_attempted),
            report.submissions_rejected,
            report.submissions_failed
        );
        info!(target: LOG_TARGET, "├─ Pending: {}", FormatUtils::format_amount(snapshot.pending));
        info!(target: LOG_TARGET, "├─ Balance: {}", FormatUtils::format_amount(snapshot.balance));
        info!(
            target: LOG_TARGET,
            "├─ Claimed: {} in {} claims",
            FormatUtils::format_amount(report.total_claimed),
            report.claims
        );
        info!(
            target: LOG_TARGET,
            "└─ Session Time: {}",
            FormatUtils::format_duration(self.start_time.elapsed())
        );
    }
}

impl Default for MinerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_ring_is_bounded_and_newest_first() {
        let stats = MinerStats::new();
        for i in 0..(MAX_ACTIVITY_ENTRIES + 10) {
            stats.add_activity(format!("event {}", i));
        }
        let entries = stats.recent_activity();
        assert_eq!(entries.len(), MAX_ACTIVITY_ENTRIES);
        assert_eq!(entries[0].message, format!("event {}", MAX_ACTIVITY_ENTRIES + 9));
        assert_eq!(entries.last().unwrap().message, "event 10");
    }

    #[test]
    fn test_report_reflects_counters() {
        let stats = MinerStats::new();
        stats.units_completed.fetch_add(3, Ordering::Relaxed);
        stats.submissions_attempted.fetch_add(2, Ordering::Relaxed);
        stats.submissions_confirmed.fetch_add(1, Ordering::Relaxed);
        stats.submissions_failed.fetch_add(1, Ordering::Relaxed);
        stats.record_claim(0.01);
        stats.record_claim(0.005);

        let report = stats.to_report();
        assert_eq!(report.units_completed, 3);
        assert_eq!(report.submissions_attempted, 2);
        assert_eq!(report.submissions_confirmed, 1);
        assert_eq!(report.submissions_failed, 1);
        assert_eq!(report.claims, 2);
        assert!((report.total_claimed - 0.015).abs() < 1e-12);
    }
}

// Changelog:
// - v2.0.0 (2026-09-28): Statistics for the Helios node.
//   - Counters for units, compute failures, submissions and claims.
//   - Activity ring of the 50 latest events and the text dashboard.
