// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/state.rs
// Version: 1.0.0
//
// This file holds the mining state owned by the coordinator and the only
// paths that mutate it: recording a completed unit, accruing a reward, and
// claiming pending rewards into the balance.
//
// Tree Location:
// - src/miner/state.rs (mining state and its mutations)
// - Depends on: core/config

use crate::core::config::INITIAL_QUALITY;

#[derive(Debug, Clone, PartialEq)]
pub struct MiningState {
    running: bool,
    epoch: u64,
    current_quality: f64,
    balance: f64,
    pending_rewards: f64,
}

impl MiningState {
    pub fn new(initial_balance: f64) -> Self {
        debug_assert!(initial_balance.is_finite() && initial_balance >= 0.0);
        Self {
            running: false,
            epoch: 0,
            current_quality: INITIAL_QUALITY,
            balance: initial_balance,
            pending_rewards: 0.0,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn current_quality(&self) -> f64 {
        self.current_quality
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn pending_rewards(&self) -> f64 {
        self.pending_rewards
    }

    /// Returns true if the flag changed.
    pub fn set_running(&mut self, running: bool) -> bool {
        let changed = self.running != running;
        self.running = running;
        changed
    }

    /// Commits a completed unit and returns its epoch. Quality and epoch move
    /// together under the caller's lock.
    pub fn record_unit(&mut self, quality_score: f64) -> u64 {
        self.current_quality = quality_score;
        self.epoch += 1;
        self.epoch
    }

    pub fn accrue(&mut self, amount: f64) {
        debug_assert!(amount.is_finite() && amount >= 0.0, "accrual must be finite and non-negative");
        self.pending_rewards += amount;
        debug_assert!(self.pending_rewards >= 0.0);
    }

    /// Moves everything pending into the balance. Returns the moved amount,
    /// zero (with no mutation) when nothing is pending.
    pub fn claim(&mut self) -> f64 {
        if self.pending_rewards <= 0.0 {
            return 0.0;
        }
        let amount = self.pending_rewards;
        self.balance += amount;
        self.pending_rewards = 0.0;
        debug_assert!(self.balance >= 0.0);
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MiningState::new(12450.0);
        assert!(!state.running());
        assert_eq!(state.epoch(), 0);
        assert_eq!(state.current_quality(), 1.0);
        assert_eq!(state.balance(), 12450.0);
        assert_eq!(state.pending_rewards(), 0.0);
    }

    #[test]
    fn test_set_running_is_idempotent() {
        let mut state = MiningState::new(0.0);
        assert!(state.set_running(true));
        assert!(!state.set_running(true));
        assert!(state.running());
        assert!(state.set_running(false));
        assert!(!state.set_running(false));
        assert!(!state.running());
    }

    #[test]
    fn test_record_unit_increments_epoch_by_one() {
        let mut state = MiningState::new(0.0);
        assert_eq!(state.record_unit(0.9), 1);
        assert_eq!(state.record_unit(0.2), 2);
        assert_eq!(state.epoch(), 2);
        assert_eq!(state.current_quality(), 0.2);
    }

    #[test]
    fn test_claim_moves_pending_into_balance() {
        let mut state = MiningState::new(100.0);
        state.accrue(0.005);
        state.accrue(0.005);
        state.accrue(0.005);
        let pending = state.pending_rewards();

        let amount = state.claim();
        assert_eq!(amount, pending);
        assert_eq!(state.pending_rewards(), 0.0);
        assert_eq!(state.balance(), 100.0 + pending);
    }

    #[test]
    fn test_claim_with_nothing_pending_is_a_no_op() {
        let mut state = MiningState::new(100.0);
        let before = state.clone();
        assert_eq!(state.claim(), 0.0);
        assert_eq!(state, before);
    }
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial mining state.
//   - record_unit, accrue and claim with debug invariants.
