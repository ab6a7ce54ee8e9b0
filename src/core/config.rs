// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/config.rs
// Version: 1.0.0
//
// This file holds the fixed parameters of the mining policy (eligibility
// threshold, per-submission reward, loop pacing, optional timeouts) and the
// ledger connection settings, plus their validation.
//
// Tree Location:
// - src/core/config.rs (policy and ledger settings)
// - Depends on: core/types, core/error

use super::error::ConfigError;
use super::types::Args;
use std::time::Duration;

/// Quality scores strictly below this are submitted to the ledger.
pub const DEFAULT_THRESHOLD: f64 = 0.5;
/// Accrued into pending rewards for every successful submission.
pub const DEFAULT_REWARD: f64 = 0.005;
/// Wallet balance the node starts with.
pub const DEFAULT_INITIAL_BALANCE: f64 = 12450.0;
/// Sentinel "worst" quality reported before the first unit completes.
pub const INITIAL_QUALITY: f64 = 1.0;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_ITERATION_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_ARTIFACT: &str = "weights.pt";
pub const DEFAULT_NODE_URL: &str = "https://rpc.qubic.org";
pub const DEFAULT_CONTRACT_ID: &str = "HELIOS_AI_V1";

/// Parameters the coordinator is constructed with. None of them can be
/// changed through the control surface once the coordinator exists.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningPolicy {
    pub threshold: f64,
    pub reward_per_submission: f64,
    pub initial_balance: f64,
    /// Idle re-check period while stopped.
    pub poll_interval: Duration,
    /// Pause after every iteration that ran a unit, whatever its outcome.
    pub iteration_delay: Duration,
    pub compute_timeout: Option<Duration>,
    pub submit_timeout: Option<Duration>,
    pub artifact_ref: String,
}

impl Default for MiningPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reward_per_submission: DEFAULT_REWARD,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            poll_interval: DEFAULT_POLL_INTERVAL,
            iteration_delay: DEFAULT_ITERATION_DELAY,
            compute_timeout: None,
            submit_timeout: None,
            artifact_ref: DEFAULT_ARTIFACT.to_string(),
        }
    }
}

impl MiningPolicy {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let policy = Self {
            threshold: args.threshold,
            reward_per_submission: args.reward,
            initial_balance: args.initial_balance,
            poll_interval: Duration::from_millis(args.poll_interval_ms),
            iteration_delay: Duration::from_millis(args.iteration_delay_ms),
            compute_timeout: args.compute_timeout_ms.map(Duration::from_millis),
            submit_timeout: args.submit_timeout_ms.map(Duration::from_millis),
            artifact_ref: args.artifact.clone(),
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }
        if !self.reward_per_submission.is_finite() || self.reward_per_submission < 0.0 {
            return Err(ConfigError::InvalidReward {
                value: self.reward_per_submission,
            });
        }
        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(ConfigError::InvalidBalance {
                value: self.initial_balance,
            });
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroInterval {
                name: "poll interval",
            });
        }
        if self.iteration_delay.is_zero() {
            return Err(ConfigError::ZeroInterval {
                name: "iteration delay",
            });
        }
        if self.compute_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroInterval {
                name: "compute timeout",
            });
        }
        if self.submit_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroInterval {
                name: "submit timeout",
            });
        }
        if self.artifact_ref.trim().is_empty() {
            return Err(ConfigError::EmptyArtifact);
        }
        Ok(())
    }
}

/// Where the ledger client connects and which contract it calls.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSettings {
    pub node_url: String,
    pub contract_id: String,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
        }
    }
}

impl LedgerSettings {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.node_url.trim().is_empty() {
            return Err(ConfigError::EmptyLedgerField { field: "node url" });
        }
        if args.contract_id.trim().is_empty() {
            return Err(ConfigError::EmptyLedgerField {
                field: "contract id",
            });
        }
        Ok(Self {
            node_url: args.node_url.clone(),
            contract_id: args.contract_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["helios-miner"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults_match_reference_policy() {
        let policy = MiningPolicy::from_args(&parse(&[])).unwrap();
        assert_eq!(policy, MiningPolicy::default());
        assert_eq!(policy.threshold, 0.5);
        assert_eq!(policy.reward_per_submission, 0.005);
        assert_eq!(policy.initial_balance, 12450.0);
        assert_eq!(policy.poll_interval, Duration::from_millis(100));
        assert_eq!(policy.iteration_delay, Duration::from_millis(100));
        assert!(policy.compute_timeout.is_none());
        assert!(policy.submit_timeout.is_none());
    }

    #[test]
    fn test_timeouts_are_layered_from_args() {
        let policy =
            MiningPolicy::from_args(&parse(&["--submit-timeout-ms", "250", "--compute-timeout-ms", "900"]))
                .unwrap();
        assert_eq!(policy.submit_timeout, Some(Duration::from_millis(250)));
        assert_eq!(policy.compute_timeout, Some(Duration::from_millis(900)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let policy = MiningPolicy {
            threshold: f64::NAN,
            ..MiningPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(ConfigError::InvalidThreshold { .. })));

        let policy = MiningPolicy {
            reward_per_submission: -0.1,
            ..MiningPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(ConfigError::InvalidReward { .. })));

        let policy = MiningPolicy {
            iteration_delay: Duration::ZERO,
            ..MiningPolicy::default()
        };
        assert_eq!(
            policy.validate(),
            Err(ConfigError::ZeroInterval {
                name: "iteration delay"
            })
        );

        let policy = MiningPolicy {
            artifact_ref: "  ".to_string(),
            ..MiningPolicy::default()
        };
        assert_eq!(policy.validate(), Err(ConfigError::EmptyArtifact));
    }

    #[test]
    fn test_ledger_settings_require_values() {
        let settings = LedgerSettings::from_args(&parse(&[])).unwrap();
        assert_eq!(settings, LedgerSettings::default());

        let err = LedgerSettings::from_args(&parse(&["--contract-id", ""])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyLedgerField {
                field: "contract id"
            }
        );
    }
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial mining policy and ledger settings.
//   - Defaults, conversion from Args and validation.
