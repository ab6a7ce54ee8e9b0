// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.0
//
// This file defines core data structures for the Helios miner: command-line
// arguments, the status snapshot served to the control surface, and the
// response bodies of the control operations.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Command-line arguments for the Helios miner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "helios-miner",
    version,
    about = "Useful-work mining node with an HTTP control surface",
    long_about = "Helios Miner runs a training loop in the background. Every unit of work\n\
                  produces a loss score; scores below the threshold are submitted to the\n\
                  ledger and accrue a reward that can be claimed into the wallet balance.\n\n\
                  CONTROL: GET /status, POST /start, POST /stop, POST /claim\n\
                  MONITORING: GET /stats, GET /activity, WebSocket at /ws\n\n\
                  Examples:\n\
                    Default node: helios-miner\n\
                    Start mining immediately: helios-miner --autostart\n\
                    Stricter policy: helios-miner --threshold 0.25 --reward 0.01\n\
                    Bounded ledger calls: helios-miner --submit-timeout-ms 2000"
)]
pub struct Args {
    /// Address the control surface listens on
    #[arg(
        long,
        default_value = "127.0.0.1:8000",
        value_name = "HOST:PORT",
        help = "Control surface listen address"
    )]
    pub listen: String,

    /// Loss scores strictly below this value are submitted (lower is better)
    #[arg(long, default_value = "0.5", value_name = "SCORE")]
    pub threshold: f64,

    /// Reward accrued for every successful submission
    #[arg(long, default_value = "0.005", value_name = "AMOUNT")]
    pub reward: f64,

    /// Wallet balance at process start
    #[arg(long, default_value = "12450.0", value_name = "AMOUNT")]
    pub initial_balance: f64,

    /// How often a stopped loop re-checks whether it was started
    #[arg(long, default_value = "100", value_name = "MS")]
    pub poll_interval_ms: u64,

    /// Pause between work units (caps work-unit throughput)
    #[arg(long, default_value = "100", value_name = "MS")]
    pub iteration_delay_ms: u64,

    /// Abandon a work unit that takes longer than this
    #[arg(long, value_name = "MS")]
    pub compute_timeout_ms: Option<u64>,

    /// Abandon a ledger submission that takes longer than this
    #[arg(long, value_name = "MS")]
    pub submit_timeout_ms: Option<u64>,

    /// Artifact reference sent along with each submission
    #[arg(long, default_value = "weights.pt", value_name = "PATH")]
    pub artifact: String,

    /// Ledger RPC endpoint
    #[arg(long, default_value = "https://rpc.qubic.org", value_name = "URL")]
    pub node_url: String,

    /// Contract receiving training results
    #[arg(long, default_value = "HELIOS_AI_V1", value_name = "ID")]
    pub contract_id: String,

    /// Seed for the trainer's data generator (random when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start mining as soon as the node is up
    #[arg(long, default_value = "false")]
    pub autostart: bool,

    /// Seconds between dashboard summaries in the log (0 = disabled)
    #[arg(long, default_value = "30", value_name = "SECONDS")]
    pub stats_interval: u64,

    /// Console log level (trace, debug, info, warn, error, off)
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn listen_addr(&self) -> Result<SocketAddr, String> {
        self.listen
            .parse::<SocketAddr>()
            .map_err(|e| format!("Listen address '{}' is not HOST:PORT ({})", self.listen, e))
    }

    pub fn validate(&self) -> Result<(), String> {
        self.listen_addr()?;

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            other => {
                return Err(format!(
                    "Unknown log level '{}' (use trace, debug, info, warn, error or off)",
                    other
                ));
            }
        }

        if let Some(path) = &self.log_file {
            if path.trim().is_empty() {
                return Err("Log file path must not be empty".to_string());
            }
        }

        Ok(())
    }
}

/// Point-in-time view of the mining state, served by `GET /status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiningSnapshot {
    pub running: bool,
    pub epoch: u64,
    /// Loss of the most recently completed unit
    pub quality: f64,
    pub balance: f64,
    pub pending: f64,
    /// Display-only figure, zero while stopped
    pub activity_metric: u32,
}

/// Result of a claim. `amount` is zero when nothing was pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    pub message: String,
    pub amount: f64,
}

impl ClaimOutcome {
    pub fn claimed(amount: f64) -> Self {
        Self {
            message: "Claimed".to_string(),
            amount,
        }
    }

    pub fn nothing() -> Self {
        Self {
            message: "Nothing to claim".to_string(),
            amount: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlMessage {
    pub message: String,
}

impl ControlMessage {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Static node information served by `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub status: String,
    pub version: String,
}

impl Default for NodeInfo {
    fn default() -> Self {
        Self {
            status: "Helios Node Online".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}


// Changelog:
// - v1.1.0 (2026-09-28): Types for the Helios node.
//   - Args CLI with listen address and logging validation.
//   - MiningSnapshot, ClaimOutcome, ControlMessage and NodeInfo wire types.
