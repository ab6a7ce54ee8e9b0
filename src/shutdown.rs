// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/shutdown.rs
// Version: 1.0.0
//
// Graceful shutdown signalling shared by the mining loop, the stats printer
// and the control surface.

use log::{error, info};
use tokio_util::sync::CancellationToken;

const LOG_TARGET: &str = "helios::shutdown";

/// Hands out clones of one cancellation token; cancelling it asks every task
/// holding a clone to finish at its next suspension point.
#[derive(Clone, Default)]
pub struct ShutdownCoordinator {
    token: CancellationToken,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn initiate_shutdown(&self) {
        info!(target: LOG_TARGET, "Signalling all tasks to stop");
        self.token.cancel();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Waits for Ctrl-C, then cancels the token.
    pub async fn wait_for_ctrl_c(&self) {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    error!(target: LOG_TARGET, "Failed to listen for Ctrl-C: {}", e);
                }
                self.initiate_shutdown();
            }
            _ = self.token.cancelled() => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_share_cancellation() {
        let shutdown = ShutdownCoordinator::new();
        let token = shutdown.token();
        assert!(!shutdown.is_shutting_down());
        shutdown.initiate_shutdown();
        assert!(token.is_cancelled());
        assert!(shutdown.is_shutting_down());
    }
}

// Changelog:
// - v1.0.0 (2026-09-28): Initial shutdown coordinator.
//   - Wraps a CancellationToken shared by the mining loop, stats printer and
//     web server.
//   - Ctrl-C listener cancels the token once.
