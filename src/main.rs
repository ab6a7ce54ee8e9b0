// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 2.0.0
//
// Process entry point: parse options, initialise logging, build the
// coordinator with its provider and ledger client, run the mining loop and
// the control surface until Ctrl-C.

use anyhow::Context;
use clap::Parser;
use helios_miner::{
    Args, LedgerSettings, MiningCoordinator, MiningPolicy, ModelTrainer, ShutdownCoordinator,
    SimulatedLedger, WorkUnitProvider, utils::logging::init_logger, web_server::start_web_server,
};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

const LOG_TARGET: &str = "helios::main";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    let policy = MiningPolicy::from_args(&args).context("invalid mining policy")?;
    let ledger_settings = LedgerSettings::from_args(&args).context("invalid ledger settings")?;
    let listen = args.listen_addr().map_err(anyhow::Error::msg)?;

    let _log_handle = init_logger(&args.log_level, args.log_file.as_deref())
        .context("failed to initialise logging")?;

    info!(target: LOG_TARGET, "🚀 Starting Helios Miner v{}", env!("CARGO_PKG_VERSION"));
    info!(target: LOG_TARGET, "🎯 Threshold: loss < {}", policy.threshold);
    info!(target: LOG_TARGET, "💎 Reward per submission: {}", policy.reward_per_submission);
    info!(target: LOG_TARGET, "💳 Initial balance: {:.4}", policy.initial_balance);
    info!(target: LOG_TARGET, "⛓️ Ledger: {} ({})", ledger_settings.node_url, ledger_settings.contract_id);

    let provider: Arc<dyn WorkUnitProvider> = Arc::new(match args.seed {
        Some(seed) => ModelTrainer::with_seed(seed),
        None => ModelTrainer::new(),
    });

    let ledger = Arc::new(SimulatedLedger::new(ledger_settings));
    if let Err(e) = ledger.connect().await {
        warn!(target: LOG_TARGET, "⚠️ Initial ledger handshake failed ({}); will retry on first submission", e);
    }

    let coordinator = MiningCoordinator::new(policy, provider, ledger).into_arc();
    if args.autostart {
        coordinator.start();
    } else {
        info!(target: LOG_TARGET, "💡 Mining is idle; POST /start to begin");
    }

    let shutdown = ShutdownCoordinator::new();
    let mining = coordinator.spawn(shutdown.token());
    let printer = (args.stats_interval > 0).then(|| {
        coordinator.start_stats_printer(Duration::from_secs(args.stats_interval), shutdown.token())
    });
    let signal = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { shutdown.wait_for_ctrl_c().await })
    };

    let served = start_web_server(listen, Arc::clone(&coordinator), shutdown.token()).await;

    // The server only returns on shutdown or on a bind/serve error
    shutdown.initiate_shutdown();
    mining.await.context("mining loop task failed")?;
    if let Some(printer) = printer {
        printer.await.context("stats printer task failed")?;
    }
    signal.await.context("signal listener task failed")?;
    served.with_context(|| format!("control surface on {} failed", listen))?;

    let last = coordinator.status();
    info!(
        target: LOG_TARGET,
        "👋 Shut down at epoch {} | balance {:.4} | pending {:.4}",
        last.epoch,
        last.balance,
        last.pending
    );
    Ok(())
}

// Changelog:
// - v2.0.0 (2026-09-28): Entry point for the Helios node.
//   - Builds trainer, ledger and coordinator from validated options.
//   - Runs the loop, stats printer and control surface until Ctrl-C.
