// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web_server.rs
// Version: 2.0.0
//
// This file implements the HTTP control surface of the node. It translates
// start/stop/status/claim requests into coordinator calls, serves session
// statistics and recent activity, and streams the status snapshot over a
// WebSocket for live dashboards.
//
// Tree Location:
// - src/web_server.rs (control surface and WebSocket handler)
// - Depends on: axum, tower-http, serde_json, miner/coordinator

use crate::core::types::{ClaimOutcome, ControlMessage, MiningSnapshot, NodeInfo};
use crate::miner::MiningCoordinator;
use crate::miner::stats::{ActivityEntry, StatsReport};
use axum::{
    Json, Router,
    extract::State,
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
    routing::{get, post},
};
use log::{debug, error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

const LOG_TARGET: &str = "helios::web_server";

/// How often the WebSocket pushes a fresh snapshot
pub const STREAM_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct AppState {
    coordinator: Arc<MiningCoordinator>,
    shutdown: CancellationToken,
}

/// Build the control surface router. CORS is permissive so dashboards served
/// from any origin can drive the node.
pub fn router(coordinator: Arc<MiningCoordinator>, shutdown: CancellationToken) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/status", get(status_handler))
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/claim", post(claim_handler))
        .route("/stats", get(stats_handler))
        .route("/activity", get(activity_handler))
        .route("/ws", get(websocket_handler))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            coordinator,
            shutdown,
        })
}

/// Serve the control surface until `shutdown` is cancelled
pub async fn start_web_server(
    addr: SocketAddr,
    coordinator: Arc<MiningCoordinator>,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(target: LOG_TARGET, "❌ Failed to bind control surface to {}: {}", addr, e);
        e
    })?;

    info!(target: LOG_TARGET, "🌐 Control surface available at: http://{}", addr);
    info!(target: LOG_TARGET, "🔗 WebSocket endpoint: ws://{}/ws", addr);

    let app = router(coordinator, shutdown.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!(target: LOG_TARGET, "🌐 Control surface stopped");
    Ok(())
}

async fn root_handler() -> Json<NodeInfo> {
    Json(NodeInfo::default())
}

async fn status_handler(State(app): State<AppState>) -> Json<MiningSnapshot> {
    Json(app.coordinator.status())
}

async fn start_handler(State(app): State<AppState>) -> Json<ControlMessage> {
    app.coordinator.start();
    Json(ControlMessage::new("Mining Started"))
}

async fn stop_handler(State(app): State<AppState>) -> Json<ControlMessage> {
    app.coordinator.stop();
    Json(ControlMessage::new("Mining Stopped"))
}

async fn claim_handler(State(app): State<AppState>) -> Json<ClaimOutcome> {
    Json(app.coordinator.claim())
}

async fn stats_handler(State(app): State<AppState>) -> Json<StatsReport> {
    Json(app.coordinator.get_stats().to_report())
}

async fn activity_handler(State(app): State<AppState>) -> Json<Vec<ActivityEntry>> {
    Json(app.coordinator.get_stats().recent_activity())
}

/// WebSocket upgrade handler
async fn websocket_handler(ws: WebSocketUpgrade, State(app): State<AppState>) -> Response {
    debug!(target: LOG_TARGET, "🔌 WebSocket connection request received");
    ws.on_upgrade(move |socket| handle_socket(socket, app))
}

/// Push the status snapshot as JSON every second until the client goes away
/// or the node shuts down
async fn handle_socket(mut socket: WebSocket, app: AppState) {
    info!(target: LOG_TARGET, "✅ WebSocket client connected");

    loop {
        let json = match serde_json::to_string(&app.coordinator.status()) {
            Ok(json) => json,
            Err(e) => {
                error!(target: LOG_TARGET, "❌ Failed to serialize status: {}", e);
                break;
            }
        };

        if let Err(e) = socket.send(Message::Text(json)).await {
            debug!(target: LOG_TARGET, "🔌 WebSocket client disconnected: {}", e);
            break;
        }

        tokio::select! {
            _ = app.shutdown.cancelled() => break,
            _ = tokio::time::sleep(STREAM_INTERVAL) => {}
        }
    }

    info!(target: LOG_TARGET, "🔌 WebSocket connection closed");
}

// Changelog:
// - v2.0.0 (2026-09-28): Control surface for the Helios node.
//   - Routes for status, start, stop and claim plus /stats and /activity.
//   - Permissive CORS and graceful shutdown on the shared token.
//   - WebSocket pushes the status snapshot every second.
