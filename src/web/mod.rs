//! Thin HTTP shell: one GET route per dashboard panel, each a single
//! aggregator call. Handlers are infallible; degraded panels carry their
//! sentinel values in an otherwise well-formed body.

use axum::{extract::State, http::Method, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::aggregator::Aggregator;
use crate::models::{
    DiskSpace, HostMetrics, NetworkUsage, OnlinePlayers, ServerLogs, ServiceStatus, SystemInfo,
    Uptime, WorldInfo,
};

pub struct AppState {
    pub aggregator: Aggregator,
}

pub fn router(aggregator: Aggregator) -> Router {
    let state = Arc::new(AppState { aggregator });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/get-stats", get(stats_handler))
        .route("/get-minecraft-status", get(minecraft_status_handler))
        .route("/get-system-info", get(system_info_handler))
        .route("/get-server-uptime", get(server_uptime_handler))
        .route("/get-disk-space", get(disk_space_handler))
        .route("/get-network-usage", get(network_usage_handler))
        .route("/get-server-logs", get(server_logs_handler))
        .route("/get-online-players", get(online_players_handler))
        .route("/get-world-info", get(world_info_handler))
        .with_state(state)
        .layer(cors)
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<HostMetrics> {
    Json(state.aggregator.host_metrics().await)
}

async fn minecraft_status_handler(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(state.aggregator.service_status().await)
}

async fn system_info_handler(State(state): State<Arc<AppState>>) -> Json<SystemInfo> {
    Json(state.aggregator.system_info().await)
}

async fn server_uptime_handler(State(state): State<Arc<AppState>>) -> Json<Uptime> {
    Json(state.aggregator.server_uptime().await)
}

async fn disk_space_handler(State(state): State<Arc<AppState>>) -> Json<DiskSpace> {
    Json(state.aggregator.disk_space().await)
}

async fn network_usage_handler(State(state): State<Arc<AppState>>) -> Json<NetworkUsage> {
    Json(state.aggregator.network_usage().await)
}

async fn server_logs_handler(State(state): State<Arc<AppState>>) -> Json<ServerLogs> {
    Json(state.aggregator.server_logs().await)
}

async fn online_players_handler(State(state): State<Arc<AppState>>) -> Json<OnlinePlayers> {
    Json(state.aggregator.online_players().await)
}

async fn world_info_handler(State(state): State<Arc<AppState>>) -> Json<WorldInfo> {
    Json(state.aggregator.world_info().await)
}
