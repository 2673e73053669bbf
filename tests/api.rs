//! Router-level tests: every panel endpoint answers 200 with a well-formed
//! body even when the underlying tools and files are missing.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use mcdash::aggregator::Aggregator;
use mcdash::config::Config;
use mcdash::registry::Registry;
use mcdash::sources::command::{CommandRunner, SystemCommandRunner};
use mcdash::web;

fn test_router(config: &Config) -> Router {
    let runner: Arc<dyn CommandRunner> =
        Arc::new(SystemCommandRunner::new(Duration::from_secs(2)));
    web::router(Aggregator::new(Registry::new(config, runner)))
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn degraded_config() -> Config {
    Config {
        properties_path: PathBuf::from("/no/such/server.properties"),
        server_info_path: PathBuf::from("/no/such/server_info.txt"),
        query_host: "127.0.0.1".to_string(),
        query_port: 1,
        query_timeout_secs: 1,
        command_timeout_secs: 2,
        ..Config::default()
    }
}

#[tokio::test]
async fn health_answers_ok() {
    let router = test_router(&degraded_config());
    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn stats_panel_has_the_contract_fields() {
    let router = test_router(&degraded_config());
    let (status, body) = get_json(&router, "/get-stats").await;
    assert_eq!(status, StatusCode::OK);
    for field in [
        "cpu_usage",
        "memory_usage",
        "memory_used",
        "memory_total",
        "swap_usage",
        "swap_used",
        "swap_total",
        "load_average",
    ] {
        assert!(body.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(body["load_average"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn world_panel_reads_a_real_properties_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# Minecraft server properties").unwrap();
    writeln!(file, "gamemode=survival").unwrap();
    writeln!(file, "difficulty=normal").unwrap();
    writeln!(file, "online-mode=true").unwrap();

    let config = Config {
        properties_path: file.path().to_path_buf(),
        ..degraded_config()
    };
    let router = test_router(&config);
    let (status, body) = get_json(&router, "/get-world-info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gamemode"], "survival");
    assert_eq!(body["difficulty"], "normal");
    assert_eq!(body["online_mode"], "true");
    assert_eq!(body["max_world_size"], "Unknown");
    assert_eq!(body["view_distance"], "Unknown");
}

#[tokio::test]
async fn world_panel_reports_the_missing_file() {
    let router = test_router(&degraded_config());
    let (status, body) = get_json(&router, "/get-world-info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "server.properties file not found.");
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn minecraft_status_panel_uses_the_sidecar_when_present() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Server Type: Paper").unwrap();
    writeln!(file, "Version: 1.20.4").unwrap();

    let config = Config {
        server_info_path: file.path().to_path_buf(),
        ..degraded_config()
    };
    let router = test_router(&config);
    let (status, body) = get_json(&router, "/get-minecraft-status").await;
    assert_eq!(status, StatusCode::OK);
    // The sidecar resolves even though the service query cannot succeed here.
    assert_eq!(body["server_type"], "Paper");
    assert_eq!(body["mc_version"], "1.20.4");
    assert!(body["status"] == "Up" || body["status"] == "Down");
}

#[tokio::test]
async fn players_panel_degrades_without_a_game_server() {
    let router = test_router(&degraded_config());
    let (status, body) = get_json(&router, "/get-online-players").await;
    assert_eq!(status, StatusCode::OK);
    let message = body["online_players"].as_str().expect("error string");
    assert!(message.starts_with("Error: "));
    assert_eq!(body["player_names"], serde_json::json!([]));
}

#[tokio::test]
async fn uptime_and_system_info_are_always_populated() {
    let router = test_router(&degraded_config());

    let (status, body) = get_json(&router, "/get-server-uptime").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["uptime"].as_str().unwrap().starts_with("up "));

    let (status, body) = get_json(&router, "/get-system-info").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["distro"].as_str().unwrap().is_empty());
    assert!(!body["kernel_version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn network_panel_is_well_formed_either_way() {
    let router = test_router(&degraded_config());
    let (status, body) = get_json(&router, "/get-network-usage").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unusual_activity"], "None");
    assert!(body["active_connections"].is_u64());
    // Counter fields are either numbers or error strings, never absent.
    assert!(body["received_bytes"].is_u64() || body["received_bytes"].is_string());
    assert!(body["transmitted_bytes"].is_u64() || body["transmitted_bytes"].is_string());
}

#[tokio::test]
async fn disk_panel_upholds_the_usage_invariants() {
    let router = test_router(&degraded_config());
    let (status, body) = get_json(&router, "/get-disk-space").await;
    assert_eq!(status, StatusCode::OK);
    let total = body["total_disk_space"].as_f64().unwrap();
    let used = body["used_disk_space"].as_f64().unwrap();
    let free = body["free_disk_space"].as_f64().unwrap();
    assert!(total >= 0.0);
    assert!((0.0..=total).contains(&used));
    assert!((0.0..=total).contains(&free));
}

#[tokio::test]
async fn logs_panel_returns_text_or_error_string() {
    let router = test_router(&degraded_config());
    let (status, body) = get_json(&router, "/get-server-logs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["logs"].is_string());
}
