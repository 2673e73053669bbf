//! Response contract of the dashboard panels. Field names are part of the
//! wire format consumed by the frontend and must not change.

use serde::Serialize;

/// A per-field sampling result: a real value, or the error text that stands
/// in for it. Serializes untagged so the JSON carries either the value or a
/// plain string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sampled<T> {
    Value(T),
    Error(String),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HostMetrics {
    pub cpu_usage: f32,
    pub memory_usage: f32,
    pub memory_used: u64,
    pub memory_total: u64,
    pub swap_usage: f32,
    pub swap_used: u64,
    pub swap_total: u64,
    pub load_average: [f64; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub status: String,
    pub server_type: String,
    pub mc_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub distro: String,
    pub kernel_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Uptime {
    pub uptime: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DiskSpace {
    pub total_disk_space: f64,
    pub used_disk_space: f64,
    pub free_disk_space: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkUsage {
    pub received_bytes: Sampled<u64>,
    pub transmitted_bytes: Sampled<u64>,
    pub active_connections: u64,
    /// Reserved for future anomaly detection; currently always "None".
    pub unusual_activity: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerLogs {
    pub logs: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OnlinePlayers {
    pub online_players: Sampled<u32>,
    pub player_names: Vec<String>,
}

/// World panel body: the recognized properties, or a single error entry when
/// the properties file could not be read at all.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WorldInfo {
    Config(WorldConfig),
    Error { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldConfig {
    pub gamemode: String,
    pub difficulty: String,
    pub online_mode: String,
    pub max_world_size: String,
    pub view_distance: String,
}
