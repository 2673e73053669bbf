//! One operation per dashboard panel. Each samples its source(s) from the
//! registry and converts failures into the panel's sentinel values, so every
//! operation always yields a complete, serializable body. Panels composed of
//! two independent calls issue them concurrently.

use tracing::warn;

use crate::models::{
    DiskSpace, HostMetrics, NetworkUsage, OnlinePlayers, Sampled, ServerLogs, ServiceStatus,
    SystemInfo, Uptime, WorldInfo,
};
use crate::registry::Registry;

pub struct Aggregator {
    registry: Registry,
}

impl Aggregator {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub async fn host_metrics(&self) -> HostMetrics {
        match self.registry.system.sample().await {
            Ok(metrics) => metrics,
            Err(e) => {
                warn!(error = %e, "host metrics unavailable");
                HostMetrics::default()
            }
        }
    }

    pub async fn service_status(&self) -> ServiceStatus {
        let (running, (server_type, mc_version)) = tokio::join!(
            self.registry.service.is_active(),
            self.registry.service.sidecar_metadata(),
        );
        ServiceStatus {
            status: if running { "Up" } else { "Down" }.to_string(),
            server_type,
            mc_version,
        }
    }

    pub async fn system_info(&self) -> SystemInfo {
        self.registry.host.info()
    }

    pub async fn server_uptime(&self) -> Uptime {
        Uptime {
            uptime: self.registry.host.uptime(),
        }
    }

    pub async fn disk_space(&self) -> DiskSpace {
        match self.registry.disk.sample().await {
            Ok(space) => space,
            Err(e) => {
                warn!(error = %e, "disk usage unavailable");
                DiskSpace::default()
            }
        }
    }

    pub async fn network_usage(&self) -> NetworkUsage {
        let (counters, active_connections) = tokio::join!(
            self.registry.network.counters(),
            self.registry.network.active_connections(),
        );
        let (received_bytes, transmitted_bytes) = match counters {
            Ok((rx, tx)) => (Sampled::Value(rx), Sampled::Value(tx)),
            Err(e) => {
                warn!(error = %e, "link statistics unavailable");
                let message = format!("Error executing 'ip' command: {e}");
                (Sampled::Error(message.clone()), Sampled::Error(message))
            }
        };
        NetworkUsage {
            received_bytes,
            transmitted_bytes,
            active_connections,
            unusual_activity: "None".to_string(),
        }
    }

    pub async fn server_logs(&self) -> ServerLogs {
        match self.registry.logs.tail().await {
            Ok(logs) => ServerLogs { logs },
            Err(e) => ServerLogs {
                logs: format!("An error occurred while fetching logs: {e}"),
            },
        }
    }

    pub async fn online_players(&self) -> OnlinePlayers {
        match self.registry.game.sample().await {
            Ok(status) => OnlinePlayers {
                online_players: Sampled::Value(status.online_players),
                player_names: status.player_names,
            },
            Err(e) => OnlinePlayers {
                online_players: Sampled::Error(format!("Error: {e}")),
                player_names: Vec::new(),
            },
        }
    }

    pub async fn world_info(&self) -> WorldInfo {
        self.registry.world.sample().await
    }
}
