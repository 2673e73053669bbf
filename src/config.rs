use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime configuration. Defaults mirror the paths and ports of a stock
/// `minecraft.service` deployment under `/opt/minecraft`.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP shell binds to.
    pub listen_address: String,
    /// systemd unit the dashboard watches.
    pub service_unit: String,
    /// World configuration file of the game server.
    pub properties_path: PathBuf,
    /// Sidecar file describing the installed server kind and version.
    pub server_info_path: PathBuf,
    /// Host and port of the game server's status protocol.
    pub query_host: String,
    pub query_port: u16,
    /// Mount point sampled for the disk panel.
    pub disk_mount_point: PathBuf,
    /// Number of journal lines returned by the logs panel.
    pub log_tail_lines: u32,
    pub command_timeout_secs: u64,
    pub query_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:8080".to_string(),
            service_unit: "minecraft.service".to_string(),
            properties_path: PathBuf::from("/opt/minecraft/server.properties"),
            server_info_path: PathBuf::from("/opt/minecraft/server_info.txt"),
            query_host: "localhost".to_string(),
            query_port: 25565,
            disk_mount_point: PathBuf::from("/"),
            log_tail_lines: 50,
            command_timeout_secs: 5,
            query_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Loads the TOML config file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let config: Config = toml::from_str(&contents)?;
                info!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Box::new(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_deployment() {
        let config = Config::default();
        assert_eq!(config.service_unit, "minecraft.service");
        assert_eq!(config.query_port, 25565);
        assert_eq!(config.log_tail_lines, 50);
        assert_eq!(
            config.properties_path,
            PathBuf::from("/opt/minecraft/server.properties")
        );
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config =
            toml::from_str("service_unit = \"paper.service\"\nquery_port = 25570\n").unwrap();
        assert_eq!(config.service_unit, "paper.service");
        assert_eq!(config.query_port, 25570);
        assert_eq!(config.listen_address, "0.0.0.0:8080");
        assert_eq!(config.disk_mount_point, PathBuf::from("/"));
    }
}
