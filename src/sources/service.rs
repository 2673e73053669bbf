//! Service-manager state plus the sidecar metadata file. The two are
//! deliberately independent: the unit can be down while the sidecar still
//! names the installed server kind and version, and vice versa.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use super::command::CommandRunner;

const UNKNOWN: &str = "Unknown";

pub struct ServiceSource {
    runner: Arc<dyn CommandRunner>,
    unit: String,
    info_path: PathBuf,
}

impl ServiceSource {
    pub fn new(runner: Arc<dyn CommandRunner>, unit: String, info_path: PathBuf) -> Self {
        Self {
            runner,
            unit,
            info_path,
        }
    }

    /// Whether the service manager reports the unit as active. Any other
    /// answer, including a failed query, counts as not running.
    pub async fn is_active(&self) -> bool {
        match self.runner.run("systemctl", &["is-active", &self.unit]).await {
            Ok(output) => output.trim() == "active",
            Err(e) => {
                debug!(unit = %self.unit, error = %e, "service manager query failed");
                false
            }
        }
    }

    /// (server kind, version) from the two-line sidecar file.
    pub async fn sidecar_metadata(&self) -> (String, String) {
        match tokio::fs::read_to_string(&self.info_path).await {
            Ok(contents) => parse_sidecar(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                (UNKNOWN.to_string(), UNKNOWN.to_string())
            }
            Err(e) => ("Error".to_string(), e.to_string()),
        }
    }
}

fn parse_sidecar(contents: &str) -> (String, String) {
    let mut lines = contents.lines();
    let kind = lines.next().map(label_value).unwrap_or_else(unknown);
    let version = lines.next().map(label_value).unwrap_or_else(unknown);
    (kind, version)
}

fn label_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_else(unknown)
}

fn unknown() -> String {
    UNKNOWN.to_string()
}
