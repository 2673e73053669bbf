//! Cumulative link counters and active socket count.
//!
//! The counters come from `ip -s link` and are summed across every interface
//! in the output, loopback included. That double-counts local traffic, but it
//! is what the dashboard has always displayed, so it is kept as-is.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use super::command::CommandRunner;
use super::SourceError;

const SOCKET_TABLES: [&str; 4] = ["tcp", "tcp6", "udp", "udp6"];

pub struct NetworkSource {
    runner: Arc<dyn CommandRunner>,
    proc_net_dir: PathBuf,
}

impl NetworkSource {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            proc_net_dir: PathBuf::from("/proc/net"),
        }
    }

    #[cfg(test)]
    fn with_proc_net_dir(runner: Arc<dyn CommandRunner>, proc_net_dir: PathBuf) -> Self {
        Self {
            runner,
            proc_net_dir,
        }
    }

    /// Total bytes (received, transmitted) across all interfaces.
    pub async fn counters(&self) -> Result<(u64, u64), SourceError> {
        let output = self.runner.run("ip", &["-s", "link"]).await?;
        Ok(parse_link_stats(&output))
    }

    /// Number of inet sockets (TCP in any state plus UDP). Tables that cannot
    /// be read are skipped.
    pub async fn active_connections(&self) -> u64 {
        let mut total = 0;
        for table in SOCKET_TABLES {
            match tokio::fs::read_to_string(self.proc_net_dir.join(table)).await {
                Ok(contents) => total += count_socket_rows(&contents),
                Err(e) => debug!(table, error = %e, "socket table unavailable"),
            }
        }
        total
    }
}

/// Scans `ip -s link` output: a line containing "RX:" (or "TX:") announces
/// that the first token of the following line is a byte counter. Tokens that
/// fail to parse skip that one increment rather than aborting the scan.
pub fn parse_link_stats(output: &str) -> (u64, u64) {
    let lines: Vec<&str> = output.lines().collect();
    let mut received = 0u64;
    let mut transmitted = 0u64;

    for (i, line) in lines.iter().enumerate() {
        let Some(next) = lines.get(i + 1) else {
            continue;
        };
        if line.contains("RX:") {
            if let Some(bytes) = first_token(next) {
                received += bytes;
            }
        }
        if line.contains("TX:") {
            if let Some(bytes) = first_token(next) {
                transmitted += bytes;
            }
        }
    }
    (received, transmitted)
}

fn first_token(line: &str) -> Option<u64> {
    line.split_whitespace().next()?.parse().ok()
}

fn count_socket_rows(contents: &str) -> u64 {
    // First line is the column header.
    contents
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count() as u64
}
