//! Metric sources: one module per telemetry category. Every source exposes a
//! sampling operation returning `Result<_, SourceError>`; the aggregator maps
//! the error side to the documented sentinel for that panel.

pub mod command;
pub mod disk;
pub mod game;
pub mod host;
pub mod logs;
pub mod network;
pub mod service;
pub mod system;
pub mod world;

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` exited with status {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("unexpected output: {0}")]
    Parse(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Wraps a failed background sampling task.
    pub(crate) fn task(e: tokio::task::JoinError) -> Self {
        SourceError::Io(std::io::Error::other(e))
    }
}
