//! Child-process execution for the sources that still shell out (service
//! manager, link statistics, journal). Commands are fixed argument lists from
//! configuration, never built from request input.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use super::SourceError;

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the program with the given arguments and returns its stdout with
    /// trailing whitespace trimmed.
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, SourceError>;
}

pub struct SystemCommandRunner {
    timeout: Duration,
}

impl SystemCommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, SourceError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // The child is reaped by wait_with_output below; if the timeout
            // fires first, dropping the handle kills it.
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SourceError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| SourceError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                program: program.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}
