//! Recent journal lines for the watched unit.

use std::sync::Arc;

use super::command::CommandRunner;
use super::SourceError;

pub struct LogSource {
    runner: Arc<dyn CommandRunner>,
    unit: String,
    lines: u32,
}

impl LogSource {
    pub fn new(runner: Arc<dyn CommandRunner>, unit: String, lines: u32) -> Self {
        Self {
            runner,
            unit,
            lines,
        }
    }

    pub async fn tail(&self) -> Result<String, SourceError> {
        let count = self.lines.to_string();
        self.runner
            .run("journalctl", &["-u", &self.unit, "--no-pager", "-n", &count])
            .await
    }
}
