//! External tool execution

use crate::error::{Error, Result};
use kickstart_core::ToolCommand;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs configured tools, failing on a missing binary, a non-zero exit or
/// an exceeded timeout
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRunner {
    timeout: Option<Duration>,
}

impl ToolRunner {
    /// Create a runner; `None` waits for the tool indefinitely
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run `tool` with `{target}` replaced by `target`, in the process's
    /// current working directory
    pub async fn run(&self, tool: &ToolCommand, target: &str) -> Result<()> {
        let program =
            which::which(&tool.program).map_err(|_| Error::tool_not_found(&tool.program))?;
        let args = tool.render_args(target);
        let command_line = format!("{} {}", tool.program, args.join(" "));

        debug!("Running: {}", command_line);
        let mut cmd = Command::new(program);
        cmd.args(&args).kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| Error::tool_timed_out(&command_line, limit))?,
            None => cmd.output().await,
        }
        .map_err(|e| Error::tool_failed(&command_line, "spawn", e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = output
                .status
                .code()
                .map(|code| format!("exit code {}", code))
                .unwrap_or_else(|| "terminated by signal".to_string());
            return Err(Error::tool_failed(command_line, status, stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("{}", stdout.trim());
        }
        Ok(())
    }
}
