//! Plain virtual-environment strategy

use super::{EnvOutcome, EnvironmentBootstrapper, ToolRunner};
use crate::error::Result;
use async_trait::async_trait;
use camino::Utf8Path;
use kickstart_core::ToolCommand;
use tracing::info;

/// Environment directory created inside the project root
pub(crate) const VENV_DIR: &str = "venv";

/// Creates `<root>/venv` with a virtual-environment tool, skipping when it
/// already exists
#[derive(Debug, Clone)]
pub struct VenvBootstrapper {
    tool: ToolCommand,
    runner: ToolRunner,
}

impl VenvBootstrapper {
    /// Create the strategy; `tool` receives the environment path as `{target}`
    pub fn new(tool: ToolCommand, runner: ToolRunner) -> Self {
        Self { tool, runner }
    }
}

#[async_trait]
impl EnvironmentBootstrapper for VenvBootstrapper {
    fn name(&self) -> &'static str {
        "venv"
    }

    async fn create_environment(&self, project_root: &Utf8Path) -> Result<EnvOutcome> {
        let venv_path = project_root.join(VENV_DIR);
        if venv_path.exists() {
            info!("Virtual environment already exists at {}", venv_path);
            return Ok(EnvOutcome::SkippedExisting { path: venv_path });
        }

        self.runner.run(&self.tool, venv_path.as_str()).await?;
        info!("Virtual environment created at {}", venv_path);
        Ok(EnvOutcome::Created { path: venv_path })
    }
}
