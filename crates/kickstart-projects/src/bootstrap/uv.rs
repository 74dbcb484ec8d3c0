//! Project-init-then-venv strategy

use super::{EnvOutcome, EnvironmentBootstrapper, InitOutcome, ToolRunner, WorkingDirGuard};
use crate::error::Result;
use async_trait::async_trait;
use camino::Utf8Path;
use kickstart_core::ToolCommand;
use tracing::{info, warn};

/// Environment directory the venv tool creates inside the project root
pub(crate) const UV_VENV_DIR: &str = ".venv";

/// Runs a project-initialization tool against a new root, then creates the
/// environment from inside the root.
///
/// Initialization is skipped (with a warning) when the root already exists,
/// since re-initializing over an existing directory is unsafe. The working
/// directory change for the environment step is scoped and always undone.
#[derive(Debug, Clone)]
pub struct ProjectInitBootstrapper {
    init_tool: ToolCommand,
    venv_tool: ToolCommand,
    runner: ToolRunner,
}

impl ProjectInitBootstrapper {
    /// Create the strategy. `init_tool` receives the project root as
    /// `{target}`; `venv_tool` runs with the root as working directory and
    /// receives `.venv` as `{target}`.
    pub fn new(init_tool: ToolCommand, venv_tool: ToolCommand, runner: ToolRunner) -> Self {
        Self {
            init_tool,
            venv_tool,
            runner,
        }
    }
}

#[async_trait]
impl EnvironmentBootstrapper for ProjectInitBootstrapper {
    fn name(&self) -> &'static str {
        "uv"
    }

    async fn init_project(&self, project_root: &Utf8Path) -> Result<InitOutcome> {
        if project_root.exists() {
            warn!(
                "{} already exists, skipping project initialization",
                project_root
            );
            return Ok(InitOutcome::SkippedExisting);
        }

        self.runner.run(&self.init_tool, project_root.as_str()).await?;
        info!("Initialized project at {}", project_root);
        Ok(InitOutcome::Initialized)
    }

    async fn create_environment(&self, project_root: &Utf8Path) -> Result<EnvOutcome> {
        let venv_path = project_root.join(UV_VENV_DIR);
        if venv_path.exists() {
            info!("Virtual environment already exists at {}", venv_path);
            return Ok(EnvOutcome::SkippedExisting { path: venv_path });
        }

        let _guard = WorkingDirGuard::enter(project_root)?;
        self.runner.run(&self.venv_tool, UV_VENV_DIR).await?;

        info!("Virtual environment created at {}", venv_path);
        Ok(EnvOutcome::Created { path: venv_path })
    }
}
