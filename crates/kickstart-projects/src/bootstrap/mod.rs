//! Environment bootstrapping strategies
//!
//! A bootstrapper gives a freshly scaffolded project its isolated Python
//! environment. Two steps, both optional per strategy:
//! - `init_project`: run before the skeleton exists (project-init tools that
//!   refuse to work over an existing directory)
//! - `create_environment`: run once the project root exists
//!
//! Strategies:
//! - [`VenvBootstrapper`]: `python3 -m venv <root>/venv`
//! - [`ProjectInitBootstrapper`]: `uv init <root>`, then `uv venv` from inside the root
//! - [`NoopBootstrapper`]: no environment

mod process;
mod uv;
mod venv;
mod workdir;

pub use process::ToolRunner;
pub use uv::ProjectInitBootstrapper;
pub use venv::VenvBootstrapper;
pub use workdir::WorkingDirGuard;

use crate::error::Result;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use kickstart_core::{BootstrapKind, KickstartConfig};
use serde::Serialize;

/// Result of the project-initialization step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum InitOutcome {
    /// The strategy has no initialization step
    NotApplicable,
    /// The init tool ran against a new directory
    Initialized,
    /// The root already existed, so the init tool was not run
    SkippedExisting,
}

/// Result of the environment-creation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum EnvOutcome {
    /// A new environment was created
    Created { path: Utf8PathBuf },
    /// An environment already existed and was left alone
    SkippedExisting { path: Utf8PathBuf },
    /// The strategy creates no environment
    Disabled,
}

/// Both steps of a bootstrap run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapOutcome {
    pub init: InitOutcome,
    pub environment: EnvOutcome,
}

/// Strategy for creating a project's isolated environment
#[async_trait]
pub trait EnvironmentBootstrapper: Send + Sync {
    /// Get the strategy name
    fn name(&self) -> &'static str;

    /// Run before the skeleton is materialized
    async fn init_project(&self, _project_root: &Utf8Path) -> Result<InitOutcome> {
        Ok(InitOutcome::NotApplicable)
    }

    /// Run after the project root exists
    async fn create_environment(&self, project_root: &Utf8Path) -> Result<EnvOutcome>;

    /// Initialization followed by environment creation
    async fn bootstrap(&self, project_root: &Utf8Path) -> Result<BootstrapOutcome> {
        let init = self.init_project(project_root).await?;
        let environment = self.create_environment(project_root).await?;
        Ok(BootstrapOutcome { init, environment })
    }
}

/// Strategy that creates no environment
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBootstrapper;

#[async_trait]
impl EnvironmentBootstrapper for NoopBootstrapper {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn create_environment(&self, _project_root: &Utf8Path) -> Result<EnvOutcome> {
        Ok(EnvOutcome::Disabled)
    }
}

/// Create the bootstrapper selected by `kind`, wired to the configured tools
pub fn create_bootstrapper(
    kind: BootstrapKind,
    config: &KickstartConfig,
) -> Box<dyn EnvironmentBootstrapper> {
    let runner = ToolRunner::new(config.tool_timeout());
    match kind {
        BootstrapKind::Venv => Box::new(VenvBootstrapper::new(config.tools.venv.clone(), runner)),
        BootstrapKind::Uv => Box::new(ProjectInitBootstrapper::new(
            config.tools.uv_init.clone(),
            config.tools.uv_venv.clone(),
            runner,
        )),
        BootstrapKind::None => Box::new(NoopBootstrapper),
    }
}
