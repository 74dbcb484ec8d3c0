//! Scaffolding pipeline: plan, materialize, bootstrap, boilerplate.

use crate::boilerplate::BoilerplateWriter;
use crate::bootstrap::{create_bootstrapper, BootstrapOutcome, EnvironmentBootstrapper};
use crate::error::Result;
use crate::layout::{LayoutLoader, LayoutTable};
use crate::materializer::{FileMaterializer, MaterializeReport};
use crate::planner::PathPlanner;
use crate::types::{LicenseMetadata, ProjectType, ScaffoldRequest};
use camino::Utf8PathBuf;
use kickstart_core::{BootstrapKind, KickstartConfig};
use serde::Serialize;
use tracing::{debug, info};

/// What a scaffolding run did
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldSummary {
    pub project_type: ProjectType,
    pub project_name: String,
    pub root: Utf8PathBuf,
    /// Skeleton paths relative to the base directory
    pub planned: Vec<Utf8PathBuf>,
    pub materialized: MaterializeReport,
    pub bootstrap: BootstrapOutcome,
    pub boilerplate: Vec<Utf8PathBuf>,
}

/// Runs the scaffolding steps in order.
///
/// No rollback: when a step fails, earlier results stay on disk and a re-run
/// picks up where it stopped (skeleton creation only fills absent or empty
/// files, existing environments are skipped).
pub struct WorkspaceBuilder {
    planner: PathPlanner,
    materializer: FileMaterializer,
    bootstrapper: Box<dyn EnvironmentBootstrapper>,
    boilerplate: BoilerplateWriter,
}

impl WorkspaceBuilder {
    /// Create a builder from a layout table and a bootstrap strategy
    pub fn new(
        layouts: LayoutTable,
        bootstrapper: Box<dyn EnvironmentBootstrapper>,
    ) -> Result<Self> {
        Ok(Self {
            planner: PathPlanner::new(layouts),
            materializer: FileMaterializer::new(),
            bootstrapper,
            boilerplate: BoilerplateWriter::new()?,
        })
    }

    /// Create a builder from configuration; `bootstrap` overrides the
    /// configured strategy
    pub fn from_config(
        config: &KickstartConfig,
        bootstrap: Option<BootstrapKind>,
    ) -> Result<Self> {
        let layouts = LayoutLoader::load(config.layouts_file.as_deref())?;
        let kind = bootstrap.unwrap_or(config.bootstrap);
        debug!("Using bootstrap strategy: {}", kind);
        Self::new(layouts, create_bootstrapper(kind, config))
    }

    /// Get the planner
    pub fn planner(&self) -> &PathPlanner {
        &self.planner
    }

    /// Name of the active bootstrap strategy
    pub fn bootstrapper_name(&self) -> &'static str {
        self.bootstrapper.name()
    }

    /// Plan without touching the filesystem
    pub fn plan(&self, request: &ScaffoldRequest) -> Result<Vec<Utf8PathBuf>> {
        self.planner.plan(request.project_type, &request.project_name)
    }

    /// Scaffold the project described by `request`
    pub async fn build(&self, request: &ScaffoldRequest) -> Result<ScaffoldSummary> {
        let root = request.root();
        let planned = self.plan(request)?;

        let init = self.bootstrapper.init_project(&root).await?;
        let materialized = self.materializer.materialize(request.base_dir(), &planned)?;
        let environment = self.bootstrapper.create_environment(&root).await?;

        let license = LicenseMetadata::current(request.author.as_deref());
        let boilerplate = self.boilerplate.write(&root, &license)?;

        info!(
            "Workspace for {} project '{}' has been created successfully",
            request.project_type, request.project_name
        );

        Ok(ScaffoldSummary {
            project_type: request.project_type,
            project_name: request.project_name.clone(),
            root,
            planned,
            materialized,
            bootstrap: BootstrapOutcome { init, environment },
            boilerplate,
        })
    }
}

impl std::fmt::Debug for WorkspaceBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceBuilder")
            .field("bootstrapper", &self.bootstrapper.name())
            .finish_non_exhaustive()
    }
}
