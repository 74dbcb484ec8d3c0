//! # kickstart-projects
//!
//! Project scaffolding library for the kickstart CLI providing:
//! - Declarative per-type project layouts (`layout`)
//! - Path planning from project type and name (`planner`)
//! - Idempotent skeleton creation (`materializer`)
//! - Pluggable virtual-environment bootstrapping (`bootstrap`)
//! - Tool-managed boilerplate: ignore files, env templates, LICENSE (`boilerplate`)
//! - The pipeline tying them together (`workspace`)
//!
//! # Examples
//!
//! ```no_run
//! use kickstart_projects::{ScaffoldRequest, WorkspaceBuilder};
//! use kickstart_core::KickstartConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KickstartConfig::default();
//! let builder = WorkspaceBuilder::from_config(&config, None)?;
//!
//! let request = ScaffoldRequest::parse("ml", "churn-model")?.with_author("Jane Doe");
//! let summary = builder.build(&request).await?;
//! println!("Created {} files under {}", summary.materialized.written, summary.root);
//! # Ok(())
//! # }
//! ```

pub mod boilerplate;
pub mod bootstrap;
pub mod error;
pub mod layout;
pub mod materializer;
pub mod planner;
pub mod types;
pub mod workspace;

pub use error::{Error, Result};

// Re-export the pipeline types for convenience
pub use boilerplate::BoilerplateWriter;
pub use bootstrap::{
    create_bootstrapper, BootstrapOutcome, EnvOutcome, EnvironmentBootstrapper, InitOutcome,
    NoopBootstrapper, ProjectInitBootstrapper, VenvBootstrapper,
};
pub use layout::{LayoutLoader, LayoutTable};
pub use materializer::{FileMaterializer, MaterializeReport};
pub use planner::PathPlanner;
pub use types::{LicenseMetadata, ProjectType, ScaffoldRequest};
pub use workspace::{ScaffoldSummary, WorkspaceBuilder};
