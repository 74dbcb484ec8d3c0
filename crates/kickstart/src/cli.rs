//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use kickstart_core::BootstrapKind;

/// kickstart - Scaffold Python data and AI project workspaces
#[derive(Parser, Debug)]
#[command(name = "kickstart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a kickstart config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Defaults to `new` with every value prompted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project workspace
    New(NewArgs),

    /// List the supported project types
    Types(TypesArgs),
}

// New command
#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Project type (data-engineering, data-science, machine-learning, generative-ai)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Project name, used as the project directory
    #[arg(short, long)]
    pub name: Option<String>,

    /// Author written into the LICENSE
    #[arg(short, long)]
    pub author: Option<String>,

    /// Environment strategy: venv, uv or none
    #[arg(short, long, value_name = "STRATEGY")]
    pub bootstrap: Option<BootstrapKind>,

    /// Directory to create the project in
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Show what would be created without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

// Types command
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
