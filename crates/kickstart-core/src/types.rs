//! Configuration types for kickstart

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder substituted in tool arguments with the target path
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Resolved kickstart configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KickstartConfig {
    /// Author written into LICENSE when none is supplied
    #[serde(default)]
    pub default_author: Option<String>,

    /// Environment bootstrap strategy
    #[serde(default)]
    pub bootstrap: BootstrapKind,

    /// External tool invocations
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Optional upper bound for a single external tool run
    #[serde(default)]
    pub tool_timeout_secs: Option<u64>,

    /// Replacement project layout table (YAML)
    #[serde(default)]
    pub layouts_file: Option<Utf8PathBuf>,
}

impl KickstartConfig {
    /// Tool timeout as a duration, if configured
    pub fn tool_timeout(&self) -> Option<Duration> {
        self.tool_timeout_secs.map(Duration::from_secs)
    }
}

/// How the project's isolated environment is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapKind {
    /// `python3 -m venv <project>/venv`
    #[default]
    Venv,
    /// `uv init <project>` followed by `uv venv` inside the project
    Uv,
    /// Skip environment creation
    None,
}

impl BootstrapKind {
    /// All strategies, in display order
    pub fn all() -> [Self; 3] {
        [Self::Venv, Self::Uv, Self::None]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Venv => "venv",
            Self::Uv => "uv",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for BootstrapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BootstrapKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| format!("Unknown bootstrap strategy: {}. Valid: venv, uv, none", s))
    }
}

/// External tool command lines used by the bootstrap strategies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ToolsConfig {
    /// Plain virtual-environment creation
    #[serde(default = "default_venv_tool")]
    pub venv: ToolCommand,

    /// Project initialization (runs before the skeleton exists)
    #[serde(default = "default_uv_init_tool")]
    pub uv_init: ToolCommand,

    /// Virtual-environment creation run from inside the project root
    #[serde(default = "default_uv_venv_tool")]
    pub uv_venv: ToolCommand,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            venv: default_venv_tool(),
            uv_init: default_uv_init_tool(),
            uv_venv: default_uv_venv_tool(),
        }
    }
}

fn default_venv_tool() -> ToolCommand {
    ToolCommand::new("python3", ["-m", "venv", TARGET_PLACEHOLDER])
}

fn default_uv_init_tool() -> ToolCommand {
    ToolCommand::new("uv", ["init", TARGET_PLACEHOLDER])
}

fn default_uv_venv_tool() -> ToolCommand {
    ToolCommand::new("uv", ["venv"])
}

/// A program plus its arguments; `{target}` in any argument is replaced
/// with the path the tool operates on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    /// Create a tool command
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments with the target placeholder substituted
    pub fn render_args(&self, target: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(TARGET_PLACEHOLDER, target))
            .collect()
    }
}

impl std::fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
