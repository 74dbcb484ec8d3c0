//! Error types for kickstart-projects

use std::time::Duration;
use thiserror::Error;

/// Result type alias using kickstart-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown project type
    #[error("Unknown project type: {project_type}. Available types: {available}")]
    UnknownProjectType {
        project_type: String,
        available: String,
    },

    /// Invalid project name
    #[error("Invalid project name: '{name}'. Must not be empty")]
    InvalidProjectName { name: String },

    /// Filesystem operation failed
    #[error("Filesystem error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A planned file path is occupied by a directory
    #[error("Expected a file but found a directory: {path}")]
    NotAFile { path: String },

    /// External tool missing from PATH
    #[error("Required tool not found: {tool}. Please ensure it is installed and in PATH")]
    ToolNotFound { tool: String },

    /// External tool exited unsuccessfully
    #[error("'{tool}' failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// External tool exceeded the configured timeout
    #[error("'{tool}' did not finish within {timeout:?}")]
    ToolTimedOut { tool: String, timeout: Duration },

    /// Invalid project layout table
    #[error("Invalid project layout table: {message}")]
    Layout { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] kickstart_core::Error),
}

impl Error {
    /// Create an unknown project type error
    pub fn unknown_project_type(
        project_type: impl Into<String>,
        available: impl Into<String>,
    ) -> Self {
        Self::UnknownProjectType {
            project_type: project_type.into(),
            available: available.into(),
        }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a filesystem error for a path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a not-a-file error
    pub fn not_a_file(path: impl Into<String>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// Create a tool not found error
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool failure error
    pub fn tool_failed(
        tool: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a tool timeout error
    pub fn tool_timed_out(tool: impl Into<String>, timeout: Duration) -> Self {
        Self::ToolTimedOut {
            tool: tool.into(),
            timeout,
        }
    }

    /// Create a layout table error
    pub fn layout(message: impl Into<String>) -> Self {
        Self::Layout {
            message: message.into(),
        }
    }

    /// Whether this error comes from bad user input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownProjectType { .. } | Self::InvalidProjectName { .. }
        )
    }
}
