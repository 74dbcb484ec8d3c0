//! Layout table structure and validation.

use crate::error::{Error, Result};
use crate::types::ProjectType;
use camino::{Utf8Component, Utf8Path};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Placeholder replaced with the project name in layout paths
pub const PROJECT_NAME_PLACEHOLDER: &str = "{project_name}";

/// Complete layout table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutTable {
    pub version: String,
    /// Skeleton shared by every project type
    #[serde(default)]
    pub common: Vec<String>,
    /// Type-specific extensions keyed by canonical type name
    #[serde(default)]
    pub types: BTreeMap<String, TypeLayout>,
}

/// Files added for one project type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeLayout {
    #[serde(default)]
    pub files: Vec<String>,
}

impl LayoutTable {
    /// Parse and validate a table from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let table: LayoutTable = serde_yaml_ng::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// Check that every project type has an entry and every path stays
    /// inside the project root
    pub fn validate(&self) -> Result<()> {
        for project_type in ProjectType::all() {
            if !self.types.contains_key(project_type.as_str()) {
                return Err(Error::layout(format!(
                    "missing entry for project type '{}'",
                    project_type
                )));
            }
        }

        for name in self.types.keys() {
            if ProjectType::from_str_with_aliases(name).map(|t| t.as_str()) != Some(name.as_str())
            {
                warn!("Ignoring layout for unknown project type: {}", name);
            }
        }

        let all_paths = self
            .common
            .iter()
            .chain(self.types.values().flat_map(|layout| layout.files.iter()));
        for path in all_paths {
            validate_entry(path)?;
        }

        Ok(())
    }

    /// Files for a project type's extension
    pub fn extension(&self, project_type: ProjectType) -> Result<&[String]> {
        self.types
            .get(project_type.as_str())
            .map(|layout| layout.files.as_slice())
            .ok_or_else(|| {
                Error::layout(format!("missing entry for project type '{}'", project_type))
            })
    }

    /// Skeleton shared by all types
    pub fn common(&self) -> &[String] {
        &self.common
    }
}

/// A layout entry must be a non-empty relative path without `..`
fn validate_entry(entry: &str) -> Result<()> {
    let path = Utf8Path::new(entry);
    if entry.trim().is_empty() {
        return Err(Error::layout("empty path entry"));
    }
    if entry.ends_with('/') {
        return Err(Error::layout(format!("'{}' must name a file", entry)));
    }
    let escapes = path.components().any(|component| {
        !matches!(component, Utf8Component::Normal(_) | Utf8Component::CurDir)
    });
    if escapes {
        return Err(Error::layout(format!(
            "'{}' must be relative to the project root",
            entry
        )));
    }
    Ok(())
}
