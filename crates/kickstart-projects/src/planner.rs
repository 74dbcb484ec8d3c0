//! Path planning: project type + name to the ordered list of files to create.

use crate::error::Result;
use crate::layout::{LayoutTable, PROJECT_NAME_PLACEHOLDER};
use crate::types::{validate_project_name, ProjectType};
use camino::Utf8PathBuf;
use std::collections::HashSet;

/// Computes skeleton plans from a layout table
#[derive(Debug, Clone)]
pub struct PathPlanner {
    table: LayoutTable,
}

impl PathPlanner {
    /// Create a planner over a validated layout table
    pub fn new(table: LayoutTable) -> Self {
        Self { table }
    }

    /// Get the layout table
    pub fn table(&self) -> &LayoutTable {
        &self.table
    }

    /// Plan the files for a project.
    ///
    /// Returns paths of the form `<project_name>/<entry>`: the common skeleton
    /// first, then the type extension, with duplicates removed (first
    /// occurrence wins). Pure and deterministic.
    pub fn plan(&self, project_type: ProjectType, project_name: &str) -> Result<Vec<Utf8PathBuf>> {
        validate_project_name(project_name)?;

        let extension = self.table.extension(project_type)?;
        let mut seen = HashSet::new();
        let mut planned = Vec::with_capacity(self.table.common().len() + extension.len());

        for entry in self.table.common().iter().chain(extension) {
            let relative = entry
                .trim_start_matches("./")
                .replace(PROJECT_NAME_PLACEHOLDER, project_name);
            if seen.insert(relative.clone()) {
                planned.push(Utf8PathBuf::from(project_name).join(relative));
            }
        }

        Ok(planned)
    }
}
