//! Layout loading from embedded and runtime YAML files.

use super::parser::LayoutTable;
use crate::error::{Error, Result};
use camino::Utf8Path;
use rust_embed::RustEmbed;
use tracing::debug;

/// Embedded layout tables
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/layouts/"]
#[prefix = ""]
struct EmbeddedLayouts;

/// Name of the built-in table
const EMBEDDED_TABLE: &str = "project-layouts.yaml";

/// Loads layout tables
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load the table compiled into the binary
    pub fn from_embedded() -> Result<LayoutTable> {
        let file = EmbeddedLayouts::get(EMBEDDED_TABLE)
            .ok_or_else(|| Error::layout(format!("embedded {} not found", EMBEDDED_TABLE)))?;
        let yaml = std::str::from_utf8(&file.data)
            .map_err(|_| Error::layout(format!("invalid UTF-8 in {}", EMBEDDED_TABLE)))?;

        LayoutTable::from_yaml(yaml)
    }

    /// Load a replacement table from disk
    pub fn from_file(path: &Utf8Path) -> Result<LayoutTable> {
        debug!("Loading layout table from {}", path);
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::io(path.as_str(), e))?;

        LayoutTable::from_yaml(&yaml)
    }

    /// Load `path` if given, otherwise the embedded table
    pub fn load(path: Option<&Utf8Path>) -> Result<LayoutTable> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectType;

    #[test]
    fn test_embedded_table_is_valid() {
        let table = LayoutLoader::from_embedded().unwrap();
        assert!(table.common().contains(&"src/__init__.py".to_string()));
        for project_type in ProjectType::all() {
            assert!(!table.extension(project_type).unwrap().is_empty());
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LayoutLoader::from_file(Utf8Path::new("/nonexistent/layouts.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
