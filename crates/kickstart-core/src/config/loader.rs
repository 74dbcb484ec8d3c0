//! Configuration file loading and layering

use crate::error::{Error, Result};
use crate::types::KickstartConfig;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

/// Name of the embedded defaults file
const DEFAULTS_FILE: &str = "defaults.yaml";

/// Global config file name inside the config directory
const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// Layered configuration loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directory holding the global config file, if a home directory is known
    config_dir: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader rooted at the standard config directory (~/.kickstart)
    pub fn new() -> Self {
        let config_dir = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .ok()
            .map(|home| Utf8PathBuf::from(home).join(".kickstart"));
        Self { config_dir }
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
        }
    }

    /// Get the global config file path
    pub fn global_config_path(&self) -> Option<Utf8PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join(GLOBAL_CONFIG_FILE))
    }

    /// Load configuration: embedded defaults, then the global file if it
    /// exists, then `explicit` (which must exist)
    pub fn load(&self, explicit: Option<&Utf8Path>) -> Result<KickstartConfig> {
        let mut merged = Self::load_embedded_defaults()?;

        if let Some(global) = self.global_config_path() {
            if global.exists() {
                debug!("Merging global config: {}", global);
                merge_values(&mut merged, Self::load_yaml_file(&global)?);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::config_not_found(path.as_str()));
            }
            debug!("Merging config file: {}", path);
            merge_values(&mut merged, Self::load_yaml_file(path)?);
        }

        serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to resolve configuration: {}", e)))
    }

    /// Load the embedded defaults as a YAML tree
    fn load_embedded_defaults() -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;

        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Load a YAML overlay file; an empty file is an empty overlay
    fn load_yaml_file(path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Value::Mapping(Default::default()));
        }

        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;

        match value {
            Value::Mapping(_) => Ok(value),
            Value::Null => Ok(Value::Mapping(Default::default())),
            _ => Err(Error::invalid_config(format!(
                "{} must contain a YAML mapping",
                path
            ))),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep-merge `overlay` into `base`; mappings merge key by key, anything
/// else in the overlay replaces the base value
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BootstrapKind, ToolCommand};
    use tempfile::TempDir;

    fn create_temp_loader() -> (ConfigLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_dir =
            Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("Invalid UTF-8 path");
        let loader = ConfigLoader::with_dir(config_dir);
        (loader, temp_dir)
    }

    #[test]
    fn test_load_defaults() {
        let (loader, _temp) = create_temp_loader();
        let config = loader.load(None).unwrap();

        assert_eq!(config.bootstrap, BootstrapKind::Venv);
        assert_eq!(
            config.tools.venv,
            ToolCommand::new("python3", ["-m", "venv", "{target}"])
        );
        assert!(config.default_author.is_none());
        assert!(config.tool_timeout_secs.is_none());
    }

    #[test]
    fn test_global_config_overrides_defaults() {
        let (loader, temp) = create_temp_loader();
        fs::write(
            temp.path().join("config.yaml"),
            "bootstrap: uv\ndefault-author: Ada Lovelace\n",
        )
        .unwrap();

        let config = loader.load(None).unwrap();
        assert_eq!(config.bootstrap, BootstrapKind::Uv);
        assert_eq!(config.default_author.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_partial_tools_overlay_keeps_other_tools() {
        let (loader, temp) = create_temp_loader();
        fs::write(
            temp.path().join("config.yaml"),
            "tools:\n  venv:\n    program: virtualenv\n    args: [\"{target}\"]\n",
        )
        .unwrap();

        let config = loader.load(None).unwrap();
        assert_eq!(config.tools.venv, ToolCommand::new("virtualenv", ["{target}"]));
        assert_eq!(config.tools.uv_venv, ToolCommand::new("uv", ["venv"]));
    }

    #[test]
    fn test_explicit_file_wins_over_global() {
        let (loader, temp) = create_temp_loader();
        fs::write(temp.path().join("config.yaml"), "tool-timeout-secs: 30\n").unwrap();
        let explicit = temp.path().join("project.yaml");
        fs::write(&explicit, "tool-timeout-secs: 5\nbootstrap: none\n").unwrap();
        let explicit = Utf8PathBuf::from_path_buf(explicit).unwrap();

        let config = loader.load(Some(explicit.as_path())).unwrap();
        assert_eq!(config.tool_timeout_secs, Some(5));
        assert_eq!(config.bootstrap, BootstrapKind::None);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let (loader, temp) = create_temp_loader();
        let missing = Utf8PathBuf::from_path_buf(temp.path().join("nope.yaml")).unwrap();

        let err = loader.load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_empty_global_file_is_ignored() {
        let (loader, temp) = create_temp_loader();
        fs::write(temp.path().join("config.yaml"), "\n").unwrap();

        let config = loader.load(None).unwrap();
        assert_eq!(config.bootstrap, BootstrapKind::Venv);
    }

    #[test]
    fn test_non_mapping_file_is_rejected() {
        let (loader, temp) = create_temp_loader();
        fs::write(temp.path().join("config.yaml"), "- just\n- a list\n").unwrap();

        let err = loader.load(None).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}
