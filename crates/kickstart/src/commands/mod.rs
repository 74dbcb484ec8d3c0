//! CLI command implementations

pub mod new;
pub mod types;

use anyhow::{Context, Result};
use camino::Utf8Path;
use kickstart_core::{ConfigLoader, KickstartConfig};

/// Load layered configuration, with `explicit` as the top file layer
pub(crate) fn load_config(explicit: Option<&Utf8Path>) -> Result<KickstartConfig> {
    ConfigLoader::new()
        .load(explicit)
        .context("Failed to load configuration")
}
