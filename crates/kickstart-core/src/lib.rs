//! # kickstart-core
//!
//! Core library for the kickstart CLI providing:
//! - Configuration types (`KickstartConfig`, `ToolCommand`, `BootstrapKind`)
//! - Layered configuration loading (embedded defaults, global file, explicit file)
//! - The shared core error type

pub mod config;
pub mod error;
pub mod types;

pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use types::{BootstrapKind, KickstartConfig, ToolCommand, ToolsConfig};
