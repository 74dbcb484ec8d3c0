//! Layered configuration loading
//!
//! Precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. Global config (~/.kickstart/config.yaml)
//! 3. Explicit config file (`--config`)
//! 4. CLI flags (handled by caller)

mod loader;

pub use loader::ConfigLoader;
