//! Declarative project layouts.
//!
//! One YAML table maps every project type to the files it gets on top of the
//! common skeleton:
//!
//! ```yaml
//! version: "1.0"
//! common:
//!   - "src/__init__.py"
//!   - "README.md"
//! types:
//!   data-engineering:
//!     files:
//!       - "src/etl_pipeline.py"
//! ```
//!
//! Paths are relative to the project root and may contain `{project_name}`.
//! The table is compiled into the binary; a replacement can be loaded from a
//! file. Adding files to a type means editing the table, not the code.

mod loader;
mod parser;

pub use loader::LayoutLoader;
pub use parser::{LayoutTable, TypeLayout, PROJECT_NAME_PLACEHOLDER};
