//! Skeleton materialization: empty files plus their parent directories.
//!
//! A file is written (empty) only when it is absent or zero-sized. Files that
//! already hold content are never touched, so re-running over a partially
//! built or hand-edited tree is safe.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info};

/// Outcome of a materialization run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    /// Files written empty (absent or zero-sized before)
    pub written: usize,
    /// Non-empty files left as they were
    pub preserved: usize,
}

impl MaterializeReport {
    /// Total number of planned entries handled
    pub fn total(&self) -> usize {
        self.written + self.preserved
    }
}

/// Creates planned files idempotently
#[derive(Debug, Default, Clone, Copy)]
pub struct FileMaterializer;

impl FileMaterializer {
    /// Create a new materializer
    pub fn new() -> Self {
        Self
    }

    /// Materialize `paths` (relative to `base_dir`)
    pub fn materialize(
        &self,
        base_dir: &Utf8Path,
        paths: &[Utf8PathBuf],
    ) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();

        for path in paths {
            let full_path = base_dir.join(path);

            if let Some(parent) = full_path.parent() {
                if !parent.as_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| Error::io(parent.as_str(), e))?;
                }
            }

            if ensure_empty_file(&full_path)? {
                report.written += 1;
            } else {
                debug!("Keeping existing content: {}", full_path);
                report.preserved += 1;
            }
        }

        info!(
            "Successfully created {} files and directories ({} preserved)",
            report.written, report.preserved
        );
        Ok(report)
    }
}

/// Write an empty file unless one with content is already there.
/// Returns whether the file was written.
fn ensure_empty_file(path: &Utf8Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(Error::not_a_file(path.as_str())),
        Ok(meta) if meta.len() > 0 => Ok(false),
        Ok(_) => write_empty(path),
        Err(e) if e.kind() == ErrorKind::NotFound => write_empty(path),
        Err(e) => Err(Error::io(path.as_str(), e)),
    }
}

fn write_empty(path: &Utf8Path) -> Result<bool> {
    fs::write(path, b"").map_err(|e| Error::io(path.as_str(), e))?;
    Ok(true)
}
