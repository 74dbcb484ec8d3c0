//! Scoped change of the process working directory

use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Changes the working directory and restores the previous one on drop,
/// on every exit path (early return, `?`, unwinding)
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    /// Enter `dir`
    pub fn enter(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let previous = env::current_dir().map_err(|e| Error::io(".", e))?;
        env::set_current_dir(dir).map_err(|e| Error::io(dir.display().to_string(), e))?;
        debug!("Entered {}", dir.display());
        Ok(Self { previous })
    }

    /// Directory restored on drop
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(
                "Failed to restore working directory {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}
