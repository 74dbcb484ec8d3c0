//! Tool-managed boilerplate files.
//!
//! Unlike the skeleton, these files are overwritten on every run so they
//! always reflect kickstart's current defaults:
//! - `.gitignore` / `.dockerignore`
//! - `.env` (comment only) and `.env.example` (known variable names)
//! - `LICENSE` (MIT, rendered with year and author)

use crate::error::{Error, Result};
use crate::types::LicenseMetadata;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tera::{Context, Tera};
use tracing::debug;

/// Files written verbatim
const STATIC_FILES: &[(&str, &str)] = &[
    (".gitignore", include_str!("templates/gitignore")),
    (".dockerignore", include_str!("templates/dockerignore")),
    (".env", include_str!("templates/env")),
    (".env.example", include_str!("templates/env.example")),
];

/// License file name
pub const LICENSE_FILE: &str = "LICENSE";

/// Variables declared in `.env.example`
pub const ENV_EXAMPLE_VARIABLES: &[&str] = &["API_KEY", "DB_HOST", "DB_PORT"];

/// Writes boilerplate into a project root
#[derive(Debug)]
pub struct BoilerplateWriter {
    tera: Tera,
}

impl BoilerplateWriter {
    /// Create a writer with the embedded templates registered
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(LICENSE_FILE, include_str!("templates/LICENSE.tera"))?;
        Ok(Self { tera })
    }

    /// Names of the files `write` produces, in write order
    pub fn file_names() -> impl Iterator<Item = &'static str> {
        STATIC_FILES
            .iter()
            .map(|(name, _)| *name)
            .chain(std::iter::once(LICENSE_FILE))
    }

    /// Render the license text
    pub fn render_license(&self, license: &LicenseMetadata) -> Result<String> {
        let context = Context::from_serialize(license)?;
        Ok(self.tera.render(LICENSE_FILE, &context)?)
    }

    /// Write every boilerplate file, overwriting existing ones.
    /// Returns the written paths.
    pub fn write(
        &self,
        project_root: &Utf8Path,
        license: &LicenseMetadata,
    ) -> Result<Vec<Utf8PathBuf>> {
        fs::create_dir_all(project_root).map_err(|e| Error::io(project_root.as_str(), e))?;

        let mut written = Vec::with_capacity(STATIC_FILES.len() + 1);
        for (name, content) in STATIC_FILES {
            written.push(overwrite(&project_root.join(name), content)?);
        }
        written.push(self.write_license(project_root, license)?);

        Ok(written)
    }

    /// Write only the LICENSE file
    pub fn write_license(
        &self,
        project_root: &Utf8Path,
        license: &LicenseMetadata,
    ) -> Result<Utf8PathBuf> {
        let content = self.render_license(license)?;
        overwrite(&project_root.join(LICENSE_FILE), &content)
    }
}

fn overwrite(path: &Utf8Path, content: &str) -> Result<Utf8PathBuf> {
    fs::write(path, content).map_err(|e| Error::io(path.as_str(), e))?;
    debug!("Wrote {}", path);
    Ok(path.to_owned())
}
