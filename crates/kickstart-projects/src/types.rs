//! Core types for project scaffolding

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Author written into LICENSE when none is supplied
pub const PLACEHOLDER_AUTHOR: &str = "Your Name";

/// Project type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// ETL pipelines and data processing
    DataEngineering,
    /// Exploratory analysis and modelling
    DataScience,
    /// Model training and inference
    MachineLearning,
    /// Generative models
    GenerativeAi,
}

impl ProjectType {
    /// Get all available project types
    pub fn all() -> [Self; 4] {
        [
            Self::DataEngineering,
            Self::DataScience,
            Self::MachineLearning,
            Self::GenerativeAi,
        ]
    }

    /// Get the canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataEngineering => "data-engineering",
            Self::DataScience => "data-science",
            Self::MachineLearning => "machine-learning",
            Self::GenerativeAi => "generative-ai",
        }
    }

    /// Get description for the project type
    pub fn description(&self) -> &'static str {
        match self {
            Self::DataEngineering => "Data engineering project (ETL pipelines)",
            Self::DataScience => "Data science project (analysis and modelling)",
            Self::MachineLearning => "Machine learning project (training and inference)",
            Self::GenerativeAi => "Generative AI project (generative models)",
        }
    }

    /// Get aliases for this project type
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::DataEngineering => &["de", "data_engineering"],
            Self::DataScience => &["ds", "data_science"],
            Self::MachineLearning => &["ml", "machine_learning"],
            Self::GenerativeAi => &["gen_ai", "gen-ai", "genai", "generative_ai"],
        }
    }

    /// Parse from string, checking aliases (case-insensitive)
    pub fn from_str_with_aliases(s: &str) -> Option<Self> {
        let s_lower = s.trim().to_lowercase();

        Self::all().into_iter().find(|project_type| {
            project_type.as_str() == s_lower || project_type.aliases().contains(&s_lower.as_str())
        })
    }

    /// Comma-separated list of canonical names
    pub fn available() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_aliases(s)
            .ok_or_else(|| Error::unknown_project_type(s.trim(), Self::available()))
    }
}

/// Values interpolated into the LICENSE template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseMetadata {
    pub year: i32,
    pub author: String,
}

impl LicenseMetadata {
    /// Create metadata; a missing or blank author becomes the placeholder
    pub fn new(year: i32, author: Option<&str>) -> Self {
        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(PLACEHOLDER_AUTHOR)
            .to_string();
        Self { year, author }
    }

    /// Metadata for the current local year
    pub fn current(author: Option<&str>) -> Self {
        Self::new(Local::now().year(), author)
    }
}

/// Everything needed to scaffold one project
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_type: ProjectType,
    /// Used verbatim as the root directory name
    pub project_name: String,
    pub author: Option<String>,
    /// Directory the project root is created in
    pub base_dir: Utf8PathBuf,
}

impl ScaffoldRequest {
    /// Create a request in the current directory
    pub fn new(project_type: ProjectType, project_name: impl Into<String>) -> Result<Self> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;

        Ok(Self {
            project_type,
            project_name,
            author: None,
            base_dir: Utf8PathBuf::from("."),
        })
    }

    /// Parse raw user input; fails before anything touches the filesystem
    pub fn parse(project_type: &str, project_name: &str) -> Result<Self> {
        let project_type = project_type.parse::<ProjectType>()?;
        Self::new(project_type, project_name.trim())
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the base directory
    pub fn with_base_dir(mut self, base_dir: impl Into<Utf8PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Project root directory
    pub fn root(&self) -> Utf8PathBuf {
        self.base_dir.join(&self.project_name)
    }

    /// Base directory the plan is relative to
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }
}

/// Reject names that cannot be used as a path segment at all
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_project_name(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_and_aliases() {
        assert_eq!(
            "data-engineering".parse::<ProjectType>().unwrap(),
            ProjectType::DataEngineering
        );
        assert_eq!("DS".parse::<ProjectType>().unwrap(), ProjectType::DataScience);
        assert_eq!(" ml ".parse::<ProjectType>().unwrap(), ProjectType::MachineLearning);
        assert_eq!("Gen_AI".parse::<ProjectType>().unwrap(), ProjectType::GenerativeAi);
        assert_eq!(
            "Generative-AI".parse::<ProjectType>().unwrap(),
            ProjectType::GenerativeAi
        );
    }

    #[test]
    fn test_parse_unknown_type() {
        let err = "web".parse::<ProjectType>().unwrap_err();
        assert!(err.is_invalid_input());
        let message = err.to_string();
        assert!(message.contains("web"));
        assert!(message.contains("data-engineering"));
        assert!(message.contains("generative-ai"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for project_type in ProjectType::all() {
            assert_eq!(
                project_type.to_string().parse::<ProjectType>().unwrap(),
                project_type
            );
        }
    }

    #[test]
    fn test_license_metadata_placeholder() {
        assert_eq!(LicenseMetadata::new(2024, None).author, PLACEHOLDER_AUTHOR);
        assert_eq!(LicenseMetadata::new(2024, Some("  ")).author, PLACEHOLDER_AUTHOR);
        assert_eq!(LicenseMetadata::new(2024, Some("Grace")).author, "Grace");
        assert!(LicenseMetadata::current(None).year >= 2024);
    }

    #[test]
    fn test_request_validation() {
        assert!(ScaffoldRequest::parse("web", "demo").is_err());
        assert!(matches!(
            ScaffoldRequest::parse("ds", "   ").unwrap_err(),
            Error::InvalidProjectName { .. }
        ));

        let request = ScaffoldRequest::parse("ml", " demo ")
            .unwrap()
            .with_base_dir("/tmp/work");
        assert_eq!(request.project_type, ProjectType::MachineLearning);
        assert_eq!(request.project_name, "demo");
        assert_eq!(request.root(), Utf8PathBuf::from("/tmp/work/demo"));
    }
}
