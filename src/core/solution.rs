//! Visual Studio solution (`.sln`) parsing.
//!
//! Only the parts needed to enumerate projects are read: the format header,
//! the `VisualStudioVersion` line and the `Project(...)` lines. Global
//! sections (configurations, nesting) are skipped.

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use uuid::Uuid;

use crate::core::classify::{KnownGuidClassifier, WapClassifier};
use crate::core::entry::SolutionProject;
use crate::core::errors::SolutionError;
use crate::core::project::ProjectMetadata;
use crate::core::project_file::{MsBuildProjectFile, ProjectTypeInspector};

/// File extension of solution files.
pub const SOLUTION_EXTENSION: &str = "sln";

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Microsoft Visual Studio Solution File, Format Version (\d+(?:\.\d+)*)\s*$")
        .expect("valid header regex")
});

static VS_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^VisualStudioVersion\s*=\s*(\S+)\s*$").expect("valid version regex")
});

static PROJECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^Project\(\s*"(?P<type>[^"]*)"\s*\)\s*=\s*"(?P<name>[^"]*)"\s*,\s*"(?P<path>[^"]*)"\s*,\s*"(?P<guid>[^"]*)"\s*$"#,
    )
    .expect("valid project regex")
});

/// A parsed solution file.
#[derive(Debug, Clone)]
pub struct Solution {
    path: PathBuf,
    format_version: String,
    visual_studio_version: Option<String>,
    entries: Vec<SolutionProject>,
}

impl Solution {
    /// Load and parse a solution file.
    pub fn load(path: &Path) -> Result<Self, SolutionError> {
        let content = std::fs::read_to_string(path).map_err(|source| SolutionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse solution text; `path` is where the solution lives.
    pub fn parse(content: &str, path: &Path) -> Result<Self, SolutionError> {
        // Solution files are usually saved with a UTF-8 BOM
        let content = content.trim_start_matches('\u{feff}');

        let mut format_version = None;
        let mut visual_studio_version = None;
        let mut entries = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();

            if format_version.is_none() {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let caps = HEADER.captures(line).ok_or_else(|| SolutionError::MissingHeader {
                    path: path.to_path_buf(),
                })?;
                format_version = Some(caps[1].to_string());
                continue;
            }

            if let Some(caps) = VS_VERSION.captures(line) {
                visual_studio_version = Some(caps[1].to_string());
            } else if line.starts_with("Project(") {
                let entry = parse_project_line(line).ok_or_else(|| {
                    SolutionError::MalformedProject {
                        path: path.to_path_buf(),
                        line: index + 1,
                    }
                })?;
                tracing::trace!("solution entry: {}", entry);
                entries.push(entry);
            }
        }

        let format_version = format_version.ok_or_else(|| SolutionError::MissingHeader {
            path: path.to_path_buf(),
        })?;

        tracing::debug!(
            "parsed solution {} (format {}, {} entries)",
            path.display(),
            format_version,
            entries.len()
        );

        Ok(Solution {
            path: path.to_path_buf(),
            format_version,
            visual_studio_version,
            entries,
        })
    }

    /// Get the solution file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the solution format version (e.g. `12.00`).
    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    /// Get the Visual Studio version that last saved the solution.
    pub fn visual_studio_version(&self) -> Option<&str> {
        self.visual_studio_version.as_deref()
    }

    /// Get the project entries in file order.
    pub fn entries(&self) -> &[SolutionProject] {
        &self.entries
    }

    /// Wrap every entry with the default inspector and classifier.
    pub fn projects(&self) -> Vec<ProjectMetadata> {
        self.projects_with(
            Arc::new(MsBuildProjectFile::new()),
            Arc::new(KnownGuidClassifier::new()),
        )
    }

    /// Wrap every entry, sharing one inspector and classifier.
    pub fn projects_with(
        &self,
        inspector: Arc<dyn ProjectTypeInspector>,
        classifier: Arc<dyn WapClassifier>,
    ) -> Vec<ProjectMetadata> {
        self.entries
            .iter()
            .map(|entry| {
                ProjectMetadata::new(&self.path, entry.clone())
                    .with_inspector(Arc::clone(&inspector))
                    .with_classifier(Arc::clone(&classifier))
            })
            .collect()
    }
}

fn parse_project_line(line: &str) -> Option<SolutionProject> {
    let caps = PROJECT_LINE.captures(line)?;
    let type_guid = Uuid::parse_str(caps["type"].trim()).ok()?;
    let project_guid = Uuid::parse_str(caps["guid"].trim()).ok();

    Some(SolutionProject::new(
        caps["name"].trim(),
        caps["path"].trim(),
        type_guid,
        project_guid,
    ))
}
