//! Lazily resolved metadata for one solution project.
//!
//! A `ProjectMetadata` wraps a project entry and the path of the solution
//! that lists it. Nothing is read until the first accessor call; that call
//! resolves every derived field in one pass and the result is cached for the
//! lifetime of the value.
//!
//! Resolution is a pure function of the entry, the solution path and the
//! project file on disk. A failed pass caches nothing, so the next accessor
//! call starts over. Concurrent first calls may each run a pass; only one
//! result is ever published, and it is published whole.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use uuid::Uuid;

use crate::core::classify::{KnownGuidClassifier, WapClassifier};
use crate::core::entry::{ProjectEntry, SolutionProject};
use crate::core::errors::MetadataError;
use crate::core::project_file::{MsBuildProjectFile, ProjectTypeInspector};
use crate::core::project_type::SolutionProjectType;
use crate::util::fs;

/// Derived metadata of a project, computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProject {
    /// Project name, verbatim from the entry
    pub name: String,

    /// Absolute, normalized path of the project file (or web site folder)
    pub absolute_path: PathBuf,

    /// Solution-level classification
    pub project_type: SolutionProjectType,

    /// True for file-system web sites
    pub is_web_site: bool,

    /// True for web application projects
    pub is_wap: bool,

    /// Type GUIDs declared in the project file
    pub project_type_guids: BTreeSet<Uuid>,
}

/// A solution project whose metadata is resolved on first access.
pub struct ProjectMetadata<E = SolutionProject> {
    solution_path: PathBuf,
    entry: E,
    inspector: Arc<dyn ProjectTypeInspector>,
    classifier: Arc<dyn WapClassifier>,
    resolved: OnceLock<ResolvedProject>,
}

impl<E: ProjectEntry> ProjectMetadata<E> {
    /// Wrap a project entry listed by the solution at `solution_path`.
    pub fn new(solution_path: impl Into<PathBuf>, entry: E) -> Self {
        ProjectMetadata {
            solution_path: solution_path.into(),
            entry,
            inspector: Arc::new(MsBuildProjectFile::new()),
            classifier: Arc::new(KnownGuidClassifier::new()),
            resolved: OnceLock::new(),
        }
    }

    /// Use a different project file inspector.
    pub fn with_inspector(mut self, inspector: Arc<dyn ProjectTypeInspector>) -> Self {
        self.inspector = inspector;
        self
    }

    /// Use a different WAP classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn WapClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Get the project name.
    pub fn name(&self) -> Result<&str, MetadataError> {
        Ok(&self.metadata()?.name)
    }

    /// Get the absolute path of the project.
    pub fn absolute_path(&self) -> Result<&Path, MetadataError> {
        Ok(&self.metadata()?.absolute_path)
    }

    /// Check if the project is a file-system web site.
    pub fn is_web_site(&self) -> Result<bool, MetadataError> {
        Ok(self.metadata()?.is_web_site)
    }

    /// Check if the project is a web application project.
    pub fn is_wap(&self) -> Result<bool, MetadataError> {
        Ok(self.metadata()?.is_wap)
    }

    /// Get the type GUIDs declared in the project file.
    ///
    /// Empty unless the project is an MSBuild project whose file exists.
    pub fn project_type_guids(&self) -> Result<&BTreeSet<Uuid>, MetadataError> {
        Ok(&self.metadata()?.project_type_guids)
    }

    /// Get all derived metadata, resolving it if needed.
    pub fn metadata(&self) -> Result<&ResolvedProject, MetadataError> {
        if let Some(resolved) = self.resolved.get() {
            return Ok(resolved);
        }

        let resolved = self.resolve()?;
        Ok(self.resolved.get_or_init(|| resolved))
    }

    /// Check whether metadata has already been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Get the wrapped entry.
    pub fn entry(&self) -> &E {
        &self.entry
    }

    /// Get the path of the owning solution.
    pub fn solution_path(&self) -> &Path {
        &self.solution_path
    }

    fn resolve(&self) -> Result<ResolvedProject, MetadataError> {
        let name = self.entry.project_name()?;
        let relative_path = self.entry.relative_path()?;
        let project_type = self.entry.project_type()?;

        let absolute_path = self.absolute_path_of(&relative_path)?;
        let is_web_site = project_type == SolutionProjectType::WebProject;

        let (project_type_guids, is_wap) = if project_type
            == SolutionProjectType::KnownToBeMsBuildFormat
            && absolute_path.is_file()
        {
            let guids = self.inspector.project_type_guids(&absolute_path)?;
            let is_wap = self.classifier.is_wap(&guids);
            (guids, is_wap)
        } else {
            (BTreeSet::new(), false)
        };

        tracing::debug!(
            "resolved project `{}` ({}) at {}",
            name,
            project_type,
            absolute_path.display()
        );

        Ok(ResolvedProject {
            name,
            absolute_path,
            project_type,
            is_web_site,
            is_wap,
            project_type_guids,
        })
    }

    fn absolute_path_of(&self, relative_path: &str) -> Result<PathBuf, MetadataError> {
        let path_error = |reason: String| MetadataError::PathResolution {
            solution: self.solution_path.clone(),
            reason,
        };

        let dir = fs::directory_of(&self.solution_path)
            .ok_or_else(|| path_error("solution path has no directory component".to_string()))?;

        if relative_path.contains("://") {
            return Err(path_error(format!(
                "project path `{}` is a URL, not a file-system path",
                relative_path
            )));
        }

        let joined = fs::join_relative(dir, relative_path);
        fs::normalize_path(&joined)
            .map_err(|e| path_error(format!("cannot make `{}` absolute: {}", joined.display(), e)))
    }
}

impl<E: fmt::Debug> fmt::Debug for ProjectMetadata<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectMetadata")
            .field("solution_path", &self.solution_path)
            .field("entry", &self.entry)
            .field("resolved", &self.resolved.get())
            .finish_non_exhaustive()
    }
}
