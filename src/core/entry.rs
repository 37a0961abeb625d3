//! Project entries as listed by a solution file.

use serde::Serialize;
use uuid::Uuid;

use crate::core::errors::MetadataError;
use crate::core::project_type::SolutionProjectType;

/// Read access to the raw fields of one solution project entry.
///
/// Each read may fail; a failure means the entry cannot describe the
/// project and resolution is abandoned with `MetadataUnavailable`.
pub trait ProjectEntry {
    /// Declared project name.
    fn project_name(&self) -> Result<String, MetadataError>;

    /// Project path, relative to the solution directory.
    fn relative_path(&self) -> Result<String, MetadataError>;

    /// Solution-level classification of the entry.
    fn project_type(&self) -> Result<SolutionProjectType, MetadataError>;
}

/// A project entry parsed from a `.sln` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionProject {
    name: String,
    relative_path: String,
    type_guid: Uuid,
    project_guid: Option<Uuid>,
    project_type: SolutionProjectType,
}

impl SolutionProject {
    /// Create an entry, classifying it from its type GUID and path.
    pub fn new(
        name: impl Into<String>,
        relative_path: impl Into<String>,
        type_guid: Uuid,
        project_guid: Option<Uuid>,
    ) -> Self {
        let relative_path = relative_path.into();
        let project_type = SolutionProjectType::classify(&type_guid, &relative_path);

        SolutionProject {
            name: name.into(),
            relative_path,
            type_guid,
            project_guid,
            project_type,
        }
    }

    /// Override the classification.
    pub fn with_project_type(mut self, project_type: SolutionProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    /// Get the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the path relative to the solution directory.
    pub fn path(&self) -> &str {
        &self.relative_path
    }

    /// Get the project type GUID from the solution line.
    pub fn type_guid(&self) -> Uuid {
        self.type_guid
    }

    /// Get the project's own GUID, if the line carried a valid one.
    pub fn project_guid(&self) -> Option<Uuid> {
        self.project_guid
    }

    /// Get the classification.
    pub fn kind(&self) -> SolutionProjectType {
        self.project_type
    }
}

impl ProjectEntry for SolutionProject {
    fn project_name(&self) -> Result<String, MetadataError> {
        Ok(self.name.clone())
    }

    fn relative_path(&self) -> Result<String, MetadataError> {
        Ok(self.relative_path.clone())
    }

    fn project_type(&self) -> Result<SolutionProjectType, MetadataError> {
        Ok(self.project_type)
    }
}

impl<E: ProjectEntry + ?Sized> ProjectEntry for &E {
    fn project_name(&self) -> Result<String, MetadataError> {
        (**self).project_name()
    }

    fn relative_path(&self) -> Result<String, MetadataError> {
        (**self).relative_path()
    }

    fn project_type(&self) -> Result<SolutionProjectType, MetadataError> {
        (**self).project_type()
    }
}

impl std::fmt::Display for SolutionProject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.relative_path)
    }
}
