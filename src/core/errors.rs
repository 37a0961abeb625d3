//! Error types for solution and project inspection.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error while resolving the metadata of one solution project.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The project entry could not supply one of its fields.
    #[error("project metadata unavailable: missing `{field}`: {reason}")]
    MetadataUnavailable { field: &'static str, reason: String },

    /// The solution directory or the project path could not be resolved.
    #[error("cannot resolve project path from solution `{}`: {reason}", solution.display())]
    PathResolution { solution: PathBuf, reason: String },

    /// The project file could not be read or parsed.
    #[error(transparent)]
    Parse(#[from] ProjectFileError),
}

impl MetadataError {
    /// Create a `MetadataUnavailable` error for a field.
    pub fn unavailable(field: &'static str, reason: impl Into<String>) -> Self {
        MetadataError::MetadataUnavailable {
            field,
            reason: reason.into(),
        }
    }
}

/// Error while reading the declared type GUIDs of a project file.
#[derive(Debug, Error)]
pub enum ProjectFileError {
    #[error("failed to read project file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed project file `{}`: {message}", path.display())]
    Xml { path: PathBuf, message: String },

    #[error("invalid project type GUID `{value}` in `{}`", path.display())]
    InvalidGuid { path: PathBuf, value: String },
}

/// Error while parsing a solution file.
#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("failed to read solution file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` is not a solution file: missing format version header", path.display())]
    MissingHeader { path: PathBuf },

    #[error("malformed project entry at {}:{line}", path.display())]
    MalformedProject { path: PathBuf, line: usize },
}
