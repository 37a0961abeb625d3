//! Core data structures for slnkit.
//!
//! This module contains the foundational types:
//! - Solution parsing and project entries
//! - Project classification (solution-level types, declared type GUIDs)
//! - Lazily resolved project metadata

pub mod classify;
pub mod entry;
pub mod errors;
pub mod project;
pub mod project_file;
pub mod project_type;
pub mod solution;

pub use classify::{KnownGuidClassifier, WapClassifier};
pub use entry::{ProjectEntry, SolutionProject};
pub use errors::{MetadataError, ProjectFileError, SolutionError};
pub use project::{ProjectMetadata, ResolvedProject};
pub use project_file::{MsBuildProjectFile, ProjectTypeInspector};
pub use project_type::SolutionProjectType;
pub use solution::{Solution, SOLUTION_EXTENSION};
