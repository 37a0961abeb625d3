//! Test utilities and stubs for slnkit unit tests.
//!
//! Provides fixture writers for solution and project files plus stub
//! collaborators that record how often they are called.
//!
//! # Example
//!
//! ```rust,ignore
//! use slnkit::test_support::{ProjectFileFixture, SolutionFixture};
//!
//! #[test]
//! fn test_example() {
//!     let tmp = tempfile::TempDir::new().unwrap();
//!     ProjectFileFixture::wap("Web").write(tmp.path());
//!     let sln = SolutionFixture::new()
//!         .project("Web", r"Web\Web.csproj", guids::CSHARP)
//!         .write(tmp.path(), "app.sln");
//! }
//! ```

pub mod fixtures;

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::core::entry::ProjectEntry;
use crate::core::errors::{MetadataError, ProjectFileError};
use crate::core::project_file::ProjectTypeInspector;
use crate::core::project_type::SolutionProjectType;

pub use fixtures::*;

/// Project entry that counts every field read.
#[derive(Debug)]
pub struct CountingEntry {
    name: String,
    relative_path: String,
    project_type: SolutionProjectType,
    reads: AtomicUsize,
}

impl CountingEntry {
    pub fn new(
        name: impl Into<String>,
        relative_path: impl Into<String>,
        project_type: SolutionProjectType,
    ) -> Self {
        CountingEntry {
            name: name.into(),
            relative_path: relative_path.into(),
            project_type,
            reads: AtomicUsize::new(0),
        }
    }

    /// Total number of field reads so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }
}

impl ProjectEntry for CountingEntry {
    fn project_name(&self) -> Result<String, MetadataError> {
        self.record();
        Ok(self.name.clone())
    }

    fn relative_path(&self) -> Result<String, MetadataError> {
        self.record();
        Ok(self.relative_path.clone())
    }

    fn project_type(&self) -> Result<SolutionProjectType, MetadataError> {
        self.record();
        Ok(self.project_type)
    }
}

/// Project entry whose name cannot be read.
#[derive(Debug)]
pub struct FailingEntry {
    failures_left: Option<AtomicUsize>,
}

impl FailingEntry {
    /// Fail every name read.
    pub fn on_name() -> Self {
        FailingEntry {
            failures_left: None,
        }
    }

    /// Fail the first `failures` name reads, then succeed.
    pub fn recovering_after(self, failures: usize) -> Self {
        FailingEntry {
            failures_left: Some(AtomicUsize::new(failures)),
        }
    }
}

impl ProjectEntry for FailingEntry {
    fn project_name(&self) -> Result<String, MetadataError> {
        let recovered = match &self.failures_left {
            None => false,
            Some(left) => left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err(),
        };

        if recovered {
            Ok("Recovered".to_string())
        } else {
            Err(MetadataError::unavailable("name", "entry handle is detached"))
        }
    }

    fn relative_path(&self) -> Result<String, MetadataError> {
        Ok("Recovered/Recovered.csproj".to_string())
    }

    fn project_type(&self) -> Result<SolutionProjectType, MetadataError> {
        Ok(SolutionProjectType::Unknown)
    }
}

/// Inspector returning a fixed GUID set and counting calls.
#[derive(Debug, Default)]
pub struct CountingInspector {
    guids: BTreeSet<Uuid>,
    calls: AtomicUsize,
}

impl CountingInspector {
    pub fn returning(guids: impl IntoIterator<Item = Uuid>) -> Self {
        CountingInspector {
            guids: guids.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the inspector was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProjectTypeInspector for CountingInspector {
    fn project_type_guids(&self, _project_path: &Path) -> Result<BTreeSet<Uuid>, ProjectFileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.guids.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_entry_recovers() {
        let entry = FailingEntry::on_name().recovering_after(2);
        assert!(entry.project_name().is_err());
        assert!(entry.project_name().is_err());
        assert_eq!(entry.project_name().unwrap(), "Recovered");
        assert_eq!(entry.project_name().unwrap(), "Recovered");
    }

    #[test]
    fn test_counting_inspector() {
        let inspector = CountingInspector::returning([Uuid::nil()]);
        let guids = inspector.project_type_guids(Path::new("x.csproj")).unwrap();

        assert!(guids.contains(&Uuid::nil()));
        assert_eq!(inspector.calls(), 1);
    }
}
