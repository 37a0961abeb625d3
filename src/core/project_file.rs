//! Project file inspection.
//!
//! MSBuild project files may declare a `<ProjectTypeGuids>` property listing
//! the project flavors that apply (web application, test project, ...). The
//! inspector reads that property without evaluating the project.

use std::collections::BTreeSet;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use uuid::Uuid;

use crate::core::errors::ProjectFileError;

const PROJECT_TYPE_GUIDS: &[u8] = b"ProjectTypeGuids";

/// Reads the declared type GUIDs of a project file.
pub trait ProjectTypeInspector: Send + Sync {
    /// Get the set of type GUIDs declared by the project at `project_path`.
    fn project_type_guids(&self, project_path: &Path) -> Result<BTreeSet<Uuid>, ProjectFileError>;
}

/// Inspector for MSBuild XML project files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsBuildProjectFile;

impl MsBuildProjectFile {
    pub fn new() -> Self {
        MsBuildProjectFile
    }
}

impl ProjectTypeInspector for MsBuildProjectFile {
    fn project_type_guids(&self, project_path: &Path) -> Result<BTreeSet<Uuid>, ProjectFileError> {
        let content =
            std::fs::read_to_string(project_path).map_err(|source| ProjectFileError::Read {
                path: project_path.to_path_buf(),
                source,
            })?;

        let guids = parse_project_type_guids(&content, project_path)?;
        tracing::trace!(
            "{} declares {} project type guid(s)",
            project_path.display(),
            guids.len()
        );
        Ok(guids)
    }
}

/// Extract the `<ProjectTypeGuids>` values from project XML.
///
/// Every occurrence of the property contributes; a project without the
/// property yields an empty set. `path` is only used for error reporting.
pub fn parse_project_type_guids(
    content: &str,
    path: &Path,
) -> Result<BTreeSet<Uuid>, ProjectFileError> {
    let mut reader = Reader::from_str(content);
    let mut guids = BTreeSet::new();
    let mut in_type_guids = false;
    let mut value = String::new();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                saw_root = true;
                if e.local_name().as_ref() == PROJECT_TYPE_GUIDS {
                    in_type_guids = true;
                    value.clear();
                }
            }
            Ok(Event::Empty(_)) => saw_root = true,
            Ok(Event::End(e)) => {
                depth = depth.saturating_sub(1);
                if e.local_name().as_ref() == PROJECT_TYPE_GUIDS {
                    in_type_guids = false;
                    collect_guids(&value, path, &mut guids)?;
                }
            }
            Ok(Event::Text(t)) if in_type_guids => {
                let text = t.unescape().map_err(|e| ProjectFileError::Xml {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                value.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ProjectFileError::Xml {
                    path: path.to_path_buf(),
                    message: format!("at byte {}: {}", reader.buffer_position(), e),
                });
            }
            _ => {}
        }
    }

    let problem = if in_type_guids {
        Some("unterminated <ProjectTypeGuids> element")
    } else if !saw_root {
        Some("no root element")
    } else if depth != 0 {
        Some("unexpected end of file inside an element")
    } else {
        None
    };

    match problem {
        Some(message) => Err(ProjectFileError::Xml {
            path: path.to_path_buf(),
            message: message.to_string(),
        }),
        None => Ok(guids),
    }
}

fn collect_guids(
    value: &str,
    path: &Path,
    guids: &mut BTreeSet<Uuid>,
) -> Result<(), ProjectFileError> {
    for raw in value.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let guid = Uuid::parse_str(raw).map_err(|_| ProjectFileError::InvalidGuid {
            path: path.to_path_buf(),
            value: raw.to_string(),
        })?;
        guids.insert(guid);
    }
    Ok(())
}
