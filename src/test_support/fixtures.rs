//! Fixture writers for solution and project files.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::core::project_type::guids;

/// Render a minimal classic `.csproj` declaring `type_guids`.
pub fn csproj_with_type_guids(type_guids: &[Uuid]) -> String {
    let declared = type_guids
        .iter()
        .map(|g| g.braced().to_string().to_uppercase())
        .collect::<Vec<_>>()
        .join(";");

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>
    <ProjectTypeGuids>{declared}</ProjectTypeGuids>
    <OutputType>Library</OutputType>
  </PropertyGroup>
</Project>
"#
    )
}

/// Fixture for a project file on disk.
#[derive(Debug, Clone)]
pub struct ProjectFileFixture {
    /// Project name; the file lands at `<name>/<name>.csproj`.
    pub name: String,
    /// Declared type GUIDs.
    pub type_guids: Vec<Uuid>,
}

impl ProjectFileFixture {
    /// A web application project.
    pub fn wap(name: impl Into<String>) -> Self {
        ProjectFileFixture {
            name: name.into(),
            type_guids: vec![guids::WEB_APPLICATION, guids::CSHARP],
        }
    }

    /// A plain C# class library.
    pub fn library(name: impl Into<String>) -> Self {
        ProjectFileFixture {
            name: name.into(),
            type_guids: vec![guids::CSHARP],
        }
    }

    /// Write the project under `dir`, returning the project file path.
    pub fn write(&self, dir: &Path) -> PathBuf {
        let project_dir = dir.join(&self.name);
        fs::create_dir_all(&project_dir).unwrap();

        let path = project_dir.join(format!("{}.csproj", self.name));
        fs::write(&path, csproj_with_type_guids(&self.type_guids)).unwrap();
        path
    }
}

/// Builder for `.sln` files.
#[derive(Debug, Clone, Default)]
pub struct SolutionFixture {
    projects: Vec<(Uuid, String, String)>,
}

impl SolutionFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project line.
    pub fn project(mut self, name: &str, relative_path: &str, type_guid: Uuid) -> Self {
        self.projects
            .push((type_guid, name.to_string(), relative_path.to_string()));
        self
    }

    /// Add a solution folder.
    pub fn folder(self, name: &str) -> Self {
        self.project(name, name, guids::SOLUTION_FOLDER)
    }

    /// Add a file-system web site.
    pub fn web_site(self, name: &str, relative_path: &str) -> Self {
        self.project(name, relative_path, guids::WEB_SITE)
    }

    /// Render the solution text.
    pub fn render(&self) -> String {
        let mut out = String::from(
            "\u{feff}\nMicrosoft Visual Studio Solution File, Format Version 12.00\n\
             # Visual Studio Version 17\n\
             VisualStudioVersion = 17.0.31903.59\n",
        );

        for (index, (type_guid, name, path)) in self.projects.iter().enumerate() {
            let project_guid = Uuid::from_u128(index as u128 + 1);
            out.push_str(&format!(
                "Project(\"{}\") = \"{}\", \"{}\", \"{}\"\nEndProject\n",
                type_guid.braced().to_string().to_uppercase(),
                name,
                path,
                project_guid.braced().to_string().to_uppercase()
            ));
        }

        out.push_str("Global\nEndGlobal\n");
        out
    }

    /// Write the solution into `dir`, returning its path.
    pub fn write(&self, dir: &Path, file_name: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(file_name);
        fs::write(&path, self.render()).unwrap();
        path
    }
}
