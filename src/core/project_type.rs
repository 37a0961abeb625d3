//! Solution project classification.
//!
//! Every `Project(...)` line in a solution file carries a project type GUID.
//! MSBuild folds those GUIDs (and, for a few formats, the file extension) into
//! a small enumeration; this module mirrors that enumeration and the rules
//! used to pick a value for a solution line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// Well-known project type GUIDs.
pub mod guids {
    use super::{uuid, Uuid};

    /// C# (classic project system)
    pub const CSHARP: Uuid = uuid!("FAE04EC0-301F-11D3-BF4B-00C04F79EFBC");
    /// Visual Basic (classic project system)
    pub const VISUAL_BASIC: Uuid = uuid!("F184B08F-C81C-45F6-A57F-5ABD9991F28F");
    /// F# (classic project system)
    pub const FSHARP: Uuid = uuid!("F2A71F9B-5D33-465A-A702-920D77279786");
    /// Visual C++
    pub const VISUAL_CPP: Uuid = uuid!("8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942");
    /// Visual J#
    pub const VISUAL_JSHARP: Uuid = uuid!("E6FDF86B-F3D1-11D4-8576-0002A516ECE8");
    /// Database project
    pub const DATABASE: Uuid = uuid!("C8D11400-126E-41CD-887F-60BD40844F9E");
    /// Shared project system (CPS)
    pub const CPS: Uuid = uuid!("13B669BE-BB05-4DDF-9536-439F39A36129");
    /// SDK-style C#
    pub const CPS_CSHARP: Uuid = uuid!("9A19103F-16F7-4668-BE54-9A1E7A4F7556");
    /// SDK-style Visual Basic
    pub const CPS_VISUAL_BASIC: Uuid = uuid!("778DAE3C-4631-46EA-AA77-85C1314464D9");
    /// SDK-style F#
    pub const CPS_FSHARP: Uuid = uuid!("6EC3EE1D-3C4E-46DD-8F32-0CC8E7565705");

    /// Web site (no project file, just a folder)
    pub const WEB_SITE: Uuid = uuid!("E24C65DC-7377-472B-9ABA-BC803B73C61A");
    /// Solution folder
    pub const SOLUTION_FOLDER: Uuid = uuid!("2150E333-8FDC-42A3-9474-1A3956D46DE8");

    /// Web application project flavor, declared inside the project file.
    pub const WEB_APPLICATION: Uuid = uuid!("349C5851-65DF-11DA-9384-00065B846F21");

    /// Type GUIDs of project formats MSBuild can build directly.
    pub const MSBUILD_FORMATS: &[Uuid] = &[
        CSHARP,
        VISUAL_BASIC,
        FSHARP,
        VISUAL_CPP,
        VISUAL_JSHARP,
        DATABASE,
        CPS,
        CPS_CSHARP,
        CPS_VISUAL_BASIC,
        CPS_FSHARP,
    ];
}

/// Classification of a project entry inside a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolutionProjectType {
    /// Anything the solution parser could not place
    #[default]
    Unknown,
    /// A project file in a format MSBuild understands (csproj, vbproj, ...)
    KnownToBeMsBuildFormat,
    /// A virtual folder used to group projects
    SolutionFolder,
    /// A file-system web site without a project file
    WebProject,
    /// A web deployment project (`.wdproj`)
    WebDeploymentProject,
    /// A sub-project of an enterprise template (`.etp`)
    EtpSubProject,
}

impl SolutionProjectType {
    /// Classify a solution entry from its type GUID and relative path.
    pub fn classify(type_guid: &Uuid, relative_path: &str) -> Self {
        if *type_guid == guids::SOLUTION_FOLDER {
            return SolutionProjectType::SolutionFolder;
        }
        if *type_guid == guids::WEB_SITE {
            return SolutionProjectType::WebProject;
        }

        let extension = extension_of(relative_path);
        if extension.eq_ignore_ascii_case("wdproj") {
            return SolutionProjectType::WebDeploymentProject;
        }

        if guids::MSBUILD_FORMATS.contains(type_guid) {
            return SolutionProjectType::KnownToBeMsBuildFormat;
        }

        // Unknown flavors still build if they point at an *proj file
        if extension.len() > "proj".len() && extension.to_ascii_lowercase().ends_with("proj") {
            return SolutionProjectType::KnownToBeMsBuildFormat;
        }

        SolutionProjectType::Unknown
    }

    /// Get the string form used in output and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionProjectType::Unknown => "unknown",
            SolutionProjectType::KnownToBeMsBuildFormat => "known-to-be-ms-build-format",
            SolutionProjectType::SolutionFolder => "solution-folder",
            SolutionProjectType::WebProject => "web-project",
            SolutionProjectType::WebDeploymentProject => "web-deployment-project",
            SolutionProjectType::EtpSubProject => "etp-sub-project",
        }
    }

    /// Check if this entry is a solution folder rather than a real project.
    pub fn is_folder(&self) -> bool {
        matches!(self, SolutionProjectType::SolutionFolder)
    }
}

/// Extension of a solution-relative path, tolerating both separators.
fn extension_of(relative_path: &str) -> &str {
    let file_name = relative_path
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or(relative_path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    }
}

impl fmt::Display for SolutionProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolutionProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(SolutionProjectType::Unknown),
            "known-to-be-ms-build-format" | "msbuild" => {
                Ok(SolutionProjectType::KnownToBeMsBuildFormat)
            }
            "solution-folder" | "folder" => Ok(SolutionProjectType::SolutionFolder),
            "web-project" | "website" => Ok(SolutionProjectType::WebProject),
            "web-deployment-project" => Ok(SolutionProjectType::WebDeploymentProject),
            "etp-sub-project" => Ok(SolutionProjectType::EtpSubProject),
            _ => Err(format!("unknown project type: {}", s)),
        }
    }
}
