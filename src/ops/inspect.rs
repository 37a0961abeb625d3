//! Solution inspection.
//!
//! Loads a solution, resolves the metadata of every project it lists and
//! collects the results into a serializable report.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::core::project_type::SolutionProjectType;
use crate::core::{MsBuildProjectFile, ProjectMetadata, Solution};
use crate::util::config::Config;
use crate::util::fs;

/// Options for `inspect_solution`.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Include solution folders in the report
    pub include_folders: bool,

    /// Number of parallel jobs (None = rayon default)
    pub jobs: Option<usize>,
}

impl InspectOptions {
    /// Options taken from configuration.
    pub fn from_config(config: &Config) -> Self {
        InspectOptions {
            include_folders: config.include_folders(),
            jobs: None,
        }
    }
}

/// Metadata of every project in a solution.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport {
    /// Solution file path
    pub solution: PathBuf,

    /// Solution format version
    pub format_version: String,

    /// Visual Studio version that saved the solution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_studio_version: Option<String>,

    /// Projects in solution order
    pub projects: Vec<ProjectReport>,
}

/// Resolved metadata of one project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub name: String,
    pub relative_path: String,
    pub project_type: SolutionProjectType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<PathBuf>,

    pub is_web_site: bool,
    pub is_wap: bool,
    pub project_type_guids: BTreeSet<Uuid>,

    /// Why resolution failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProjectReport {
    fn from_project(project: &ProjectMetadata) -> Self {
        let entry = project.entry();
        let mut report = ProjectReport {
            name: entry.name().to_string(),
            relative_path: entry.path().to_string(),
            project_type: entry.kind(),
            absolute_path: None,
            is_web_site: false,
            is_wap: false,
            project_type_guids: BTreeSet::new(),
            error: None,
        };

        match project.metadata() {
            Ok(resolved) => {
                report.absolute_path = Some(resolved.absolute_path.clone());
                report.is_web_site = resolved.is_web_site;
                report.is_wap = resolved.is_wap;
                report.project_type_guids = resolved.project_type_guids.clone();
            }
            Err(e) => {
                report.error = Some(format!("{:#}", anyhow::Error::new(e)));
            }
        }

        report
    }

    /// Check if a deployment would pick this project up.
    pub fn is_deployable(&self) -> bool {
        self.is_wap || self.is_web_site
    }
}

impl SolutionReport {
    /// Projects whose resolution failed.
    pub fn failures(&self) -> impl Iterator<Item = &ProjectReport> {
        self.projects.iter().filter(|p| p.error.is_some())
    }
}

/// Inspect every project in the solution at `path`.
pub fn inspect_solution(
    path: &Path,
    config: &Config,
    opts: &InspectOptions,
) -> Result<SolutionReport> {
    let solution = Solution::load(path)
        .with_context(|| format!("failed to load solution: {}", path.display()))?;
    let classifier = config.classifier()?;

    let projects: Vec<ProjectMetadata> = solution
        .projects_with(Arc::new(MsBuildProjectFile::new()), Arc::new(classifier))
        .into_iter()
        .filter(|p| opts.include_folders || !p.entry().kind().is_folder())
        .collect();

    tracing::info!(
        "Inspecting {} projects in {}",
        projects.len(),
        path.display()
    );

    let resolve_all = || -> Vec<ProjectReport> {
        projects.par_iter().map(ProjectReport::from_project).collect()
    };

    let reports = match opts.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build thread pool")?
            .install(resolve_all),
        None => resolve_all(),
    };

    Ok(SolutionReport {
        solution: solution.path().to_path_buf(),
        format_version: solution.format_version().to_string(),
        visual_studio_version: solution.visual_studio_version().map(str::to_string),
        projects: reports,
    })
}

/// The web projects a deployment would consider (WAPs and web sites).
pub fn find_deployable(report: &SolutionReport) -> Vec<&ProjectReport> {
    report.projects.iter().filter(|p| p.is_deployable()).collect()
}

/// Look a project up by name, ignoring ASCII case.
pub fn select_project<'a>(report: &'a SolutionReport, name: &str) -> Option<&'a ProjectReport> {
    report
        .projects
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Format a report as a text table.
///
/// In verbose mode the declared type GUIDs are listed under each project.
pub fn format_report(report: &SolutionReport, verbose: bool) -> String {
    let mut output = format!(
        "{} (format {})\n",
        report.solution.display(),
        report.format_version
    );

    let base = fs::directory_of(&report.solution).unwrap_or(Path::new(""));
    let width = report
        .projects
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);

    for project in &report.projects {
        let flags = if project.is_wap {
            "wap"
        } else if project.is_web_site {
            "website"
        } else {
            "-"
        };

        let location = match (&project.absolute_path, &project.error) {
            (_, Some(error)) => format!("error: {}", error),
            (Some(path), None) => fs::relative_path(base, path).display().to_string(),
            (None, None) => project.relative_path.clone(),
        };

        output.push_str(&format!(
            "  {:<width$}  {:<8}  {:<26}  {}\n",
            project.name,
            flags,
            project.project_type.as_str(),
            location,
            width = width
        ));

        if verbose {
            for guid in &project.project_type_guids {
                output.push_str(&format!("  {:<width$}  {}\n", "", guid.braced(), width = width));
            }
        }
    }

    output
}
