//! `slnkit show` command

use anyhow::{bail, Result};

use crate::cli::ShowArgs;
use slnkit::ops::{select_project, ProjectReport};
use slnkit::util::config::OutputFormat;

pub fn execute(args: ShowArgs) -> Result<()> {
    let (report, config) = super::load_report(args.solution.as_deref(), |opts| {
        opts.include_folders = true;
    })?;

    let Some(project) = select_project(&report, &args.project) else {
        let available: Vec<_> = report.projects.iter().map(|p| p.name.as_str()).collect();
        bail!(
            "no project named `{}` in {}\n\
             help: available projects: {}",
            args.project,
            report.solution.display(),
            available.join(", ")
        );
    };

    match super::output_format(args.json, &config) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(project)?),
        OutputFormat::Text => print_project(project),
    }

    if let Some(error) = &project.error {
        bail!("failed to resolve `{}`: {}", project.name, error);
    }

    Ok(())
}

fn print_project(project: &ProjectReport) {
    println!("name:          {}", project.name);
    println!("type:          {}", project.project_type);
    println!("relative path: {}", project.relative_path);
    if let Some(path) = &project.absolute_path {
        println!("absolute path: {}", path.display());
    }
    println!("web site:      {}", project.is_web_site);
    println!("wap:           {}", project.is_wap);

    if !project.project_type_guids.is_empty() {
        println!("type guids:");
        for guid in &project.project_type_guids {
            println!("  {}", guid.braced());
        }
    }
}
