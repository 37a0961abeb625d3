//! `slnkit deployable` command

use anyhow::Result;

use crate::cli::DeployableArgs;
use slnkit::ops::find_deployable;
use slnkit::util::config::OutputFormat;

pub fn execute(args: DeployableArgs) -> Result<()> {
    let (report, config) = super::load_report(args.solution.as_deref(), |_| {})?;
    let deployable = find_deployable(&report);

    match super::output_format(args.json, &config) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&deployable)?),
        OutputFormat::Text => {
            if deployable.is_empty() {
                println!("No deployable web projects in {}", report.solution.display());
            }
            for project in &deployable {
                let kind = if project.is_wap { "wap" } else { "website" };
                let path = project
                    .absolute_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                println!("{} ({}) {}", project.name, kind, path);
            }
        }
    }

    Ok(())
}
