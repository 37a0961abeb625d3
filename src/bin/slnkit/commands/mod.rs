//! Command implementations

pub mod completions;
pub mod deployable;
pub mod list;
pub mod show;

use std::path::Path;

use anyhow::Result;

use slnkit::ops::{inspect_solution, InspectOptions, SolutionReport};
use slnkit::util::config::{Config, OutputFormat};
use slnkit::util::GlobalContext;

/// Locate the solution, load its config and inspect every project.
pub(crate) fn load_report(
    solution: Option<&Path>,
    configure: impl FnOnce(&mut InspectOptions),
) -> Result<(SolutionReport, Config)> {
    let ctx = GlobalContext::new()?;

    let solution_path = ctx.solution_path(solution)?;
    let config = ctx.config_for(&solution_path);

    let mut opts = InspectOptions::from_config(&config);
    configure(&mut opts);

    let report = inspect_solution(&solution_path, &config, &opts)?;
    Ok((report, config))
}

/// Pick the output format from the `--json` flag or configuration.
pub(crate) fn output_format(json: bool, config: &Config) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        config.format().unwrap_or_default()
    }
}
