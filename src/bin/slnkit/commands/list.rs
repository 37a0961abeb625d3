//! `slnkit list` command

use anyhow::Result;

use crate::cli::ListArgs;
use slnkit::ops::format_report;
use slnkit::util::config::OutputFormat;

pub fn execute(args: ListArgs, verbose: bool) -> Result<()> {
    let (report, config) = super::load_report(args.solution.as_deref(), |opts| {
        opts.include_folders |= args.all;
        opts.jobs = args.jobs;
    })?;

    match super::output_format(args.json, &config) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_report(&report, verbose)),
    }

    let failures = report.failures().count();
    if failures > 0 {
        tracing::warn!(
            "{} project{} could not be resolved",
            failures,
            if failures == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
