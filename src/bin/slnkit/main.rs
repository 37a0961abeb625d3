//! slnkit CLI - Inspect Visual Studio solutions

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slnkit=debug")
    } else {
        EnvFilter::new("slnkit=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::List(args) => commands::list::execute(args, cli.verbose),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Deployable(args) => commands::deployable::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
