//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// slnkit - Inspect Visual Studio solutions and classify their projects
#[derive(Parser)]
#[command(name = "slnkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the projects of a solution
    List(ListArgs),

    /// Show the metadata of one project
    Show(ShowArgs),

    /// List the web projects a deployment would pick up
    Deployable(DeployableArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Solution file or directory (defaults to the .sln in the current directory)
    pub solution: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Include solution folders
    #[arg(long)]
    pub all: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project name (case-insensitive)
    pub project: String,

    /// Solution file or directory (defaults to the .sln in the current directory)
    #[arg(long, short)]
    pub solution: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DeployableArgs {
    /// Solution file or directory (defaults to the .sln in the current directory)
    pub solution: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
