//! Global context for slnkit operations.
//!
//! Provides centralized access to the working directory, the slnkit home
//! directory and configuration lookup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::solution::SOLUTION_EXTENSION;
use crate::util::config::{self, Config};
use crate::util::fs;

/// Error locating a solution file in a directory.
#[derive(Debug, Error)]
pub enum SolutionLookupError {
    #[error("could not find a .sln file in {}", dir.display())]
    NotFound { dir: PathBuf },

    #[error("found {} solution files in {}; pass one explicitly", candidates.len(), dir.display())]
    Ambiguous {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global slnkit data (~/.slnkit/)
    home: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        Ok(GlobalContext {
            cwd,
            home: config::global_config_dir(),
        })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the slnkit home directory (~/.slnkit/), if a home directory exists.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join("config.toml"))
    }

    /// Load the merged configuration that applies to a solution.
    pub fn config_for(&self, solution_path: &Path) -> Config {
        let solution_dir = fs::directory_of(solution_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(self.cwd.as_path());

        config::load_config(
            self.config_path().as_deref(),
            &config::project_config_path(solution_dir),
        )
    }

    /// Resolve a user-supplied solution path against the working directory,
    /// or find the single solution file in it.
    pub fn solution_path(&self, explicit: Option<&Path>) -> Result<PathBuf, SolutionLookupError> {
        match explicit.map(|path| self.cwd.join(path)) {
            Some(path) if path.is_dir() => find_solution(&path),
            Some(path) => Ok(path),
            None => self.find_solution(),
        }
    }

    /// Find the solution file in the current directory.
    pub fn find_solution(&self) -> Result<PathBuf, SolutionLookupError> {
        find_solution(&self.cwd)
    }
}

/// Find the only `.sln` file directly inside `dir`.
pub fn find_solution(dir: &Path) -> Result<PathBuf, SolutionLookupError> {
    let mut candidates = fs::files_with_extension(dir, SOLUTION_EXTENSION)?;

    match candidates.len() {
        0 => Err(SolutionLookupError::NotFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(SolutionLookupError::Ambiguous {
            dir: dir.to_path_buf(),
            candidates,
        }),
    }
}
