//! Configuration file support for slnkit.
//!
//! slnkit supports two configuration file locations:
//! - Global: `~/.slnkit/config.toml` - User-wide defaults
//! - Project: `.slnkit/config.toml` next to the solution - Overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::classify::KnownGuidClassifier;

/// slnkit configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classification settings
    pub classify: ClassifyConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Classification-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClassifyConfig {
    /// Extra project type GUIDs that mark a web application project
    pub wap_type_guids: Vec<String>,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Default output format (text, json)
    pub format: Option<String>,

    /// Include solution folders in project listings
    pub include_folders: Option<bool>,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if !other.classify.wap_type_guids.is_empty() {
            self.classify.wap_type_guids = other.classify.wap_type_guids;
        }

        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.include_folders.is_some() {
            self.output.include_folders = other.output.include_folders;
        }
    }

    /// Build the WAP classifier, including configured GUIDs.
    pub fn classifier(&self) -> Result<KnownGuidClassifier> {
        self.classify
            .wap_type_guids
            .iter()
            .try_fold(KnownGuidClassifier::new(), |classifier, raw| -> Result<_> {
                let guid = Uuid::parse_str(raw.trim())
                    .with_context(|| format!("invalid GUID in classify.wap-type-guids: `{}`", raw))?;
                Ok(classifier.with_guid(guid))
            })
    }

    /// Whether listings include solution folders.
    pub fn include_folders(&self) -> bool {
        self.output.include_folders.unwrap_or(false)
    }

    /// Parse the configured output format.
    pub fn format(&self) -> Option<OutputFormat> {
        self.output.format.as_ref().and_then(|s| s.parse().ok())
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.slnkit/config.toml)
/// 2. Global config (~/.slnkit/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path.filter(|p| p.exists()) {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global slnkit config directory (~/.slnkit).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".slnkit"))
}

/// Get the project config path for a solution directory.
pub fn project_config_path(solution_dir: &Path) -> PathBuf {
    solution_dir.join(".slnkit").join("config.toml")
}
