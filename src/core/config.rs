//! Layered configuration
//!
//! Settings are merged from (lowest to highest priority) built-in defaults,
//! the user config file, the project `bomplan.yaml`, then environment and
//! command-line overrides applied by the CLI.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = "bomplan.yaml";

/// Errors raised while reading configuration files
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    #[diagnostic(code(bomplan::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {message}", .path.display())]
    #[diagnostic(
        code(bomplan::config::invalid),
        help("Expected keys: bom, routings, output, wait_for_key")
    )]
    Invalid { path: PathBuf, message: String },
}

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// BOM document path
    pub bom: PathBuf,

    /// Routing steps document path
    pub routings: PathBuf,

    /// CSV report path
    pub output: PathBuf,

    /// Wait for a key press before exiting (interactive terminals only)
    pub wait_for_key: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bom: PathBuf::from("bom.json"),
            routings: PathBuf::from("routings.json"),
            output: PathBuf::from("output.csv"),
            wait_for_key: true,
        }
    }
}

/// A partial config as written in a file; unset keys fall through to lower layers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    bom: Option<PathBuf>,
    routings: Option<PathBuf>,
    output: Option<PathBuf>,
    wait_for_key: Option<bool>,
}

impl Config {
    /// Load the user config followed by the project config in `dir`
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_path) = Self::user_config_path() {
            config.merge_file(&user_path)?;
        }
        config.merge_file(&dir.join(PROJECT_CONFIG_FILE))?;

        Ok(config)
    }

    /// Location of the per-user config file, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bomplan")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Overlay the keys present in a config file; a missing file is not an error
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Ok(());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_str(&content, path)?;
        tracing::debug!(path = %path.display(), "merged config file");
        Ok(())
    }

    fn merge_str(&mut self, content: &str, path: &Path) -> Result<(), ConfigError> {
        if content.trim().is_empty() {
            return Ok(());
        }

        let layer: ConfigLayer =
            serde_yml::from_str(content).map_err(|e| ConfigError::Invalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if let Some(bom) = layer.bom {
            self.bom = bom;
        }
        if let Some(routings) = layer.routings {
            self.routings = routings;
        }
        if let Some(output) = layer.output {
            self.output = output;
        }
        if let Some(wait) = layer.wait_for_key {
            self.wait_for_key = wait;
        }
        Ok(())
    }

    /// Resolve relative paths against `dir`
    pub fn resolve_paths(mut self, dir: &Path) -> Self {
        self.bom = dir.join(&self.bom);
        self.routings = dir.join(&self.routings);
        self.output = dir.join(&self.output);
        self
    }
}
