// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use crate::types::MstAlgorithm;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mirror the upper triangle onto the lower one before building
    pub symmetric: bool,
    /// Default spanning tree algorithm
    pub mst_algorithm: MstAlgorithm,
    /// Largest matrix the CLI accepts
    pub max_nodes: usize,
    /// Cell separator for delimited matrix files
    pub delimiter: char,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symmetric: false,
            mst_algorithm: MstAlgorithm::Kruskal,
            max_nodes: 20,
            delimiter: ',',
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Look up a single key as display text
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "symmetric" => Some(self.symmetric.to_string()),
            "mst_algorithm" => Some(self.mst_algorithm.name().to_string()),
            "max_nodes" => Some(self.max_nodes.to_string()),
            "delimiter" => Some(self.delimiter.to_string()),
            "log_level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Default config file location
#[must_use]
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "hyperpolymath", "gridgraph")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.config/gridgraph/config.toml"))
}

/// Load configuration from `path` (or the default location), falling back
/// to defaults when the file does not exist
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = path.map_or_else(default_path, Path::to_path_buf);
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
