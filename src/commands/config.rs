// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

use super::Settings;
use crate::config::Config;
use anyhow::Result;
use std::path::Path;

/// Show one config key, the whole config, or write a default config file
pub fn run(key: Option<&str>, init: bool, path: &Path, settings: &Settings) -> Result<()> {
    if init {
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        Config::default().save(path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    match key {
        Some(key) => {
            let value = settings.config.get(key).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown config key: {}. Valid: symmetric, mst_algorithm, max_nodes, delimiter, log_level",
                    key
                )
            })?;
            println!("{value}");
        }
        None if settings.json => println!("{}", serde_json::to_string_pretty(&settings.config)?),
        None => {
            println!("# {}", path.display());
            print!("{}", settings.config.to_toml()?);
        }
    }
    Ok(())
}
