// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod build;
pub mod completions;
pub mod config;
pub mod convert;
pub mod dfs;
pub mod input;
pub mod mst;
pub mod shadow;
pub mod tsp;

use crate::config::Config;
use owo_colors::OwoColorize;

/// How a command prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Graphviz DOT
    Dot,
}

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Settings {
    /// Resolved configuration
    pub config: Config,
    /// Force JSON output regardless of `--format`
    pub json: bool,
    /// Use ANSI colors in text output
    pub color: bool,
}

impl Settings {
    /// The effective format for a command's `--format` choice
    #[must_use]
    pub fn format(&self, requested: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            requested
        }
    }

    /// Bold text when colors are on
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Yellow text when colors are on
    #[must_use]
    pub fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Format a node sequence as `0 -> 1 -> 2`
#[must_use]
pub fn path_string(order: &[usize]) -> String {
    order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
