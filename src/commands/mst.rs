// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! MST command - minimum spanning tree of a weight matrix

use super::input::{load_graph, MatrixArgs};
use super::{OutputFormat, Settings};
use crate::algo::minimum_spanning_tree;
use crate::types::MstAlgorithm;
use anyhow::Result;
use tracing::info;

/// Run the mst command
pub fn run(
    args: &MatrixArgs,
    algorithm: Option<MstAlgorithm>,
    format: OutputFormat,
    settings: &Settings,
) -> Result<()> {
    let graph = load_graph(args, &settings.config)?;
    let algorithm = algorithm.unwrap_or(settings.config.mst_algorithm);
    info!("Computing spanning tree with {}", algorithm.name());

    let tree = minimum_spanning_tree(&graph, algorithm);

    match settings.format(format) {
        OutputFormat::Text => {
            println!(
                "{} ({}): total weight {}",
                settings.heading("Minimum spanning tree"),
                algorithm.name(),
                tree.total_weight
            );
            for edge in &tree.edges {
                println!("  {} -- {}  {}", edge.a, edge.b, edge.weight);
            }
            if !tree.is_spanning() {
                println!(
                    "{}",
                    settings.warning(&format!(
                        "Graph is disconnected: spanning forest of {} trees",
                        tree.component_count()
                    ))
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        OutputFormat::Dot => print!("{}", graph.to_dot_highlighted(&tree.edges)),
    }

    Ok(())
}
