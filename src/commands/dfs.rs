// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! DFS command - depth-first visiting order over the spanning tree

use super::input::{load_graph, MatrixArgs};
use super::{path_string, OutputFormat, Settings};
use crate::algo::{dfs_preorder, minimum_spanning_tree};
use crate::types::MstAlgorithm;
use anyhow::{Context, Result};
use serde_json::json;

/// Run the dfs command
pub fn run(
    args: &MatrixArgs,
    start: usize,
    whole_graph: bool,
    algorithm: Option<MstAlgorithm>,
    format: OutputFormat,
    settings: &Settings,
) -> Result<()> {
    let graph = load_graph(args, &settings.config)?;

    let (order, highlight) = if whole_graph {
        (dfs_preorder(&graph, start)?, Vec::new())
    } else {
        let algorithm = algorithm.unwrap_or(settings.config.mst_algorithm);
        let tree = minimum_spanning_tree(&graph, algorithm);
        let tree_graph = tree.to_graph()?;
        let order = dfs_preorder(&tree_graph, start)
            .with_context(|| format!("Cannot start traversal at node {start}"))?;
        (order, tree.edges)
    };

    match settings.format(format) {
        OutputFormat::Text => {
            println!("{} {}", settings.heading("DFS preorder:"), path_string(&order));
            if order.len() < graph.node_count() {
                println!(
                    "{}",
                    settings.warning(&format!(
                        "{} node(s) not reachable from {}",
                        graph.node_count() - order.len(),
                        start
                    ))
                );
            }
        }
        OutputFormat::Json => {
            let out = json!({ "start": start, "order": order });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Dot => print!("{}", graph.to_dot_highlighted(&highlight)),
    }

    Ok(())
}
