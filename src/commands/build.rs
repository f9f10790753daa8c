// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Build command - turns a weight matrix into a graph and prints it

use super::input::{load_graph, MatrixArgs};
use super::{OutputFormat, Settings};
use crate::graph::WeightedGraph;
use anyhow::Result;
use tracing::info;

/// Run the build command
pub fn run(args: &MatrixArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let graph = load_graph(args, &settings.config)?;

    match settings.format(format) {
        OutputFormat::Text => print_summary(&graph, settings),
        OutputFormat::Json => println!("{}", graph.to_json()?),
        OutputFormat::Dot => print!("{}", graph.to_dot()),
    }

    Ok(())
}

fn print_summary(graph: &WeightedGraph, settings: &Settings) {
    println!(
        "{} {} nodes, {} edges, total weight {}",
        settings.heading("Graph:"),
        graph.node_count(),
        graph.edge_count(),
        graph.total_weight()
    );

    if graph.is_empty() {
        println!("{}", settings.warning("No edges. Fill in some matrix cells."));
        return;
    }

    for edge in graph.edges() {
        println!("  {} -- {}  {}", edge.a, edge.b, edge.weight);
    }

    let isolated: Vec<String> = (0..graph.node_count())
        .filter(|&n| graph.neighbors(n).is_empty())
        .map(|n| n.to_string())
        .collect();
    if !isolated.is_empty() {
        println!("Isolated nodes: {}", isolated.join(", "));
    }

    let components = graph.connected_components();
    if components > 1 {
        info!("Graph has {} connected components", components);
        println!("{}", settings.warning(&format!("Disconnected: {components} components")));
    }
}
