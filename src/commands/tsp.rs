// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! TSP command - approximate closed tour through every node

use super::input::{load_graph, MatrixArgs};
use super::{path_string, OutputFormat, Settings};
use crate::algo::traveling_salesman;
use crate::types::WeightedEdge;
use anyhow::{Context, Result};
use tracing::info;

/// Run the tsp command
pub fn run(args: &MatrixArgs, start: usize, format: OutputFormat, settings: &Settings) -> Result<()> {
    let graph = load_graph(args, &settings.config)?;
    info!("Approximating tour from node {}", start);

    let tour = traveling_salesman(&graph, start)
        .with_context(|| format!("No tour from node {start}"))?;

    match settings.format(format) {
        OutputFormat::Text => {
            println!("{} {}", settings.heading("Tour:"), path_string(&tour.order));
            println!("Cost: {}", tour.cost);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tour)?),
        OutputFormat::Dot => {
            let steps: Vec<WeightedEdge> = tour
                .order
                .windows(2)
                .filter_map(|w| graph.weight(w[0], w[1]).map(|wt| WeightedEdge::new(w[0], w[1], wt)))
                .collect();
            print!("{}", graph.to_dot_highlighted(&steps));
        }
    }

    Ok(())
}
