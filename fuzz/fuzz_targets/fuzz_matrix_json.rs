// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use gridgraph::graph::WeightedGraph;
use gridgraph::matrix::WeightMatrix;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(matrix) = WeightMatrix::from_json(data) {
        let graph = WeightedGraph::build(&matrix, false);
        assert!(graph.edge_count() <= matrix.node_count() * (matrix.node_count() - 1) / 2);
    }
});
