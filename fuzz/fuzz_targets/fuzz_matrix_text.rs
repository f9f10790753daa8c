// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use gridgraph::algo::{minimum_spanning_tree, traveling_salesman};
use gridgraph::graph::WeightedGraph;
use gridgraph::matrix::WeightMatrix;
use gridgraph::types::MstAlgorithm;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(matrix) = WeightMatrix::parse_delimited(data, ',') else {
        return;
    };
    if matrix.node_count() > 32 {
        return;
    }
    for symmetric in [false, true] {
        let graph = WeightedGraph::build(&matrix, symmetric);
        assert_eq!(graph.node_count(), matrix.node_count());
        let tree = minimum_spanning_tree(&graph, MstAlgorithm::Prim);
        assert_eq!(tree.component_count(), graph.connected_components());
        let _ = traveling_salesman(&graph, 0);
    }
});
