// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weighted undirected graphs built from weight matrices

use crate::matrix::{parse_cell, WeightMatrix};
use crate::types::{GraphStore, GridError, GridResult, WeightedEdge};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

/// A simple undirected graph over nodes `0..n` with `f64` edge weights.
///
/// Node `i` is always petgraph node index `i`. There are no self-loops and
/// at most one edge per unordered pair.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    /// The underlying petgraph graph; node weight is the node's own index
    graph: UnGraph<usize, f64>,
}

impl WeightedGraph {
    /// A graph with `n` isolated nodes
    #[must_use]
    pub fn with_nodes(n: usize) -> Self {
        let mut graph = UnGraph::with_capacity(n, n * n.saturating_sub(1) / 2);
        for i in 0..n {
            graph.add_node(i);
        }
        Self { graph }
    }

    /// Build a graph from a weight matrix.
    ///
    /// Every node of the matrix becomes a node of the graph, connected or
    /// not. With `symmetric` set, the upper triangle is mirrored onto the
    /// lower one first (on a copy) so only cells `(i, j)` with `i < j`
    /// matter.
    ///
    /// Cells are then read in row-major order: `i` ascending, then `j`
    /// ascending, skipping the diagonal. The first parseable cell seen for
    /// an unordered pair `{i, j}` defines the edge; any later cell for the
    /// same pair is dropped. In non-symmetric mode this means `(i, j)` wins
    /// over `(j, i)` whenever `i < j` and both are set. Empty and
    /// unparseable cells are skipped without error.
    #[must_use]
    pub fn build(matrix: &WeightMatrix, symmetric: bool) -> Self {
        let n = matrix.node_count();
        let mut graph = Self::with_nodes(n);

        let mirrored;
        let source = if symmetric {
            mirrored = matrix.symmetrized();
            &mirrored
        } else {
            matrix
        };

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let Some(text) = source.cell(i, j) else {
                    continue;
                };
                let Some(weight) = parse_cell(text) else {
                    debug!("Cell ({}, {}) = {:?} is not a number, no edge", i, j, text);
                    continue;
                };
                if !graph.insert_edge(i, j, weight) {
                    debug!("Cell ({}, {}) duplicates an existing edge, dropped", i, j);
                }
            }
        }

        debug!(
            "Built graph with {} nodes and {} edges (symmetric: {})",
            graph.node_count(),
            graph.edge_count(),
            symmetric
        );
        graph
    }

    /// Build a graph from an edge list, first edge per pair wins
    pub fn from_edges<I>(n: usize, edges: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        let mut graph = Self::with_nodes(n);
        for edge in edges {
            for node in [edge.a, edge.b] {
                if node >= n {
                    return Err(GridError::NodeOutOfRange { node, count: n });
                }
            }
            if edge.a != edge.b {
                graph.insert_edge(edge.a, edge.b, edge.weight);
            }
        }
        Ok(graph)
    }

    /// Add `{a, b}` unless that pair already has an edge; returns whether it was added
    fn insert_edge(&mut self, a: usize, b: usize, weight: f64) -> bool {
        let (na, nb) = (NodeIndex::new(a), NodeIndex::new(b));
        if self.graph.find_edge(na, nb).is_some() {
            return false;
        }
        self.graph.add_edge(na, nb, weight);
        true
    }

    /// Borrow the petgraph graph
    #[must_use]
    pub fn inner(&self) -> &UnGraph<usize, f64> {
        &self.graph
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no edges at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Whether `node` is a valid node index
    #[must_use]
    pub fn contains_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Fail with [`GridError::NodeOutOfRange`] unless `node` exists
    pub fn check_node(&self, node: usize) -> GridResult<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GridError::NodeOutOfRange {
                node,
                count: self.node_count(),
            })
        }
    }

    /// Weight of edge `{a, b}`, in either orientation
    #[must_use]
    pub fn weight(&self, a: usize, b: usize) -> Option<f64> {
        if !self.contains_node(a) || !self.contains_node(b) {
            return None;
        }
        self.graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .map(|e| self.graph[e])
    }

    /// All edges, in insertion order
    #[must_use]
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.graph
            .edge_references()
            .map(|e| WeightedEdge::new(e.source().index(), e.target().index(), *e.weight()))
            .collect()
    }

    /// Neighbors of `node`, ascending
    #[must_use]
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        if !self.contains_node(node) {
            return vec![];
        }
        let mut out: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(node))
            .map(NodeIndex::index)
            .collect();
        out.sort_unstable();
        out
    }

    /// Sum of all edge weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.graph.edge_weights().fold(0.0, |acc, w| acc + w)
    }

    /// Number of connected components, isolated nodes included
    #[must_use]
    pub fn connected_components(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    /// Whether every node can reach every other node
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected_components() <= 1
    }

    /// A fresh graph with the same edges and transformed weights
    #[must_use]
    pub fn map_weights<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self {
            graph: self.graph.map(|_, n| *n, |_, w| f(*w)),
        }
    }

    /// Serializable snapshot
    #[must_use]
    pub fn store(&self) -> GraphStore {
        GraphStore {
            nodes: (0..self.node_count()).collect(),
            edges: self.edges(),
        }
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.to_dot_highlighted(&[])
    }

    /// Export to DOT, drawing the given edges bold and red
    #[must_use]
    pub fn to_dot_highlighted(&self, highlight: &[WeightedEdge]) -> String {
        let mut dot = String::from("graph matrix {\n");
        dot.push_str("  node [shape=circle];\n\n");

        for i in 0..self.node_count() {
            dot.push_str(&format!("  {i};\n"));
        }

        dot.push('\n');

        for edge in self.edges() {
            let marked = highlight.iter().any(|h| h.a == edge.a && h.b == edge.b);
            let style = if marked { ", color=red, penwidth=2" } else { "" };
            dot.push_str(&format!(
                "  {} -- {} [label=\"{}\"{}];\n",
                edge.a, edge.b, edge.weight, style
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    pub fn to_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(&self.store())?)
    }
}
