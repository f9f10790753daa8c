// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Spanning trees, traversal and tours over a [`WeightedGraph`]

use crate::graph::WeightedGraph;
use crate::types::{GridError, GridResult, MstAlgorithm, SpanningTree, Tour, WeightedEdge};
use petgraph::algo::{dijkstra, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// Compute a minimum spanning forest.
///
/// A disconnected graph yields one tree per component. Kruskal and Prim
/// may pick different edges among equal weights but always agree on the
/// total weight.
#[must_use]
pub fn minimum_spanning_tree(graph: &WeightedGraph, algorithm: MstAlgorithm) -> SpanningTree {
    let edges = match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph),
        MstAlgorithm::Prim => prim(graph),
    };
    let total_weight = edges.iter().fold(0.0, |acc, e| acc + e.weight);
    debug!(
        "{} spanning forest: {} edges, total {}",
        algorithm.name(),
        edges.len(),
        total_weight
    );
    SpanningTree {
        node_count: graph.node_count(),
        edges,
        total_weight,
    }
}

fn kruskal(graph: &WeightedGraph) -> Vec<WeightedEdge> {
    min_spanning_tree(graph.inner())
        .filter_map(|element| match element {
            Element::Edge {
                source,
                target,
                weight,
            } => Some(WeightedEdge::new(source, target, weight)),
            Element::Node { .. } => None,
        })
        .collect()
}

/// A candidate edge on the Prim frontier, cheapest first
#[derive(Debug, Clone, Copy)]
struct Frontier {
    weight: f64,
    from: usize,
    to: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // Reversed so the max-heap pops the lightest edge, lowest node on ties
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.to.cmp(&self.to))
            .then_with(|| other.from.cmp(&self.from))
    }
}

fn prim(graph: &WeightedGraph) -> Vec<WeightedEdge> {
    let n = graph.node_count();
    let mut in_tree = vec![false; n];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut heap = BinaryHeap::new();

    for root in 0..n {
        if in_tree[root] {
            continue;
        }
        in_tree[root] = true;
        push_frontier(graph, root, &in_tree, &mut heap);

        while let Some(Frontier { weight, from, to }) = heap.pop() {
            if in_tree[to] {
                continue;
            }
            in_tree[to] = true;
            edges.push(WeightedEdge::new(from, to, weight));
            push_frontier(graph, to, &in_tree, &mut heap);
        }
    }

    edges
}

fn push_frontier(
    graph: &WeightedGraph,
    node: usize,
    in_tree: &[bool],
    heap: &mut BinaryHeap<Frontier>,
) {
    for edge in graph.inner().edges(NodeIndex::new(node)) {
        let other = if edge.source().index() == node {
            edge.target().index()
        } else {
            edge.source().index()
        };
        if !in_tree[other] {
            heap.push(Frontier {
                weight: *edge.weight(),
                from: node,
                to: other,
            });
        }
    }
}

impl SpanningTree {
    /// The forest as a graph over the same nodes
    pub fn to_graph(&self) -> GridResult<WeightedGraph> {
        WeightedGraph::from_edges(self.node_count, self.edges.iter().copied())
    }
}

/// Depth-first preorder from `start`.
///
/// Neighbors are tried in ascending index order. Only nodes reachable from
/// `start` are listed.
pub fn dfs_preorder(graph: &WeightedGraph, start: usize) -> GridResult<Vec<usize>> {
    graph.check_node(start)?;

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        for next in graph.neighbors(node).into_iter().rev() {
            if !visited[next] {
                stack.push(next);
            }
        }
    }

    Ok(order)
}

/// All-pairs shortest path lengths; `None` where no path exists.
///
/// Edge weights must be non-negative; `NaN` is rejected too.
pub fn shortest_path_closure(graph: &WeightedGraph) -> GridResult<Vec<Vec<Option<f64>>>> {
    for e in graph.edges() {
        if e.weight.is_nan() {
            return Err(GridError::NanWeight { a: e.a, b: e.b });
        }
        if e.weight < 0.0 {
            return Err(GridError::NegativeWeight {
                a: e.a,
                b: e.b,
                weight: e.weight,
            });
        }
    }

    let n = graph.node_count();
    let closure = (0..n)
        .map(|i| {
            let dist = dijkstra(graph.inner(), NodeIndex::new(i), None, |e| *e.weight());
            (0..n).map(|j| dist.get(&NodeIndex::new(j)).copied()).collect()
        })
        .collect();
    Ok(closure)
}

/// Approximate a shortest closed tour through every node.
///
/// Uses the double-tree method: take shortest path distances between every
/// pair of nodes, build a minimum spanning tree over them, and visit the
/// tree in depth-first preorder from `start`. The tour returns to `start`.
/// Its cost is at most twice the optimum and is measured on shortest path
/// distances, so a step between two nodes without a direct edge counts the
/// length of the path between them.
pub fn traveling_salesman(graph: &WeightedGraph, start: usize) -> GridResult<Tour> {
    graph.check_node(start)?;
    let closure = shortest_path_closure(graph)?;

    let unreachable = closure[start].iter().filter(|d| d.is_none()).count();
    if unreachable > 0 {
        return Err(GridError::Disconnected { start, unreachable });
    }

    // Reachable from start means reachable from everywhere
    let n = graph.node_count();
    let dist: Vec<Vec<f64>> = closure
        .into_iter()
        .map(|row| row.into_iter().map(|d| d.unwrap_or(f64::INFINITY)).collect())
        .collect();

    let pairs = (0..n).flat_map(|i| ((i + 1)..n).map(move |j| (i, j)));
    let complete =
        WeightedGraph::from_edges(n, pairs.map(|(i, j)| WeightedEdge::new(i, j, dist[i][j])))?;
    let tree = minimum_spanning_tree(&complete, MstAlgorithm::Prim).to_graph()?;

    let mut order = dfs_preorder(&tree, start)?;
    order.push(start);
    let cost: f64 = order.windows(2).map(|w| dist[w[0]][w[1]]).sum();

    debug!("Tour from {}: {:?} (cost {})", start, order, cost);
    Ok(Tour { order, cost })
}
