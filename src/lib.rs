// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Gridgraph library - weighted graphs from text matrices
//!
//! This crate turns a square grid of optional numeric text cells into a
//! simple undirected weighted graph, and runs spanning tree, traversal and
//! tour routines over the result. It also carries the small geometry and
//! number-base helpers used by the interactive front ends.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algo;
pub mod commands;
pub mod config;
pub mod graph;
pub mod matrix;
pub mod radix;
pub mod shadow;

/// Core data types shared by the builder, the algorithms and the CLI
pub mod types {
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    // =========================================================================
    // Errors
    // =========================================================================

    /// Errors raised by gridgraph operations.
    ///
    /// Graph construction itself never fails: a malformed cell is read as a
    /// missing edge. These variants cover matrix shape, algorithm
    /// preconditions and the conversion helpers.
    #[derive(Debug, Error)]
    pub enum GridError {
        /// A row does not have as many cells as there are rows
        #[error("matrix is not square: row {row} has {len} cells, expected {expected}")]
        NotSquare {
            /// Offending row
            row: usize,
            /// Cells in that row
            len: usize,
            /// Number of rows
            expected: usize,
        },
        /// Fewer than two nodes
        #[error("matrix needs at least 2 nodes, got {0}")]
        TooFewNodes(usize),
        /// More nodes than the configured limit
        #[error("matrix has {count} nodes, limit is {max}")]
        TooManyNodes {
            /// Declared node count
            count: usize,
            /// Configured maximum
            max: usize,
        },
        /// A node index outside `0..node_count`
        #[error("node {node} is out of range (graph has {count} nodes)")]
        NodeOutOfRange {
            /// Requested node
            node: usize,
            /// Nodes in the graph
            count: usize,
        },
        /// Some nodes cannot be reached from the start node
        #[error("graph is disconnected: {unreachable} node(s) unreachable from node {start}")]
        Disconnected {
            /// Start node
            start: usize,
            /// Number of unreachable nodes
            unreachable: usize,
        },
        /// A negative edge weight where shortest paths are needed
        #[error("edge {{{a}, {b}}} has negative weight {weight}")]
        NegativeWeight {
            /// First endpoint
            a: usize,
            /// Second endpoint
            b: usize,
            /// Offending weight
            weight: f64,
        },
        /// A `NaN` edge weight where shortest paths are needed
        #[error("edge {{{a}, {b}}} has no comparable weight (NaN)")]
        NanWeight {
            /// First endpoint
            a: usize,
            /// Second endpoint
            b: usize,
        },
        /// Base outside 2..=36
        #[error("base {0} is not supported (expected 2..=36)")]
        InvalidBase(u32),
        /// Digits that do not belong to the source base
        #[error("'{value}' is not a valid base-{base} number")]
        InvalidDigits {
            /// Input text
            value: String,
            /// Source base
            base: u32,
        },
        /// Matrix JSON could not be decoded
        #[error("invalid matrix JSON: {0}")]
        Json(#[from] serde_json::Error),
    }

    /// Result alias for gridgraph operations
    pub type GridResult<T> = std::result::Result<T, GridError>;

    // =========================================================================
    // Graph export
    // =========================================================================

    /// An undirected weighted edge, endpoints stored as `a < b`
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct WeightedEdge {
        /// Lower endpoint
        pub a: usize,
        /// Higher endpoint
        pub b: usize,
        /// Edge weight
        pub weight: f64,
    }

    impl WeightedEdge {
        /// Create an edge, normalizing endpoint order
        #[must_use]
        pub fn new(u: usize, v: usize, weight: f64) -> Self {
            Self {
                a: u.min(v),
                b: u.max(v),
                weight,
            }
        }
    }

    /// Serializable snapshot of a graph
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GraphStore {
        /// Node identifiers, always `0..n`
        pub nodes: Vec<usize>,
        /// Edges in insertion order
        #[serde(default)]
        pub edges: Vec<WeightedEdge>,
    }

    // =========================================================================
    // Algorithm outputs
    // =========================================================================

    /// Spanning tree construction strategy
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
    #[serde(rename_all = "lowercase")]
    pub enum MstAlgorithm {
        /// Sort all edges, join components greedily
        #[default]
        Kruskal,
        /// Grow a tree from a frontier of cheapest edges
        Prim,
    }

    impl MstAlgorithm {
        /// Lowercase name, as used in config files
        #[must_use]
        pub fn name(&self) -> &'static str {
            match self {
                Self::Kruskal => "kruskal",
                Self::Prim => "prim",
            }
        }
    }

    /// A minimum spanning forest
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SpanningTree {
        /// Nodes in the source graph
        pub node_count: usize,
        /// Chosen edges
        pub edges: Vec<WeightedEdge>,
        /// Sum of chosen edge weights
        pub total_weight: f64,
    }

    impl SpanningTree {
        /// Number of trees in the forest
        #[must_use]
        pub fn component_count(&self) -> usize {
            self.node_count - self.edges.len()
        }

        /// Whether the forest is a single tree
        #[must_use]
        pub fn is_spanning(&self) -> bool {
            self.component_count() == 1
        }
    }

    /// A closed tour over every node
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Tour {
        /// Visiting order; first and last entries are the start node
        pub order: Vec<usize>,
        /// Total length measured on shortest-path distances
        pub cost: f64,
    }

    // =========================================================================
    // Shadow geometry
    // =========================================================================

    /// A latitude/longitude pair in degrees
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct GeoPoint {
        /// Latitude in degrees
        pub lat: f64,
        /// Longitude in degrees
        pub lon: f64,
    }

    /// Sun position as seen from the ground, both in degrees
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct SunPosition {
        /// Elevation above the horizon
        pub altitude: f64,
        /// Compass bearing, clockwise from north
        pub azimuth: f64,
    }

    /// Shadow cast by a vertical object
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Shadow {
        /// Shadow length in meters
        pub length: f64,
        /// Bearing of the shadow, opposite the sun
        pub bearing: f64,
        /// Foot of the object
        pub origin: GeoPoint,
        /// Tip of the shadow
        pub tip: GeoPoint,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::graph::WeightedGraph;
    pub use crate::matrix::WeightMatrix;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
