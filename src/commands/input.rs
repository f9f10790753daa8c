// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Matrix input shared by the graph commands

use crate::config::Config;
use crate::graph::WeightedGraph;
use crate::matrix::WeightMatrix;
use crate::shadow::exposure_cost;
use crate::types::GridError;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Matrix file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One row per line, cells separated by the configured delimiter
    Delimited,
    /// A JSON array of rows
    Json,
}

impl InputFormat {
    /// Guess from a file extension; anything but `.json` is delimited
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Delimited,
        }
    }
}

/// Where the weight matrix comes from and how to read it
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MatrixArgs {
    /// Matrix file, or `-` for stdin
    #[arg(required_unless_present = "nodes", conflicts_with = "nodes")]
    pub file: Option<PathBuf>,

    /// Input encoding (guessed from the extension by default)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Node count for a matrix given with --edge
    #[arg(short, long)]
    pub nodes: Option<usize>,

    /// Cell as `row,column,weight`; repeatable
    #[arg(short, long = "edge", value_name = "I,J,W", requires = "nodes")]
    pub edges: Vec<String>,

    /// Only read the upper triangle, mirrored onto the lower one
    #[arg(long, conflicts_with = "asymmetric")]
    pub symmetric: bool,

    /// Read both triangles even if the config asks for symmetric input
    #[arg(long)]
    pub asymmetric: bool,

    /// Reweight edges by sun exposure at this solar altitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    pub sun_altitude: Option<f64>,
}

impl MatrixArgs {
    /// Whether to symmetrize, after applying the config default
    #[must_use]
    pub fn symmetric(&self, config: &Config) -> bool {
        if self.symmetric {
            true
        } else if self.asymmetric {
            false
        } else {
            config.symmetric
        }
    }
}

/// Parse a `row,column,weight` triple
fn parse_edge(text: &str) -> Result<(usize, usize, String)> {
    let mut parts = text.splitn(3, ',');
    let (Some(i), Some(j), Some(w)) = (parts.next(), parts.next(), parts.next()) else {
        anyhow::bail!("Invalid edge '{}'. Expected I,J,W", text);
    };
    let i = i
        .trim()
        .parse()
        .with_context(|| format!("Invalid row in edge '{text}'"))?;
    let j = j
        .trim()
        .parse()
        .with_context(|| format!("Invalid column in edge '{text}'"))?;
    Ok((i, j, w.trim().to_string()))
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read matrix from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load the weight matrix described by `args`
pub fn load_matrix(args: &MatrixArgs, config: &Config) -> Result<WeightMatrix> {
    let matrix = if let Some(n) = args.nodes {
        let entries = args
            .edges
            .iter()
            .map(|e| parse_edge(e))
            .collect::<Result<Vec<_>>>()?;
        WeightMatrix::from_entries(n, entries)?
    } else {
        let path = args
            .file
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("A matrix file or --nodes is required"))?;
        let text = read_source(path)?;
        let format = args
            .input_format
            .unwrap_or_else(|| InputFormat::from_path(path));
        debug!("Reading {} as {:?}", path.display(), format);
        let parsed = match format {
            InputFormat::Delimited => WeightMatrix::parse_delimited(&text, config.delimiter),
            InputFormat::Json => WeightMatrix::from_json(&text),
        };
        parsed.with_context(|| format!("Failed to parse matrix from {}", path.display()))?
    };

    let count = matrix.node_count();
    if count > config.max_nodes {
        return Err(GridError::TooManyNodes {
            count,
            max: config.max_nodes,
        }
        .into());
    }
    Ok(matrix)
}

/// Load the matrix and build its graph, applying sun exposure if asked
pub fn load_graph(args: &MatrixArgs, config: &Config) -> Result<WeightedGraph> {
    let matrix = load_matrix(args, config)?;
    let symmetric = args.symmetric(config);
    let graph = WeightedGraph::build(&matrix, symmetric);
    info!(
        "Built graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(match args.sun_altitude {
        Some(altitude) => {
            info!("Weighting edges by sun exposure at {}°", altitude);
            graph.map_weights(|length| exposure_cost(length, altitude))
        }
        None => graph,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("0, 1, 2.5").unwrap(), (0, 1, "2.5".to_string()));
        assert_eq!(parse_edge("1,0,").unwrap(), (1, 0, String::new()));
        assert!(parse_edge("0,1").is_err());
        assert!(parse_edge("a,1,2").is_err());
    }

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("m.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("m.csv")), InputFormat::Delimited);
        assert_eq!(InputFormat::from_path(Path::new("-")), InputFormat::Delimited);
    }

    #[test]
    fn test_load_matrix_from_edges_and_limit() {
        let config = Config {
            max_nodes: 3,
            ..Config::default()
        };
        let args = MatrixArgs {
            nodes: Some(3),
            edges: vec!["0,1,5".into(), "1,2,2.5".into()],
            ..MatrixArgs::default()
        };
        let matrix = load_matrix(&args, &config).unwrap();
        assert_eq!(matrix.cell(1, 2), Some("2.5"));

        let too_big = MatrixArgs {
            nodes: Some(4),
            ..MatrixArgs::default()
        };
        let err = load_matrix(&too_big, &config).unwrap_err();
        assert!(err.to_string().contains("limit is 3"));
    }

    #[test]
    fn test_symmetric_resolution() {
        let on = Config {
            symmetric: true,
            ..Config::default()
        };
        let args = MatrixArgs::default();
        assert!(args.symmetric(&on));
        assert!(!args.symmetric(&Config::default()));

        let forced_off = MatrixArgs {
            asymmetric: true,
            ..MatrixArgs::default()
        };
        assert!(!forced_off.symmetric(&on));
    }

    #[test]
    fn test_load_graph_applies_sun_altitude() {
        let args = MatrixArgs {
            nodes: Some(2),
            edges: vec!["0,1,10".into()],
            sun_altitude: Some(90.0),
            ..MatrixArgs::default()
        };
        let graph = load_graph(&args, &Config::default()).unwrap();
        assert!((graph.weight(0, 1).unwrap() - 20.0).abs() < 1e-9);
    }
}
