// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Square grids of optional numeric text cells
//!
//! A [`WeightMatrix`] is what a user types into an adjacency table: row `i`,
//! column `j` holds the weight of the edge between nodes `i` and `j`, or
//! nothing. Cells stay as text until graph construction so that a half-typed
//! value never becomes an error.

use crate::types::{GridError, GridResult};
use serde::Deserialize;
use tracing::debug;

/// Smallest node count a matrix may declare
pub const MIN_NODES: usize = 2;

/// An N×N grid of optional cell texts, indexed by node position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    cells: Vec<Vec<Option<String>>>,
}

/// A JSON cell: `"2.5"`, `2.5` or `null`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Text(String),
    Number(serde_json::Number),
}

impl WeightMatrix {
    /// Wrap a grid, checking that it is square with at least two nodes
    pub fn new(cells: Vec<Vec<Option<String>>>) -> GridResult<Self> {
        let n = cells.len();
        if n < MIN_NODES {
            return Err(GridError::TooFewNodes(n));
        }
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GridError::NotSquare {
                row,
                len: r.len(),
                expected: n,
            });
        }
        Ok(Self { cells })
    }

    /// An `n`×`n` matrix with every cell empty
    pub fn empty(n: usize) -> GridResult<Self> {
        Self::new(vec![vec![None; n]; n])
    }

    /// Build a matrix from sparse `(row, column, text)` entries.
    ///
    /// Later entries for the same cell replace earlier ones.
    pub fn from_entries<I, S>(n: usize, entries: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, S)>,
        S: Into<String>,
    {
        let mut matrix = Self::empty(n)?;
        for (i, j, text) in entries {
            matrix.set(i, j, Some(text.into()))?;
        }
        Ok(matrix)
    }

    /// Parse a delimited text grid, one row per line.
    ///
    /// Blank lines are skipped, as are comment lines: a line starting with
    /// `#` that holds no delimiter. A line such as `#,5` is a data row whose
    /// first cell reads as "no edge". Rows shorter than the row count are
    /// padded with empty cells, so trailing empty cells may be left out.
    pub fn parse_delimited(text: &str, delimiter: char) -> GridResult<Self> {
        let mut rows: Vec<Vec<Option<String>>> = text
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                line.contains(delimiter) || !(trimmed.is_empty() || trimmed.starts_with('#'))
            })
            .map(|line| {
                line.split(delimiter)
                    .map(|cell| {
                        let cell = cell.trim();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect()
            })
            .collect();

        let n = rows.len();
        for row in &mut rows {
            if row.len() < n {
                row.resize(n, None);
            }
        }
        debug!("Parsed {} delimited rows", n);
        Self::new(rows)
    }

    /// Parse a JSON array of rows; cells may be strings, numbers or `null`
    pub fn from_json(text: &str) -> GridResult<Self> {
        let raw: Vec<Vec<Option<RawCell>>> = serde_json::from_str(text)?;
        let cells = raw
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        cell.map(|c| match c {
                            RawCell::Text(s) => s,
                            RawCell::Number(n) => n.to_string(),
                        })
                    })
                    .collect()
            })
            .collect();
        Self::new(cells)
    }

    /// Number of nodes (rows)
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw text of cell `(i, j)`, if any
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> Option<&str> {
        self.cells.get(i)?.get(j)?.as_deref()
    }

    /// Replace the content of cell `(i, j)`
    pub fn set(&mut self, i: usize, j: usize, value: Option<String>) -> GridResult<()> {
        let count = self.node_count();
        for node in [i, j] {
            if node >= count {
                return Err(GridError::NodeOutOfRange { node, count });
            }
        }
        self.cells[i][j] = value;
        Ok(())
    }

    /// All rows, in node order
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.cells
    }

    /// A copy with the upper triangle mirrored onto the lower one.
    ///
    /// Every cell `(j, i)` with `j > i` takes the value of `(i, j)`,
    /// including an empty upper cell. The diagonal is left as is.
    #[must_use]
    pub fn symmetrized(&self) -> Self {
        let mut cells = self.cells.clone();
        let n = cells.len();
        for i in 0..n {
            for j in (i + 1)..n {
                cells[j][i] = cells[i][j].clone();
            }
        }
        Self { cells }
    }

    /// Render back to delimited text
    #[must_use]
    pub fn to_delimited(&self, delimiter: char) -> String {
        let sep = delimiter.to_string();
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.as_deref().unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(&sep)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Read a cell as an edge weight.
///
/// Surrounding whitespace is ignored. Empty and non-numeric text read as
/// "no edge". Anything `f64` parses is a weight, `inf` and `NaN` included.
#[must_use]
pub fn parse_cell(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}
