use std::path::Path;

use crate::errors::{Result, SpanpathCoreError};
use crate::graph::Graph;
use crate::types::alpha_label;

/// Highest node count addressable by the contiguous alphabetic labeling
/// scheme starting at `'a'`.
pub const MAX_NODES: usize = 26;

/// Parses an adjacency-matrix text: one row per non-empty line, cells
/// separated by whitespace.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<i64>>> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for cell in line.split_whitespace() {
            let weight =
                cell.parse::<i64>()
                    .map_err(|source| SpanpathCoreError::InvalidMatrixCell {
                        line: idx + 1,
                        cell: cell.to_string(),
                        source,
                    })?;
            row.push(weight);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Builds a graph from matrix `rows`.
///
/// Row `i` becomes the node labeled `'a' + i` and every strictly positive
/// cell `(i, j)` a directed edge from `i` to `j` with the cell value as its
/// weight. Symmetric cells therefore pair up into undirected connections
/// when the second direction is inserted.
pub fn graph_from_matrix(rows: &[Vec<i64>]) -> Result<Graph<(), i64>> {
    if rows.len() > MAX_NODES {
        return Err(SpanpathCoreError::TooManyNodes(rows.len()));
    }

    let mut graph = Graph::new();
    for row in 0..rows.len() {
        graph.add_node((), alpha_label(row));
    }
    for (row, cells) in rows.iter().enumerate() {
        let from = alpha_label(row);
        for (col, weight) in cells.iter().enumerate() {
            if *weight > 0 {
                graph.add_directed_edge(*weight, &from, &alpha_label(col), false);
            }
        }
    }
    debug!(
        "built graph with {} nodes from a {} row matrix",
        graph.node_count(),
        rows.len()
    );
    Ok(graph)
}

/// Reads and parses an adjacency-matrix file into a graph.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Graph<(), i64>> {
    let text = std::fs::read_to_string(path)?;
    let rows = parse_matrix(&text)?;
    graph_from_matrix(&rows)
}
