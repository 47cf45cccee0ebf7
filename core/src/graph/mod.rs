use indexmap::IndexMap;
use itertools::Itertools;

use crate::types::{alpha_label, NodeLabel, Weight};

/// A vertex of the graph, identified by its unique label.
///
/// A node owns its outgoing edges exclusively. Incoming edges are only
/// discoverable by scanning the other nodes of the graph.
#[derive(Clone, Debug)]
pub struct Node<V, E> {
    label: NodeLabel,
    payload: V,
    edges: Vec<GraphEdge<E>>,
}

impl<V, E> Node<V, E> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payload(&self) -> &V {
        &self.payload
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[GraphEdge<E>] {
        &self.edges
    }
}

/// A weighted directed connection between two nodes, stored on its origin
/// node.
#[derive(Clone, Debug)]
pub struct GraphEdge<E> {
    weight: E,
    source: NodeLabel,
    target: NodeLabel,
    paired: bool,
}

impl<E> GraphEdge<E> {
    pub fn weight(&self) -> &E {
        &self.weight
    }

    /// Label of the node this edge starts from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Label of the node this edge points to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// True if a reverse edge with an equal weight is believed to exist, the
    /// two together representing one undirected connection. The flag is
    /// bookkeeping maintained by the graph mutation operations, not a
    /// structural guarantee.
    pub fn is_paired(&self) -> bool {
        self.paired
    }
}

/// Edge identity is the `(weight, source, target)` triple. The pair flag does
/// not participate.
impl<E: PartialEq> PartialEq for GraphEdge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.source == other.source && self.target == other.target
    }
}

/// A labeled directed/undirected weighted graph.
///
/// The graph owns all nodes, keyed by their unique label in insertion order,
/// and through them all edges. Undirected connections are modeled as two
/// directed edges of equal weight whose pair flags the mutation operations
/// keep consistent on a best-effort basis.
#[derive(Clone, Debug)]
pub struct Graph<V, E> {
    nodes: IndexMap<NodeLabel, Node<V, E>>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<V, E> Graph<V, E> {
    pub fn new() -> Graph<V, E> {
        Graph {
            nodes: IndexMap::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    pub fn node(&self, label: &str) -> Option<&Node<V, E>> {
        self.nodes.get(label)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<V, E>> {
        self.nodes.values()
    }

    /// All edges of the graph, grouped by their origin node in insertion
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge<E>> {
        self.nodes.values().flat_map(|node| node.edges.iter())
    }

    /// Inserts a new node if no node with this label exists yet.
    ///
    /// Returns whether the insertion happened. An existing node is never
    /// overwritten.
    pub fn add_node(&mut self, payload: V, label: impl Into<NodeLabel>) -> bool {
        let label = label.into();
        if self.nodes.contains_key(&label) {
            return false;
        }
        self.nodes.insert(
            label.clone(),
            Node {
                label,
                payload,
                edges: Vec::new(),
            },
        );
        true
    }

    /// Removes the node with this label together with every edge in the
    /// graph whose destination it is.
    ///
    /// Returns false if the label is absent.
    pub fn remove_node(&mut self, label: &str) -> bool {
        if self.nodes.shift_remove(label).is_none() {
            return false;
        }
        for node in self.nodes.values_mut() {
            node.edges.retain(|edge| edge.target() != label);
        }
        true
    }
}

impl<V, E: Weight> Graph<V, E> {
    /// Adds a directed edge between two existing nodes.
    ///
    /// If the exact reverse edge (equal weight, opposite direction) already
    /// exists, that edge and the new one are marked as a recognized
    /// undirected pair regardless of `paired_hint`. Parallel edges between
    /// the same pair of labels with different weights are allowed.
    ///
    /// Returns false and leaves the graph unchanged if either label is
    /// absent.
    pub fn add_directed_edge(&mut self, weight: E, from: &str, to: &str, paired_hint: bool) -> bool {
        if !self.nodes.contains_key(from) || !self.nodes.contains_key(to) {
            return false;
        }

        // A matching reverse edge can only live on the destination node, so
        // the scan is confined to its edge list.
        let mut paired = paired_hint;
        if let Some(reverse) = self.nodes.get_mut(to).and_then(|node| {
            node.edges
                .iter_mut()
                .find(|edge| edge.target() == from && edge.weight == weight)
        }) {
            reverse.paired = true;
            paired = true;
        }

        let edge = GraphEdge {
            weight,
            source: from.into(),
            target: to.into(),
            paired,
        };
        if let Some(origin) = self.nodes.get_mut(from) {
            origin.edges.push(edge);
        }
        true
    }

    /// Adds both directions of an undirected connection.
    ///
    /// Both insertions are attempted, true only if both succeeded.
    pub fn add_undirected_edge(&mut self, weight: E, a: &str, b: &str) -> bool {
        let forward = self.add_directed_edge(weight.clone(), a, b, true);
        let backward = self.add_directed_edge(weight, b, a, true);
        forward && backward
    }

    /// Removes the first edge matching `(weight, from, to)`.
    ///
    /// If the removed edge was part of an undirected pair, the pair flag of
    /// the first reverse edge matching by value is cleared, since its partner
    /// is gone and it becomes a lone directed edge.
    ///
    /// Returns false if no edge matches.
    pub fn remove_directed_edge(&mut self, weight: &E, from: &str, to: &str) -> bool {
        let found = self.nodes.get(from).and_then(|node| {
            node.edges
                .iter()
                .enumerate()
                .find(|(_, edge)| edge.target() == to && edge.weight == *weight)
                .map(|(idx, edge)| (idx, edge.paired))
        });
        let Some((idx, was_paired)) = found else {
            return false;
        };

        if was_paired {
            if let Some(reverse) = self.nodes.get_mut(to).and_then(|node| {
                node.edges
                    .iter_mut()
                    .find(|edge| edge.target() == from && edge.weight == *weight)
            }) {
                reverse.paired = false;
            }
        }

        if let Some(origin) = self.nodes.get_mut(from) {
            origin.edges.remove(idx);
        }
        true
    }

    /// Removes both directions of an undirected connection.
    ///
    /// The reverse direction is removed first: removing the forward edge
    /// first would already clear the pair flag the reverse removal needs to
    /// process its own partner. Both removals are attempted regardless, the
    /// result is their logical AND.
    pub fn remove_undirected_edge(&mut self, weight: &E, a: &str, b: &str) -> bool {
        let backward = self.remove_directed_edge(weight, b, a);
        let forward = self.remove_directed_edge(weight, a, b);
        backward && forward
    }

    /// Total cost of the graph: the sum of every numeric edge weight, with
    /// each undirected pair counted exactly once and each lone directed edge
    /// counted once. Non-numeric weights are ignored, the sum saturates at
    /// the `i64` bounds.
    pub fn cost(&self) -> i64 {
        let mut counted: Vec<&GraphEdge<E>> = Vec::new();
        let mut total: i64 = 0;
        for edge in self.edges() {
            let Some(cost) = edge.weight.cost() else {
                continue;
            };
            if edge.paired
                && counted.iter().any(|prev| {
                    prev.source == edge.target
                        && prev.target == edge.source
                        && prev.weight == edge.weight
                })
            {
                continue;
            }
            counted.push(edge);
            total = total.saturating_add(cost);
        }
        total
    }

    /// Renders the weighted adjacency matrix over the labels
    /// `'a'..'a'+n-1`.
    ///
    /// Cell `(i, j)` is the minimum numeric weight among the edges from
    /// label `i` to label `j`, or `0` if there is none. Rows are joined by
    /// single spaces and terminated by a newline.
    ///
    /// The rendering assumes the nodes are labeled as a contiguous
    /// alphabetic run starting at `'a'`. For any other labeling the matrix
    /// is meaningless.
    pub fn render_adjacency_matrix(&self) -> String {
        let size = self.nodes.len();
        let mut out = String::new();
        for row in 0..size {
            let from = alpha_label(row);
            let line = (0..size)
                .map(|col| {
                    let to = alpha_label(col);
                    self.node(&from)
                        .and_then(|node| {
                            node.edges
                                .iter()
                                .filter(|edge| edge.target() == to)
                                .filter_map(|edge| edge.weight.cost())
                                .min()
                        })
                        .unwrap_or(0)
                })
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests;
