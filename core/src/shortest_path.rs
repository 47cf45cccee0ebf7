use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::Graph;
use crate::types::{NodeLabel, Weight};

/// Dijkstra's algorithm between the two endpoint labels fixed by convention.
///
/// Only numerically-weighted edges take part in the relaxation, everything
/// else is invisible to the search.
pub struct ShortestPathFinder;

impl ShortestPathFinder {
    /// Label of the node every search starts from.
    pub const SOURCE: &'static str = "a";
    /// Label of the node every search ends at.
    pub const TARGET: &'static str = "f";

    /// Computes the shortest path from [`SOURCE`](Self::SOURCE) to
    /// [`TARGET`](Self::TARGET).
    ///
    /// Returns the visited labels in path order, each mapped to the numeric
    /// weight of the edge used to reach it from its predecessor. The source
    /// itself is attributed `0`, as is any step whose connecting edge can
    /// not be found or carries no numeric weight. Distances accumulate with
    /// saturating `i64` addition.
    ///
    /// `None` if either endpoint is missing from the graph or no path
    /// exists.
    pub fn find<V, E: Weight>(graph: &Graph<V, E>) -> Option<IndexMap<NodeLabel, i64>> {
        if !graph.contains_node(Self::SOURCE) || !graph.contains_node(Self::TARGET) {
            return None;
        }

        // a node absent from the distance map is at infinity
        let mut distance: FxHashMap<&str, i64> = FxHashMap::default();
        let mut predecessor: FxHashMap<&str, &str> = FxHashMap::default();
        let mut finalized: FxHashSet<&str> = FxHashSet::default();

        distance.insert(Self::SOURCE, 0);
        finalized.insert(Self::SOURCE);

        let mut current = Self::SOURCE;
        loop {
            if current == Self::TARGET {
                break;
            }

            let reached = *distance.get(current)?;
            if let Some(node) = graph.node(current) {
                for edge in node.edges() {
                    let Some(weight) = edge.weight().cost() else {
                        continue;
                    };
                    let candidate = reached.saturating_add(weight);
                    let better = distance
                        .get(edge.target())
                        .map_or(true, |known| candidate < *known);
                    if better {
                        trace!(
                            "distance of {} lowered to {} via {}",
                            edge.target(),
                            candidate,
                            current
                        );
                        distance.insert(edge.target(), candidate);
                        predecessor.insert(edge.target(), current);
                    }
                }
            }

            if finalized.len() == graph.node_count() {
                break;
            }

            // next is the unfinalized node with the smallest finite
            // distance, ties keep the first in insertion order
            let mut next: Option<(&str, i64)> = None;
            for node in graph.nodes() {
                if finalized.contains(node.label()) {
                    continue;
                }
                let Some(known) = distance.get(node.label()) else {
                    continue;
                };
                match next {
                    Some((_, best)) if *known >= best => {}
                    _ => next = Some((node.label(), *known)),
                }
            }
            let (chosen, _) = next?;
            finalized.insert(chosen);
            current = chosen;
        }

        // walk the predecessor chain back from the target
        let mut path = vec![Self::TARGET];
        let mut cursor = Self::TARGET;
        while cursor != Self::SOURCE {
            cursor = *predecessor.get(cursor)?;
            path.push(cursor);
        }
        path.reverse();

        let mut result = IndexMap::new();
        let mut previous: Option<&str> = None;
        for label in path {
            let step = previous
                .and_then(|prev| graph.node(prev))
                .and_then(|node| {
                    node.edges()
                        .iter()
                        .filter(|edge| edge.target() == label)
                        .filter_map(|edge| edge.weight().cost())
                        .min()
                })
                .unwrap_or(0);
            result.insert(NodeLabel::from(label), step);
            previous = Some(label);
        }
        Some(result)
    }
}
