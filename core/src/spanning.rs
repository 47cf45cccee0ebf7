use indexmap::IndexSet;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, GraphEdge};
use crate::types::Weight;

/// Prim's algorithm over a [`Graph`], treating every edge as directed and
/// weighted.
///
/// The builder owns the randomness used to pick the starting node. Callers
/// that need reproducible trees construct it with
/// [`with_seed`](SpanningTreeBuilder::with_seed); entropy seeding is reserved
/// for the outermost boundary.
pub struct SpanningTreeBuilder {
    rng: SmallRng,
}

impl SpanningTreeBuilder {
    /// Builder whose starting node selection is seeded from entropy.
    pub fn new() -> SpanningTreeBuilder {
        SpanningTreeBuilder {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic builder: equal seeds pick equal starting nodes.
    pub fn with_seed(seed: u64) -> SpanningTreeBuilder {
        SpanningTreeBuilder {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// Only numerically-weighted edges take part. Starting from one randomly
    /// chosen node, the cheapest edge leaving the set of included nodes is
    /// followed until either all nodes are included (the tree) or no such
    /// edge is left (an island or sink, no tree). Ties on the minimum keep
    /// the earliest discovered edge, scanning included nodes in inclusion
    /// order.
    ///
    /// An edge is inserted into the result as undirected when the source
    /// graph contains a reverse edge of equal weight between the same two
    /// nodes, compared by value.
    ///
    /// Returns `None` for the empty graph or when no spanning tree exists
    /// from the chosen starting node. The result shares no state with
    /// `graph`, payloads are copied.
    pub fn build<V: Clone, E: Weight>(&mut self, graph: &Graph<V, E>) -> Option<Graph<V, E>> {
        if graph.is_empty() {
            return None;
        }

        let start = self.rng.gen_range(0..graph.node_count());
        let seed_node = graph.nodes().nth(start)?;
        debug!("spanning tree starts at node {}", seed_node.label());

        let mut tree = Graph::new();
        tree.add_node(seed_node.payload().clone(), seed_node.label());
        let mut included: IndexSet<&str> = IndexSet::new();
        included.insert(seed_node.label());

        loop {
            let mut cheapest: Option<(&GraphEdge<E>, i64)> = None;
            for label in &included {
                let Some(node) = graph.node(label) else {
                    continue;
                };
                for edge in node.edges() {
                    let Some(cost) = edge.weight().cost() else {
                        continue;
                    };
                    if included.contains(edge.target()) {
                        continue;
                    }
                    match cheapest {
                        Some((_, best)) if cost >= best => {}
                        _ => cheapest = Some((edge, cost)),
                    }
                }
            }

            let Some((edge, cost)) = cheapest else {
                if included.len() == graph.node_count() {
                    return Some(tree);
                }
                debug!(
                    "no spanning tree, only {} of {} nodes are reachable",
                    included.len(),
                    graph.node_count()
                );
                return None;
            };

            let target = graph.node(edge.target())?;
            tree.add_node(target.payload().clone(), target.label());

            // a reverse edge of equal weight in the source graph makes the
            // connection undirected in the tree
            let undirected = target
                .edges()
                .iter()
                .any(|back| back.target() == edge.source() && back.weight() == edge.weight());
            if undirected {
                tree.add_undirected_edge(edge.weight().clone(), edge.source(), edge.target());
            } else {
                tree.add_directed_edge(edge.weight().clone(), edge.source(), edge.target(), false);
            }

            trace!("included node {} for a cost of {}", target.label(), cost);
            included.insert(target.label());
        }
    }
}

impl Default for SpanningTreeBuilder {
    fn default() -> Self {
        SpanningTreeBuilder::new()
    }
}
