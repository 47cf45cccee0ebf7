use crate::graph::Graph;
use crate::types::Weight;

/// Edge weight with a numeric and a non-numeric variant, used to assert that
/// the cost-based computations ignore anything without a numeric view.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TestWeight {
    Num(i64),
    Tag(&'static str),
}

impl Weight for TestWeight {
    fn cost(&self) -> Option<i64> {
        match self {
            TestWeight::Num(value) => Some(*value),
            TestWeight::Tag(_) => None,
        }
    }
}

/// Six nodes `a`..`f` with the edges `a→b` (1), `b→f` (1) and `a→f` (10).
/// The cheapest way from `a` to `f` is via `b` with a total cost of 2.
pub(crate) fn shortest_path_example() -> Graph<(), i64> {
    let mut graph = Graph::new();
    for label in ["a", "b", "c", "d", "e", "f"] {
        graph.add_node((), label);
    }
    graph.add_directed_edge(1, "a", "b", false);
    graph.add_directed_edge(1, "b", "f", false);
    graph.add_directed_edge(10, "a", "f", false);
    graph
}

/// Connected symmetric graph with pairwise distinct weights, so its minimum
/// spanning tree is unique: `a-b` (1), `b-c` (2), `a-c` (4), `c-d` (3),
/// `b-d` (5). The tree keeps the weights 1, 2 and 3 for a total cost of 6.
pub(crate) fn unique_mst_example() -> Graph<(), i64> {
    let mut graph = Graph::new();
    for label in ["a", "b", "c", "d"] {
        graph.add_node((), label);
    }
    graph.add_undirected_edge(1, "a", "b");
    graph.add_undirected_edge(2, "b", "c");
    graph.add_undirected_edge(4, "a", "c");
    graph.add_undirected_edge(3, "c", "d");
    graph.add_undirected_edge(5, "b", "d");
    graph
}
