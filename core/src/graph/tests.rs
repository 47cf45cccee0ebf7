use pretty_assertions::assert_eq;

use super::*;
use crate::example_graphs::TestWeight;

fn edge_triples<V, E: Clone>(graph: &Graph<V, E>) -> Vec<(String, String, E, bool)> {
    graph
        .edges()
        .map(|edge| {
            (
                edge.source().to_string(),
                edge.target().to_string(),
                edge.weight().clone(),
                edge.is_paired(),
            )
        })
        .collect()
}

fn with_nodes(labels: &[&str]) -> Graph<(), i64> {
    let mut graph = Graph::new();
    for label in labels {
        graph.add_node((), *label);
    }
    graph
}

#[test]
fn add_node_is_idempotent_in_state() {
    let mut graph: Graph<(), i64> = Graph::new();
    assert!(graph.add_node((), "a"));
    assert!(!graph.add_node((), "a"));
    assert_eq!(1, graph.node_count());
}

#[test]
fn nodes_keep_insertion_order() {
    let graph = with_nodes(&["c", "a", "b"]);
    let labels: Vec<_> = graph.nodes().map(|node| node.label().to_string()).collect();
    assert_eq!(vec!["c", "a", "b"], labels);
}

#[test]
fn add_edge_fails_if_either_label_is_missing() {
    let mut graph = with_nodes(&["a"]);
    assert!(!graph.add_directed_edge(1, "a", "b", false));
    assert!(!graph.add_directed_edge(1, "b", "a", false));
    assert!(!graph.add_undirected_edge(1, "a", "b"));
    assert_eq!(0, graph.edges().count());
}

#[test]
fn undirected_edge_creates_a_paired_edge_in_both_directions() {
    let mut graph = with_nodes(&["a", "b"]);
    assert!(graph.add_undirected_edge(7, "a", "b"));
    assert_eq!(
        vec![
            ("a".to_string(), "b".to_string(), 7, true),
            ("b".to_string(), "a".to_string(), 7, true),
        ],
        edge_triples(&graph)
    );
}

#[test]
fn adding_the_reverse_direction_upgrades_to_a_pair() {
    let mut graph = with_nodes(&["a", "b"]);
    assert!(graph.add_directed_edge(5, "a", "b", false));
    assert_eq!(
        vec![("a".to_string(), "b".to_string(), 5, false)],
        edge_triples(&graph)
    );

    assert!(graph.add_directed_edge(5, "b", "a", false));
    assert_eq!(
        vec![
            ("a".to_string(), "b".to_string(), 5, true),
            ("b".to_string(), "a".to_string(), 5, true),
        ],
        edge_triples(&graph)
    );
}

#[test]
fn opposite_edges_with_different_weights_stay_unpaired() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_directed_edge(5, "a", "b", false);
    graph.add_directed_edge(9, "b", "a", false);
    assert!(graph.edges().all(|edge| !edge.is_paired()));
}

#[test]
fn parallel_edges_with_different_weights_are_allowed() {
    let mut graph = with_nodes(&["a", "b"]);
    assert!(graph.add_directed_edge(1, "a", "b", false));
    assert!(graph.add_directed_edge(2, "a", "b", false));
    assert_eq!(2, graph.edges().count());
}

#[test]
fn remove_node_also_removes_incoming_edges() {
    let mut graph = with_nodes(&["a", "b", "c"]);
    graph.add_directed_edge(1, "a", "b", false);
    graph.add_directed_edge(2, "c", "b", false);
    graph.add_directed_edge(3, "b", "c", false);

    assert!(graph.remove_node("b"));
    assert!(!graph.contains_node("b"));
    assert_eq!(0, graph.edges().count());
    assert!(!graph.remove_node("b"));
}

#[test]
fn remove_directed_edge_unpairs_the_partner() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_undirected_edge(7, "a", "b");

    assert!(graph.remove_directed_edge(&7, "a", "b"));
    assert_eq!(
        vec![("b".to_string(), "a".to_string(), 7, false)],
        edge_triples(&graph)
    );
}

#[test]
fn remove_directed_edge_without_match_is_a_noop() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_directed_edge(7, "a", "b", false);

    assert!(!graph.remove_directed_edge(&8, "a", "b"));
    assert!(!graph.remove_directed_edge(&7, "b", "a"));
    assert!(!graph.remove_directed_edge(&7, "a", "c"));
    assert_eq!(1, graph.edges().count());
}

#[test]
fn remove_undirected_edge_removes_both_directions() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_undirected_edge(7, "a", "b");

    assert!(graph.remove_undirected_edge(&7, "a", "b"));
    assert_eq!(0, graph.edges().count());
    assert!(!graph.remove_undirected_edge(&7, "a", "b"));
}

#[test]
fn remove_undirected_edge_with_one_lone_direction_removes_it_anyway() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_directed_edge(7, "a", "b", false);

    // only one direction exists, so the logical AND fails, but the existing
    // direction is still removed
    assert!(!graph.remove_undirected_edge(&7, "a", "b"));
    assert_eq!(0, graph.edges().count());
}

#[test]
fn pair_flag_clearing_picks_the_first_matching_reverse_edge() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_undirected_edge(7, "a", "b");
    // duplicate reverse edge with the same weight, paired on insert because
    // an equal-weight opposite edge already exists
    graph.add_directed_edge(7, "b", "a", false);

    assert!(graph.remove_directed_edge(&7, "a", "b"));
    let remaining = edge_triples(&graph);
    assert_eq!(
        vec![
            ("b".to_string(), "a".to_string(), 7, false),
            ("b".to_string(), "a".to_string(), 7, true),
        ],
        remaining
    );
}

#[test]
fn cost_counts_an_undirected_pair_once() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_undirected_edge(7, "a", "b");
    assert_eq!(7, graph.cost());
}

#[test]
fn cost_counts_lone_directed_edges_once_each() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_directed_edge(3, "a", "b", false);
    graph.add_directed_edge(4, "b", "a", false);
    assert_eq!(7, graph.cost());
}

#[test]
fn cost_ignores_non_numeric_weights() {
    let mut graph: Graph<(), TestWeight> = Graph::new();
    graph.add_node((), "a");
    graph.add_node((), "b");
    graph.add_undirected_edge(TestWeight::Num(3), "a", "b");
    graph.add_undirected_edge(TestWeight::Tag("annotation"), "a", "b");
    assert_eq!(3, graph.cost());
}

#[test]
fn render_uses_the_minimum_parallel_weight() {
    let mut graph = with_nodes(&["a", "b"]);
    graph.add_directed_edge(5, "a", "b", false);
    graph.add_directed_edge(2, "a", "b", false);
    assert_eq!("0 2\n0 0\n", graph.render_adjacency_matrix());
}

#[test]
fn render_of_an_undirected_pair_is_symmetric() {
    let mut graph = with_nodes(&["a", "b", "c"]);
    graph.add_undirected_edge(4, "a", "c");
    graph.add_directed_edge(1, "b", "c", false);
    assert_eq!("0 0 4\n0 0 1\n4 0 0\n", graph.render_adjacency_matrix());
}
