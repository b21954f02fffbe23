// tests/dag_verdict_properties.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

use dagcheck::dag::{DependencyGraph, GraphAnalyzer, sanitize};
use dagcheck::types::{EdgeRecord, NodeRecord};

fn name(i: usize) -> String {
    format!("node_{i}")
}

// Random graphs over declared nodes only, self-loops and parallel edges
// included.
fn graph_strategy(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        let edges = proptest::collection::vec((0..num_nodes, 0..num_nodes), 0..(num_nodes * 3));
        (Just(num_nodes), edges)
    })
}

// Acyclic by construction: edges only go from a lower to a higher index.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    graph_strategy(max_nodes).prop_map(|(num_nodes, raw)| {
        let edges = raw
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        (num_nodes, edges)
    })
}

fn records(num_nodes: usize, edges: &[(usize, usize)]) -> (Vec<NodeRecord>, Vec<EdgeRecord>) {
    let nodes = (0..num_nodes).map(|i| NodeRecord::with_id(&name(i))).collect();
    let edges = edges
        .iter()
        .map(|(s, t)| EdgeRecord::new(&name(*s), &name(*t)))
        .collect();
    (nodes, edges)
}

proptest! {
    #[test]
    fn verdict_matches_petgraph_toposort((num_nodes, edges) in graph_strategy(10)) {
        let mut oracle: DiGraphMap<usize, ()> = DiGraphMap::new();
        for i in 0..num_nodes {
            oracle.add_node(i);
        }
        for (s, t) in &edges {
            oracle.add_edge(*s, *t, ());
        }
        let expected = toposort(&oracle, None).is_ok();

        let (nodes, edge_records) = records(num_nodes, &edges);
        let report = GraphAnalyzer::new().analyze(&nodes, &edge_records);

        prop_assert_eq!(report.is_dag, expected);
        prop_assert_eq!(report.num_nodes, num_nodes);
        prop_assert_eq!(report.num_edges, edges.len());
    }

    #[test]
    fn forward_only_graphs_are_dags((num_nodes, edges) in dag_strategy(12)) {
        let (nodes, edge_records) = records(num_nodes, &edges);
        prop_assert!(GraphAnalyzer::new().analyze(&nodes, &edge_records).is_dag);
    }

    #[test]
    fn adding_a_back_edge_creates_a_cycle((num_nodes, edges) in dag_strategy(12)) {
        prop_assume!(!edges.is_empty());
        let (from, to) = edges[0];
        let mut with_back_edge = edges.clone();
        with_back_edge.push((to, from));

        let (nodes, edge_records) = records(num_nodes, &with_back_edge);
        prop_assert!(!GraphAnalyzer::new().analyze(&nodes, &edge_records).is_dag);
    }

    #[test]
    fn edgeless_graphs_are_dags(ids in proptest::collection::vec("[a-z]{1,3}", 0..20)) {
        let nodes: Vec<NodeRecord> = ids.iter().map(|id| NodeRecord::with_id(id)).collect();
        let distinct: HashSet<&String> = ids.iter().collect();

        let graph = DependencyGraph::build(&sanitize(&nodes, &[]));
        let report = GraphAnalyzer::new().analyze(&nodes, &[]);

        prop_assert!(report.is_dag);
        prop_assert_eq!(report.num_nodes, ids.len());
        prop_assert_eq!(graph.kahn_visit_count(), distinct.len());
    }

    #[test]
    fn analysis_is_idempotent((num_nodes, edges) in graph_strategy(8)) {
        let (nodes, edge_records) = records(num_nodes, &edges);
        let analyzer = GraphAnalyzer::new();
        prop_assert_eq!(
            analyzer.analyze(&nodes, &edge_records),
            analyzer.analyze(&nodes, &edge_records)
        );
    }
}
