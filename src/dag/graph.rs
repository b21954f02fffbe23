// src/dag/graph.rs

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::dag::sanitize::{CleanGraph, NodeId};

/// Request-scoped adjacency + in-degree structure.
///
/// The keys of the in-degree map are the *universe* the acyclicity check runs
/// over. It contains every declared id plus every edge target, even when the
/// target was never declared. An id that only ever appears as an edge source
/// gets an adjacency entry but no in-degree entry, so it is never visited.
///
/// The universe is kept separate from the raw submission counts, which are
/// only used for the reported metrics.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    in_degree: HashMap<NodeId, usize>,
    /// In-degree keys in first-insertion order.
    universe: Vec<NodeId>,
    /// Distinct declared ids.
    declared: usize,
}

impl DependencyGraph {
    /// Build the graph from sanitized records.
    pub fn build(clean: &CleanGraph) -> Self {
        let mut graph = DependencyGraph::default();

        // Baseline entry for every declared node, isolated ones included.
        for id in &clean.node_ids {
            if let Entry::Vacant(slot) = graph.in_degree.entry(id.clone()) {
                slot.insert(0);
                graph.universe.push(id.clone());
            }
        }
        graph.declared = graph.universe.len();

        for edge in &clean.edges {
            graph
                .adjacency
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());

            match graph.in_degree.entry(edge.target.clone()) {
                Entry::Occupied(mut slot) => *slot.get_mut() += 1,
                Entry::Vacant(slot) => {
                    slot.insert(1);
                    graph.universe.push(edge.target.clone());
                }
            }
        }

        graph
    }

    /// Number of distinct ids taking part in the acyclicity check.
    pub fn universe_len(&self) -> usize {
        self.universe.len()
    }

    /// Number of distinct ids that were declared as nodes.
    pub fn declared_len(&self) -> usize {
        self.declared
    }

    /// Ids of the universe in first-insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.universe.iter().map(|s| s.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.in_degree.contains_key(id)
    }

    /// Initial in-degree of `id`, or `None` if it is not part of the universe.
    pub fn in_degree(&self, id: &str) -> Option<usize> {
        self.in_degree.get(id).copied()
    }

    /// Outgoing neighbours of `id`, one entry per edge (parallel edges repeat).
    pub fn successors(&self, id: &str) -> &[NodeId] {
        self.adjacency
            .get(id)
            .map(|targets| targets.as_slice())
            .unwrap_or(&[])
    }

    /// Run Kahn's elimination and return how many nodes were dequeued.
    ///
    /// Works on a private copy of the in-degree map; the graph can be queried
    /// again afterwards.
    pub fn kahn_visit_count(&self) -> usize {
        let mut remaining: HashMap<&str, usize> = self
            .in_degree
            .iter()
            .map(|(id, degree)| (id.as_str(), *degree))
            .collect();

        let mut queue: VecDeque<&str> = self
            .universe
            .iter()
            .map(|id| id.as_str())
            .filter(|id| remaining.get(id) == Some(&0))
            .collect();

        let mut visited = 0;
        while let Some(node) = queue.pop_front() {
            visited += 1;
            for next in self.successors(node) {
                // Every edge target owns an in-degree entry, and each edge is
                // relaxed at most once, so the count never underflows.
                if let Some(degree) = remaining.get_mut(next.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(next.as_str());
                    }
                }
            }
        }

        visited
    }

    /// `true` iff elimination reaches every node of the universe.
    pub fn is_acyclic(&self) -> bool {
        self.kahn_visit_count() == self.universe_len()
    }
}
