// src/dag/sanitize.rs

//! Filtering of raw records before graph construction.
//!
//! Malformed records are never an error: they are counted and dropped here,
//! so that [`DependencyGraph`](crate::dag::DependencyGraph) only ever sees
//! well-formed ids.
//!
//! Any truthy JSON value works as a key: a non-empty string, a non-zero
//! number, `true`, a non-empty array or object. `null`, `""`, `0`, `false`,
//! `[]` and `{}` make the record malformed. Keys are the compact JSON text of
//! the value, so the string `"1"` and the number `1` are different nodes.

use serde_json::Value;
use tracing::trace;

use crate::types::{EdgeRecord, NodeRecord};

/// Opaque node identifier: the compact JSON text of the submitted value.
pub type NodeId = String;

/// A well-formed directed edge `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Cleaned view of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanGraph {
    /// Declared node ids in input order. Duplicates are kept here; the graph
    /// collapses them.
    pub node_ids: Vec<NodeId>,
    /// Well-formed edges in input order.
    pub edges: Vec<Edge>,
    pub skipped_nodes: usize,
    pub skipped_edges: usize,
}

/// Split raw records into usable ids/edges and a count of dropped ones.
pub fn sanitize(nodes: &[NodeRecord], edges: &[EdgeRecord]) -> CleanGraph {
    let mut clean = CleanGraph {
        node_ids: Vec::with_capacity(nodes.len()),
        edges: Vec::with_capacity(edges.len()),
        ..CleanGraph::default()
    };

    for (index, node) in nodes.iter().enumerate() {
        match usable_key(node.id.as_ref()) {
            Some(id) => clean.node_ids.push(id),
            None => {
                trace!(index, id = ?node.id, "skipping node record without a usable id");
                clean.skipped_nodes += 1;
            }
        }
    }

    for (index, edge) in edges.iter().enumerate() {
        let source = usable_key(edge.source.as_ref());
        let target = usable_key(edge.target.as_ref());
        match (source, target) {
            (Some(source), Some(target)) => clean.edges.push(Edge { source, target }),
            _ => {
                trace!(
                    index,
                    source = ?edge.source,
                    target = ?edge.target,
                    "skipping edge record without usable endpoints"
                );
                clean.skipped_edges += 1;
            }
        }
    }

    clean
}

/// Key for a present, truthy value.
fn usable_key(value: Option<&Value>) -> Option<NodeId> {
    value.filter(|v| is_truthy(v)).map(|v| v.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
    }
}
