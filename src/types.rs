use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `nodes` array as submitted by a client.
///
/// Only `id` is read; every other member a graph editor attaches (`type`,
/// `position`, `data`, ...) is ignored. The id is kept as a raw JSON value so
/// that a malformed record (missing id, `null`, a number, an empty string)
/// still deserializes and is dropped later by [`crate::dag::sanitize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl NodeRecord {
    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(Value::String(id.to_string())),
        }
    }

    /// A record carrying no id at all.
    pub fn missing_id() -> Self {
        Self { id: None }
    }
}

/// One entry of the `edges` array: a directed dependency `source -> target`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
}

impl EdgeRecord {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: Some(Value::String(source.to_string())),
            target: Some(Value::String(target.to_string())),
        }
    }
}

/// Request body of `POST /pipelines/parse` (and the input of `dagcheck analyze`).
///
/// Both arrays are required; their elements must be JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineData {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Result of analysing one pipeline.
///
/// `num_nodes` and `num_edges` are the raw lengths of the submitted arrays,
/// malformed and duplicate records included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}
