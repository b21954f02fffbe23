#![allow(dead_code)]

use dagcheck::config::{ConfigFile, RawConfigFile};
use dagcheck::types::{EdgeRecord, NodeRecord, PipelineData};
use serde_json::{Value, json};

/// Builder for `PipelineData` to simplify test setup.
///
/// Records are appended in call order, so raw counts and duplicates are under
/// the test's control.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    pipeline: PipelineData,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, id: &str) -> Self {
        self.pipeline.nodes.push(NodeRecord::with_id(id));
        self
    }

    pub fn nodes(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self = self.node(id);
        }
        self
    }

    /// A node record whose `id` is whatever JSON value the test wants.
    pub fn raw_node(mut self, id: Option<Value>) -> Self {
        self.pipeline.nodes.push(NodeRecord { id });
        self
    }

    pub fn edge(mut self, source: &str, target: &str) -> Self {
        self.pipeline.edges.push(EdgeRecord::new(source, target));
        self
    }

    /// Chain `ids[0] -> ids[1] -> ...`.
    pub fn chain(mut self, ids: &[&str]) -> Self {
        for pair in ids.windows(2) {
            self = self.edge(pair[0], pair[1]);
        }
        self
    }

    pub fn raw_edge(mut self, source: Option<Value>, target: Option<Value>) -> Self {
        self.pipeline.edges.push(EdgeRecord { source, target });
        self
    }

    pub fn build(self) -> PipelineData {
        self.pipeline
    }

    /// The request body a graph editor would send: every record also carries
    /// the extra members the analyzer is expected to ignore.
    pub fn to_editor_json(&self) -> Value {
        let nodes: Vec<Value> = self
            .pipeline
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let mut record = json!({
                    "type": "customInput",
                    "position": { "x": i * 50, "y": 0 },
                    "data": { "nodeType": "customInput" },
                });
                if let Some(ref id) = node.id {
                    record["id"] = id.clone();
                }
                record
            })
            .collect();

        let edges: Vec<Value> = self
            .pipeline
            .edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                let mut record = json!({
                    "id": format!("reactflow__edge-{i}"),
                    "type": "smoothstep",
                    "animated": true,
                });
                if let Some(ref source) = edge.source {
                    record["source"] = source.clone();
                }
                if let Some(ref target) = edge.target {
                    record["target"] = target.clone();
                }
                record
            })
            .collect();

        json!({ "nodes": nodes, "edges": edges })
    }
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn allowed_origin(mut self, origin: &str) -> Self {
        self.config.cors.allowed_origin = origin.to_string();
        self
    }

    pub fn allow_credentials(mut self, val: bool) -> Self {
        self.config.cors.allow_credentials = val;
        self
    }

    pub fn bind(mut self, addr: &str) -> Self {
        self.config.server.bind = addr.parse().expect("invalid bind address in test");
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
